//! Scrollable surfaces
//!
//! The controller only ever talks to a [`ScrollSurface`]. Hosts either
//! implement the trait on their own view type or wrap a callback in one of the
//! adapters below.

/// Something the controller can scroll
pub trait ScrollSurface {
    /// Move the content forward by `amount` (pixels, points or lines)
    fn advance_by(&mut self, amount: f64);

    /// Current scroll offset, used to resynchronise after manual scrolling
    fn position(&self) -> f64;
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn advance_by(&mut self, amount: f64) {
        (**self).advance_by(amount);
    }

    fn position(&self) -> f64 {
        (**self).position()
    }
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for Box<S> {
    fn advance_by(&mut self, amount: f64) {
        (**self).advance_by(amount);
    }

    fn position(&self) -> f64 {
        (**self).position()
    }
}

/// Adapter for views that scroll by a relative delta (`window.scrollBy`)
///
/// The offset is tracked locally and can be corrected with [`DeltaSurface::sync`]
/// when the view reports its real position.
pub struct DeltaSurface<F: FnMut(f64)> {
    scroll_by: F,
    offset: f64,
}

impl<F: FnMut(f64)> DeltaSurface<F> {
    /// Wrap a relative scroll callback
    pub fn new(scroll_by: F) -> Self {
        Self {
            scroll_by,
            offset: 0.0,
        }
    }

    /// Replace the tracked offset with the view's reported one
    pub fn sync(&mut self, offset: f64) {
        self.offset = offset;
    }
}

impl<F: FnMut(f64)> ScrollSurface for DeltaSurface<F> {
    fn advance_by(&mut self, amount: f64) {
        self.offset += amount;
        (self.scroll_by)(amount);
    }

    fn position(&self) -> f64 {
        self.offset
    }
}

/// Adapter for views that only accept absolute offsets (`scrollTo({ y })`)
///
/// Each advance is turned into an absolute target from the tracked offset.
pub struct OffsetSurface<F: FnMut(f64)> {
    scroll_to: F,
    offset: f64,
}

impl<F: FnMut(f64)> OffsetSurface<F> {
    /// Wrap an absolute scroll callback starting at `offset`
    pub fn new(offset: f64, scroll_to: F) -> Self {
        Self { scroll_to, offset }
    }

    /// Replace the tracked offset after the user scrolled by hand
    pub fn sync(&mut self, offset: f64) {
        self.offset = offset;
    }
}

impl<F: FnMut(f64)> ScrollSurface for OffsetSurface<F> {
    fn advance_by(&mut self, amount: f64) {
        self.offset += amount;
        (self.scroll_to)(self.offset);
    }

    fn position(&self) -> f64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_surface_forwards_deltas() {
        let mut deltas = Vec::new();
        {
            let mut surface = DeltaSurface::new(|d| deltas.push(d));
            surface.advance_by(1.5);
            surface.advance_by(1.5);
            assert_eq!(surface.position(), 3.0);
        }
        assert_eq!(deltas, vec![1.5, 1.5]);
    }

    #[test]
    fn offset_surface_emits_absolute_targets() {
        let mut targets = Vec::new();
        {
            let mut surface = OffsetSurface::new(100.0, |y| targets.push(y));
            surface.advance_by(2.0);
            surface.sync(40.0);
            surface.advance_by(2.0);
        }
        assert_eq!(targets, vec![102.0, 42.0]);
    }
}
