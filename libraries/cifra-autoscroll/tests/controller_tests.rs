//! Controller behaviour against a virtual clock

use cifra_autoscroll::{
    AutoScrollConfig, AutoScrollController, AutoScrollEvent, Interaction, OffsetSurface,
    ScrollState, ScrollSurface, VirtualScheduler,
};
use std::time::Duration;

// ===== Helpers =====

#[derive(Debug, Default)]
struct Page {
    offset: f64,
    advances: Vec<f64>,
}

impl ScrollSurface for Page {
    fn advance_by(&mut self, amount: f64) {
        self.offset += amount;
        self.advances.push(amount);
    }

    fn position(&self) -> f64 {
        self.offset
    }
}

fn web_controller() -> (AutoScrollController<VirtualScheduler>, VirtualScheduler) {
    let clock = VirtualScheduler::new();
    let controller = AutoScrollController::new(AutoScrollConfig::web(), clock.clone()).unwrap();
    (controller, clock)
}

/// Advance the clock and feed every firing to the controller
fn run_for(
    clock: &VirtualScheduler,
    controller: &mut AutoScrollController<VirtualScheduler>,
    page: &mut Page,
    millis: u64,
) -> usize {
    clock
        .advance(Duration::from_millis(millis))
        .into_iter()
        .filter(|timer| controller.on_tick(*timer, page))
        .count()
}

// ===== Scenarios =====

#[test]
fn speed_change_retimes_ticks_without_overlap() {
    let (mut controller, clock) = web_controller();
    let mut page = Page::default();

    controller.start();
    assert!(controller.session().is_playing());

    // 50 ms period, 1 unit per tick
    assert_eq!(run_for(&clock, &mut controller, &mut page, 200), 4);
    assert_eq!(page.advances, vec![1.0; 4]);

    assert_eq!(controller.change_speed(2.0), 2.0);
    assert_eq!(clock.active_timers(), 1);

    // 25 ms period, 2 units per tick
    page.advances.clear();
    assert_eq!(run_for(&clock, &mut controller, &mut page, 100), 4);
    assert_eq!(page.advances, vec![2.0; 4]);
    assert_eq!(page.offset, 12.0);

    assert_eq!(clock.created_timers(), 2);
    assert_eq!(clock.peak_active_timers(), 1);
}

#[test]
fn speed_above_maximum_clamps() {
    let (mut controller, _clock) = web_controller();

    assert_eq!(controller.change_speed(10.0), 3.0);
    assert_eq!(controller.speed(), 3.0);

    assert_eq!(controller.change_speed(-4.0), 0.1);
    assert_eq!(controller.change_speed(f64::INFINITY), 3.0);
}

#[test]
fn redundant_stop_is_harmless() {
    let (mut controller, clock) = web_controller();

    controller.start();
    controller.stop();
    controller.stop();

    assert_eq!(controller.state(), ScrollState::Idle);
    assert_eq!(clock.created_timers(), 1);
    assert_eq!(clock.cancelled_timers(), 1);
    assert_eq!(clock.active_timers(), 0);
    assert_eq!(
        controller.drain_events(),
        vec![
            AutoScrollEvent::Started {
                speed: 1.0,
                interval_ms: 50.0,
                step: 1.0
            },
            AutoScrollEvent::Stopped,
        ]
    );
}

// ===== Timer lifecycle =====

#[test]
fn no_tick_after_stop() {
    let (mut controller, clock) = web_controller();
    let mut page = Page::default();

    controller.start();
    run_for(&clock, &mut controller, &mut page, 100);
    controller.stop();

    assert_eq!(run_for(&clock, &mut controller, &mut page, 1_000), 0);
    assert_eq!(page.offset, 2.0);
}

#[test]
fn teardown_releases_the_timer() {
    let clock = VirtualScheduler::new();
    {
        let mut controller =
            AutoScrollController::new(AutoScrollConfig::web(), clock.clone()).unwrap();
        controller.start();
        controller.change_speed(2.5);
        assert_eq!(clock.active_timers(), 1);
    }

    assert_eq!(clock.active_timers(), 0);
    assert_eq!(clock.created_timers(), clock.cancelled_timers());
    assert!(clock.advance(Duration::from_secs(5)).is_empty());
}

#[test]
fn teardown_while_idle_cancels_nothing() {
    let clock = VirtualScheduler::new();
    drop(AutoScrollController::new(AutoScrollConfig::mobile(), clock.clone()).unwrap());

    assert_eq!(clock.created_timers(), 0);
    assert_eq!(clock.cancelled_timers(), 0);
}

#[test]
fn toggle_alternates() {
    let (mut controller, clock) = web_controller();

    controller.toggle();
    assert!(controller.is_playing());
    controller.toggle();
    assert!(!controller.is_playing());
    controller.toggle();
    assert!(controller.is_playing());

    assert_eq!(clock.created_timers(), 2);
    assert_eq!(clock.active_timers(), 1);
}

#[test]
fn speed_change_while_idle_schedules_nothing() {
    let (mut controller, clock) = web_controller();

    controller.change_speed(2.0);
    assert_eq!(clock.created_timers(), 0);

    controller.start();
    assert_eq!(controller.interval_ms(), 25.0);
    assert_eq!(controller.step(), 2.0);
}

// ===== Auto-pause =====

#[test]
fn interaction_pauses_once_per_burst() {
    let (mut controller, clock) = web_controller();
    let mut page = Page::default();

    controller.start();
    run_for(&clock, &mut controller, &mut page, 100);
    controller.drain_events();

    assert!(controller.on_user_interaction(Interaction::Wheel));
    assert!(!controller.on_user_interaction(Interaction::Wheel));
    assert!(!controller.on_user_interaction(Interaction::Touch));

    assert_eq!(controller.state(), ScrollState::Idle);
    assert_eq!(
        controller.drain_events(),
        vec![AutoScrollEvent::AutoPaused {
            interaction: Interaction::Wheel
        }]
    );
    assert_eq!(clock.active_timers(), 0);
    assert_eq!(run_for(&clock, &mut controller, &mut page, 500), 0);
}

#[test]
fn interaction_while_idle_is_ignored() {
    let (mut controller, _clock) = web_controller();

    assert!(!controller.on_user_interaction(Interaction::KeyPress));
    assert!(!controller.has_pending_events());
}

// ===== Resynchronisation =====

#[test]
fn resumes_from_manual_scroll_position() {
    let clock = VirtualScheduler::new();
    let mut controller =
        AutoScrollController::new(AutoScrollConfig::mobile(), clock.clone()).unwrap();
    let mut targets = Vec::new();

    {
        let mut view = OffsetSurface::new(0.0, |y| targets.push(y));

        controller.start();
        for timer in clock.advance(Duration::from_millis(300)) {
            controller.on_tick(timer, &mut view);
        }
        assert_eq!(controller.position(), 3.0);

        controller.on_user_interaction(Interaction::ManualScroll);
        view.sync(120.0);
        controller.resync_from(&view);
        assert_eq!(controller.position(), 120.0);

        controller.start();
        for timer in clock.advance(Duration::from_millis(100)) {
            controller.on_tick(timer, &mut view);
        }
    }

    assert_eq!(targets, vec![1.0, 2.0, 3.0, 121.0]);
    assert_eq!(controller.position(), 121.0);
}

#[test]
fn position_reports_while_running_are_ignored() {
    let (mut controller, clock) = web_controller();
    let mut page = Page::default();

    controller.start();
    run_for(&clock, &mut controller, &mut page, 100);
    controller.on_position_changed(500.0);

    assert_eq!(controller.position(), 2.0);

    controller.stop();
    controller.on_position_changed(500.0);
    assert_eq!(controller.position(), 500.0);
}

// ===== Speed controls =====

#[test]
fn step_controls_follow_the_preset() {
    let clock = VirtualScheduler::new();
    let mut controller =
        AutoScrollController::new(AutoScrollConfig::mobile(), clock.clone()).unwrap();

    assert_eq!(controller.speed_up(), 1.5);
    assert_eq!(controller.speed_up(), 2.0);
    assert_eq!(controller.speed_down(), 1.5);

    for _ in 0..20 {
        controller.speed_up();
    }
    assert_eq!(controller.speed(), 5.0);

    for _ in 0..20 {
        controller.speed_down();
    }
    assert_eq!(controller.speed(), 0.5);
}

#[test]
fn speed_events_report_the_new_rate() {
    let (mut controller, _clock) = web_controller();

    controller.change_speed(2.0);
    assert_eq!(
        controller.drain_events(),
        vec![AutoScrollEvent::SpeedChanged {
            speed: 2.0,
            interval_ms: 25.0,
            step: 2.0
        }]
    );
    assert!(!controller.has_pending_events());
}
