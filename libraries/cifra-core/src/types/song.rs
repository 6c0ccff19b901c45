//! Song types

use crate::error::{CifraError, Result};
use serde::{Deserialize, Deserializer, Serialize};

pub type SongId = i64;

/// Scroll speed used when a song has none stored
pub const DEFAULT_SCROLL_SPEED: f64 = 1.0;

/// A song and its chord sheet
///
/// Field names on the wire follow the backend payloads (`nome`, `artista`,
/// `link_musica`, `cifra`, `velocidade_rolamento`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,

    #[serde(rename = "nome", default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "artista", default, deserialize_with = "null_as_default")]
    pub artist: String,

    #[serde(rename = "link_musica")]
    pub link: String,

    /// Chord sheet text (omitted by list endpoints)
    #[serde(rename = "cifra", default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,

    /// Auto-scroll speed the user saved for this song
    #[serde(rename = "velocidade_rolamento", default)]
    pub stored_scroll_speed: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Read a nullable column as its default value (`"nome": null` becomes `""`)
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Song {
    /// Create a song without sheet or stored speed
    pub fn new(
        id: SongId,
        name: impl Into<String>,
        artist: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            artist: artist.into(),
            link: link.into(),
            sheet: None,
            stored_scroll_speed: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    /// Attach a chord sheet
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Attach a stored scroll speed
    pub fn with_scroll_speed(mut self, speed: f64) -> Self {
        self.stored_scroll_speed = Some(speed);
        self
    }

    /// Parse a song from a backend JSON payload
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Stored scroll speed, or the default when absent or not finite
    pub fn scroll_speed(&self) -> f64 {
        self.stored_scroll_speed
            .filter(|speed| speed.is_finite() && *speed > 0.0)
            .unwrap_or(DEFAULT_SCROLL_SPEED)
    }

    /// Sheet text, empty when the song has none
    pub fn sheet_text(&self) -> &str {
        self.sheet.as_deref().unwrap_or_default()
    }

    /// Check the fields the backend requires
    pub fn validate(&self) -> Result<()> {
        if self.link.trim().is_empty() {
            return Err(CifraError::invalid_input("song link is required"));
        }
        Ok(())
    }
}
