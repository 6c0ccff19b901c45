//! Potpourri (ordered playlist) types

use super::song::{null_as_default, Song, SongId};
use crate::error::{CifraError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type PotpourriId = i64;

/// A named, ordered playlist of songs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Potpourri {
    pub id: PotpourriId,

    #[serde(rename = "nome_potpourri")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,

    /// Entries (optional, populated by the detail endpoint)
    #[serde(
        rename = "musicas_potpourri",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub entries: Vec<PotpourriEntry>,
}

/// A song slot inside a potpourri
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotpourriEntry {
    #[serde(rename = "musica_id")]
    pub song_id: SongId,

    /// Position in the playlist (1-indexed in the clients, gaps allowed)
    #[serde(rename = "ordem_tocagem")]
    pub play_order: i32,

    /// Denormalized song, present when the backend embeds it
    #[serde(rename = "musica", default, skip_serializing_if = "Option::is_none")]
    pub song: Option<Song>,
}

impl PotpourriEntry {
    /// Create an entry referencing a song by id
    pub fn new(song_id: SongId, play_order: i32) -> Self {
        Self {
            song_id,
            play_order,
            song: None,
        }
    }

    /// Create an entry carrying the full song
    pub fn with_song(song: Song, play_order: i32) -> Self {
        Self {
            song_id: song.id,
            play_order,
            song: Some(song),
        }
    }
}

impl Potpourri {
    /// Create an empty potpourri
    pub fn new(id: PotpourriId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: String::new(),
            updated_at: String::new(),
            entries: Vec::new(),
        }
    }

    /// Replace the entries
    pub fn with_entries(mut self, entries: Vec<PotpourriEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Parse a potpourri from a backend JSON payload
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Entries sorted by play order (stable for equal orders)
    pub fn ordered_entries(&self) -> Vec<&PotpourriEntry> {
        let mut entries: Vec<&PotpourriEntry> = self.entries.iter().collect();
        entries.sort_by_key(|entry| entry.play_order);
        entries
    }

    /// Check the rules the create/update forms enforce
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CifraError::invalid_input("potpourri name is required"));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.play_order) {
                return Err(CifraError::invalid_input(format!(
                    "duplicate play order {} in potpourri",
                    entry.play_order
                )));
            }
        }

        Ok(())
    }
}
