// Song catalog: named chord progressions with their home key.
//
// The built-in catalog is compiled in from data/songs.json; a user catalog
// with the same shape can be loaded from disk. Changes are kept as the
// strings they were written as and only parsed when a song is walked, so a
// catalog with one bad song still lists.

use crate::error::WalkError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walking_bass_theory::{ChordNotation, Direction, Interval, Spelling, Transposition};

const BUILTIN_SONGS: &str = include_str!("../data/songs.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
    /// Home key as a note name, e.g. `"Bb"`.
    pub key: String,
    /// One chord symbol (or `%`) per bar.
    pub changes: Vec<String>,
}

impl Song {
    pub fn key(&self) -> Result<Spelling, WalkError> {
        Ok(self.key.parse()?)
    }

    pub fn progression(&self) -> Result<Vec<ChordNotation>, WalkError> {
        let entries = self
            .changes
            .iter()
            .map(|change| change.parse::<ChordNotation>())
            .collect::<Result<Vec<_>, _>>()?;
        if entries.is_empty() {
            return Err(WalkError::EmptyProgression);
        }
        Ok(entries)
    }

    /// The upward transposition that moves this song into `target`.
    pub fn transposition_to(&self, target: Spelling) -> Result<Transposition, WalkError> {
        let interval = Interval::between(self.key()?, target)?;
        Ok(Transposition::new(interval, Direction::Up))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongCatalog {
    pub songs: Vec<Song>,
}

impl SongCatalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self, WalkError> {
        Ok(serde_json::from_str(BUILTIN_SONGS)?)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, WalkError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Look a song up by name, ignoring case.
    pub fn find(&self, name: &str) -> Result<&Song, WalkError> {
        self.songs
            .iter()
            .find(|song| song.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| WalkError::UnknownSong(name.to_string()))
    }
}
