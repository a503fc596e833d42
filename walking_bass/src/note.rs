// Output note events.
//
// The generator emits an ordered sequence of `Note`s: something to sound (or
// a rest) for a duration measured on an eighth-note grid, optionally tagged
// with the chord symbol that starts at that note. Serializers (abc.rs,
// midi.rs, JSON) consume the sequence; nothing reads it back.

use serde::{Deserialize, Serialize};
use walking_bass_theory::Pitch;

/// Eighth notes per quarter note.
pub const QUARTER: u32 = 2;

/// Eighth notes per 4/4 bar.
pub const BAR_LENGTH: u32 = 4 * QUARTER;

/// What a note slot sounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    Rest,
    Single(Pitch),
    /// Several pitches struck together, lowest first.
    Stack(Vec<Pitch>),
}

impl Sound {
    /// Build from a list of pitches: none is a rest, one is a single note.
    pub fn from_pitches(mut pitches: Vec<Pitch>) -> Sound {
        match pitches.len() {
            0 => Sound::Rest,
            1 => Sound::Single(pitches[0]),
            _ => {
                pitches.sort_by_key(|p| p.index());
                Sound::Stack(pitches)
            }
        }
    }

    pub fn pitches(&self) -> &[Pitch] {
        match self {
            Sound::Rest => &[],
            Sound::Single(pitch) => std::slice::from_ref(pitch),
            Sound::Stack(pitches) => pitches,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Sound::Rest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub sound: Sound,
    /// Length in eighth notes.
    pub duration: u32,
    /// Chord symbol shown above this note.
    pub label: Option<String>,
}

impl Note {
    pub fn quarter(sound: Sound) -> Note {
        Note {
            sound,
            duration: QUARTER,
            label: None,
        }
    }

    pub fn quarter_rest() -> Note {
        Note::quarter(Sound::Rest)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Note {
        self.label = Some(label.into());
        self
    }

    /// The single pitch of this note, if it sounds exactly one.
    pub fn pitch(&self) -> Option<Pitch> {
        match &self.sound {
            Sound::Single(pitch) => Some(*pitch),
            _ => None,
        }
    }
}
