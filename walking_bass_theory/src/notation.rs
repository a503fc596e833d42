// Chord-symbol notation: parsing, rendering and transposition.
//
// A chord symbol is `<root><quality>`: a natural letter, any run of `#`/`b`
// directly after it, then a suffix that must exactly match the quality
// catalog (`Bb7`, `F#-7`, `Eø`, `C`). Inside a progression the token `%`
// stands for "same chord as the previous bar".

use crate::chord::{ChordQuality, chord_tones};
use crate::error::TheoryError;
use crate::interval::{Direction, Interval, interval_note};
use crate::pitch::{Letter, Pitch, Spelling};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The token that repeats the previous chord.
pub const REPEAT_TOKEN: &str = "%";

/// Octave chord roots are read in before any register anchoring.
pub const DEFAULT_ROOT_OCTAVE: i32 = 4;

/// A shift applied to every chord of a progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transposition {
    pub interval: Interval,
    pub direction: Direction,
}

impl Transposition {
    pub fn new(interval: Interval, direction: Direction) -> Self {
        Transposition {
            interval,
            direction,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.interval == Interval::PERFECT_UNISON
    }
}

/// A parsed chord symbol such as `Bb-7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordSymbol {
    pub root: Spelling,
    pub quality: ChordQuality,
}

impl ChordSymbol {
    pub fn new(root: Spelling, quality: ChordQuality) -> Self {
        ChordSymbol { root, quality }
    }

    /// The root as a pitch in the given written octave.
    pub fn root_pitch(&self, octave: i32) -> Result<Pitch, TheoryError> {
        Pitch::in_octave(self.root, octave)
    }

    pub fn formula(&self) -> &'static [Interval] {
        self.quality.formula()
    }

    /// Chord tones stacked upward from the root in the given octave.
    pub fn tones(&self, octave: i32) -> Result<Vec<Pitch>, TheoryError> {
        chord_tones(self.root_pitch(octave)?, self.quality)
    }

    /// Shift the root by the transposition; the quality is unchanged.
    pub fn transpose(&self, transposition: Transposition) -> Result<ChordSymbol, TheoryError> {
        let root = self.root_pitch(DEFAULT_ROOT_OCTAVE)?;
        let shifted = interval_note(root, transposition.interval, transposition.direction)?;
        Ok(ChordSymbol::new(shifted.spelling(), self.quality))
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality.suffix())
    }
}

impl FromStr for ChordSymbol {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.chars().next().ok_or(TheoryError::EmptyNotation)?;
        if Letter::from_char(first).is_none() {
            return Err(TheoryError::UnknownNoteName(first.to_string()));
        }
        // Root runs through every `#`/`b` directly after the letter. All of
        // these are ASCII, so the split index is a valid char boundary.
        let root_len = 1 + s[1..]
            .bytes()
            .take_while(|&b| b == b'#' || b == b'b')
            .count();
        let (root, suffix) = s.split_at(root_len);
        let root: Spelling = root.parse()?;
        let quality =
            ChordQuality::from_suffix(suffix).ok_or_else(|| TheoryError::UnknownQuality {
                notation: s.to_string(),
                quality: suffix.to_string(),
            })?;
        Ok(ChordSymbol::new(root, quality))
    }
}

/// One entry of a progression: a chord, or a repeat of the previous chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordNotation {
    Chord(ChordSymbol),
    Repeat,
}

impl ChordNotation {
    pub fn is_repeat(&self) -> bool {
        matches!(self, ChordNotation::Repeat)
    }

    /// Transpose the chord; a repeat transposes to itself.
    pub fn transpose(&self, transposition: Transposition) -> Result<ChordNotation, TheoryError> {
        match self {
            ChordNotation::Chord(symbol) => Ok(ChordNotation::Chord(symbol.transpose(transposition)?)),
            ChordNotation::Repeat => Ok(ChordNotation::Repeat),
        }
    }
}

impl fmt::Display for ChordNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordNotation::Chord(symbol) => write!(f, "{symbol}"),
            ChordNotation::Repeat => f.write_str(REPEAT_TOKEN),
        }
    }
}

impl FromStr for ChordNotation {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == REPEAT_TOKEN {
            return Ok(ChordNotation::Repeat);
        }
        s.parse().map(ChordNotation::Chord)
    }
}
