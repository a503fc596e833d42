// Pitches and their enharmonic spellings.
//
// A pitch is an absolute chromatic index over 8 octaves (0 = C0, 96 = C8)
// together with the name it is written with. The same index can be written
// several ways (C# / Db / B##), and which one is right depends on the
// musical context, so the spelling is carried alongside the index rather
// than derived from it.
//
// This module provides:
// - Letter: the seven natural note letters
// - Spelling: letter + signed alteration (at most a double sharp/flat)
// - resolve_enharmony: name -> semitone class, recursively stripping accidentals
// - find_enharmonic_spelling: semitone class + target letter -> name
// - Pitch: index + spelling, with written-octave logic for B#/Cb style names

use crate::error::TheoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest valid pitch index (C8).
pub const MAX_PITCH_INDEX: u8 = 96;

/// Maximum number of accidentals on a single note name.
pub const MAX_ACCIDENTALS: usize = 2;

/// The seven natural note letters, in diatonic order from C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position in the natural scale (C = 0 ... B = 6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Semitone class of the unaltered letter.
    pub fn natural_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Step `steps` letters along the natural scale, wrapping mod 7.
    pub fn step(self, steps: i32) -> Letter {
        Letter::ALL[(self.index() as i32 + steps).rem_euclid(7) as usize]
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// A note name: a letter plus a signed alteration (+1 = sharp, -1 = flat).
///
/// The alteration is always within [-2, 2]; the constructors that build
/// spellings from text or arithmetic enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spelling {
    letter: Letter,
    alteration: i8,
}

impl Spelling {
    pub fn natural(letter: Letter) -> Self {
        Spelling {
            letter,
            alteration: 0,
        }
    }

    /// Build a spelling from a letter and a signed accidental count.
    pub fn new(letter: Letter, alteration: i8) -> Result<Self, TheoryError> {
        if alteration.unsigned_abs() as usize > MAX_ACCIDENTALS {
            let spelled = Spelling { letter, alteration };
            return Err(TheoryError::TooManyAccidentals(spelled.to_string()));
        }
        Ok(Spelling { letter, alteration })
    }

    pub fn letter(self) -> Letter {
        self.letter
    }

    pub fn alteration(self) -> i8 {
        self.alteration
    }

    /// Semitone class (0-11) this name sounds as.
    pub fn class(self) -> u8 {
        (self.letter.natural_class() as i8 + self.alteration).rem_euclid(12) as u8
    }

    /// The accidental string alone (`""`, `"#"`, `"bb"`, ...).
    pub fn accidentals(self) -> String {
        let symbol = if self.alteration > 0 { "#" } else { "b" };
        symbol.repeat(self.alteration.unsigned_abs() as usize)
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidentals())
    }
}

impl FromStr for Spelling {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(TheoryError::EmptyNotation)?;
        let letter =
            Letter::from_char(first).ok_or_else(|| TheoryError::UnknownNoteName(s.to_string()))?;
        let class = resolve_enharmony(s)?;
        let alteration = tonal_offset(letter.natural_class(), class);
        Spelling::new(letter, alteration)
    }
}

/// Signed distance from class `from` to class `to`, in [-6, 5].
fn tonal_offset(from: u8, to: u8) -> i8 {
    ((to as i8 - from as i8 + 6).rem_euclid(12)) - 6
}

/// Resolve a note name (`C`, `F#`, `Bbb`, `E#`, ...) to its semitone class.
///
/// Resolution is recursive: a bare letter resolves directly; a name ending
/// in `#` or `b` resolves by stripping that accidental, resolving the rest
/// and shifting by one semitone. At most two accidentals are accepted.
pub fn resolve_enharmony(name: &str) -> Result<u8, TheoryError> {
    resolve_with_depth(name, name, 0)
}

fn resolve_with_depth(full: &str, name: &str, depth: usize) -> Result<u8, TheoryError> {
    if depth > MAX_ACCIDENTALS {
        return Err(TheoryError::TooManyAccidentals(full.to_string()));
    }
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Letter::from_char(c)
            .map(Letter::natural_class)
            .ok_or_else(|| TheoryError::UnknownNoteName(full.to_string()));
    }
    if let Some(rest) = name.strip_suffix('#') {
        let lower = resolve_with_depth(full, rest, depth + 1)?;
        return Ok((lower + 1) % 12);
    }
    if let Some(rest) = name.strip_suffix('b') {
        let higher = resolve_with_depth(full, rest, depth + 1)?;
        return Ok((higher + 11) % 12);
    }
    if name.is_empty() {
        return Err(TheoryError::EmptyNotation);
    }
    Err(TheoryError::UnknownNoteName(full.to_string()))
}

/// Spell semitone class `class` on the natural letter `target`.
///
/// Uses the minimum number of accidentals of a single sign: sharps when the
/// letter's natural pitch lies below the class, flats when above. Classes
/// more than two semitones away from the letter cannot be spelled.
pub fn find_enharmonic_spelling(class: u8, target: Letter) -> Result<Spelling, TheoryError> {
    let class = class % 12;
    let natural = target.natural_class();
    if natural == class {
        return Ok(Spelling::natural(target));
    }
    // Distance from the required class to the letter's natural pitch:
    // negative means the letter sits below and needs sharpening.
    let dist = crate::interval::tonal_distance(class, natural);
    let count = dist.unsigned_abs() as usize;
    if count > MAX_ACCIDENTALS {
        return Err(TheoryError::SpellingOutOfRange {
            class,
            letter: target.as_char(),
        });
    }
    let alteration = if dist < 0 { count as i8 } else { -(count as i8) };
    Spelling::new(target, alteration)
}

/// Default spelling for pitches built from a bare index.
const DEFAULT_SPELLINGS: [(Letter, i8); 12] = [
    (Letter::C, 0),
    (Letter::D, -1),
    (Letter::D, 0),
    (Letter::E, -1),
    (Letter::E, 0),
    (Letter::F, 0),
    (Letter::G, -1),
    (Letter::G, 0),
    (Letter::A, -1),
    (Letter::A, 0),
    (Letter::B, -1),
    (Letter::B, 0),
];

/// An absolute pitch: chromatic index plus the name it is written with.
///
/// Invariant: `spelling.class() == index % 12` and `index <= 96`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    index: u8,
    spelling: Spelling,
}

impl Pitch {
    /// Pitch at a raw chromatic index, spelled with the default name.
    pub fn from_index(index: i32) -> Result<Self, TheoryError> {
        let index = check_range(index)?;
        let (letter, alteration) = DEFAULT_SPELLINGS[(index % 12) as usize];
        Ok(Pitch {
            index,
            spelling: Spelling { letter, alteration },
        })
    }

    /// Pitch from a note name in a written octave (`"Bb", 2` = Bb2).
    pub fn from_name(name: &str, octave: i32) -> Result<Self, TheoryError> {
        let spelling: Spelling = name.parse()?;
        Pitch::in_octave(spelling, octave)
    }

    /// Pitch for a spelling in a written octave.
    ///
    /// B#4 sounds as C5 and Cb4 as B3: the alteration is allowed to carry
    /// the sounding index across the C boundary.
    pub fn in_octave(spelling: Spelling, octave: i32) -> Result<Self, TheoryError> {
        let index =
            octave * 12 + spelling.letter.natural_class() as i32 + spelling.alteration as i32;
        Ok(Pitch {
            index: check_range(index)?,
            spelling,
        })
    }

    /// Pitch at `index` written as `spelling`. The class must agree.
    pub fn with_spelling(index: i32, spelling: Spelling) -> Result<Self, TheoryError> {
        let index = check_range(index)?;
        debug_assert_eq!(index % 12, spelling.class(), "spelling does not match index");
        Ok(Pitch { index, spelling })
    }

    pub fn index(self) -> u8 {
        self.index
    }

    pub fn spelling(self) -> Spelling {
        self.spelling
    }

    /// Semitone class, 0-11.
    pub fn class(self) -> u8 {
        self.index % 12
    }

    /// The written name, e.g. `"F#"`.
    pub fn name(self) -> String {
        self.spelling.to_string()
    }

    /// Written octave. This is `floor(index / 12)` except for names whose
    /// accidentals cross the C boundary: a B# sounding as C5 is written in
    /// octave 4, a Cb sounding as B3 in octave 4.
    pub fn octave(self) -> i32 {
        let base = self.spelling.letter.natural_class() as i32 + self.spelling.alteration as i32;
        (self.index as i32 - base).div_euclid(12)
    }

    pub fn is_same_pitch(self, other: Pitch) -> bool {
        self.index == other.index
    }

    pub fn is_same_relative_pitch(self, other: Pitch) -> bool {
        self.class() == other.class()
    }

    /// The same name `octaves` octaves higher (negative = lower).
    pub fn shifted_octaves(self, octaves: i32) -> Result<Self, TheoryError> {
        Pitch::with_spelling(self.index as i32 + octaves * 12, self.spelling)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spelling, self.octave())
    }
}

fn check_range(index: i32) -> Result<u8, TheoryError> {
    if (0..=MAX_PITCH_INDEX as i32).contains(&index) {
        Ok(index as u8)
    } else {
        Err(TheoryError::PitchOutOfRange(index))
    }
}
