// Interval taxonomy and interval arithmetic with enharmonic target spelling.
//
// An interval is a diatonic number (unison, second, ... thirteenth) plus a
// quality. Unisons, fourths, fifths, octaves and elevenths are "perfect
// capable" and take perfect/augmented/diminished; the rest take
// major/minor/augmented/diminished. `Interval::new` is the only way to build
// one from raw parts, so an invalid pair never exists as a value.
//
// Applying an interval to a pitch moves along two axes at once: semitones
// (what it sounds like) and letters (how it is written). The result is
// spelled on the diatonic target letter with as few accidentals as possible,
// which is what makes the third of Ab minor come out as Cb, not B.

use crate::error::TheoryError;
use crate::pitch::{Pitch, Spelling, find_enharmonic_spelling};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interval numbers the catalog supports.
pub const INTERVAL_NUMBERS: [u8; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 13];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Perfect,
        Quality::Major,
        Quality::Minor,
        Quality::Augmented,
        Quality::Diminished,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Quality::Perfect => "perfect",
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Augmented => "augmented",
            Quality::Diminished => "diminished",
        }
    }

    fn symbol(self) -> char {
        match self {
            Quality::Perfect => 'P',
            Quality::Major => 'M',
            Quality::Minor => 'm',
            Quality::Augmented => 'A',
            Quality::Diminished => 'd',
        }
    }

    fn from_symbol(c: char) -> Option<Quality> {
        match c {
            'P' => Some(Quality::Perfect),
            'M' => Some(Quality::Major),
            'm' => Some(Quality::Minor),
            'A' => Some(Quality::Augmented),
            'd' => Some(Quality::Diminished),
            _ => None,
        }
    }
}

/// Melodic direction of an interval or of a bass line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

/// True for the interval numbers that take perfect quality.
pub fn is_perfect_capable(number: u8) -> bool {
    matches!(number, 1 | 4 | 5 | 8 | 11)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalRepr", into = "IntervalRepr")]
pub struct Interval {
    number: u8,
    quality: Quality,
}

impl Interval {
    pub const PERFECT_UNISON: Interval = Interval::known(1, Quality::Perfect);
    pub const MINOR_SECOND: Interval = Interval::known(2, Quality::Minor);
    pub const MAJOR_SECOND: Interval = Interval::known(2, Quality::Major);
    pub const MINOR_THIRD: Interval = Interval::known(3, Quality::Minor);
    pub const MAJOR_THIRD: Interval = Interval::known(3, Quality::Major);
    pub const PERFECT_FOURTH: Interval = Interval::known(4, Quality::Perfect);
    pub const AUGMENTED_FOURTH: Interval = Interval::known(4, Quality::Augmented);
    pub const DIMINISHED_FIFTH: Interval = Interval::known(5, Quality::Diminished);
    pub const PERFECT_FIFTH: Interval = Interval::known(5, Quality::Perfect);
    pub const AUGMENTED_FIFTH: Interval = Interval::known(5, Quality::Augmented);
    pub const MINOR_SIXTH: Interval = Interval::known(6, Quality::Minor);
    pub const MAJOR_SIXTH: Interval = Interval::known(6, Quality::Major);
    pub const DIMINISHED_SEVENTH: Interval = Interval::known(7, Quality::Diminished);
    pub const MINOR_SEVENTH: Interval = Interval::known(7, Quality::Minor);
    pub const MAJOR_SEVENTH: Interval = Interval::known(7, Quality::Major);
    pub const PERFECT_OCTAVE: Interval = Interval::known(8, Quality::Perfect);

    /// Only for the catalog constants above, which are valid by inspection.
    const fn known(number: u8, quality: Quality) -> Interval {
        Interval { number, quality }
    }

    /// Build an interval, rejecting numbers outside the catalog and
    /// qualities the number cannot take.
    pub fn new(number: u8, quality: Quality) -> Result<Self, TheoryError> {
        let valid_number = INTERVAL_NUMBERS.contains(&number);
        let valid_quality = match quality {
            Quality::Perfect => is_perfect_capable(number),
            Quality::Major | Quality::Minor => !is_perfect_capable(number),
            Quality::Augmented | Quality::Diminished => true,
        };
        if !valid_number || !valid_quality {
            return Err(TheoryError::InvalidInterval {
                number,
                quality: quality.name(),
            });
        }
        Ok(Interval { number, quality })
    }

    /// Every valid (number, quality) pair.
    pub fn catalog() -> impl Iterator<Item = Interval> {
        INTERVAL_NUMBERS.into_iter().flat_map(|number| {
            Quality::ALL
                .into_iter()
                .filter_map(move |quality| Interval::new(number, quality).ok())
        })
    }

    pub fn number(self) -> u8 {
        self.number
    }

    pub fn quality(self) -> Quality {
        self.quality
    }

    /// Semitone adjustment of the quality relative to major/perfect.
    fn quality_delta(self) -> i32 {
        match (self.quality, is_perfect_capable(self.number)) {
            (Quality::Major | Quality::Perfect, _) => 0,
            (Quality::Augmented, _) => 1,
            (Quality::Minor, _) => -1,
            (Quality::Diminished, true) => -1,
            (Quality::Diminished, false) => -2,
        }
    }

    /// Size of the interval in semitones.
    pub fn semitones(self) -> i32 {
        semitones_for_interval_type(self.number) + self.quality_delta()
    }

    /// The smallest upward interval (unison through seventh) that spells
    /// `to` from `from`.
    pub fn between(from: Spelling, to: Spelling) -> Result<Self, TheoryError> {
        let steps = (to.letter().index() as i32 - from.letter().index() as i32).rem_euclid(7);
        let number = steps as u8 + 1;
        let semitones = (to.class() as i32 - from.class() as i32).rem_euclid(12);
        let diff = (semitones - semitones_for_interval_type(number) + 6).rem_euclid(12) - 6;
        let quality = match (is_perfect_capable(number), diff) {
            (true, 0) => Quality::Perfect,
            (false, 0) => Quality::Major,
            (false, -1) => Quality::Minor,
            (_, 1) => Quality::Augmented,
            (true, -1) | (false, -2) => Quality::Diminished,
            _ => {
                return Err(TheoryError::InvalidInterval {
                    number,
                    quality: "more than doubly altered",
                });
            }
        };
        Interval::new(number, quality)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::PERFECT_UNISON
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality.symbol(), self.number)
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    /// Parse short names such as `P5`, `M3`, `m7`, `A4`, `d5`, `M13`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || TheoryError::UnknownInterval(s.to_string());
        let mut chars = s.chars();
        let quality = chars
            .next()
            .and_then(Quality::from_symbol)
            .ok_or_else(unknown)?;
        let number: u8 = chars.as_str().parse().map_err(|_| unknown())?;
        Interval::new(number, quality)
    }
}

/// Serialized form of an interval; validated on the way back in.
#[derive(Serialize, Deserialize)]
struct IntervalRepr {
    number: u8,
    quality: Quality,
}

impl TryFrom<IntervalRepr> for Interval {
    type Error = TheoryError;

    fn try_from(repr: IntervalRepr) -> Result<Self, Self::Error> {
        Interval::new(repr.number, repr.quality)
    }
}

impl From<Interval> for IntervalRepr {
    fn from(interval: Interval) -> Self {
        IntervalRepr {
            number: interval.number,
            quality: interval.quality,
        }
    }
}

/// Semitones of the major/perfect interval of diatonic number `t`.
///
/// Simple intervals follow the major-scale ladder 0, 2, 4, 5, 7, 9, 11, 12;
/// compound intervals are the simple interval plus an octave.
pub fn semitones_for_interval_type(t: u8) -> i32 {
    if t > 8 {
        return 12 + semitones_for_interval_type(t - 7);
    }
    let t = t as i32;
    ((t - 2) * 2 + 2) - t / 4
}

/// Shortest signed semitone distance from class `a` to class `b`, in (-6, 6].
pub fn tonal_distance(a: u8, b: u8) -> i8 {
    let dist = (b as i8 - a as i8 + 6).rem_euclid(12) - 6;
    if dist == -6 { 6 } else { dist }
}

/// The note `interval` away from `root`, written on the diatonic target
/// letter and placed in the root's written octave.
///
/// Letters wrap mod 7, so for intervals that cross a C the result can land
/// below the root (A3 up a major third gives C#3). Use
/// [`voiced_interval_note`] when the sounding position matters.
pub fn interval_note(
    root: Pitch,
    interval: Interval,
    direction: Direction,
) -> Result<Pitch, TheoryError> {
    let spelling = target_spelling(root, interval, direction)?;
    Pitch::in_octave(spelling, root.octave())
}

/// Like [`interval_note`], but placed exactly `interval.semitones()` above
/// (or below) the root.
pub fn voiced_interval_note(
    root: Pitch,
    interval: Interval,
    direction: Direction,
) -> Result<Pitch, TheoryError> {
    let spelling = target_spelling(root, interval, direction)?;
    let index = root.index() as i32 + direction.sign() * interval.semitones();
    Pitch::with_spelling(index, spelling)
}

fn target_spelling(
    root: Pitch,
    interval: Interval,
    direction: Direction,
) -> Result<Spelling, TheoryError> {
    let sign = direction.sign();
    let letter = root
        .spelling()
        .letter()
        .step(sign * (interval.number() as i32 - 1));
    let class = (root.class() as i32 + sign * interval.semitones()).rem_euclid(12) as u8;
    find_enharmonic_spelling(class, letter)
}
