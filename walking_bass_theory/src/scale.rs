// Heptatonic scale definitions.
//
// Each scale is a fixed formula of seven intervals from the tonic, one per
// diatonic degree, so every scale note lands on its own letter and spelling
// falls out of the interval arithmetic (F major gets Bb, not A#).
//
// This module provides:
// - ScaleKind: the major/minor family plus the church modes
// - Formula lookup and name parsing for the CLI
// - scale_notes: concrete pitches for a scale on a given tonic

use crate::error::TheoryError;
use crate::interval::{Direction, Interval, voiced_interval_note};
use crate::pitch::Pitch;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A seven-note scale, defined by its interval pattern from the tonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    /// 1 2 3 4 5 6 7
    Major,
    /// 1 2 b3 4 5 b6 b7
    NaturalMinor,
    /// 1 2 b3 4 5 b6 7 (raised leading tone)
    HarmonicMinor,
    /// 1 2 b3 4 5 6 7 (jazz / ascending form)
    MelodicMinor,
    /// 1 2 b3 4 5 6 b7
    Dorian,
    /// 1 b2 b3 4 5 b6 b7
    Phrygian,
    /// 1 2 3 #4 5 6 7
    Lydian,
    /// 1 2 3 4 5 6 b7
    Mixolydian,
    /// 1 b2 b3 4 b5 b6 b7
    Locrian,
}

const P1: Interval = Interval::PERFECT_UNISON;
const M2: Interval = Interval::MAJOR_SECOND;
const MIN2: Interval = Interval::MINOR_SECOND;
const M3: Interval = Interval::MAJOR_THIRD;
const MIN3: Interval = Interval::MINOR_THIRD;
const P4: Interval = Interval::PERFECT_FOURTH;
const A4: Interval = Interval::AUGMENTED_FOURTH;
const D5: Interval = Interval::DIMINISHED_FIFTH;
const P5: Interval = Interval::PERFECT_FIFTH;
const M6: Interval = Interval::MAJOR_SIXTH;
const MIN6: Interval = Interval::MINOR_SIXTH;
const M7: Interval = Interval::MAJOR_SEVENTH;
const MIN7: Interval = Interval::MINOR_SEVENTH;

impl ScaleKind {
    pub const ALL: [ScaleKind; 9] = [
        ScaleKind::Major,
        ScaleKind::NaturalMinor,
        ScaleKind::HarmonicMinor,
        ScaleKind::MelodicMinor,
        ScaleKind::Dorian,
        ScaleKind::Phrygian,
        ScaleKind::Lydian,
        ScaleKind::Mixolydian,
        ScaleKind::Locrian,
    ];

    /// The seven intervals from the tonic, degree 1 first.
    pub fn formula(self) -> [Interval; 7] {
        match self {
            ScaleKind::Major => [P1, M2, M3, P4, P5, M6, M7],
            ScaleKind::NaturalMinor => [P1, M2, MIN3, P4, P5, MIN6, MIN7],
            ScaleKind::HarmonicMinor => [P1, M2, MIN3, P4, P5, MIN6, M7],
            ScaleKind::MelodicMinor => [P1, M2, MIN3, P4, P5, M6, M7],
            ScaleKind::Dorian => [P1, M2, MIN3, P4, P5, M6, MIN7],
            ScaleKind::Phrygian => [P1, MIN2, MIN3, P4, P5, MIN6, MIN7],
            ScaleKind::Lydian => [P1, M2, M3, A4, P5, M6, M7],
            ScaleKind::Mixolydian => [P1, M2, M3, P4, P5, M6, MIN7],
            ScaleKind::Locrian => [P1, MIN2, MIN3, P4, D5, MIN6, MIN7],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "major",
            ScaleKind::NaturalMinor => "minor",
            ScaleKind::HarmonicMinor => "harmonic-minor",
            ScaleKind::MelodicMinor => "melodic-minor",
            ScaleKind::Dorian => "dorian",
            ScaleKind::Phrygian => "phrygian",
            ScaleKind::Lydian => "lydian",
            ScaleKind::Mixolydian => "mixolydian",
            ScaleKind::Locrian => "locrian",
        }
    }
}

impl FromStr for ScaleKind {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "ionian" => return Ok(ScaleKind::Major),
            "aeolian" | "natural-minor" => return Ok(ScaleKind::NaturalMinor),
            _ => {}
        }
        ScaleKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| TheoryError::UnknownScale(s.to_string()))
    }
}

/// The seven notes of `kind` on `tonic`, ascending from the tonic.
pub fn scale_notes(tonic: Pitch, kind: ScaleKind) -> Result<Vec<Pitch>, TheoryError> {
    kind.formula()
        .into_iter()
        .map(|interval| voiced_interval_note(tonic, interval, Direction::Up))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tonic: &str, kind: ScaleKind) -> Vec<String> {
        let tonic = Pitch::from_name(tonic, 3).unwrap();
        scale_notes(tonic, kind)
            .unwrap()
            .iter()
            .map(|p| p.name())
            .collect()
    }

    #[test]
    fn test_c_major() {
        assert_eq!(names("C", ScaleKind::Major), ["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_f_major_uses_flat() {
        assert_eq!(names("F", ScaleKind::Major), ["F", "G", "A", "Bb", "C", "D", "E"]);
    }

    #[test]
    fn test_harmonic_minor_leading_tone() {
        assert_eq!(
            names("A", ScaleKind::HarmonicMinor),
            ["A", "B", "C", "D", "E", "F", "G#"]
        );
        assert_eq!(
            names("G#", ScaleKind::HarmonicMinor),
            ["G#", "A#", "B", "C#", "D#", "E", "F##"]
        );
    }

    #[test]
    fn test_modes() {
        assert_eq!(names("D", ScaleKind::Dorian), ["D", "E", "F", "G", "A", "B", "C"]);
        assert_eq!(names("E", ScaleKind::Phrygian), ["E", "F", "G", "A", "B", "C", "D"]);
        assert_eq!(names("B", ScaleKind::Locrian), ["B", "C", "D", "E", "F", "G", "A"]);
    }

    #[test]
    fn test_every_scale_uses_each_letter_once() {
        for kind in ScaleKind::ALL {
            let tonic = Pitch::from_name("Eb", 3).unwrap();
            let notes = scale_notes(tonic, kind).unwrap();
            assert_eq!(notes.len(), 7);
            let mut letters: Vec<_> = notes.iter().map(|p| p.spelling().letter().index()).collect();
            letters.sort_unstable();
            assert_eq!(letters, vec![0, 1, 2, 3, 4, 5, 6], "{kind:?}");
            assert!(notes.windows(2).all(|w| w[0].index() < w[1].index()));
        }
    }

    #[test]
    fn test_parse_scale_names() {
        assert_eq!("Dorian".parse::<ScaleKind>().unwrap(), ScaleKind::Dorian);
        assert_eq!("aeolian".parse::<ScaleKind>().unwrap(), ScaleKind::NaturalMinor);
        assert_eq!("melodic-minor".parse::<ScaleKind>().unwrap(), ScaleKind::MelodicMinor);
        assert!("blues".parse::<ScaleKind>().is_err());
    }
}
