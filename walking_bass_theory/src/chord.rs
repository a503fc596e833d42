// Chord-quality catalog.
//
// A chord quality is the suffix written after the root in a chord symbol
// (`-7`, `maj7`, `ø`, ...). Each one maps to a fixed formula of intervals
// from the root: three for triads, four for tetrads. The table is static
// and is the single source of truth for which suffixes the parser accepts.

use crate::error::TheoryError;
use crate::interval::{Direction, Interval, voiced_interval_note};
use crate::pitch::Pitch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Major7,
    Sixth,
    Dominant7,
    Minor7,
    MinorMajor7,
    HalfDiminished,
    Diminished7,
    Dominant7Sus2,
    Dominant7Sus4,
}

/// Suffix table, in the order the catalog lists them.
const QUALITY_SUFFIXES: [(&str, ChordQuality); 15] = [
    ("", ChordQuality::Major),
    ("-", ChordQuality::Minor),
    ("dim", ChordQuality::Diminished),
    ("aug", ChordQuality::Augmented),
    ("sus2", ChordQuality::Sus2),
    ("sus4", ChordQuality::Sus4),
    ("maj7", ChordQuality::Major7),
    ("6", ChordQuality::Sixth),
    ("7", ChordQuality::Dominant7),
    ("-7", ChordQuality::Minor7),
    ("-maj7", ChordQuality::MinorMajor7),
    ("ø", ChordQuality::HalfDiminished),
    ("dim7", ChordQuality::Diminished7),
    ("7sus2", ChordQuality::Dominant7Sus2),
    ("7sus4", ChordQuality::Dominant7Sus4),
];

const MAJOR_TRIAD: [Interval; 3] = [
    Interval::PERFECT_UNISON,
    Interval::MAJOR_THIRD,
    Interval::PERFECT_FIFTH,
];
const MINOR_TRIAD: [Interval; 3] = [
    Interval::PERFECT_UNISON,
    Interval::MINOR_THIRD,
    Interval::PERFECT_FIFTH,
];
const DIMINISHED_TRIAD: [Interval; 3] = [
    Interval::PERFECT_UNISON,
    Interval::MINOR_THIRD,
    Interval::DIMINISHED_FIFTH,
];
const AUGMENTED_TRIAD: [Interval; 3] = [
    Interval::PERFECT_UNISON,
    Interval::MAJOR_THIRD,
    Interval::AUGMENTED_FIFTH,
];
const SUS2_TRIAD: [Interval; 3] = [
    Interval::PERFECT_UNISON,
    Interval::MAJOR_SECOND,
    Interval::PERFECT_FIFTH,
];
const SUS4_TRIAD: [Interval; 3] = [
    Interval::PERFECT_UNISON,
    Interval::PERFECT_FOURTH,
    Interval::PERFECT_FIFTH,
];
const MAJOR7: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MAJOR_THIRD,
    Interval::PERFECT_FIFTH,
    Interval::MAJOR_SEVENTH,
];
const SIXTH: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MAJOR_THIRD,
    Interval::PERFECT_FIFTH,
    Interval::MAJOR_SIXTH,
];
const DOMINANT7: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MAJOR_THIRD,
    Interval::PERFECT_FIFTH,
    Interval::MINOR_SEVENTH,
];
const MINOR7: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MINOR_THIRD,
    Interval::PERFECT_FIFTH,
    Interval::MINOR_SEVENTH,
];
const MINOR_MAJOR7: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MINOR_THIRD,
    Interval::PERFECT_FIFTH,
    Interval::MAJOR_SEVENTH,
];
const HALF_DIMINISHED: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MINOR_THIRD,
    Interval::DIMINISHED_FIFTH,
    Interval::MINOR_SEVENTH,
];
const DIMINISHED7: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MINOR_THIRD,
    Interval::DIMINISHED_FIFTH,
    Interval::DIMINISHED_SEVENTH,
];
const DOMINANT7_SUS2: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MAJOR_SECOND,
    Interval::PERFECT_FIFTH,
    Interval::MINOR_SEVENTH,
];
const DOMINANT7_SUS4: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::PERFECT_FOURTH,
    Interval::PERFECT_FIFTH,
    Interval::MINOR_SEVENTH,
];

impl ChordQuality {
    /// Look up a suffix. Matching is exact and case-sensitive.
    pub fn from_suffix(suffix: &str) -> Option<ChordQuality> {
        QUALITY_SUFFIXES
            .iter()
            .find(|(s, _)| *s == suffix)
            .map(|&(_, quality)| quality)
    }

    pub fn suffix(self) -> &'static str {
        QUALITY_SUFFIXES
            .iter()
            .find(|(_, q)| *q == self)
            .map(|&(s, _)| s)
            .unwrap_or_default()
    }

    /// Every registered quality, in catalog order.
    pub fn all() -> impl Iterator<Item = ChordQuality> {
        QUALITY_SUFFIXES.iter().map(|&(_, quality)| quality)
    }

    /// Intervals from the root, root first.
    pub fn formula(self) -> &'static [Interval] {
        match self {
            ChordQuality::Major => &MAJOR_TRIAD,
            ChordQuality::Minor => &MINOR_TRIAD,
            ChordQuality::Diminished => &DIMINISHED_TRIAD,
            ChordQuality::Augmented => &AUGMENTED_TRIAD,
            ChordQuality::Sus2 => &SUS2_TRIAD,
            ChordQuality::Sus4 => &SUS4_TRIAD,
            ChordQuality::Major7 => &MAJOR7,
            ChordQuality::Sixth => &SIXTH,
            ChordQuality::Dominant7 => &DOMINANT7,
            ChordQuality::Minor7 => &MINOR7,
            ChordQuality::MinorMajor7 => &MINOR_MAJOR7,
            ChordQuality::HalfDiminished => &HALF_DIMINISHED,
            ChordQuality::Diminished7 => &DIMINISHED7,
            ChordQuality::Dominant7Sus2 => &DOMINANT7_SUS2,
            ChordQuality::Dominant7Sus4 => &DOMINANT7_SUS4,
        }
    }

    pub fn is_triad(self) -> bool {
        self.formula().len() == 3
    }
}

/// Chord tones of `quality` built on `root`, stacked upward from the root.
pub fn chord_tones(root: Pitch, quality: ChordQuality) -> Result<Vec<Pitch>, TheoryError> {
    quality
        .formula()
        .iter()
        .map(|&interval| voiced_interval_note(root, interval, Direction::Up))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tones: &[Pitch]) -> Vec<String> {
        tones.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_suffix_roundtrip() {
        for quality in ChordQuality::all() {
            assert_eq!(ChordQuality::from_suffix(quality.suffix()), Some(quality));
        }
        assert_eq!(ChordQuality::all().count(), 15);
    }

    #[test]
    fn test_suffix_match_is_exact() {
        assert_eq!(ChordQuality::from_suffix("m7"), None);
        assert_eq!(ChordQuality::from_suffix("MAJ7"), None);
        assert_eq!(ChordQuality::from_suffix("-7 "), None);
        assert_eq!(ChordQuality::from_suffix("ø"), Some(ChordQuality::HalfDiminished));
    }

    #[test]
    fn test_triads_and_tetrads() {
        let c = Pitch::from_name("C", 3).unwrap();
        assert_eq!(chord_tones(c, ChordQuality::Minor).unwrap().len(), 3);
        assert_eq!(chord_tones(c, ChordQuality::Minor7).unwrap().len(), 4);
        assert!(ChordQuality::Sus4.is_triad());
        assert!(!ChordQuality::Sixth.is_triad());
    }

    #[test]
    fn test_dominant_seventh_tones() {
        let c = Pitch::from_name("C", 3).unwrap();
        let tones = chord_tones(c, ChordQuality::Dominant7).unwrap();
        assert_eq!(names(&tones), ["C3", "E3", "G3", "Bb3"]);
    }

    #[test]
    fn test_tones_stack_upward_across_c() {
        let a = Pitch::from_name("A", 2).unwrap();
        let tones = chord_tones(a, ChordQuality::Dominant7).unwrap();
        assert_eq!(names(&tones), ["A2", "C#3", "E3", "G3"]);
        assert!(tones.windows(2).all(|w| w[0].index() < w[1].index()));
    }

    #[test]
    fn test_enharmonic_chord_spelling() {
        let root = Pitch::from_name("Eb", 3).unwrap();
        let tones = chord_tones(root, ChordQuality::HalfDiminished).unwrap();
        assert_eq!(names(&tones), ["Eb3", "Gb3", "Bbb3", "Db4"]);

        let root = Pitch::from_name("B", 2).unwrap();
        let tones = chord_tones(root, ChordQuality::Diminished7).unwrap();
        assert_eq!(names(&tones), ["B2", "D3", "F3", "Ab3"]);

        let root = Pitch::from_name("F#", 2).unwrap();
        let tones = chord_tones(root, ChordQuality::Augmented).unwrap();
        assert_eq!(names(&tones), ["F#2", "A#2", "C##3"]);
    }
}
