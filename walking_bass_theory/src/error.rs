// Error type for the theory layer.
//
// Every failure here is a malformed-input failure: a bad note name, an
// unregistered chord suffix, an interval that does not exist, or a pitch
// outside the 8-octave range. None of them are recoverable locally; they
// propagate to whoever asked for the computation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// Chord notation or note name was the empty string.
    #[error("empty note or chord notation")]
    EmptyNotation,

    /// The first character is not one of the seven natural letters.
    #[error("unknown note name `{0}`")]
    UnknownNoteName(String),

    /// More than a double sharp or double flat.
    #[error("too many sharps or flats in `{0}` (at most two are allowed)")]
    TooManyAccidentals(String),

    /// The chord suffix is not in the quality catalog.
    #[error("unknown chord quality `{quality}` in `{notation}`")]
    UnknownQuality { notation: String, quality: String },

    /// Pitch index outside [0, 96].
    #[error("pitch index {0} is out of range (0..=96)")]
    PitchOutOfRange(i32),

    /// The (type, quality) pair is not a valid interval.
    #[error("invalid interval: type {number} cannot be {quality}")]
    InvalidInterval { number: u8, quality: &'static str },

    /// Interval short name (e.g. `M3`) could not be parsed.
    #[error("cannot parse interval `{0}` (expected e.g. P5, M3, m7, A4, d5)")]
    UnknownInterval(String),

    /// A semitone class is too far from the requested letter to be spelled
    /// with at most two accidentals.
    #[error("cannot spell semitone class {class} on letter {letter} with at most two accidentals")]
    SpellingOutOfRange { class: u8, letter: char },

    /// Scale name not in the catalog.
    #[error("unknown scale `{0}`")]
    UnknownScale(String),
}
