// Walking Bass music-theory engine
//
// Pitch and interval arithmetic with correct enharmonic spelling, plus the
// chord and scale catalogs and the chord-symbol parser built on top of it.
// The walking-bass generator (the `walking_bass` crate) consumes this crate;
// nothing here is random or does I/O.
//
// Architecture:
// - pitch.rs: Letters, spellings, name resolution, absolute pitches (0 = C0 .. 96 = C8)
// - interval.rs: Interval taxonomy, semitone/letter arithmetic, tonal distance
// - chord.rs: Chord-quality suffix catalog and chord-tone expansion
// - scale.rs: Heptatonic scale formulas (major/minor family and modes)
// - notation.rs: Chord-symbol parsing/rendering, `%` repeats, transposition
// - error.rs: TheoryError, the single failure type of this crate

pub mod chord;
pub mod error;
pub mod interval;
pub mod notation;
pub mod pitch;
pub mod scale;

pub use chord::{ChordQuality, chord_tones};
pub use error::TheoryError;
pub use interval::{
    Direction, Interval, Quality, interval_note, semitones_for_interval_type, tonal_distance,
    voiced_interval_note,
};
pub use notation::{ChordNotation, ChordSymbol, Transposition};
pub use pitch::{Letter, Pitch, Spelling, find_enharmonic_spelling, resolve_enharmony};
pub use scale::{ScaleKind, scale_notes};
