// Walking Bass Generator
//
// Generates walking-bass lines for jazz chord progressions. Chord symbols
// are parsed and spelled by the `walking_bass_theory` crate; this crate
// turns a progression into one bar of four quarter notes per chord and
// writes the result as ABC notation, MIDI or JSON.
//
// Architecture:
// - progression.rs: Progression parsing and the upfront `%`-repeat /
//   transposition expansion pass
// - walker.rs: Register windows, the BassPolicy trait and its three
//   policies (static arpeggio, guide tones, wandering), and the walk loop
// - note.rs: Output note events (pitch / stack / rest, duration, label)
// - abc.rs: ABC notation output (accidental carry, ties, line wrapping)
// - midi.rs: MIDI file output
// - songs.rs: Built-in and user-supplied song catalogs (JSON)
// - error.rs: WalkError
//
// All randomness goes through a caller-supplied `rand::Rng`, so a walk is
// deterministic given a seed.

pub mod abc;
pub mod error;
pub mod midi;
pub mod note;
pub mod progression;
pub mod songs;
pub mod walker;

pub use error::WalkError;
