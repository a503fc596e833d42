// ABC notation output from note sequences.
//
// Renders a walking-bass line as an ABC tune (bass clef, 4/4, unit length
// a quarter note) that any ABC engraver can typeset. Works like a small
// version of a LilyPond writer: walk the notes, split anything that crosses
// a barline into tied fragments, decompose each fragment into notatable
// lengths, and serialize.
//
// Accidentals follow the usual engraving rule without a key signature: an
// accidental holds for the rest of the bar on that letter, so it is printed
// only when it changes (with `=` to cancel back to natural), and the state
// resets at every barline.

use crate::note::{BAR_LENGTH, Note, Sound};
use std::path::Path;
use walking_bass_theory::Pitch;

/// Bars per line of ABC output.
pub const BARS_PER_LINE: usize = 4;

/// Notatable lengths, in eighth notes, with their ABC suffix for `L:1/4`.
const DURATION_TABLE: [(u32, &str); 6] = [
    (8, "4"),   // whole
    (6, "3"),   // dotted half
    (4, "2"),   // half
    (3, "3/2"), // dotted quarter
    (2, ""),    // quarter
    (1, "/2"),  // eighth
];

/// Decompose a length in eighth notes into ABC length suffixes, largest
/// first. The parts are meant to be tied together.
pub fn decompose_duration(mut eighths: u32) -> Vec<&'static str> {
    let mut parts = Vec::new();
    for &(value, suffix) in &DURATION_TABLE {
        while eighths >= value {
            parts.push(suffix);
            eighths -= value;
        }
    }
    parts
}

/// Split a note starting at `start` (eighths from the top of the piece) into
/// fragments that each fit inside one bar.
pub fn split_at_barlines(start: u32, duration: u32) -> Vec<u32> {
    let mut fragments = Vec::new();
    let mut remaining = duration;
    let mut pos = start;
    while remaining > 0 {
        let room = BAR_LENGTH - pos % BAR_LENGTH;
        let fragment = remaining.min(room);
        fragments.push(fragment);
        remaining -= fragment;
        pos += fragment;
    }
    fragments
}

/// Letter plus octave marks, without accidentals: `C` is octave 4, `c`
/// octave 5, and each `,` or `'` moves one octave further.
pub fn abc_pitch_name(pitch: Pitch) -> String {
    let letter = pitch.spelling().letter().as_char();
    let octave = pitch.octave();
    if octave >= 5 {
        let mut name = letter.to_ascii_lowercase().to_string();
        name.push_str(&"'".repeat((octave - 5) as usize));
        name
    } else {
        let mut name = letter.to_string();
        name.push_str(&",".repeat((4 - octave).max(0) as usize));
        name
    }
}

fn accidental_mark(alteration: i8) -> &'static str {
    match alteration {
        2 => "^^",
        1 => "^",
        0 => "=",
        -1 => "_",
        _ => "__",
    }
}

/// Accidentals currently in force, one slot per letter.
#[derive(Debug, Default)]
struct BarAccidentals([i8; 7]);

impl BarAccidentals {
    fn reset(&mut self) {
        self.0 = [0; 7];
    }

    /// The pitch as ABC text, printing an accidental only when it differs
    /// from what the bar already has on that letter.
    fn render(&mut self, pitch: Pitch) -> String {
        let spelling = pitch.spelling();
        let slot = &mut self.0[spelling.letter().index()];
        let mut out = String::new();
        if *slot != spelling.alteration() {
            out.push_str(accidental_mark(spelling.alteration()));
            *slot = spelling.alteration();
        }
        out.push_str(&abc_pitch_name(pitch));
        out
    }
}

/// Render the bar-separated music body of the tune.
pub fn render_body(notes: &[Note]) -> String {
    let mut bars: Vec<String> = Vec::new();
    let mut tokens: Vec<String> = Vec::new();
    let mut accidentals = BarAccidentals::default();
    let mut position = 0;

    for note in notes {
        let fragments = split_at_barlines(position, note.duration);
        for (i, &fragment) in fragments.iter().enumerate() {
            let parts = decompose_duration(fragment);
            for (j, suffix) in parts.iter().enumerate() {
                let mut token = String::new();
                if i == 0 && j == 0 {
                    if let Some(label) = &note.label {
                        token.push_str(&format!("\"{}\"", label.replace('"', "'")));
                    }
                }
                match &note.sound {
                    Sound::Rest => token.push('z'),
                    Sound::Single(pitch) => token.push_str(&accidentals.render(*pitch)),
                    Sound::Stack(pitches) => {
                        token.push('[');
                        for pitch in pitches {
                            token.push_str(&accidentals.render(*pitch));
                        }
                        token.push(']');
                    }
                }
                token.push_str(suffix);
                let more = j + 1 < parts.len() || i + 1 < fragments.len();
                if more && !note.sound.is_rest() {
                    token.push('-');
                }
                tokens.push(token);
            }

            position += fragment;
            if position % BAR_LENGTH == 0 {
                bars.push(tokens.join(" "));
                tokens.clear();
                accidentals.reset();
            }
        }
    }
    if !tokens.is_empty() {
        bars.push(tokens.join(" "));
    }

    let lines: Vec<String> = bars
        .chunks(BARS_PER_LINE)
        .map(|line| line.join(" | "))
        .collect();
    if lines.is_empty() {
        return "|]".to_string();
    }
    let mut body = lines.join(" |\n");
    body.push_str(" |]");
    body
}

/// A complete ABC tune: header plus body.
pub fn notes_to_abc(notes: &[Note], title: &str, tempo_bpm: Option<u16>) -> String {
    let mut abc = String::new();
    abc.push_str("X:1\n");
    abc.push_str(&format!("T:{title}\n"));
    abc.push_str("M:4/4\n");
    abc.push_str("L:1/4\n");
    if let Some(bpm) = tempo_bpm {
        abc.push_str(&format!("Q:1/4={bpm}\n"));
    }
    abc.push_str("K:C clef=bass\n");
    abc.push_str(&render_body(notes));
    abc.push('\n');
    abc
}

/// Write an ABC file.
pub fn write_abc(
    notes: &[Note],
    title: &str,
    tempo_bpm: Option<u16>,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, notes_to_abc(notes, title, tempo_bpm))?;
    Ok(())
}
