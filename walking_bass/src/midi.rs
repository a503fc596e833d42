// MIDI output from note sequences.
//
// Writes a Standard MIDI File (format 1) with a tempo track and a single
// acoustic-bass track. Note durations are eighth notes, so each one maps to
// a fixed tick count; stacked pitches start and stop together, rests only
// advance time.
//
// Uses the `midly` crate for MIDI writing.

use crate::note::Note;
use log::debug;
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;
use walking_bass_theory::Pitch;

/// Ticks per quarter note in MIDI output.
const TICKS_PER_QUARTER: u16 = 480;

/// Ticks per eighth note (half a quarter note).
const TICKS_PER_EIGHTH: u32 = TICKS_PER_QUARTER as u32 / 2;

/// General MIDI acoustic bass.
const ACOUSTIC_BASS: u8 = 32;

const BASS_CHANNEL: u8 = 0;
const VELOCITY: u8 = 90;

/// Pitch index 0 is C0, which is MIDI key 12.
pub fn midi_key(pitch: Pitch) -> u8 {
    pitch.index() + 12
}

/// Convert notes to MIDI and write to a file.
pub fn write_midi(
    notes: &[Note],
    tempo_bpm: u16,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let smf = notes_to_smf(notes, tempo_bpm);
    let mut buf = Vec::new();
    smf.write(&mut buf)?;
    std::fs::write(path, &buf)?;
    debug!("wrote {} bytes of MIDI to {}", buf.len(), path.display());
    Ok(())
}

fn event(delta: u32, kind: TrackEventKind<'static>) -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(delta),
        kind,
    }
}

fn channel_event(delta: u32, message: MidiMessage) -> TrackEvent<'static> {
    event(
        delta,
        TrackEventKind::Midi {
            channel: u4::new(BASS_CHANNEL),
            message,
        },
    )
}

/// Convert notes to an in-memory SMF.
pub fn notes_to_smf(notes: &[Note], tempo_bpm: u16) -> Smf<'static> {
    let mut smf = Smf::new(Header::new(
        Format::Parallel,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));

    // Track 0: tempo
    let tempo_microseconds = 60_000_000 / tempo_bpm.max(1) as u32;
    smf.tracks.push(vec![
        event(0, TrackEventKind::Meta(MetaMessage::Tempo(u24::new(tempo_microseconds)))),
        event(0, TrackEventKind::Meta(MetaMessage::EndOfTrack)),
    ]);

    // Track 1: bass
    let mut track: Track<'static> = vec![
        event(0, TrackEventKind::Meta(MetaMessage::TrackName(b"Bass"))),
        channel_event(
            0,
            MidiMessage::ProgramChange {
                program: u7::new(ACOUSTIC_BASS),
            },
        ),
    ];

    // Ticks since the last event written.
    let mut pending: u32 = 0;
    for note in notes {
        let length = note.duration * TICKS_PER_EIGHTH;
        let keys: Vec<u8> = note.sound.pitches().iter().map(|&p| midi_key(p)).collect();
        if keys.is_empty() {
            pending += length;
            continue;
        }
        for (i, &key) in keys.iter().enumerate() {
            let delta = if i == 0 { pending } else { 0 };
            track.push(channel_event(
                delta,
                MidiMessage::NoteOn {
                    key: u7::new(key),
                    vel: u7::new(VELOCITY),
                },
            ));
        }
        for (i, &key) in keys.iter().enumerate() {
            let delta = if i == 0 { length } else { 0 };
            track.push(channel_event(
                delta,
                MidiMessage::NoteOff {
                    key: u7::new(key),
                    vel: u7::new(0),
                },
            ));
        }
        pending = 0;
    }

    track.push(event(pending, TrackEventKind::Meta(MetaMessage::EndOfTrack)));
    smf.tracks.push(track);
    smf
}
