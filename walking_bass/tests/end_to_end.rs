// End-to-end walks: progression text in, labelled bass line and ABC out.

use rand::SeedableRng;
use rand::rngs::StdRng;
use walking_bass::WalkError;
use walking_bass::abc::notes_to_abc;
use walking_bass::midi::notes_to_smf;
use walking_bass::note::{QUARTER, Sound};
use walking_bass::progression::parse_progression;
use walking_bass::songs::SongCatalog;
use walking_bass::walker::{BEATS_PER_BAR, Variant, Wandering, WalkingBassGenerator};
use walking_bass_theory::{Direction, Interval, Spelling, Transposition};

fn labels(notes: &[walking_bass::note::Note]) -> Vec<Option<&str>> {
    notes
        .chunks(BEATS_PER_BAR)
        .map(|bar| bar[0].label.as_deref())
        .collect()
}

#[test]
fn test_walk_relabels_each_change() {
    let entries = parse_progression("C7 F7 C7").unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let notes = WalkingBassGenerator::new(Wandering)
        .walk(&entries, &mut rng)
        .unwrap();

    assert_eq!(notes.len(), 12);
    assert!(notes.iter().all(|n| n.duration == QUARTER));
    assert_eq!(labels(&notes), [Some("C7"), Some("F7"), Some("C7")]);
    // Only the first note of a bar carries a label.
    assert!(
        notes
            .chunks(BEATS_PER_BAR)
            .all(|bar| bar[1..].iter().all(|n| n.label.is_none()))
    );
}

#[test]
fn test_repeat_bar_has_no_label() {
    let entries = parse_progression("C7 %").unwrap();
    for variant in Variant::ALL {
        let mut rng = StdRng::seed_from_u64(1);
        let notes = variant
            .walk(&entries, Transposition::default(), false, &mut rng)
            .unwrap();
        assert_eq!(notes.len(), 8, "{variant}");
        assert_eq!(labels(&notes), [Some("C7"), None], "{variant}");
    }
}

#[test]
fn test_leading_repeat_is_fatal() {
    let entries = parse_progression("% C7").unwrap();
    for variant in Variant::ALL {
        let mut rng = StdRng::seed_from_u64(1);
        let result = variant.walk(&entries, Transposition::default(), false, &mut rng);
        assert!(matches!(result, Err(WalkError::LeadingRepeat)), "{variant}");
    }
}

#[test]
fn test_malformed_symbol_is_fatal() {
    assert!(matches!(
        parse_progression("C7 Fmin7 C7"),
        Err(WalkError::Theory(_))
    ));
}

#[test]
fn test_guide_tones_silence_beat_three() {
    let catalog = SongCatalog::builtin().unwrap();
    let song = catalog.find("Beautiful Love").unwrap();
    let entries = song.progression().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let notes = Variant::GuideTones
        .walk(&entries, Transposition::default(), false, &mut rng)
        .unwrap();

    assert_eq!(notes.len(), song.changes.len() * BEATS_PER_BAR);
    for bar in notes.chunks(BEATS_PER_BAR) {
        assert!(bar[2].sound.is_rest());
        assert!(!bar[0].sound.is_rest());
        assert_eq!(bar[0].sound, bar[1].sound);
        assert_eq!(bar[0].sound, bar[3].sound);
    }
    // Eø: the 3rd G and the 7th D.
    let names: Vec<String> = notes[0].sound.pitches().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["G", "D"]);
}

#[test]
fn test_every_song_walks_with_every_variant() {
    let catalog = SongCatalog::builtin().unwrap();
    for song in &catalog.songs {
        let entries = song.progression().unwrap();
        for variant in Variant::ALL {
            let mut rng = StdRng::seed_from_u64(99);
            let notes = variant
                .walk(&entries, Transposition::default(), true, &mut rng)
                .unwrap();
            assert_eq!(notes.len(), entries.len() * BEATS_PER_BAR, "{} {variant}", song.name);

            let abc = notes_to_abc(&notes, &song.name, Some(120));
            assert!(abc.trim_end().ends_with("|]"));
            let smf = notes_to_smf(&notes, 120);
            assert_eq!(smf.tracks.len(), 2);
        }
    }
}

#[test]
fn test_every_song_walks_in_every_key() {
    let catalog = SongCatalog::builtin().unwrap();
    let keys = ["C", "G", "D", "A", "E", "B", "F#", "Gb", "Db", "Ab", "Eb", "Bb", "F"];
    for song in &catalog.songs {
        let entries = song.progression().unwrap();
        for key in keys {
            let key: Spelling = key.parse().unwrap();
            let transposition = song.transposition_to(key).unwrap();
            for variant in Variant::ALL {
                for seed in 0..4 {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let notes = variant
                        .walk(&entries, transposition, true, &mut rng)
                        .unwrap_or_else(|e| panic!("{} in {key}, {variant}: {e}", song.name));
                    assert_eq!(notes.len(), entries.len() * BEATS_PER_BAR);
                    for pitch in notes.iter().flat_map(|n| n.sound.pitches()) {
                        assert!(
                            (24..=60).contains(&pitch.index()),
                            "{} in {key}, {variant}: {pitch} left the bass register",
                            song.name
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_seeded_walk_is_reproducible() {
    let catalog = SongCatalog::builtin().unwrap();
    let entries = catalog.find("All of Me").unwrap().progression().unwrap();
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        Variant::Arpeggio
            .walk(&entries, Transposition::default(), false, &mut rng)
            .unwrap()
    };
    assert_eq!(run(5), run(5));
}

#[test]
fn test_transposed_walk_labels() {
    let entries = parse_progression("D-7 G7 Cmaj7 %").unwrap();
    let down_second = Transposition::new(Interval::MAJOR_SECOND, Direction::Down);
    let mut rng = StdRng::seed_from_u64(2);
    let notes = Variant::Arpeggio
        .walk(&entries, down_second, false, &mut rng)
        .unwrap();
    assert_eq!(labels(&notes), [Some("C-7"), Some("F7"), Some("Bbmaj7"), None]);

    let first = notes[0].pitch().unwrap();
    assert_eq!(first.to_string(), "C3");
    assert!(matches!(notes[8].sound, Sound::Single(p) if p.name() == "Bb"));
}
