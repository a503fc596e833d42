// Walking Bass Generator: CLI entry point.
//
// Walks a chord progression (a catalog song or changes given inline) and
// writes the bass line as ABC notation, JSON or MIDI. Also exposes the
// theory engine for quick lookups of chord tones and scales.
//
// Usage:
//   cargo run -p walking_bass -- walk --song "All of Me" [--variant wandering]
//     [--transpose P4 [--down] | --key Eb] [--seed N] [--format abc|json|midi]
//     [--output PATH] [--tempo BPM] [--songs FILE]
//   cargo run -p walking_bass -- walk --changes "D-7 G7 Cmaj7 %"
//   cargo run -p walking_bass -- chord Bb-7
//   cargo run -p walking_bass -- scale Eb dorian
//   cargo run -p walking_bass -- songs
//
// Logging goes through env_logger; set RUST_LOG=debug to see per-bar
// decisions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use walking_bass::abc::{notes_to_abc, write_abc};
use walking_bass::midi::write_midi;
use walking_bass::note::Note;
use walking_bass::progression::parse_progression;
use walking_bass::songs::SongCatalog;
use walking_bass::walker::Variant;
use walking_bass_theory::{
    ChordNotation, ChordSymbol, Direction, Interval, ScaleKind, Spelling, Transposition,
    scale_notes,
};

#[derive(Parser)]
#[command(name = "generate")]
#[command(author, version, about = "Walking-bass line generator for jazz chord progressions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a walking-bass line
    Walk(WalkArgs),
    /// Print the tones of a chord symbol
    Chord {
        symbol: ChordSymbol,
        /// Octave of the root
        #[arg(long, default_value_t = 3)]
        octave: i32,
    },
    /// Print the notes of a scale
    Scale {
        root: Spelling,
        /// major, minor, harmonic-minor, melodic-minor, dorian, phrygian,
        /// lydian, mixolydian or locrian
        kind: ScaleKind,
        #[arg(long, default_value_t = 3)]
        octave: i32,
    },
    /// List the songs in the catalog
    Songs {
        /// Song catalog JSON file (default: built-in catalog)
        #[arg(long)]
        songs: Option<PathBuf>,
    },
}

#[derive(Args)]
struct WalkArgs {
    /// Song from the catalog
    #[arg(long, conflicts_with = "changes", required_unless_present = "changes")]
    song: Option<String>,

    /// Inline progression, one chord per bar, e.g. "C7 | F7 | % | C7"
    #[arg(long)]
    changes: Option<String>,

    /// arpeggio, guide-tones or wandering
    #[arg(long, default_value_t = Variant::Wandering)]
    variant: Variant,

    /// Double guide tones in every octave of the bass register
    #[arg(long)]
    octave_doubling: bool,

    /// Transpose by an interval (P4, m3, M2, ...)
    #[arg(long, conflicts_with = "key")]
    transpose: Option<Interval>,

    /// Transpose downward instead of upward
    #[arg(long, requires = "transpose")]
    down: bool,

    /// Transpose a catalog song into this key
    #[arg(long, requires = "song")]
    key: Option<Spelling>,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Abc)]
    format: OutputFormat,

    /// Output file (default: stdout for abc/json, walking_bass.mid for midi)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tempo in BPM
    #[arg(long, default_value_t = 120)]
    tempo: u16,

    /// Song catalog JSON file (default: built-in catalog)
    #[arg(long)]
    songs: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Abc,
    Json,
    Midi,
}

fn load_catalog(path: Option<&Path>) -> Result<SongCatalog, walking_bass::WalkError> {
    match path {
        Some(path) => SongCatalog::load(path),
        None => SongCatalog::builtin(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Walk(args) => walk(args),
        Command::Chord { symbol, octave } => {
            let tones: Vec<String> = symbol.tones(octave)?.iter().map(|p| p.to_string()).collect();
            println!("{symbol}: {}", tones.join(" "));
            Ok(())
        }
        Command::Scale { root, kind, octave } => {
            let tonic = walking_bass_theory::Pitch::in_octave(root, octave)?;
            let notes: Vec<String> = scale_notes(tonic, kind)?
                .iter()
                .map(|p| p.to_string())
                .collect();
            println!("{root} {}: {}", kind.name(), notes.join(" "));
            Ok(())
        }
        Command::Songs { songs } => {
            let catalog = load_catalog(songs.as_deref())?;
            for song in &catalog.songs {
                println!("{} ({}, {} bars)", song.name, song.key, song.changes.len());
            }
            Ok(())
        }
    }
}

fn walk(args: WalkArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (title, entries, transposition): (String, Vec<ChordNotation>, Transposition) =
        match (&args.song, &args.changes) {
            (Some(name), _) => {
                let catalog = load_catalog(args.songs.as_deref())?;
                let song = catalog.find(name)?;
                let transposition = match args.key {
                    Some(key) => song.transposition_to(key)?,
                    None => Transposition::default(),
                };
                (song.name.clone(), song.progression()?, transposition)
            }
            (None, Some(changes)) => (
                "Walking Bass".to_string(),
                parse_progression(changes)?,
                Transposition::default(),
            ),
            (None, None) => return Err("either --song or --changes is required".into()),
        };

    let transposition = match args.transpose {
        Some(interval) => {
            let direction = if args.down { Direction::Down } else { Direction::Up };
            Transposition::new(interval, direction)
        }
        None => transposition,
    };

    info!(
        "Walking \"{title}\": {} bars, {} variant, transposition {} {:?}",
        entries.len(),
        args.variant,
        transposition.interval,
        transposition.direction
    );

    let mut rng = if let Some(seed) = args.seed {
        info!("Seed: {seed}");
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_os_rng()
    };

    let notes: Vec<Note> = args
        .variant
        .walk(&entries, transposition, args.octave_doubling, &mut rng)?;

    match args.format {
        OutputFormat::Abc => match &args.output {
            Some(path) => {
                write_abc(&notes, &title, Some(args.tempo), path)?;
                info!("Wrote ABC to {}", path.display());
            }
            None => print!("{}", notes_to_abc(&notes, &title, Some(args.tempo))),
        },
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&notes)?;
            match &args.output {
                Some(path) => {
                    std::fs::write(path, json)?;
                    info!("Wrote JSON to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
        OutputFormat::Midi => {
            let path = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from("walking_bass.mid"));
            write_midi(&notes, args.tempo, &path)?;
            info!("Wrote MIDI to {}", path.display());
        }
    }
    Ok(())
}
