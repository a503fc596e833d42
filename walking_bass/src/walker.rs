// Walking-bass generation.
//
// A walk turns a resolved progression (see progression.rs) into four
// quarter-note slots per bar. The bar-by-bar loop is shared; what goes into
// each bar is decided by a `BassPolicy`:
//
// - StaticArpeggio: root, 3rd, 5th, 7th ascending from a low register
// - GuideTones: 3rd and 7th struck on beats 1, 2 and 4, beat 3 silent
// - Wandering: chord tones that keep the line in range and aim beat 4 at
//   the next chord's root, with a chromatic approach when the 5th would
//   otherwise lead into it
//
// Policies are pure functions of (bar, previous state, rng). The loop owns
// the state, so one generator can walk any number of progressions and
// walks never share anything.
//
// Register windows are pitch indices (0 = C0): E2 = 28, C3 = 36, B3 = 47,
// F4 = 53.

use crate::error::WalkError;
use crate::note::{Note, Sound};
use crate::progression::{ResolvedBar, expand_progression};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use walking_bass_theory::notation::DEFAULT_ROOT_OCTAVE;
use walking_bass_theory::{
    ChordNotation, ChordSymbol, Direction, Pitch, Spelling, TheoryError, Transposition,
    chord_tones, tonal_distance,
};

/// Slots per bar (four quarter notes of 4/4).
pub const BEATS_PER_BAR: usize = 4;

/// An inclusive playable register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub low: u8,
    pub high: u8,
}

impl Window {
    pub const fn new(low: u8, high: u8) -> Self {
        Window { low, high }
    }

    pub fn contains(&self, pitch: Pitch) -> bool {
        (self.low..=self.high).contains(&pitch.index())
    }

    /// Width of the window in semitones.
    pub fn span(&self) -> u8 {
        self.high - self.low
    }

    /// Place `spelling` into the window, starting from octave 4.
    ///
    /// A pitch above the top moves down by one octave per full octave it
    /// sits above the floor; a pitch below the floor moves up past it.
    pub fn anchor(&self, spelling: Spelling) -> Result<Pitch, TheoryError> {
        let pitch = Pitch::in_octave(spelling, DEFAULT_ROOT_OCTAVE)?;
        if self.contains(pitch) {
            return Ok(pitch);
        }
        let index = pitch.index() as i32;
        let (low, high) = (self.low as i32, self.high as i32);
        let octave = if index > high {
            pitch.octave() - (index - low) / 12
        } else {
            pitch.octave() + (low - index) / 12 + 1
        };
        Pitch::in_octave(spelling, octave)
    }
}

pub const ARPEGGIO_WINDOW: Window = Window::new(28, 47);
pub const GUIDE_TONE_WINDOW: Window = Window::new(36, 47);
pub const DOUBLING_WINDOW: Window = Window::new(28, 53);
pub const WANDERING_WINDOW: Window = Window::new(28, 53);

/// Place `spelling` where it continues most smoothly from `previous`: the
/// nearest sounding occurrence of its class, up or down. The written octave
/// follows from the index, so Cb after B3 is Cb4 and B# after C4 is B#3.
pub fn anchor_near(spelling: Spelling, previous: Pitch) -> Result<Pitch, TheoryError> {
    let distance = tonal_distance(previous.class(), spelling.class()) as i32;
    Pitch::with_spelling(previous.index() as i32 + distance, spelling)
}

/// Give a triad a fourth beat: the root an octave up or the 3rd again,
/// with equal probability. Tetrads are left alone.
pub fn pad_triad(tones: &mut Vec<Pitch>, rng: &mut impl Rng) -> Result<(), TheoryError> {
    if tones.len() != 3 {
        return Ok(());
    }
    let fourth = if rng.random_bool(0.5) {
        tones[0].shifted_octaves(1)?
    } else {
        tones[1]
    };
    tones.push(fourth);
    Ok(())
}

/// What a policy sees of the progression while arranging one bar.
#[derive(Debug, Clone, Copy)]
pub struct BarContext<'a> {
    pub bar: &'a ResolvedBar,
    pub next: Option<&'a ResolvedBar>,
}

/// State carried from one bar to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkState {
    pub previous_chord: Option<ChordSymbol>,
    pub previous_direction: Direction,
    pub previous_fourth_beat: Option<Pitch>,
}

impl Default for WalkState {
    fn default() -> Self {
        // A walk starts as if the line had been descending, so the first
        // bar is free to climb.
        WalkState {
            previous_chord: None,
            previous_direction: Direction::Down,
            previous_fourth_beat: None,
        }
    }
}

/// A per-bar note-selection strategy.
pub trait BassPolicy {
    fn name(&self) -> &'static str;

    /// Arrange one bar. Must return exactly [`BEATS_PER_BAR`] quarter notes
    /// without labels; the walk loop attaches chord labels.
    fn arrange_bar(
        &self,
        ctx: BarContext<'_>,
        state: &WalkState,
        rng: &mut impl Rng,
    ) -> Result<(Vec<Note>, WalkState), WalkError>;
}

fn quarters(pitches: &[Pitch]) -> Vec<Note> {
    pitches
        .iter()
        .map(|&p| Note::quarter(Sound::Single(p)))
        .collect()
}

/// Ascending arpeggio of each chord from a fixed low register.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticArpeggio;

impl BassPolicy for StaticArpeggio {
    fn name(&self) -> &'static str {
        "arpeggio"
    }

    fn arrange_bar(
        &self,
        ctx: BarContext<'_>,
        state: &WalkState,
        rng: &mut impl Rng,
    ) -> Result<(Vec<Note>, WalkState), WalkError> {
        let symbol = ctx.bar.symbol;
        let root = ARPEGGIO_WINDOW.anchor(symbol.root)?;
        let mut tones = chord_tones(root, symbol.quality)?;
        pad_triad(&mut tones, rng)?;

        let next_state = WalkState {
            previous_chord: Some(symbol),
            previous_fourth_beat: tones.last().copied(),
            ..*state
        };
        Ok((quarters(&tones), next_state))
    }
}

/// 3rd and 7th on beats 1, 2 and 4 with beat 3 silent (a Charleston-like
/// comping figure). With `octave_doubling`, every guide tone is also
/// sounded in each other octave that fits [`DOUBLING_WINDOW`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GuideTones {
    pub octave_doubling: bool,
}

impl GuideTones {
    fn doubled(tone: Pitch) -> Result<Vec<Pitch>, TheoryError> {
        let mut octaves = vec![tone];
        let mut shift = -1;
        while tone.index() as i32 + shift * 12 >= DOUBLING_WINDOW.low as i32 {
            octaves.push(tone.shifted_octaves(shift)?);
            shift -= 1;
        }
        let mut shift = 1;
        while tone.index() as i32 + shift * 12 <= DOUBLING_WINDOW.high as i32 {
            octaves.push(tone.shifted_octaves(shift)?);
            shift += 1;
        }
        Ok(octaves)
    }
}

impl BassPolicy for GuideTones {
    fn name(&self) -> &'static str {
        "guide-tones"
    }

    fn arrange_bar(
        &self,
        ctx: BarContext<'_>,
        state: &WalkState,
        _rng: &mut impl Rng,
    ) -> Result<(Vec<Note>, WalkState), WalkError> {
        let symbol = ctx.bar.symbol;
        let root = GUIDE_TONE_WINDOW.anchor(symbol.root)?;
        let tones = chord_tones(root, symbol.quality)?;

        // The 3rd, plus the 7th (or 6th) of a tetrad.
        let mut guides: Vec<Pitch> = tones.iter().skip(1).step_by(2).copied().collect();
        if self.octave_doubling {
            let mut all = Vec::new();
            for tone in guides {
                all.extend(GuideTones::doubled(tone)?);
            }
            guides = all;
        }

        let sound = Sound::from_pitches(guides);
        let notes = vec![
            Note::quarter(sound.clone()),
            Note::quarter(sound.clone()),
            Note::quarter_rest(),
            Note::quarter(sound),
        ];
        let next_state = WalkState {
            previous_chord: Some(symbol),
            ..*state
        };
        Ok((notes, next_state))
    }
}

/// Goal-directed walking line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wandering;

impl Wandering {
    /// Beat 4 aimed at the next chord: the non-root chord tone nearest the
    /// next root, or a half step below the next root when that nearest tone
    /// is this chord's 5th.
    fn goal_note(root: Pitch, tones: &[Pitch], next: ChordSymbol) -> Result<Option<Pitch>, TheoryError> {
        let next_root = next.root_pitch(DEFAULT_ROOT_OCTAVE)?;
        let Some(&closest) = tones
            .iter()
            .skip(1)
            .min_by_key(|t| tonal_distance(t.class(), next_root.class()).unsigned_abs())
        else {
            return Ok(None);
        };

        if tonal_distance(root.class(), closest.class()) == -5 {
            let target = anchor_near(next_root.spelling(), closest)?;
            let approach = Pitch::from_index(target.index() as i32 - 1)?;
            debug!("chromatic approach {approach} into {next}");
            return Ok(Some(approach));
        }
        Ok(Some(closest))
    }
}

impl BassPolicy for Wandering {
    fn name(&self) -> &'static str {
        "wandering"
    }

    fn arrange_bar(
        &self,
        ctx: BarContext<'_>,
        state: &WalkState,
        rng: &mut impl Rng,
    ) -> Result<(Vec<Note>, WalkState), WalkError> {
        let symbol = ctx.bar.symbol;
        let window = WANDERING_WINDOW;

        let root = match state.previous_fourth_beat {
            Some(previous) => anchor_near(symbol.root, previous)?,
            None => window.anchor(symbol.root)?,
        };
        let mut tones = chord_tones(root, symbol.quality)?;

        let fits = tones.iter().all(|&t| window.contains(t));
        let height = (root.index() as f64 - window.low as f64) / window.span() as f64;
        let direction = if !fits || (height > 0.5 && state.previous_direction == Direction::Up) {
            // Root, then the remaining tones in reverse an octave lower.
            let mut descending = vec![root];
            for tone in tones[1..].iter().rev() {
                descending.push(tone.shifted_octaves(-1)?);
            }
            tones = descending;
            debug!("{symbol}: descending from {root} (fits window: {fits})");
            Direction::Down
        } else {
            Direction::Up
        };

        let goal = match ctx.next {
            Some(next) => Wandering::goal_note(root, &tones, next.symbol)?,
            None => None,
        };
        // On a descending triad the repeated tones[1] is the 5th an octave
        // down; the goal note replaces it whenever a next bar exists.
        pad_triad(&mut tones, rng)?;
        if let Some(goal) = goal {
            tones[BEATS_PER_BAR - 1] = goal;
        }

        let next_state = WalkState {
            previous_chord: Some(symbol),
            previous_direction: direction,
            previous_fourth_beat: tones.last().copied(),
        };
        Ok((quarters(&tones), next_state))
    }
}

/// Walks progressions with one policy and a fixed transposition.
#[derive(Debug, Clone, Default)]
pub struct WalkingBassGenerator<P> {
    policy: P,
    transposition: Transposition,
}

impl<P: BassPolicy> WalkingBassGenerator<P> {
    pub fn new(policy: P) -> Self {
        WalkingBassGenerator {
            policy,
            transposition: Transposition::default(),
        }
    }

    pub fn with_transposition(mut self, transposition: Transposition) -> Self {
        self.transposition = transposition;
        self
    }

    /// Generate the bass line: [`BEATS_PER_BAR`] quarter notes per entry,
    /// with the chord label on the first note of every bar that changes
    /// chord. Any failure aborts the whole walk.
    pub fn walk(
        &self,
        entries: &[ChordNotation],
        rng: &mut impl Rng,
    ) -> Result<Vec<Note>, WalkError> {
        let bars = expand_progression(entries, self.transposition)?;
        let mut state = WalkState::default();
        let mut notes = Vec::with_capacity(bars.len() * BEATS_PER_BAR);

        for (i, bar) in bars.iter().enumerate() {
            let ctx = BarContext {
                bar,
                next: bars.get(i + 1),
            };
            let (mut bar_notes, next_state) = self.policy.arrange_bar(ctx, &state, rng)?;
            debug_assert_eq!(bar_notes.len(), BEATS_PER_BAR, "{}", self.policy.name());

            if bar.is_change {
                if let Some(first) = bar_notes.first_mut() {
                    first.label = Some(bar.symbol.to_string());
                }
            }
            notes.extend(bar_notes);
            state = next_state;
        }

        debug!(
            "{} walk: {} bars, {} notes",
            self.policy.name(),
            bars.len(),
            notes.len()
        );
        Ok(notes)
    }
}

/// The policies selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    Arpeggio,
    GuideTones,
    #[default]
    Wandering,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Arpeggio, Variant::GuideTones, Variant::Wandering];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Arpeggio => StaticArpeggio.name(),
            Variant::GuideTones => GuideTones::default().name(),
            Variant::Wandering => Wandering.name(),
        }
    }

    /// Walk `entries` with this variant's policy.
    pub fn walk(
        self,
        entries: &[ChordNotation],
        transposition: Transposition,
        octave_doubling: bool,
        rng: &mut impl Rng,
    ) -> Result<Vec<Note>, WalkError> {
        match self {
            Variant::Arpeggio => WalkingBassGenerator::new(StaticArpeggio)
                .with_transposition(transposition)
                .walk(entries, rng),
            Variant::GuideTones => WalkingBassGenerator::new(GuideTones { octave_doubling })
                .with_transposition(transposition)
                .walk(entries, rng),
            Variant::Wandering => WalkingBassGenerator::new(Wandering)
                .with_transposition(transposition)
                .walk(entries, rng),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Variant::ALL.iter().map(|v| v.name()).collect();
                format!("unknown variant `{s}` (expected one of: {})", names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::parse_progression;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pitch(name: &str, octave: i32) -> Pitch {
        Pitch::from_name(name, octave).unwrap()
    }

    fn spelling(name: &str) -> Spelling {
        name.parse().unwrap()
    }

    fn single_names(notes: &[Note]) -> Vec<String> {
        notes
            .iter()
            .map(|n| n.pitch().map(|p| p.to_string()).unwrap_or_else(|| "-".into()))
            .collect()
    }

    fn walk(policy: impl BassPolicy, text: &str, seed: u64) -> Vec<Note> {
        let entries = parse_progression(text).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        WalkingBassGenerator::new(policy).walk(&entries, &mut rng).unwrap()
    }

    #[test]
    fn test_window_anchor() {
        // C4 is above [E2, B3]: one octave down.
        assert_eq!(ARPEGGIO_WINDOW.anchor(spelling("C")).unwrap(), pitch("C", 3));
        // A4 sits 29 semitones above E2: two octaves down.
        assert_eq!(ARPEGGIO_WINDOW.anchor(spelling("A")).unwrap(), pitch("A", 2));
        assert_eq!(ARPEGGIO_WINDOW.anchor(spelling("E")).unwrap(), pitch("E", 2));
        // Already inside the wider window.
        assert_eq!(WANDERING_WINDOW.anchor(spelling("C")).unwrap(), pitch("C", 4));
        // G4 is 27 above E2, so it drops two octaves even though G3 fits.
        assert_eq!(WANDERING_WINDOW.anchor(spelling("G")).unwrap(), pitch("G", 2));
        // Cb4 sounds as B3 and is already inside.
        assert_eq!(ARPEGGIO_WINDOW.anchor(spelling("Cb")).unwrap().index(), 47);
    }

    #[test]
    fn test_anchor_below_floor_moves_up() {
        let high = Window::new(60, 80);
        let anchored = high.anchor(spelling("D")).unwrap();
        assert_eq!(anchored, pitch("D", 5));
        assert!(high.contains(anchored));
    }

    #[test]
    fn test_anchor_near_picks_nearest_octave() {
        assert_eq!(anchor_near(spelling("F"), pitch("E", 3)).unwrap(), pitch("F", 3));
        assert_eq!(anchor_near(spelling("C"), pitch("B", 3)).unwrap(), pitch("C", 4));
        assert_eq!(anchor_near(spelling("A"), pitch("C", 3)).unwrap(), pitch("A", 2));
    }

    #[test]
    fn test_anchor_near_across_the_c_boundary() {
        let cb = anchor_near(spelling("Cb"), pitch("B", 3)).unwrap();
        assert_eq!(cb.index(), 47);
        assert_eq!(cb.to_string(), "Cb4");

        let b_sharp = anchor_near(spelling("B#"), pitch("C", 4)).unwrap();
        assert_eq!(b_sharp.index(), 48);
        assert_eq!(b_sharp.to_string(), "B#3");

        assert_eq!(anchor_near(spelling("Fb"), pitch("Eb", 3)).unwrap().index(), 40);
        assert_eq!(anchor_near(spelling("E#"), pitch("F#", 2)).unwrap().index(), 29);
    }

    #[test]
    fn test_pad_triad_choices() {
        let root = pitch("C", 3);
        let mut saw_octave = false;
        let mut saw_third = false;
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut tones = chord_tones(root, walking_bass_theory::ChordQuality::Major).unwrap();
            pad_triad(&mut tones, &mut rng).unwrap();
            assert_eq!(tones.len(), 4);
            match tones[3].to_string().as_str() {
                "C4" => saw_octave = true,
                "E3" => saw_third = true,
                other => panic!("unexpected padding {other}"),
            }
        }
        assert!(saw_octave && saw_third);

        let mut rng = StdRng::seed_from_u64(0);
        let mut seventh = chord_tones(root, walking_bass_theory::ChordQuality::Dominant7).unwrap();
        pad_triad(&mut seventh, &mut rng).unwrap();
        assert_eq!(seventh.len(), 4);
    }

    #[test]
    fn test_arpeggio_bar() {
        let notes = walk(StaticArpeggio, "C7 Bb-7", 1);
        assert_eq!(
            single_names(&notes),
            ["C3", "E3", "G3", "Bb3", "Bb2", "Db3", "F3", "Ab3"]
        );
        assert_eq!(notes[0].label.as_deref(), Some("C7"));
        assert_eq!(notes[4].label.as_deref(), Some("Bb-7"));
        assert!(notes.iter().all(|n| n.duration == crate::note::QUARTER));
    }

    #[test]
    fn test_guide_tones_rhythm() {
        let notes = walk(GuideTones::default(), "C7 %", 1);
        assert_eq!(notes.len(), 8);
        let guides = Sound::Stack(vec![pitch("E", 3), pitch("Bb", 3)]);
        for bar in notes.chunks(BEATS_PER_BAR) {
            assert_eq!(bar[0].sound, guides);
            assert_eq!(bar[1].sound, guides);
            assert!(bar[2].sound.is_rest());
            assert_eq!(bar[3].sound, guides);
        }
        assert_eq!(notes[0].label.as_deref(), Some("C7"));
        assert_eq!(notes[4].label, None);
    }

    #[test]
    fn test_guide_tones_triad_plays_third_alone() {
        let notes = walk(GuideTones::default(), "D-", 1);
        assert_eq!(notes[0].sound, Sound::Single(pitch("F", 3)));
    }

    #[test]
    fn test_guide_tones_octave_doubling() {
        let notes = walk(GuideTones { octave_doubling: true }, "C7", 1);
        let names: Vec<String> = notes[0].sound.pitches().iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["E2", "Bb2", "E3", "Bb3", "E4"]);
        assert!(notes[0].sound.pitches().iter().all(|&p| DOUBLING_WINDOW.contains(p)));
    }

    #[test]
    fn test_wandering_line() {
        let notes = walk(Wandering, "C7 F7 C7", 3);
        assert_eq!(
            single_names(&notes),
            [
                // G4 is out of range: descend, aim at F with the 3rd.
                "C4", "Bb3", "G3", "E3",
                // F3 continues from E3; the 5th leads to C, so approach
                // C4 from a half step below.
                "F3", "A3", "C4", "B3",
                // Last bar keeps its arranged beat 4.
                "C4", "Bb3", "G3", "E3",
            ]
        );
    }

    #[test]
    fn test_wandering_flat_keys_stay_in_register() {
        // Cb roots continue from Bb2 at Cb3 (index 35), not an octave lower.
        let notes = walk(Wandering, "Gb7 Cb7 Gb7 Cb7", 0);
        assert_eq!(
            single_names(&notes),
            [
                "Gb2", "Bb2", "Db3", "Bb2",
                "Cb3", "Eb3", "Gb3", "F3",
                // Climbed last bar and the root is in the upper half.
                "Gb3", "Fb3", "Db3", "Bb2",
                "Cb3", "Eb3", "Gb3", "Bbb3",
            ]
        );
        let indices: Vec<u8> = notes.iter().map(|n| n.pitch().unwrap().index()).collect();
        assert_eq!(&indices[4..8], [35, 39, 42, 41]);
    }

    #[test]
    fn test_wandering_sharp_roots_stay_in_register() {
        let notes = walk(Wandering, "F#7 B#7 F#7", 0);
        let indices: Vec<u8> = notes.iter().map(|n| n.pitch().unwrap().index()).collect();
        assert_eq!(indices, [30, 34, 37, 35, 36, 40, 43, 41, 42, 40, 37, 34]);
        assert_eq!(notes[4].pitch().unwrap().to_string(), "B#2");
    }

    #[test]
    fn test_wandering_descends_after_climbing_high() {
        let bar = ResolvedBar {
            symbol: "G7".parse().unwrap(),
            is_change: true,
        };
        let ctx = BarContext { bar: &bar, next: None };
        let climbing = WalkState {
            previous_chord: None,
            previous_direction: Direction::Up,
            previous_fourth_beat: Some(pitch("F", 3)),
        };
        let mut rng = StdRng::seed_from_u64(0);

        // G3 fits the window but sits above its middle: turn around.
        let (notes, state) = Wandering.arrange_bar(ctx, &climbing, &mut rng).unwrap();
        assert_eq!(single_names(&notes), ["G3", "F3", "D3", "B2"]);
        assert_eq!(state.previous_direction, Direction::Down);
        assert_eq!(state.previous_fourth_beat, Some(pitch("B", 2)));

        // The same bar after a descent keeps climbing.
        let falling = WalkState {
            previous_direction: Direction::Down,
            ..climbing
        };
        let (notes, state) = Wandering.arrange_bar(ctx, &falling, &mut rng).unwrap();
        assert_eq!(single_names(&notes), ["G3", "B3", "D4", "F4"]);
        assert_eq!(state.previous_direction, Direction::Up);
    }

    #[test]
    fn test_wandering_triad_goal_overrides_padding() {
        for seed in 0..8 {
            let notes = walk(Wandering, "C F", seed);
            assert_eq!(single_names(&notes[..4]), ["C4", "G3", "E3", "E3"]);
        }
    }

    #[test]
    fn test_wandering_stays_near_window() {
        let notes = walk(
            Wandering,
            "Cmaj7 % E7 % A7 % D- % E7 % A- % D7 % D-7 G7",
            11,
        );
        assert_eq!(notes.len(), 64);
        for note in &notes {
            let p = note.pitch().unwrap();
            assert!((16..=65).contains(&p.index()), "{p} drifted out of the bass register");
        }
    }

    #[test]
    fn test_walk_is_deterministic_for_seed() {
        let a = walk(Wandering, "C E- F G", 42);
        let b = walk(Wandering, "C E- F G", 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_variant_names() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>().unwrap(), variant);
        }
        assert!("bebop".parse::<Variant>().is_err());
        assert_eq!(Variant::default(), Variant::Wandering);
    }
}
