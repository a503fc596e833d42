// Progression preprocessing.
//
// A progression is one chord entry per 4/4 bar, where `%` repeats the bar
// before. Before any bass line is generated the whole progression is
// expanded in a single pass: every `%` is replaced by the chord it repeats,
// every chord is transposed, and each bar records whether it starts a new
// chord (and so gets a label). The walkers only ever see resolved bars, so
// look-ahead and the main loop can never disagree about what a `%` means.

use crate::error::WalkError;
use log::debug;
use serde::{Deserialize, Serialize};
use walking_bass_theory::{ChordNotation, ChordSymbol, Transposition};

/// One bar after `%` expansion and transposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBar {
    pub symbol: ChordSymbol,
    /// True when the entry was written out (not `%`) and differs from the
    /// previous bar's chord.
    pub is_change: bool,
}

/// Split progression text into entries. Bars are separated by whitespace
/// and/or `|`, so `"C7 | F7 | % | C7"` and `"C7 F7 % C7"` are the same.
pub fn parse_progression(text: &str) -> Result<Vec<ChordNotation>, WalkError> {
    let entries = text
        .split(|c: char| c.is_whitespace() || c == '|')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<ChordNotation>())
        .collect::<Result<Vec<_>, _>>()?;
    if entries.is_empty() {
        return Err(WalkError::EmptyProgression);
    }
    Ok(entries)
}

/// Resolve repeats and apply `transposition` to every bar.
///
/// Fails with [`WalkError::LeadingRepeat`] if the first entry is `%`.
pub fn expand_progression(
    entries: &[ChordNotation],
    transposition: Transposition,
) -> Result<Vec<ResolvedBar>, WalkError> {
    let mut bars = Vec::with_capacity(entries.len());
    let mut previous: Option<ChordSymbol> = None;

    for entry in entries {
        let (symbol, is_change) = match (entry, previous) {
            (ChordNotation::Repeat, None) => return Err(WalkError::LeadingRepeat),
            (ChordNotation::Repeat, Some(prev)) => (prev, false),
            (ChordNotation::Chord(symbol), prev) => (*symbol, prev != Some(*symbol)),
        };
        previous = Some(symbol);
        bars.push(ResolvedBar {
            symbol: symbol.transpose(transposition)?,
            is_change,
        });
    }

    if !transposition.is_identity() {
        debug!(
            "transposed {} bars by {} {:?}",
            bars.len(),
            transposition.interval,
            transposition.direction
        );
    }
    Ok(bars)
}
