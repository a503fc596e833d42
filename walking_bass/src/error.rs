// Failure type for progression walking and song loading.
//
// Theory failures (bad chord symbol, out-of-range pitch) pass through
// unchanged via `#[from]`; the variants added here cover what only makes
// sense at the progression level. Every failure aborts the whole walk.

use thiserror::Error;
use walking_bass_theory::TheoryError;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error(transparent)]
    Theory(#[from] TheoryError),

    #[error("progression starts with a repeat (`%`) that has no chord to repeat")]
    LeadingRepeat,

    #[error("progression is empty")]
    EmptyProgression,

    #[error("unknown song `{0}`")]
    UnknownSong(String),

    #[error("invalid song catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("could not read song catalog: {0}")]
    Io(#[from] std::io::Error),
}
