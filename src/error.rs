//! Engine error taxonomy.
//!
//! Every failure is reported, none crash the engine: after an error the
//! session is idle and a new round can be started. Store failures keep
//! their message so the presentation surface can show it verbatim.

use crate::round::RoundPhase;
use crate::store::StoreError;

/// Errors produced by the quiz engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store returned no animals; a round cannot start.
    #[error("no animals registered")]
    EmptyRoster,

    /// No remaining candidate has an unasked condition left.
    ///
    /// Reachable when surviving candidates are fully disambiguated but
    /// tied. `Round` handles this internally by falling to the learning
    /// path; it only escapes when selecting on a `CandidateSet` directly.
    #[error("no condition left to ask")]
    NoConditionAvailable,

    /// The knowledge store could not be read.
    #[error("knowledge store unavailable: {0}")]
    StoreUnavailable(String),

    /// The knowledge store rejected a write.
    #[error("knowledge store write failed: {0}")]
    StoreWrite(String),

    /// An event arrived that the current round phase does not accept.
    #[error("event not accepted in phase {phase:?}")]
    OutOfTurn {
        /// Phase the round was in when the event arrived.
        phase: RoundPhase,
    },
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => Error::StoreUnavailable(msg),
            StoreError::Write(msg) => Error::StoreWrite(msg),
        }
    }
}
