//! Round state: candidate working set and the round state machine.
//!
//! A round snapshots the roster into `CandidateSet`, narrows it answer
//! by answer, and resolves in a win, a learned animal, or an abandoned
//! teach. `Round` is the event-driven machine; `Candidate` and
//! `CandidateSet` hold the shrinking working copies.
//!
//! ## Used-condition tracking
//!
//! Only yes-answered conditions are recorded into `used` and shown as
//! teach-prompt context. Ruled-out traits are not tracked, so a round
//! that collapses through "no" answers alone teaches with an empty
//! snapshot. This asymmetry is kept for parity with the established
//! game behavior; whether "no" chains should contribute context is an
//! open product question.

pub mod candidates;
pub mod state;

pub use candidates::{Candidate, CandidateSet};
pub use state::{Directive, Round, RoundOutcome, RoundPhase, TeachContext, TeachRequest};
