//! # animal-quiz
//!
//! A self-learning animal guessing game engine.
//!
//! The engine holds a knowledge base of animals, each tagged with
//! yes/no conditions, and identifies the player's animal by elimination:
//! ask about a condition and partition the candidates on the answer
//! until one animal remains. When the knowledge base proves
//! insufficient, the player teaches the engine a new animal and a new
//! distinguishing condition, which are appended to the store for future
//! rounds.
//!
//! ## Design Principles
//!
//! 1. **Sans-I/O core**: `Round` is a pure state machine driven by
//!    discrete events. It asks for store writes via directives and
//!    never touches persistence or rendering itself.
//!
//! 2. **Round-local state**: candidates are per-round snapshots of the
//!    persisted animals; profiles in the store are never mutated by
//!    play. A `Round` is created per game and dropped when it resolves.
//!
//! 3. **Collaborators behind traits**: persistence (`KnowledgeStore`)
//!    and the player-facing UI (`PresentationSurface`) are supplied by
//!    the embedder; `QuizSession` wires them to the round machine.
//!
//! ## Behavioral Notes
//!
//! - Condition selection is a deterministic order-dependent heuristic
//!   (first candidate with an unasked condition, its first condition),
//!   not information gain.
//! - Only yes-answered conditions feed the teach-prompt context; see
//!   `round` module docs.
//!
//! ## Modules
//!
//! - `core`: animals, conditions, identifiers, the learning draft
//! - `round`: candidate working set and the round state machine
//! - `store`: knowledge store trait and in-memory implementation
//! - `session`: presentation surface trait and the session driver
//! - `error`: crate error taxonomy

pub mod core;
pub mod error;
pub mod round;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Animal, AnimalDraft, AnimalId, Condition, ConditionId};

pub use crate::error::Error;

pub use crate::round::{
    Candidate, CandidateSet, Directive, Round, RoundOutcome, RoundPhase, TeachContext,
    TeachRequest,
};

pub use crate::store::{KnowledgeStore, MemoryStore, StoreError};

pub use crate::session::{PresentationSurface, QuizSession};
