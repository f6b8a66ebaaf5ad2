//! Knowledge store boundary.
//!
//! The engine reads its roster from, and appends new knowledge to, a
//! `KnowledgeStore`. Identity is minted by the store: the engine hands
//! over raw text/names and receives persisted entities back. Transport
//! (HTTP, database, file) is the implementor's concern; the crate ships
//! `MemoryStore` as the in-process reference implementation.

pub mod memory;

pub use memory::MemoryStore;

use crate::core::{Animal, Condition};

/// Errors surfaced by a knowledge store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or read.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected a write.
    #[error("store write failed: {0}")]
    Write(String),
}

/// External persistence for animals and conditions.
///
/// Writes are called one at a time from the session while the round
/// machine sits in its `Persisting` phase, so implementations never see
/// concurrent mutation from a single session.
pub trait KnowledgeStore {
    /// Fetch the full roster, each animal with its persisted condition
    /// profile.
    fn list_animals(&self) -> Result<Vec<Animal>, StoreError>;

    /// Persist a new condition; the store assigns its identity.
    fn create_condition(&mut self, text: &str) -> Result<Condition, StoreError>;

    /// Persist a new animal with the given conditions; the store
    /// assigns its identity.
    fn create_animal(&mut self, name: &str, conditions: Vec<Condition>)
        -> Result<Animal, StoreError>;
}
