//! Core data model: animals, conditions, and their identifiers.

pub mod animal;

pub use animal::{Animal, AnimalDraft, AnimalId, Condition, ConditionId};
