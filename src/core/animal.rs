//! Knowledge-base data model: animals and their yes/no conditions.
//!
//! `Animal` and `Condition` are the persisted entities handed out by the
//! knowledge store; both carry store-assigned identifiers. A new animal
//! being assembled during the learning flow does not have an identifier
//! yet - that transient shape is `AnimalDraft`, which only the store can
//! turn into an `Animal`.
//!
//! Identity, not text, is what the engine compares: two conditions with
//! the same wording but different ids are distinct traits.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Unique identifier for a persisted animal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimalId(pub u32);

impl AnimalId {
    /// Create a new animal ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AnimalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Animal({})", self.0)
    }
}

/// Unique identifier for a persisted condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionId(pub u32);

impl ConditionId {
    /// Create a new condition ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ConditionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Condition({})", self.0)
    }
}

/// A yes/no trait that distinguishes animals.
///
/// The text is phrased as a question to the player, e.g.
/// "does it have feathers?".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Store-assigned identity.
    pub id: ConditionId,

    /// Question text shown to the player.
    pub text: String,
}

impl Condition {
    /// Create a condition.
    #[must_use]
    pub fn new(id: ConditionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A persisted animal with its full condition profile.
///
/// This is the permanent record held by the knowledge store. Rounds
/// never mutate it; they work on per-round candidate snapshots instead.
///
/// ## Example
///
/// ```
/// use animal_quiz::core::{Animal, AnimalId, Condition, ConditionId};
///
/// let dog = Animal::new(AnimalId::new(1), "Dog")
///     .with_condition(Condition::new(ConditionId::new(1), "does it bark?"));
///
/// assert_eq!(dog.name, "Dog");
/// assert!(dog.has_condition(ConditionId::new(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Store-assigned identity.
    pub id: AnimalId,

    /// Display name, e.g. "Dog".
    pub name: String,

    /// Full persisted condition profile, in store order.
    pub conditions: Vec<Condition>,
}

impl Animal {
    /// Create an animal with no conditions.
    #[must_use]
    pub fn new(id: AnimalId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            conditions: Vec::new(),
        }
    }

    /// Builder-style: add a condition to the profile.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Check whether the profile contains a condition by identity.
    #[must_use]
    pub fn has_condition(&self, id: ConditionId) -> bool {
        self.conditions.iter().any(|c| c.id == id)
    }
}

impl std::fmt::Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A new animal being taught to the engine, not yet persisted.
///
/// Holds the name supplied by the player and the conditions confirmed
/// during the failed round. The store mints the identity when the draft
/// is persisted via `KnowledgeStore::create_animal`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalDraft {
    /// Name supplied by the player.
    pub name: String,

    /// Conditions confirmed this round, in ask order.
    pub conditions: Vector<Condition>,
}

impl AnimalDraft {
    /// Create a draft from a name and the round's confirmed conditions.
    #[must_use]
    pub fn new(name: impl Into<String>, conditions: Vector<Condition>) -> Self {
        Self {
            name: name.into(),
            conditions,
        }
    }
}
