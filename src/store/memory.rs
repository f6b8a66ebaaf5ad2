//! In-memory knowledge store.
//!
//! Reference `KnowledgeStore` implementation: animals and conditions in
//! insertion order, identities minted from monotonically increasing
//! counters. Used by the test suite and by embedders that want a
//! self-contained game without external persistence.

use rustc_hash::FxHashMap;

use super::{KnowledgeStore, StoreError};
use crate::core::{Animal, AnimalId, Condition, ConditionId};

/// FxHashMap-backed knowledge store.
///
/// ## Example
///
/// ```
/// use animal_quiz::store::{KnowledgeStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// let barks = store.create_condition("does it bark?").unwrap();
/// let dog = store.create_animal("Dog", vec![barks]).unwrap();
///
/// let roster = store.list_animals().unwrap();
/// assert_eq!(roster.len(), 1);
/// assert_eq!(roster[0].id, dog.id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    animals: FxHashMap<AnimalId, Animal>,
    conditions: FxHashMap<ConditionId, Condition>,
    /// Insertion order of animals, so the roster is stable.
    order: Vec<AnimalId>,
    next_animal_id: u32,
    next_condition_id: u32,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a roster.
    ///
    /// Id counters resume past the highest seeded identity, so later
    /// creates never collide with seeded entities.
    #[must_use]
    pub fn with_roster(roster: Vec<Animal>) -> Self {
        let mut store = Self::new();
        for animal in roster {
            store.next_animal_id = store.next_animal_id.max(animal.id.raw() + 1);
            for condition in &animal.conditions {
                store.next_condition_id = store.next_condition_id.max(condition.id.raw() + 1);
                store
                    .conditions
                    .entry(condition.id)
                    .or_insert_with(|| condition.clone());
            }
            store.order.push(animal.id);
            store.animals.insert(animal.id, animal);
        }
        store
    }

    /// Look up a persisted animal.
    #[must_use]
    pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.get(&id)
    }

    /// Look up a persisted condition.
    #[must_use]
    pub fn condition(&self, id: ConditionId) -> Option<&Condition> {
        self.conditions.get(&id)
    }

    /// Number of persisted animals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the store holds no animals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl KnowledgeStore for MemoryStore {
    fn list_animals(&self) -> Result<Vec<Animal>, StoreError> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.animals.get(id))
            .cloned()
            .collect())
    }

    fn create_condition(&mut self, text: &str) -> Result<Condition, StoreError> {
        let id = ConditionId::new(self.next_condition_id);
        self.next_condition_id += 1;

        let condition = Condition::new(id, text);
        self.conditions.insert(id, condition.clone());
        Ok(condition)
    }

    fn create_animal(
        &mut self,
        name: &str,
        conditions: Vec<Condition>,
    ) -> Result<Animal, StoreError> {
        let id = AnimalId::new(self.next_animal_id);
        self.next_animal_id += 1;

        let animal = Animal {
            id,
            name: name.to_string(),
            conditions,
        };
        self.order.push(id);
        self.animals.insert(id, animal.clone());
        Ok(animal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_list() {
        let mut store = MemoryStore::new();

        let barks = store.create_condition("does it bark?").unwrap();
        let purrs = store.create_condition("does it purr?").unwrap();
        assert_ne!(barks.id, purrs.id);

        store.create_animal("Dog", vec![barks.clone()]).unwrap();
        store.create_animal("Cat", vec![purrs]).unwrap();

        let roster = store.list_animals().unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Dog");
        assert_eq!(roster[1].name, "Cat");
        assert!(roster[0].has_condition(barks.id));
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut store = MemoryStore::new();

        let a = store.create_animal("Dog", vec![]).unwrap();
        let b = store.create_animal("Cat", vec![]).unwrap();

        assert_eq!(a.id, AnimalId::new(0));
        assert_eq!(b.id, AnimalId::new(1));
    }

    #[test]
    fn test_with_roster_resumes_ids() {
        let seeded = Animal::new(AnimalId::new(10), "Dog")
            .with_condition(Condition::new(ConditionId::new(5), "does it bark?"));
        let mut store = MemoryStore::with_roster(vec![seeded]);

        let condition = store.create_condition("does it fetch?").unwrap();
        let animal = store.create_animal("Cat", vec![]).unwrap();

        assert_eq!(condition.id, ConditionId::new(6));
        assert_eq!(animal.id, AnimalId::new(11));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_lookup_accessors() {
        let mut store = MemoryStore::new();
        let barks = store.create_condition("does it bark?").unwrap();
        let dog = store.create_animal("Dog", vec![barks.clone()]).unwrap();

        assert_eq!(store.animal(dog.id).unwrap().name, "Dog");
        assert_eq!(store.condition(barks.id).unwrap().text, "does it bark?");
        assert!(store.animal(AnimalId::new(99)).is_none());
        assert!(!store.is_empty());
    }
}
