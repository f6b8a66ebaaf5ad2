//! Round-local candidate working set.
//!
//! A round never touches the persisted `Animal` entities. At round start
//! every roster animal is snapshotted into a `Candidate` whose
//! `remaining` condition list is consumed as questions are asked. The
//! set itself only shrinks: answers filter candidates out, nothing is
//! ever added back within a round.
//!
//! ## Invariants
//!
//! - Candidates are unique by `AnimalId`; the first roster occurrence
//!   wins if the store hands back duplicates.
//! - After an answer is processed, no surviving candidate's `remaining`
//!   contains the asked condition.

use im::Vector;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Animal, AnimalId, Condition, ConditionId};
use crate::error::Error;

/// Round-local snapshot of one roster animal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Identity of the snapshotted animal.
    pub id: AnimalId,

    /// Display name, carried for guessing and teach prompts.
    pub name: String,

    /// Conditions not yet asked this round, in profile order.
    /// SmallVec optimizes for the common case of a handful per animal.
    pub remaining: SmallVec<[Condition; 4]>,
}

impl Candidate {
    /// Snapshot a persisted animal into a round-local candidate.
    #[must_use]
    pub fn from_animal(animal: &Animal) -> Self {
        Self {
            id: animal.id,
            name: animal.name.clone(),
            remaining: SmallVec::from_vec(animal.conditions.clone()),
        }
    }

    /// Check whether this candidate still carries a condition.
    #[must_use]
    pub fn has_condition(&self, id: ConditionId) -> bool {
        self.remaining.iter().any(|c| c.id == id)
    }
}

/// The ordered set of animals still consistent with every answer given.
#[derive(Clone, Debug, Default)]
pub struct CandidateSet {
    inner: Vector<Candidate>,
}

impl CandidateSet {
    /// Snapshot a roster into a fresh candidate set.
    ///
    /// Fails with `Error::EmptyRoster` if the roster is empty.
    /// Duplicate animal ids are dropped, keeping the first occurrence.
    pub fn from_roster(roster: &[Animal]) -> Result<Self, Error> {
        if roster.is_empty() {
            return Err(Error::EmptyRoster);
        }

        let mut seen = FxHashSet::default();
        let mut inner = Vector::new();
        for animal in roster {
            if seen.insert(animal.id) {
                inner.push_back(Candidate::from_animal(animal));
            }
        }

        Ok(Self { inner })
    }

    /// Number of candidates still in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if no candidate is left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over the candidates in order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.inner.iter()
    }

    /// The sole survivor, if exactly one candidate remains.
    #[must_use]
    pub fn sole_candidate(&self) -> Option<&Candidate> {
        if self.inner.len() == 1 {
            self.inner.front()
        } else {
            None
        }
    }

    // === Selection ===

    /// Pick the next condition to ask.
    ///
    /// Scans candidates in order; the first one with an unasked
    /// condition left contributes its first remaining condition. This is
    /// a deterministic order-dependent heuristic, not information gain:
    /// ties break by candidate order, then by each animal's own
    /// condition order.
    ///
    /// Fails with `Error::NoConditionAvailable` when every surviving
    /// candidate has run out of conditions (disambiguated but tied).
    pub fn next_condition(&self) -> Result<Condition, Error> {
        self.inner
            .iter()
            .find_map(|c| c.remaining.first().cloned())
            .ok_or(Error::NoConditionAvailable)
    }

    // === Partition ===

    /// Keep only candidates that carry the condition (a "yes" answer).
    pub fn keep_with(&mut self, id: ConditionId) {
        self.inner.retain(|c| c.has_condition(id));
    }

    /// Keep only candidates that lack the condition (a "no" answer).
    pub fn keep_without(&mut self, id: ConditionId) {
        self.inner.retain(|c| !c.has_condition(id));
    }

    /// Remove the condition from every survivor's remaining list.
    ///
    /// An asked condition carries no information for the rest of the
    /// round, whichever way it was answered.
    pub fn strip(&mut self, id: ConditionId) {
        for candidate in self.inner.iter_mut() {
            candidate.remaining.retain(|c| c.id != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnimalId;

    fn cond(id: u32, text: &str) -> Condition {
        Condition::new(ConditionId::new(id), text)
    }

    fn roster() -> Vec<Animal> {
        vec![
            Animal::new(AnimalId::new(1), "Cat").with_condition(cond(1, "does it purr?")),
            Animal::new(AnimalId::new(2), "Dog")
                .with_condition(cond(2, "does it bark?"))
                .with_condition(cond(3, "does it fetch?")),
        ]
    }

    #[test]
    fn test_from_roster_snapshots() {
        let animals = roster();
        let set = CandidateSet::from_roster(&animals).unwrap();

        assert_eq!(set.len(), 2);
        let names: Vec<_> = set.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Cat", "Dog"]);
    }

    #[test]
    fn test_from_roster_empty_fails() {
        let err = CandidateSet::from_roster(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyRoster));
    }

    #[test]
    fn test_from_roster_dedups_by_id() {
        let animals = vec![
            Animal::new(AnimalId::new(1), "Cat"),
            Animal::new(AnimalId::new(1), "Cat again"),
            Animal::new(AnimalId::new(2), "Dog"),
        ];
        let set = CandidateSet::from_roster(&animals).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().next().unwrap().name, "Cat");
    }

    #[test]
    fn test_snapshot_leaves_roster_untouched() {
        let animals = roster();
        let mut set = CandidateSet::from_roster(&animals).unwrap();

        set.keep_with(ConditionId::new(2));
        set.strip(ConditionId::new(2));

        // The persisted profiles keep their full condition lists.
        assert_eq!(animals[0].conditions.len(), 1);
        assert_eq!(animals[1].conditions.len(), 2);
    }

    #[test]
    fn test_next_condition_order() {
        let set = CandidateSet::from_roster(&roster()).unwrap();

        // First candidate's first remaining condition wins.
        assert_eq!(set.next_condition().unwrap().id, ConditionId::new(1));
    }

    #[test]
    fn test_next_condition_skips_exhausted_candidates() {
        let animals = vec![
            Animal::new(AnimalId::new(1), "Sponge"),
            Animal::new(AnimalId::new(2), "Dog").with_condition(cond(2, "does it bark?")),
        ];
        let set = CandidateSet::from_roster(&animals).unwrap();

        assert_eq!(set.next_condition().unwrap().id, ConditionId::new(2));
    }

    #[test]
    fn test_next_condition_exhausted_fails() {
        let animals = vec![
            Animal::new(AnimalId::new(1), "Sponge"),
            Animal::new(AnimalId::new(2), "Coral"),
        ];
        let set = CandidateSet::from_roster(&animals).unwrap();

        assert!(matches!(
            set.next_condition(),
            Err(Error::NoConditionAvailable)
        ));
    }

    #[test]
    fn test_keep_with() {
        let mut set = CandidateSet::from_roster(&roster()).unwrap();
        set.keep_with(ConditionId::new(2));

        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().name, "Dog");
    }

    #[test]
    fn test_keep_without() {
        let mut set = CandidateSet::from_roster(&roster()).unwrap();
        set.keep_without(ConditionId::new(2));

        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().name, "Cat");
    }

    #[test]
    fn test_strip_removes_from_all_survivors() {
        let animals = vec![
            Animal::new(AnimalId::new(1), "Dog")
                .with_condition(cond(1, "is it a pet?"))
                .with_condition(cond(2, "does it bark?")),
            Animal::new(AnimalId::new(2), "Cat").with_condition(cond(1, "is it a pet?")),
        ];
        let mut set = CandidateSet::from_roster(&animals).unwrap();

        set.keep_with(ConditionId::new(1));
        set.strip(ConditionId::new(1));

        assert_eq!(set.len(), 2);
        for candidate in set.iter() {
            assert!(!candidate.has_condition(ConditionId::new(1)));
        }
        // Unasked conditions survive.
        assert!(set.iter().any(|c| c.has_condition(ConditionId::new(2))));
    }

    #[test]
    fn test_sole_candidate() {
        let mut set = CandidateSet::from_roster(&roster()).unwrap();
        assert!(set.sole_candidate().is_none());

        set.keep_with(ConditionId::new(2));
        assert_eq!(set.sole_candidate().unwrap().name, "Dog");

        set.keep_without(ConditionId::new(2));
        assert!(set.sole_candidate().is_none());
    }
}
