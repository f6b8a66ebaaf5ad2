//! Property-based tests over generated rosters and answer scripts.
//!
//! These pin the universal invariants of answer processing: the
//! candidate set only shrinks, partitions keep exactly the right
//! animals, asked conditions stop carrying information, and every
//! termination check resolves to exactly one transition.

use std::collections::HashSet;

use animal_quiz::{Animal, AnimalId, Condition, ConditionId, Directive, Round};
use proptest::prelude::*;

/// Rosters of 1-5 animals, each with up to 4 distinct conditions drawn
/// from a shared pool of 10, so overlap between animals is common.
fn roster_strategy() -> impl Strategy<Value = Vec<Animal>> {
    prop::collection::vec(prop::collection::vec(0u32..10, 0..5), 1..6).prop_map(|profiles| {
        profiles
            .into_iter()
            .enumerate()
            .map(|(index, condition_ids)| {
                let mut animal =
                    Animal::new(AnimalId::new(index as u32), format!("animal {index}"));
                let mut seen = HashSet::new();
                for id in condition_ids {
                    if seen.insert(id) {
                        animal = animal.with_condition(Condition::new(
                            ConditionId::new(id),
                            format!("condition {id}?"),
                        ));
                    }
                }
                animal
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_partition_shrink_and_termination(
        roster in roster_strategy(),
        answers in prop::collection::vec(any::<bool>(), 0..24),
    ) {
        let (mut round, mut directive) = Round::begin(&roster).unwrap();
        let mut script = answers.into_iter();
        let mut confirmed = Vec::new();

        while let Directive::AskCondition(asked) = directive {
            let yes = script.next().unwrap_or(false);
            if yes {
                confirmed.push(asked.clone());
            }
            let before = round.candidates().clone();

            directive = round.answer(yes).unwrap();
            let after = round.candidates();

            // Monotonic shrink.
            prop_assert!(after.len() <= before.len());

            for survivor in after.iter() {
                // The asked condition no longer carries information.
                prop_assert!(!survivor.has_condition(asked.id));

                // Partition correctness: yes keeps exactly the animals
                // that carried the condition, no keeps the rest.
                let pre = before.iter().find(|c| c.id == survivor.id);
                prop_assert!(pre.is_some());
                prop_assert_eq!(pre.unwrap().has_condition(asked.id), yes);
            }

            // Termination exclusivity: zero candidates always learns,
            // one is always confirmed, two or more continue (or learn
            // when no condition is left to ask).
            match after.len() {
                0 => prop_assert!(matches!(directive, Directive::AskAnimalName)),
                1 => {
                    let is_confirm = matches!(directive, Directive::ConfirmGuess { .. });
                    prop_assert!(is_confirm);
                }
                _ => prop_assert!(matches!(
                    directive,
                    Directive::AskCondition(_) | Directive::AskAnimalName
                )),
            }
        }

        // Only yes answers accumulated, in ask order.
        let used: Vec<_> = round.used_conditions().iter().cloned().collect();
        prop_assert_eq!(used, confirmed);
    }

    #[test]
    fn prop_rounds_are_deterministic(
        roster in roster_strategy(),
        answers in prop::collection::vec(any::<bool>(), 0..24),
    ) {
        let play = |roster: &[Animal], answers: &[bool]| -> Vec<Directive> {
            let (mut round, mut directive) = Round::begin(roster).unwrap();
            let mut trace = vec![directive.clone()];
            let mut script = answers.iter().copied();
            while let Directive::AskCondition(_) = directive {
                directive = round.answer(script.next().unwrap_or(false)).unwrap();
                trace.push(directive.clone());
            }
            trace
        };

        prop_assert_eq!(play(&roster, &answers), play(&roster, &answers));
    }
}
