//! Session driver: couples a store, a surface, and the round machine.

use tracing::debug;

use super::surface::PresentationSurface;
use crate::core::{Animal, Condition};
use crate::error::Error;
use crate::round::{Directive, Round, RoundOutcome, TeachRequest};
use crate::store::KnowledgeStore;

/// One player's game session.
///
/// Owns the knowledge store and the presentation surface and plays
/// rounds by translating round directives into collaborator calls and
/// collaborator replies into round events. Strictly turn-based: one
/// directive is in flight at a time, and store writes complete (or
/// fail) before the next player input is read.
///
/// ## Example
///
/// ```no_run
/// use animal_quiz::session::{PresentationSurface, QuizSession};
/// use animal_quiz::store::MemoryStore;
///
/// fn play(surface: impl PresentationSurface) {
///     let mut session = QuizSession::new(MemoryStore::new(), surface);
///     match session.play_round() {
///         Ok(outcome) => println!("round over: {outcome:?}"),
///         Err(err) => eprintln!("round failed: {err}"),
///     }
/// }
/// ```
pub struct QuizSession<S, P> {
    store: S,
    surface: P,
}

impl<S: KnowledgeStore, P: PresentationSurface> QuizSession<S, P> {
    /// Create a session over a store and a surface.
    pub fn new(store: S, surface: P) -> Self {
        Self { store, surface }
    }

    /// Borrow the knowledge store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the session, returning the store and surface.
    pub fn into_parts(self) -> (S, P) {
        (self.store, self.surface)
    }

    /// Play one round to completion.
    ///
    /// Loads the roster, runs the question loop, and resolves in a
    /// win, a learned animal, or an abandoned teach. Store failures are
    /// surfaced through the presentation surface; a failed roster load
    /// or an empty roster also ends the round with an error. The
    /// session stays usable after any error.
    pub fn play_round(&mut self) -> Result<RoundOutcome, Error> {
        let roster = match self.store.list_animals() {
            Ok(roster) => roster,
            Err(err) => {
                let err = Error::from(err);
                self.surface.notify_error(&err.to_string());
                return Err(err);
            }
        };

        let (mut round, mut directive) = match Round::begin(&roster) {
            Ok(started) => started,
            Err(err) => {
                self.surface.notify_error(&err.to_string());
                return Err(err);
            }
        };

        loop {
            directive = match directive {
                Directive::AskCondition(condition) => {
                    let yes = self.surface.ask_yes_no(&condition.text);
                    round.answer(yes)?
                }
                Directive::ConfirmGuess { name, .. } => {
                    let correct = self.surface.ask_guess_confirm(&name);
                    round.confirm(correct)?
                }
                Directive::AskAnimalName => {
                    let reply = self.surface.ask_new_animal_name();
                    round.animal_name(reply)?
                }
                Directive::AskConditionText(context) => {
                    let reply = self.surface.ask_new_condition_text(&context);
                    round.condition_text(reply)?
                }
                Directive::Persist(request) => match self.persist(&request) {
                    Ok(animal) => round.persisted(animal)?,
                    Err(err) => {
                        self.surface.notify_error(&err.to_string());
                        round.persist_failed()?
                    }
                },
                Directive::Finished(outcome) => {
                    match &outcome {
                        RoundOutcome::Win { .. } => self.surface.notify_win(),
                        RoundOutcome::Learned { .. } => self.surface.notify_learned(),
                        RoundOutcome::Abandoned => {}
                    }
                    return Ok(outcome);
                }
            };
        }
    }

    /// Perform the two-step teach persist: condition first, then the
    /// animal with the minted condition appended.
    ///
    /// The request is read-only; on failure at either step nothing the
    /// round holds has changed, so a retry starts from a clean slate.
    fn persist(&mut self, request: &TeachRequest) -> Result<Animal, Error> {
        let condition = self.store.create_condition(&request.condition_text)?;

        let mut conditions: Vec<Condition> = request.known_conditions.iter().cloned().collect();
        conditions.push(condition);

        let animal = self.store.create_animal(&request.animal_name, conditions)?;
        debug!(animal = %animal.name, "teach persisted");
        Ok(animal)
    }
}
