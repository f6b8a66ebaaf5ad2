//! The round finite-state machine.
//!
//! One `Round` value holds all state for one game: the candidate set,
//! the confirmed-condition list, and the learning draft. It is created
//! at round start and dropped when the round resolves; nothing survives
//! across rounds except what the knowledge store persists.
//!
//! The machine is sans-I/O. Player input and store results arrive as
//! discrete events (`answer`, `confirm`, `animal_name`,
//! `condition_text`, `persisted`, `persist_failed`); each event returns
//! a `Directive` telling the driver what to do next. Store writes are
//! requested via `Directive::Persist` and performed by the driver while
//! the machine sits in `Persisting`, so a player answer can never
//! overtake an outstanding write.
//!
//! ## Termination
//!
//! Every answer ends in exactly one of: another question, a guess
//! confirmation, or the learning path. Zero candidates always means
//! learning; a single candidate is always confirmed before the round
//! can end in a win.

use im::Vector;
use tracing::{debug, info};

use super::candidates::CandidateSet;
use crate::core::{Animal, AnimalDraft, AnimalId, Condition};
use crate::error::Error;

/// Phase of the round state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Choosing the next condition to ask. Transient: selection is
    /// synchronous, so the machine never rests here between events.
    Selecting,
    /// A condition has been presented; waiting for yes/no.
    AwaitingAnswer,
    /// A single candidate has been presented as a guess.
    AwaitingConfirm,
    /// Knowledge ran out; waiting for the actual animal's name.
    LearningName,
    /// Waiting for a new distinguishing condition for the new animal.
    LearningCondition,
    /// A store write is outstanding; player input is not accepted.
    Persisting,
    /// The round has resolved.
    Done,
}

/// Context for phrasing the teach prompt.
///
/// Both refuted-path fields are optional: a round that collapses to
/// zero candidates through "no" answers alone has neither a refuted
/// guess nor a confirmed condition to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeachContext {
    /// Name of the animal the engine wrongly guessed, if it guessed.
    pub wrong_animal_name: Option<String>,

    /// Text of the most recent yes-answered condition, if any.
    pub last_condition_text: Option<String>,

    /// Name of the animal being taught.
    pub new_animal_name: String,
}

/// Store writes the driver must perform to finish a learning round.
///
/// The new condition is persisted first, then the animal with the
/// known conditions plus the minted one appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeachRequest {
    /// Name for the new animal.
    pub animal_name: String,

    /// Text of the new distinguishing condition.
    pub condition_text: String,

    /// Conditions confirmed this round, in ask order.
    pub known_conditions: Vector<Condition>,
}

/// Terminal result of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The engine guessed the animal and the player confirmed it.
    Win {
        /// Identity of the guessed animal.
        animal_id: AnimalId,
        /// Name of the guessed animal.
        name: String,
    },
    /// The player taught the engine a new animal, now persisted.
    Learned {
        /// The newly persisted animal.
        animal: Animal,
    },
    /// The player declined to teach; knowledge base unchanged.
    Abandoned,
}

/// What the driver should do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Present a yes/no question for this condition.
    AskCondition(Condition),
    /// Present the sole remaining animal as a guess.
    ConfirmGuess {
        /// Identity of the guessed animal.
        animal_id: AnimalId,
        /// Name of the guessed animal.
        name: String,
    },
    /// Ask the player what the actual animal was.
    AskAnimalName,
    /// Ask the player for a new distinguishing condition.
    AskConditionText(TeachContext),
    /// Perform the two store writes described by the request, then
    /// report back via `persisted` or `persist_failed`.
    Persist(TeachRequest),
    /// The round has resolved.
    Finished(RoundOutcome),
}

/// State for one game round.
pub struct Round {
    phase: RoundPhase,
    candidates: CandidateSet,
    /// Conditions answered "yes" this round, in ask order.
    /// "No" answers are deliberately not tracked; see module docs of
    /// `crate::round`.
    used: Vector<Condition>,
    /// The condition currently presented to the player.
    asked: Option<Condition>,
    /// The most recent yes-answered condition.
    last_confirmed: Option<Condition>,
    /// The animal most recently presented as a guess.
    guessed: Option<(AnimalId, String)>,
    /// The new animal being assembled during learning.
    pending: Option<AnimalDraft>,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Start a round from the store's current roster.
    ///
    /// Snapshots the roster into the candidate set and selects the
    /// first question. Fails with `Error::EmptyRoster` on an empty
    /// roster. A roster where no animal carries any condition routes
    /// straight to the learning path.
    pub fn begin(roster: &[Animal]) -> Result<(Self, Directive), Error> {
        let candidates = CandidateSet::from_roster(roster)?;
        debug!(candidates = candidates.len(), "round started");

        let mut round = Self {
            phase: RoundPhase::Selecting,
            candidates,
            used: Vector::new(),
            asked: None,
            last_confirmed: None,
            guessed: None,
            pending: None,
            outcome: None,
        };
        let directive = round.select_next();
        Ok((round, directive))
    }

    // === Accessors ===

    /// Current phase of the machine.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Candidates still consistent with every answer given.
    #[must_use]
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Conditions answered "yes" so far, in ask order.
    #[must_use]
    pub fn used_conditions(&self) -> &Vector<Condition> {
        &self.used
    }

    /// Terminal outcome, once the round is done.
    #[must_use]
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    // === Events ===

    /// Process the player's yes/no answer to the presented condition.
    ///
    /// Partitions the candidate set, strips the asked condition from
    /// the survivors, and transitions: zero candidates to learning, one
    /// to guess confirmation, two or more to the next question.
    pub fn answer(&mut self, yes: bool) -> Result<Directive, Error> {
        if self.phase != RoundPhase::AwaitingAnswer {
            return Err(Error::OutOfTurn { phase: self.phase });
        }
        let asked = match self.asked.take() {
            Some(c) => c,
            None => return Err(Error::OutOfTurn { phase: self.phase }),
        };

        if yes {
            self.used.push_back(asked.clone());
            self.last_confirmed = Some(asked.clone());
            self.candidates.keep_with(asked.id);
        } else {
            self.candidates.keep_without(asked.id);
        }
        self.candidates.strip(asked.id);

        debug!(
            condition = %asked.text,
            yes,
            survivors = self.candidates.len(),
            "answer processed"
        );

        Ok(match self.candidates.sole_candidate() {
            Some(sole) => {
                let (animal_id, name) = (sole.id, sole.name.clone());
                self.guessed = Some((animal_id, name.clone()));
                self.phase = RoundPhase::AwaitingConfirm;
                Directive::ConfirmGuess { animal_id, name }
            }
            None if self.candidates.is_empty() => self.begin_learning(),
            None => self.select_next(),
        })
    }

    /// Process the player's verdict on the presented guess.
    ///
    /// A confirmed guess wins the round. A refuted guess routes into
    /// the learning path with the refuted animal as prompt context.
    pub fn confirm(&mut self, correct: bool) -> Result<Directive, Error> {
        if self.phase != RoundPhase::AwaitingConfirm {
            return Err(Error::OutOfTurn { phase: self.phase });
        }
        let (animal_id, name) = match self.guessed.clone() {
            Some(g) => g,
            None => return Err(Error::OutOfTurn { phase: self.phase }),
        };

        if correct {
            info!(animal = %name, "guess confirmed");
            self.used.clear();
            self.phase = RoundPhase::Done;
            let outcome = RoundOutcome::Win { animal_id, name };
            self.outcome = Some(outcome.clone());
            Ok(Directive::Finished(outcome))
        } else {
            debug!(animal = %name, "guess refuted");
            Ok(self.begin_learning())
        }
    }

    /// Receive the actual animal's name, or `None` if the player
    /// declined to teach.
    ///
    /// Supplying a name assembles the pending draft from a snapshot of
    /// the conditions confirmed so far.
    pub fn animal_name(&mut self, reply: Option<String>) -> Result<Directive, Error> {
        if self.phase != RoundPhase::LearningName {
            return Err(Error::OutOfTurn { phase: self.phase });
        }

        match reply {
            None => Ok(self.abandon()),
            Some(name) => {
                self.pending = Some(AnimalDraft::new(name.clone(), self.used.clone()));
                self.phase = RoundPhase::LearningCondition;
                Ok(Directive::AskConditionText(self.teach_context(name)))
            }
        }
    }

    /// Receive the new distinguishing condition's text, or `None` if
    /// the player declined.
    ///
    /// Supplying text hands the driver a `Persist` directive; the
    /// machine accepts no player input until the driver reports the
    /// store result.
    pub fn condition_text(&mut self, reply: Option<String>) -> Result<Directive, Error> {
        if self.phase != RoundPhase::LearningCondition {
            return Err(Error::OutOfTurn { phase: self.phase });
        }

        match reply {
            None => Ok(self.abandon()),
            Some(text) => {
                let pending = match self.pending.as_ref() {
                    Some(p) => p,
                    None => return Err(Error::OutOfTurn { phase: self.phase }),
                };
                self.phase = RoundPhase::Persisting;
                Ok(Directive::Persist(TeachRequest {
                    animal_name: pending.name.clone(),
                    condition_text: text,
                    known_conditions: pending.conditions.clone(),
                }))
            }
        }
    }

    /// The driver reports that both store writes succeeded.
    pub fn persisted(&mut self, animal: Animal) -> Result<Directive, Error> {
        if self.phase != RoundPhase::Persisting {
            return Err(Error::OutOfTurn { phase: self.phase });
        }

        info!(animal = %animal.name, conditions = animal.conditions.len(), "new animal learned");
        self.pending = None;
        self.used.clear();
        self.phase = RoundPhase::Done;
        let outcome = RoundOutcome::Learned { animal };
        self.outcome = Some(outcome.clone());
        Ok(Directive::Finished(outcome))
    }

    /// The driver reports that a store write failed.
    ///
    /// The draft is exactly as it was before the attempt; the player is
    /// prompted again and may retry or decline. The engine never
    /// retries on its own.
    pub fn persist_failed(&mut self) -> Result<Directive, Error> {
        if self.phase != RoundPhase::Persisting {
            return Err(Error::OutOfTurn { phase: self.phase });
        }
        let name = match self.pending.as_ref() {
            Some(p) => p.name.clone(),
            None => return Err(Error::OutOfTurn { phase: self.phase }),
        };

        self.phase = RoundPhase::LearningCondition;
        Ok(Directive::AskConditionText(self.teach_context(name)))
    }

    // === Transitions ===

    fn select_next(&mut self) -> Directive {
        self.phase = RoundPhase::Selecting;
        match self.candidates.next_condition() {
            Ok(condition) => {
                debug!(condition = %condition.text, "asking");
                self.asked = Some(condition.clone());
                self.phase = RoundPhase::AwaitingAnswer;
                Directive::AskCondition(condition)
            }
            // All survivors are disambiguated but tied: zero usable
            // information left, same exit as running out of candidates.
            Err(_) => self.begin_learning(),
        }
    }

    fn begin_learning(&mut self) -> Directive {
        debug!(candidates = self.candidates.len(), "knowledge exhausted, learning");
        self.phase = RoundPhase::LearningName;
        Directive::AskAnimalName
    }

    fn abandon(&mut self) -> Directive {
        info!("learning abandoned");
        self.pending = None;
        self.used.clear();
        self.phase = RoundPhase::Done;
        self.outcome = Some(RoundOutcome::Abandoned);
        Directive::Finished(RoundOutcome::Abandoned)
    }

    fn teach_context(&self, new_animal_name: String) -> TeachContext {
        TeachContext {
            wrong_animal_name: self.guessed.as_ref().map(|(_, name)| name.clone()),
            last_condition_text: self.last_confirmed.as_ref().map(|c| c.text.clone()),
            new_animal_name,
        }
    }
}
