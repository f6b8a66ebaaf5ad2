//! Presentation surface trait.
//!
//! The engine never renders anything. Whatever fronts the game (a
//! terminal, a GUI) implements `PresentationSurface` and the session
//! calls it whenever the round machine needs player input or has
//! something to announce.

use crate::round::TeachContext;

/// Player-facing collaborator for one session.
///
/// Prompt methods block until the player responds; `None` from the two
/// teach prompts means the player declined. Notification methods are
/// fire-and-forget.
pub trait PresentationSurface {
    /// Present a condition as a yes/no question.
    fn ask_yes_no(&mut self, condition_text: &str) -> bool;

    /// Present the engine's guess; `true` means the guess was right.
    fn ask_guess_confirm(&mut self, animal_name: &str) -> bool;

    /// Ask what the actual animal was.
    fn ask_new_animal_name(&mut self) -> Option<String>;

    /// Ask for a new condition that distinguishes the new animal.
    ///
    /// The context carries the refuted guess and the last confirmed
    /// condition (when they exist) so the player can phrase an accurate
    /// distinguishing trait.
    fn ask_new_condition_text(&mut self, context: &TeachContext) -> Option<String>;

    /// Report a failure, e.g. an unreachable store.
    fn notify_error(&mut self, message: &str);

    /// Celebrate a correct guess.
    fn notify_win(&mut self);

    /// Thank the player for teaching a new animal.
    fn notify_learned(&mut self);
}
