//! Game session state manager

use ember_core::{EmberError, Result};

/// Lifecycle phase of the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No game has been started (main menu).
    NoGame,
    /// A game was running and has ended.
    Ended,
    /// A game is in progress.
    Running,
}

/// Identifier of a save slot within a character's save list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub u64);

/// One saved game belonging to a character.
#[derive(Debug, Clone)]
pub struct Slot {
    pub id: SlotId,
    pub name: String,
    /// Monotone counter, bumped on every write to the slot.
    pub revision: u64,
}

/// A playable character and its save slots.
#[derive(Debug, Clone)]
pub struct Character {
    pub name: String,
    slots: Vec<Slot>,
    next_slot: u64,
}

impl Character {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slots: Vec::new(),
            next_slot: 0,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn slot_mut(&mut self, id: SlotId) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|s| s.id == id)
    }

    fn create_slot(&mut self, name: &str) -> SlotId {
        let id = SlotId(self.next_slot);
        self.next_slot += 1;
        self.slots.push(Slot {
            id,
            name: name.to_string(),
            revision: 1,
        });
        id
    }
}

/// Interface for the game-session lifecycle.
///
/// The input layer and UI talk to the session only through this trait;
/// the engine supplies [`GameSession`], tests supply doubles.
pub trait StateManager {
    /// Ask the engine to shut down after the current frame.
    fn request_quit(&mut self);

    /// True once a quit has been requested.
    fn has_quit_request(&self) -> bool;

    fn state(&self) -> SessionState;

    /// Start a new game. `bypass` skips the new-game intro mechanics.
    fn new_game(&mut self, bypass: bool);

    fn end_game(&mut self);

    /// Write a saved game to `slot`, or create a new slot if `None`.
    ///
    /// The slot must belong to the current character.
    fn save_game(&mut self, slot: Option<SlotId>) -> Result<SlotId>;

    /// The character of the running game, if any.
    fn current_character(&self) -> Option<&Character>;
}

/// The engine's state manager.
pub struct GameSession {
    state: SessionState,
    quit_requested: bool,
    character: Option<Character>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::NoGame,
            quit_requested: false,
            character: None,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl StateManager for GameSession {
    fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    fn has_quit_request(&self) -> bool {
        self.quit_requested
    }

    fn state(&self) -> SessionState {
        self.state
    }

    fn new_game(&mut self, bypass: bool) {
        let name = if bypass { "player" } else { "" };
        self.character = Some(Character::new(name));
        self.state = SessionState::Running;
    }

    fn end_game(&mut self) {
        self.state = SessionState::Ended;
    }

    fn save_game(&mut self, slot: Option<SlotId>) -> Result<SlotId> {
        if self.state != SessionState::Running {
            return Err(EmberError::SessionError(
                "cannot save: no game is running".to_string(),
            ));
        }
        let character = self
            .character
            .as_mut()
            .ok_or_else(|| EmberError::SessionError("no current character".to_string()))?;
        match slot {
            Some(id) => match character.slot_mut(id) {
                Some(existing) => {
                    existing.revision += 1;
                    Ok(id)
                }
                None => Err(EmberError::SessionError(format!(
                    "slot {id:?} does not belong to the current character"
                ))),
            },
            None => Ok(character.create_slot("Quicksave")),
        }
    }

    fn current_character(&self) -> Option<&Character> {
        self.character.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_game() {
        let session = GameSession::new();
        assert_eq!(session.state(), SessionState::NoGame);
        assert!(!session.has_quit_request());
        assert!(session.current_character().is_none());
    }

    #[test]
    fn new_game_runs_with_character() {
        let mut session = GameSession::new();
        session.new_game(false);
        assert_eq!(session.state(), SessionState::Running);
        assert!(session.current_character().is_some());
    }

    #[test]
    fn end_game_transitions_to_ended() {
        let mut session = GameSession::new();
        session.new_game(false);
        session.end_game();
        assert_eq!(session.state(), SessionState::Ended);
    }

    #[test]
    fn quit_request_latches() {
        let mut session = GameSession::new();
        session.request_quit();
        assert!(session.has_quit_request());
        assert!(session.has_quit_request());
    }

    #[test]
    fn save_without_game_fails() {
        let mut session = GameSession::new();
        assert!(session.save_game(None).is_err());
    }

    #[test]
    fn save_creates_and_updates_slot() {
        let mut session = GameSession::new();
        session.new_game(true);

        let id = session.save_game(None).unwrap();
        let again = session.save_game(Some(id)).unwrap();
        assert_eq!(id, again);

        let character = session.current_character().unwrap();
        assert_eq!(character.slots().len(), 1);
        assert_eq!(character.slots()[0].revision, 2);
    }

    #[test]
    fn save_to_foreign_slot_fails() {
        let mut session = GameSession::new();
        session.new_game(true);
        assert!(session.save_game(Some(SlotId(99))).is_err());
    }
}
