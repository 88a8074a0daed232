//! Ember Session - game lifecycle and character creation
//!
//! Provides the session-level building blocks:
//! - `StateManager` — trait for the save/load/quit lifecycle
//! - `GameSession` — the engine's state manager implementation
//! - `CharGen` — character-creation wizard state machine

mod chargen;
mod session;

pub use chargen::{
    CharGen, CharacterSheet, ChargenEvent, ClassPath, CreationStage, Dialog, ReviewTarget,
    Specialization,
};
pub use session::{Character, GameSession, SessionState, Slot, SlotId, StateManager};
