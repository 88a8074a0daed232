//! Ember Input - action dispatch layer
//!
//! Turns raw device events into game actions:
//! - `Action` / `BindingStore` - stable action ids with persisted bindings
//! - `Channels` / `DeviceState` - held-control values and rising edges
//! - `InputDispatcher` - the per-frame switchboard wiring it all together
//! - `ModeStack` / `ControlSwitches` - GUI mode gating and input suppression
//! - `IdleTimer` / `PlayerIntent` - vanity camera timing and movement output

mod action;
mod bindings;
mod channel;
mod control;
mod dispatcher;
mod idle;
mod modes;
mod player;
mod services;
mod settings;
mod switches;

pub use action::Action;
pub use bindings::BindingStore;
pub use channel::{ChannelChange, Channels, DeviceState};
pub use control::{Control, InputEvent, PovAxis};
pub use dispatcher::InputDispatcher;
pub use idle::{IdleEvent, IdleTimer, IDLE_THRESHOLD};
pub use modes::{GuiMode, ModeStack};
pub use player::{DrawState, PlayerIntent};
pub use services::{Services, WindowService, WorldService};
pub use settings::{InputSettings, SettingsSource, TomlSettings};
pub use switches::{ControlSwitches, CONTROL_SWITCHES};
