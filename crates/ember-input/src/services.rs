//! Collaborator interfaces the dispatcher drives
//!
//! The input layer never reaches into ambient global state; the world and
//! window services are injected and passed to `update` each tick, so tests
//! substitute recording doubles.

use ember_session::StateManager;

/// World/simulation operations the input layer triggers.
pub trait WorldService {
    /// Enter or leave third-person preview (held POV key).
    fn toggle_preview_mode(&mut self, enable: bool);
    /// Flip between first and third person (tapped POV key).
    fn toggle_pov(&mut self);
    /// Rotate the player view. `x` is yaw, `y` pitch, in sensitivity-scaled
    /// units.
    fn rotate_player(&mut self, x: f32, y: f32);
    /// Permit or forbid the idle vanity camera.
    fn allow_vanity_mode(&mut self, allow: bool);
    /// Engage or disengage the vanity camera now.
    fn toggle_vanity_mode(&mut self, enable: bool);
    fn toggle_player_looking(&mut self, enable: bool);
    /// Activate whatever the crosshair points at.
    fn activate_target(&mut self);
    fn take_screenshot(&mut self);
    /// Stop a playing cutscene video.
    fn stop_video(&mut self);
}

/// UI operations the input layer triggers.
pub trait WindowService {
    /// Per-frame UI refresh, run after input handling so window changes
    /// never happen inside event callbacks.
    fn update(&mut self);
    fn show_crosshair(&mut self, show: bool);
    fn toggle_hud(&mut self);
    fn message_box(&mut self, message: &str);
    /// Trigger quick-key slot `index` (1-based).
    fn activate_quick_key(&mut self, index: u32);
    /// A binding-detection request just completed.
    fn notify_input_action_bound(&mut self);
    fn rest_enabled(&self) -> bool;
    /// GUI cursor moved; `wheel` is the accumulated wheel position.
    fn inject_mouse_move(&mut self, x: f32, y: f32, wheel: i32);
}

/// The collaborators for one dispatcher call, borrowed together.
pub struct Services<'a> {
    pub world: &'a mut dyn WorldService,
    pub windows: &'a mut dyn WindowService,
    pub session: &'a mut dyn StateManager,
}
