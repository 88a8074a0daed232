//! Input dispatcher
//!
//! The per-frame switchboard: raw device events are queued as they arrive,
//! then one `update` call per frame drains the queue, recomputes action
//! channels, fires rising-edge handlers, applies continuous movement, and
//! finally refreshes the UI. Window and world mutations only ever happen
//! inside `update`, never inside event callbacks.

use crate::channel::{Channels, DeviceState};
use crate::idle::{IdleEvent, IdleTimer};
use crate::settings::{InputSettings, SettingsSource};
use crate::switches::ControlSwitches;
use crate::{
    Action, BindingStore, DrawState, GuiMode, InputEvent, ModeStack, PlayerIntent, Services,
};

/// Translates raw device events into game actions and UI mode changes.
pub struct InputDispatcher {
    bindings: BindingStore,
    device: DeviceState,
    channels: Channels,
    switches: ControlSwitches,
    modes: ModeStack,
    idle: IdleTimer,
    player: PlayerIntent,
    settings: InputSettings,
    queue: Vec<InputEvent>,
    drag_drop: bool,
    mouse_look_enabled: bool,
    gui_cursor_enabled: bool,
    detecting: Option<Action>,
    // POV key latch: <= 0.5 while deciding tap vs hold, 1.0 once preview
    // mode has engaged.
    preview_pov_delay: f32,
    mouse_x: f32,
    mouse_y: f32,
    mouse_wheel: i32,
    region: (f32, f32),
}

impl InputDispatcher {
    /// Create a dispatcher in game mode with the GUI cursor centered.
    pub fn new(bindings: BindingStore, settings: InputSettings, width: u32, height: u32) -> Self {
        Self {
            bindings,
            device: DeviceState::new(),
            channels: Channels::new(),
            switches: ControlSwitches::new(),
            modes: ModeStack::new(),
            idle: IdleTimer::new(),
            player: PlayerIntent::new(),
            settings,
            queue: Vec::new(),
            drag_drop: false,
            mouse_look_enabled: true,
            gui_cursor_enabled: false,
            detecting: None,
            preview_pov_delay: 0.0,
            mouse_x: width as f32 / 2.0,
            mouse_y: height as f32 / 2.0,
            mouse_wheel: 0,
            region: (width as f32, height as f32),
        }
    }

    /// Queue one raw device event for the next `update`.
    pub fn queue_event(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Run one frame of input processing: drain events, recompute channels,
    /// fire edge handlers, refresh the UI, then apply continuous movement
    /// and the idle timer.
    pub fn update(&mut self, dt: f32, services: &mut Services<'_>) {
        let events = std::mem::take(&mut self.queue);
        for event in events {
            if let Some(action) = self.detecting {
                if let Some(control) = event.bindable_control() {
                    self.bindings.bind(action, control);
                    self.detecting = None;
                    services.windows.notify_input_action_bound();
                    continue;
                }
            }
            if let InputEvent::MouseMoved { dx, dy, x, y, wheel } = event {
                self.handle_mouse_motion(dx, dy, x, y, wheel, services);
            } else {
                self.device.apply(&event);
            }
        }

        // Every channel transition counts as activity, falling edges
        // included: releasing a held control must wake the idle camera.
        let changes = self.channels.update(&self.bindings, &self.device);
        if !self.drag_drop {
            for change in changes {
                self.reset_idle(services);
                if change.is_rising_edge() {
                    self.handle_action(change.action, services);
                }
            }
        }

        // UI refresh after input handling, so window changes triggered by
        // handlers appear this frame.
        services.windows.update();

        // Movement is disabled entirely while any GUI mode is open.
        if self.modes.is_gui_mode() {
            return;
        }

        if self.switches.get("playercontrols") {
            if self.channels.is_active(Action::MoveLeft) {
                self.player.set_auto_move(false);
                self.player.set_left_right(1.0);
            } else if self.channels.is_active(Action::MoveRight) {
                self.player.set_auto_move(false);
                self.player.set_left_right(-1.0);
            } else {
                self.player.set_left_right(0.0);
            }

            if self.channels.is_active(Action::MoveForward) {
                self.player.set_auto_move(false);
                self.player.set_forward_backward(1.0);
            } else if self.channels.is_active(Action::MoveBackward) {
                self.player.set_auto_move(false);
                self.player.set_forward_backward(-1.0);
            } else {
                self.player.set_forward_backward(0.0);
            }

            if self.channels.is_active(Action::Jump) && self.switches.get("playerjumping") {
                self.player.set_up_down(1.0);
            } else if self.channels.is_active(Action::Crouch) {
                self.player.set_up_down(-1.0);
            } else {
                self.player.set_up_down(0.0);
            }

            if self.switches.get("playerviewswitch") {
                self.update_pov_latch(dt, services);
            }
        }

        let qualifying = [
            Action::MoveForward,
            Action::MoveBackward,
            Action::MoveLeft,
            Action::MoveRight,
            Action::Jump,
            Action::Crouch,
            Action::TogglePov,
        ]
        .iter()
        .any(|action| self.channels.is_active(*action));
        if qualifying {
            self.reset_idle(services);
        } else if let Some(IdleEvent::VanityOn) = self.idle.accumulate(dt) {
            services.world.toggle_vanity_mode(true);
        }
    }

    /// While set, rising-edge handlers are suppressed; channels keep
    /// updating so no stale edges fire when the drag ends.
    pub fn set_drag_drop(&mut self, drag_drop: bool) {
        self.drag_drop = drag_drop;
    }

    /// Intercept the next qualifying device event as the new binding for
    /// `action`.
    pub fn begin_binding_detection(&mut self, action: Action) {
        self.detecting = Some(action);
    }

    /// The action awaiting a binding, if detect-mode is armed.
    pub fn detecting(&self) -> Option<Action> {
        self.detecting
    }

    pub fn bindings(&self) -> &BindingStore {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut BindingStore {
        &mut self.bindings
    }

    pub fn player(&self) -> &PlayerIntent {
        &self.player
    }

    /// Channel test the combat/mechanics layer polls (e.g. `Use` held).
    pub fn is_action_active(&self, action: Action) -> bool {
        self.channels.is_active(action)
    }

    pub fn is_gui_mode(&self) -> bool {
        self.modes.is_gui_mode()
    }

    pub fn gui_mode(&self) -> Option<GuiMode> {
        self.modes.top()
    }

    pub fn contains_mode(&self, mode: GuiMode) -> bool {
        self.modes.contains(mode)
    }

    /// Open a GUI mode. Entering GUI mode from game mode disables mouse
    /// look, enables the GUI cursor and hides the crosshair.
    pub fn push_gui_mode(&mut self, mode: GuiMode, services: &mut Services<'_>) {
        let was_gui = self.modes.is_gui_mode();
        self.modes.push(mode);
        if !was_gui {
            self.change_input_mode(true, services);
        }
    }

    /// Close the top GUI mode; leaving the last mode restores game mode.
    pub fn pop_gui_mode(&mut self, services: &mut Services<'_>) -> Option<GuiMode> {
        let popped = self.modes.pop();
        if popped.is_some() && !self.modes.is_gui_mode() {
            self.change_input_mode(false, services);
        }
        popped
    }

    fn change_input_mode(&mut self, gui: bool, services: &mut Services<'_>) {
        self.mouse_look_enabled = !gui;
        self.gui_cursor_enabled = gui;
        services.windows.show_crosshair(!gui);
    }

    pub fn get_control_switch(&self, name: &str) -> bool {
        self.switches.get(name)
    }

    /// Flip a control switch. Setting a switch to its current value is a
    /// no-op with no collaborator calls. Switches carry cleanup
    /// obligations: turning off "playercontrols" zeroes all movement
    /// intent, "playerjumping" zeroes vertical intent, and the camera
    /// switches forward their new value to the world.
    pub fn set_control_switch(&mut self, name: &str, value: bool, services: &mut Services<'_>) {
        if self.switches.get(name) == value {
            return;
        }
        match name {
            "playercontrols" if !value => self.player.clear_movement(),
            "playerjumping" if !value => self.player.set_up_down(0.0),
            "vanitymode" => services.world.allow_vanity_mode(value),
            "playerlooking" => services.world.toggle_player_looking(value),
            _ => {}
        }
        self.switches.set(name, value);
    }

    /// Re-read only the cached settings named in `changed`.
    pub fn process_changed_settings(
        &mut self,
        changed: &[(String, String)],
        source: &dyn SettingsSource,
    ) {
        if self.settings.apply_changed(changed, source) {
            let width = source.get_int("Video", "resolution x").unwrap_or(0);
            let height = source.get_int("Video", "resolution y").unwrap_or(0);
            if width > 0 && height > 0 {
                self.adjust_mouse_region(width as u32, height as u32);
            }
        }
    }

    pub fn adjust_mouse_region(&mut self, width: u32, height: u32) {
        self.region = (width as f32, height as f32);
        self.mouse_x = self.mouse_x.clamp(0.0, self.region.0);
        self.mouse_y = self.mouse_y.clamp(0.0, self.region.1);
    }

    /// GUI cursor position (valid while in GUI mode).
    pub fn mouse_position(&self) -> (f32, f32) {
        (self.mouse_x, self.mouse_y)
    }

    fn reset_idle(&mut self, services: &mut Services<'_>) {
        if let Some(IdleEvent::VanityOff) = self.idle.reset() {
            services.world.toggle_vanity_mode(false);
        }
    }

    fn handle_mouse_motion(
        &mut self,
        dx: f32,
        dy: f32,
        x: f32,
        y: f32,
        wheel: i32,
        services: &mut Services<'_>,
    ) {
        self.reset_idle(services);

        if self.gui_cursor_enabled {
            // The GUI cursor has its own position so that game-mode mouse
            // look does not drag it around. The main menu releases the
            // pointer, so there it tracks the absolute position.
            if self.modes.contains(GuiMode::MainMenu) {
                self.mouse_x = x;
                self.mouse_y = y;
            } else {
                self.mouse_x += dx * self.settings.ui_sensitivity;
                self.mouse_y += dy * self.settings.ui_sensitivity * self.settings.ui_y_multiplier;
            }
            self.mouse_x = self.mouse_x.clamp(0.0, self.region.0);
            self.mouse_y = self.mouse_y.clamp(0.0, self.region.1);
            self.mouse_wheel += wheel;
            services
                .windows
                .inject_mouse_move(self.mouse_x, self.mouse_y, self.mouse_wheel);
        }

        if self.mouse_look_enabled {
            let yaw = dx * self.settings.camera_sensitivity * 0.2;
            let mut pitch = dy * self.settings.camera_sensitivity * 0.2
                * self.settings.camera_y_multiplier;
            if self.settings.invert_y {
                pitch = -pitch;
            }
            services.world.rotate_player(yaw, -pitch);
        }
    }

    fn handle_action(&mut self, action: Action, services: &mut Services<'_>) {
        match action {
            Action::GameMenu => self.toggle_main_menu(services),
            Action::Quit => {
                if !self.modes.is_gui_mode() {
                    services.session.request_quit();
                }
            }
            Action::Screenshot => {
                services.world.take_screenshot();
                services.windows.message_box("Screenshot saved");
            }
            Action::Inventory => self.toggle_mode(GuiMode::Inventory, services),
            Action::Console => self.toggle_console(services),
            Action::Activate => {
                self.reset_idle(services);
                services.world.activate_target();
            }
            Action::Journal => self.toggle_mode(GuiMode::Journal, services),
            Action::AutoMove => self.toggle_auto_move(),
            Action::Run => {
                if !self.modes.is_gui_mode() {
                    self.player.toggle_running();
                }
            }
            Action::ToggleWeapon => self.toggle_draw(DrawState::Weapon),
            Action::ToggleSpell => self.toggle_draw(DrawState::Spell),
            Action::Rest => self.rest(services),
            Action::QuickKeysMenu => {
                if !self.modes.is_gui_mode() {
                    self.push_gui_mode(GuiMode::QuickKeysMenu, services);
                }
            }
            Action::QuickKey1 => services.windows.activate_quick_key(1),
            Action::QuickKey2 => services.windows.activate_quick_key(2),
            Action::QuickKey3 => services.windows.activate_quick_key(3),
            Action::QuickKey4 => services.windows.activate_quick_key(4),
            Action::QuickKey5 => services.windows.activate_quick_key(5),
            Action::QuickKey6 => services.windows.activate_quick_key(6),
            Action::QuickKey7 => services.windows.activate_quick_key(7),
            Action::QuickKey8 => services.windows.activate_quick_key(8),
            Action::QuickKey9 => services.windows.activate_quick_key(9),
            Action::QuickKey10 => services.windows.activate_quick_key(10),
            Action::ToggleHud => services.windows.toggle_hud(),
            // Continuous actions: read from the channel each tick instead
            // of edge-firing. Crouch has no sneak toggle.
            Action::Use
            | Action::Jump
            | Action::Crouch
            | Action::TogglePov
            | Action::MoveForward
            | Action::MoveBackward
            | Action::MoveLeft
            | Action::MoveRight => {}
        }
    }

    fn toggle_main_menu(&mut self, services: &mut Services<'_>) {
        if self.modes.top() == Some(GuiMode::Video) {
            services.world.stop_video();
        } else if self.modes.contains(GuiMode::MainMenu) {
            self.pop_gui_mode(services);
        } else {
            self.push_gui_mode(GuiMode::MainMenu, services);
        }
    }

    fn toggle_console(&mut self, services: &mut Services<'_>) {
        // The console opens over any mode, but closes only itself.
        if self.modes.top() == Some(GuiMode::Console) {
            self.pop_gui_mode(services);
        } else {
            self.push_gui_mode(GuiMode::Console, services);
        }
    }

    /// Toggle between game mode and `mode`, leaving any other open mode
    /// alone.
    fn toggle_mode(&mut self, mode: GuiMode, services: &mut Services<'_>) {
        if !self.modes.is_gui_mode() {
            self.push_gui_mode(mode, services);
        } else if self.modes.top() == Some(mode) {
            self.pop_gui_mode(services);
        }
    }

    fn toggle_auto_move(&mut self) {
        if self.modes.is_gui_mode() {
            return;
        }
        if self.switches.get("playercontrols") {
            let auto = self.player.auto_move();
            self.player.set_auto_move(!auto);
        }
    }

    fn toggle_draw(&mut self, target: DrawState) {
        if self.modes.is_gui_mode() {
            return;
        }
        let next = if self.player.draw_state() == target {
            DrawState::Nothing
        } else {
            target
        };
        self.player.set_draw_state(next);
    }

    fn rest(&mut self, services: &mut Services<'_>) {
        if !services.windows.rest_enabled() || self.modes.is_gui_mode() {
            return;
        }
        self.push_gui_mode(GuiMode::Rest, services);
    }

    fn update_pov_latch(&mut self, dt: f32, services: &mut Services<'_>) {
        if self.channels.is_active(Action::TogglePov) {
            if self.preview_pov_delay <= 0.5 {
                self.preview_pov_delay += dt;
                if self.preview_pov_delay > 0.5 {
                    self.preview_pov_delay = 1.0;
                    services.world.toggle_preview_mode(true);
                }
            }
        } else {
            if self.preview_pov_delay > 0.5 {
                services.world.toggle_preview_mode(false);
            } else if self.preview_pov_delay > 0.0 {
                services.world.toggle_pov();
            }
            self.preview_pov_delay = 0.0;
        }
    }
}
