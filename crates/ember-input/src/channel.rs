//! Device state tracking and per-action channels
//!
//! Channels are transient: recomputed every tick from the bound control's
//! current state. Keys and buttons read 0 or 1; axes read their positive
//! deflection clamped to [0, 1] (bindings fire in the increase direction).

use std::collections::{HashMap, HashSet};

use winit::keyboard::KeyCode;

use crate::{Action, BindingStore, Control, InputEvent, PovAxis};

/// Current state of all input devices, fed from raw events.
#[derive(Default)]
pub struct DeviceState {
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<u32>,
    joy_buttons_down: HashSet<(u32, u32)>,
    joy_axes: HashMap<(u32, u32), f32>,
    joy_povs: HashMap<(u32, u32, PovAxis), f32>,
    joy_sliders: HashMap<(u32, u32), f32>,
}

impl DeviceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one raw event into the device state. Mouse motion carries no
    /// persistent state and is ignored here.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyPressed(key) => {
                self.keys_down.insert(key);
            }
            InputEvent::KeyReleased(key) => {
                self.keys_down.remove(&key);
            }
            InputEvent::MouseButtonPressed(button) => {
                self.mouse_buttons_down.insert(button);
            }
            InputEvent::MouseButtonReleased(button) => {
                self.mouse_buttons_down.remove(&button);
            }
            InputEvent::MouseMoved { .. } => {}
            InputEvent::JoyAxisMoved { device, axis, value } => {
                self.joy_axes.insert((device, axis), value);
            }
            InputEvent::JoyButtonPressed { device, button } => {
                self.joy_buttons_down.insert((device, button));
            }
            InputEvent::JoyButtonReleased { device, button } => {
                self.joy_buttons_down.remove(&(device, button));
            }
            InputEvent::JoyPovMoved {
                device,
                pov,
                axis,
                value,
            } => {
                self.joy_povs.insert((device, pov, axis), value);
            }
            InputEvent::JoySliderMoved {
                device,
                slider,
                value,
            } => {
                self.joy_sliders.insert((device, slider), value);
            }
        }
    }

    /// Current channel contribution of a control, in [0, 1].
    pub fn value(&self, control: Control) -> f32 {
        match control {
            Control::Key(key) => bool_value(self.keys_down.contains(&key)),
            Control::MouseButton(button) => {
                bool_value(self.mouse_buttons_down.contains(&button))
            }
            Control::JoyButton { device, button } => {
                bool_value(self.joy_buttons_down.contains(&(device, button)))
            }
            Control::JoyAxis { device, axis } => self
                .joy_axes
                .get(&(device, axis))
                .copied()
                .unwrap_or(0.0)
                .clamp(0.0, 1.0),
            Control::JoyPov { device, pov, axis } => self
                .joy_povs
                .get(&(device, pov, axis))
                .copied()
                .unwrap_or(0.0)
                .clamp(0.0, 1.0),
            Control::JoySlider { device, slider } => self
                .joy_sliders
                .get(&(device, slider))
                .copied()
                .unwrap_or(0.0)
                .clamp(0.0, 1.0),
        }
    }
}

fn bool_value(down: bool) -> f32 {
    if down {
        1.0
    } else {
        0.0
    }
}

/// One channel transition observed during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelChange {
    pub action: Action,
    pub previous: f32,
    pub value: f32,
}

impl ChannelChange {
    /// True when the channel rose to full deflection this tick.
    pub fn is_rising_edge(&self) -> bool {
        self.value == 1.0 && self.previous != 1.0
    }
}

/// Per-action channel values and edge detection.
pub struct Channels {
    values: HashMap<Action, f32>,
}

impl Channels {
    pub fn new() -> Self {
        let mut values = HashMap::new();
        for action in Action::ALL {
            values.insert(action, 0.0);
        }
        Self { values }
    }

    /// Recompute every channel from the bound controls' current state.
    /// Returns every channel whose value changed this tick, in id order.
    /// Rising and falling edges alike are reported; held channels are not.
    pub fn update(&mut self, bindings: &BindingStore, device: &DeviceState) -> Vec<ChannelChange> {
        let mut changes = Vec::new();
        for action in Action::ALL {
            let value = match bindings.binding(action) {
                Some(control) => device.value(control),
                None => 0.0,
            };
            let previous = self.values.insert(action, value).unwrap_or(0.0);
            if value != previous {
                changes.push(ChannelChange {
                    action,
                    previous,
                    value,
                });
            }
        }
        changes
    }

    /// Current channel value for an action.
    pub fn value(&self, action: Action) -> f32 {
        self.values.get(&action).copied().unwrap_or(0.0)
    }

    /// True while the channel reads exactly 1.
    pub fn is_active(&self, action: Action) -> bool {
        self.value(action) == 1.0
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
