//! Physical controls and raw device events

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

/// One axis of a joystick POV hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PovAxis {
    EastWest,
    NorthSouth,
}

/// A physical input a binding can point at.
///
/// Mouse buttons are 0-indexed (0 = left). Joystick controls are raw
/// device/element indices as reported by the device layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Key(KeyCode),
    MouseButton(u32),
    JoyButton { device: u32, button: u32 },
    JoyAxis { device: u32, axis: u32 },
    JoyPov { device: u32, pov: u32, axis: PovAxis },
    JoySlider { device: u32, slider: u32 },
}

impl Control {
    /// Name shown in the bindings UI, e.g. "Mouse 1" or "KeyW".
    pub fn display_name(&self) -> String {
        match self {
            Control::Key(key) => format!("{key:?}"),
            Control::MouseButton(button) => format!("Mouse {}", button + 1),
            Control::JoyButton { button, .. } => format!("Joy Button {}", button + 1),
            Control::JoyAxis { axis, .. } => format!("Joy Axis {}", axis + 1),
            Control::JoyPov { pov, axis, .. } => {
                let direction = match axis {
                    PovAxis::EastWest => "E/W",
                    PovAxis::NorthSouth => "N/S",
                };
                format!("Joy POV {} {direction}", pov + 1)
            }
            Control::JoySlider { slider, .. } => format!("Joy Slider {}", slider + 1),
        }
    }
}

/// One raw sample from the device layer.
///
/// Axis, POV and slider values are in [-1, 1]; sliders report [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyPressed(KeyCode),
    KeyReleased(KeyCode),
    MouseButtonPressed(u32),
    MouseButtonReleased(u32),
    /// Relative motion plus the absolute cursor position and wheel delta.
    MouseMoved {
        dx: f32,
        dy: f32,
        x: f32,
        y: f32,
        wheel: i32,
    },
    JoyAxisMoved { device: u32, axis: u32, value: f32 },
    JoyButtonPressed { device: u32, button: u32 },
    JoyButtonReleased { device: u32, button: u32 },
    JoyPovMoved { device: u32, pov: u32, axis: PovAxis, value: f32 },
    JoySliderMoved { device: u32, slider: u32, value: f32 },
}

impl InputEvent {
    /// The control this event would bind in detect-mode, if it qualifies.
    ///
    /// Presses and deflections past half travel qualify; releases and mouse
    /// motion never do (mouse axes are explicitly not bindable).
    pub fn bindable_control(&self) -> Option<Control> {
        match *self {
            InputEvent::KeyPressed(key) => Some(Control::Key(key)),
            InputEvent::MouseButtonPressed(button) => Some(Control::MouseButton(button)),
            InputEvent::JoyButtonPressed { device, button } => {
                Some(Control::JoyButton { device, button })
            }
            InputEvent::JoyAxisMoved { device, axis, value } if value > 0.5 => {
                Some(Control::JoyAxis { device, axis })
            }
            InputEvent::JoyPovMoved {
                device,
                pov,
                axis,
                value,
            } if value.abs() > 0.5 => Some(Control::JoyPov { device, pov, axis }),
            InputEvent::JoySliderMoved {
                device,
                slider,
                value,
            } if value > 0.5 => Some(Control::JoySlider { device, slider }),
            _ => None,
        }
    }
}
