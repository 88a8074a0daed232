//! Binding store — action to physical-control associations
//!
//! Each action holds at most one binding, and each control drives at most
//! one action. Bindings persist as a TOML table keyed by the action's
//! stable numeric id, so a file written by an older build stays valid when
//! new actions are appended.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use crate::{Action, Control};
use ember_core::{EmberError, Result};

#[derive(Serialize, Deserialize)]
struct BindingsFile {
    bindings: BTreeMap<String, Control>,
}

/// Maps actions to physical controls.
#[derive(Debug)]
pub struct BindingStore {
    bindings: HashMap<Action, Control>,
}

impl BindingStore {
    /// An empty store. Call [`ensure_defaults`](Self::ensure_defaults) to
    /// populate it.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// A store holding exactly the default table.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store.ensure_defaults();
        store
    }

    // Hardcoded defaults are unavoidable if configuration files are to stay
    // valid across versions: a newly added action must pick up its default
    // without touching anything the user already bound.
    fn defaults() -> Vec<(Action, Control)> {
        vec![
            (Action::Activate, Control::Key(KeyCode::Space)),
            (Action::MoveBackward, Control::Key(KeyCode::KeyS)),
            (Action::MoveForward, Control::Key(KeyCode::KeyW)),
            (Action::MoveLeft, Control::Key(KeyCode::KeyA)),
            (Action::MoveRight, Control::Key(KeyCode::KeyD)),
            (Action::ToggleWeapon, Control::Key(KeyCode::KeyF)),
            (Action::ToggleSpell, Control::Key(KeyCode::KeyR)),
            (Action::QuickKeysMenu, Control::Key(KeyCode::F1)),
            (Action::Console, Control::Key(KeyCode::F2)),
            (Action::Crouch, Control::Key(KeyCode::ControlLeft)),
            (Action::AutoMove, Control::Key(KeyCode::KeyQ)),
            (Action::Jump, Control::Key(KeyCode::KeyE)),
            (Action::Journal, Control::Key(KeyCode::KeyJ)),
            (Action::Rest, Control::Key(KeyCode::KeyT)),
            (Action::GameMenu, Control::Key(KeyCode::Escape)),
            (Action::TogglePov, Control::Key(KeyCode::Tab)),
            (Action::QuickKey1, Control::Key(KeyCode::Digit1)),
            (Action::QuickKey2, Control::Key(KeyCode::Digit2)),
            (Action::QuickKey3, Control::Key(KeyCode::Digit3)),
            (Action::QuickKey4, Control::Key(KeyCode::Digit4)),
            (Action::QuickKey5, Control::Key(KeyCode::Digit5)),
            (Action::QuickKey6, Control::Key(KeyCode::Digit6)),
            (Action::QuickKey7, Control::Key(KeyCode::Digit7)),
            (Action::QuickKey8, Control::Key(KeyCode::Digit8)),
            (Action::QuickKey9, Control::Key(KeyCode::Digit9)),
            (Action::QuickKey10, Control::Key(KeyCode::Digit0)),
            (Action::ToggleHud, Control::Key(KeyCode::F12)),
            (Action::Inventory, Control::MouseButton(1)),
            (Action::Use, Control::MouseButton(0)),
        ]
    }

    /// Bind `action` to `control`, dropping any previous binding for the
    /// action and releasing the control from whatever action held it.
    pub fn bind(&mut self, action: Action, control: Control) {
        self.bindings.retain(|_, bound| *bound != control);
        self.bindings.insert(action, control);
    }

    /// Remove the binding for `action`, if any.
    pub fn unbind(&mut self, action: Action) {
        self.bindings.remove(&action);
    }

    /// The control bound to `action`, or `None` if unbound.
    pub fn binding(&self, action: Action) -> Option<Control> {
        self.bindings.get(&action).copied()
    }

    /// Display name for the bindings UI, `"None"` when unbound.
    pub fn binding_name(&self, action: Action) -> String {
        match self.binding(action) {
            Some(control) => control.display_name(),
            None => "None".to_string(),
        }
    }

    /// The action driven by `control`, if any.
    pub fn action_for(&self, control: Control) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, bound)| **bound == control)
            .map(|(action, _)| *action)
    }

    /// Fill in defaults for unbound actions only. User bindings are left
    /// alone, and a default whose control the user bound elsewhere is
    /// skipped rather than stolen.
    pub fn ensure_defaults(&mut self) {
        for (action, control) in Self::defaults() {
            if self.bindings.contains_key(&action) {
                continue;
            }
            if self.action_for(control).is_some() {
                continue;
            }
            self.bindings.insert(action, control);
        }
    }

    /// Overwrite every binding with the default table.
    pub fn reset_to_defaults(&mut self) {
        self.bindings.clear();
        self.ensure_defaults();
    }

    /// Write all bindings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut table = BTreeMap::new();
        for (action, control) in &self.bindings {
            table.insert(action.id().to_string(), *control);
        }
        let content = toml::to_string_pretty(&BindingsFile { bindings: table })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load bindings from a TOML file, then lazily fill defaults for any
    /// action the file does not mention. Ids the current build does not
    /// know are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: BindingsFile = toml::from_str(&content)
            .map_err(|e| EmberError::BindingError(format!("malformed bindings file: {e}")))?;
        let mut store = Self::new();
        for (key, control) in file.bindings {
            let Ok(id) = key.parse::<u32>() else { continue };
            let Some(action) = Action::from_id(id) else {
                continue;
            };
            store.bind(action, control);
        }
        store.ensure_defaults();
        Ok(store)
    }

    /// Default user-scoped bindings path: `<config dir>/ember/bindings.toml`.
    pub fn default_user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ember").join("bindings.toml"))
    }
}

impl Default for BindingStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PovAxis;

    #[test]
    fn defaults_cover_expected_actions() {
        let store = BindingStore::with_defaults();
        assert_eq!(
            store.binding(Action::MoveForward),
            Some(Control::Key(KeyCode::KeyW))
        );
        assert_eq!(store.binding(Action::Use), Some(Control::MouseButton(0)));
        assert_eq!(
            store.binding(Action::Inventory),
            Some(Control::MouseButton(1))
        );
        // Quit and Screenshot ship unbound.
        assert_eq!(store.binding(Action::Quit), None);
        assert_eq!(store.binding(Action::Screenshot), None);
    }

    #[test]
    fn rebind_leaves_exactly_one_binding() {
        let mut store = BindingStore::with_defaults();
        store.bind(Action::Jump, Control::Key(KeyCode::KeyZ));
        store.bind(Action::Jump, Control::Key(KeyCode::KeyX));
        assert_eq!(store.binding(Action::Jump), Some(Control::Key(KeyCode::KeyX)));
        assert_eq!(store.action_for(Control::Key(KeyCode::KeyZ)), None);
    }

    #[test]
    fn control_moves_between_actions() {
        let mut store = BindingStore::with_defaults();
        // W currently drives MoveForward; give it to Jump.
        store.bind(Action::Jump, Control::Key(KeyCode::KeyW));
        assert_eq!(store.binding(Action::MoveForward), None);
        assert_eq!(store.binding(Action::Jump), Some(Control::Key(KeyCode::KeyW)));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = BindingStore::with_defaults();
        store.bind(Action::MoveForward, Control::Key(KeyCode::ArrowUp));
        store.unbind(Action::Journal);
        store.reset_to_defaults();
        assert_eq!(
            store.binding(Action::MoveForward),
            Some(Control::Key(KeyCode::KeyW))
        );
        assert_eq!(
            store.binding(Action::Journal),
            Some(Control::Key(KeyCode::KeyJ))
        );
    }

    #[test]
    fn ensure_defaults_does_not_steal_user_controls() {
        let mut store = BindingStore::new();
        store.bind(Action::Jump, Control::Key(KeyCode::KeyW));
        store.ensure_defaults();
        // W stays on Jump; MoveForward goes without rather than stealing it.
        assert_eq!(store.binding(Action::Jump), Some(Control::Key(KeyCode::KeyW)));
        assert_eq!(store.binding(Action::MoveForward), None);
    }

    #[test]
    fn save_load_round_trip() {
        let dir = std::env::temp_dir().join("ember_bindings_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("roundtrip.toml");

        let mut store = BindingStore::with_defaults();
        store.bind(Action::Jump, Control::Key(KeyCode::KeyZ));
        store.bind(
            Action::Use,
            Control::JoyButton {
                device: 0,
                button: 2,
            },
        );
        store.bind(
            Action::TogglePov,
            Control::JoyPov {
                device: 0,
                pov: 1,
                axis: PovAxis::EastWest,
            },
        );
        store.save(&path).expect("save failed");

        let loaded = BindingStore::load(&path).expect("load failed");
        for action in Action::ALL {
            assert_eq!(loaded.binding(action), store.binding(action), "{action:?}");
        }

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_fills_missing_actions_with_defaults() {
        let dir = std::env::temp_dir().join("ember_bindings_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("partial.toml");

        // A file that only mentions Jump.
        let mut sparse = BindingStore::new();
        sparse.bind(Action::Jump, Control::Key(KeyCode::KeyZ));
        sparse.save(&path).expect("save failed");

        let loaded = BindingStore::load(&path).expect("load failed");
        assert_eq!(loaded.binding(Action::Jump), Some(Control::Key(KeyCode::KeyZ)));
        // Everything the file does not mention picks up its default.
        assert_eq!(
            loaded.binding(Action::MoveForward),
            Some(Control::Key(KeyCode::KeyW))
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = std::env::temp_dir().join("ember_bindings_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("malformed.toml");
        std::fs::write(&path, "this is not = [valid").unwrap();

        let err = BindingStore::load(&path).unwrap_err();
        assert!(matches!(err, EmberError::BindingError(_)), "{err}");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn binding_name_none_sentinel() {
        let store = BindingStore::with_defaults();
        assert_eq!(store.binding_name(Action::Quit), "None");
        assert_eq!(store.binding_name(Action::MoveForward), "KeyW");
    }
}
