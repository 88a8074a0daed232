//! Logical game actions
//!
//! Every action carries a stable numeric id that persisted binding files
//! key on. Adding an action means appending a new discriminant; existing
//! ids are never renumbered or reinterpreted, so old configuration files
//! keep working across versions.

/// A logical game command, independent of the physical control bound to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Action {
    GameMenu = 0,
    Quit = 1,
    Screenshot = 2,
    Inventory = 3,
    Console = 4,
    MoveLeft = 5,
    MoveRight = 6,
    MoveForward = 7,
    MoveBackward = 8,
    Activate = 9,
    Use = 10,
    Jump = 11,
    ToggleWeapon = 12,
    ToggleSpell = 13,
    TogglePov = 14,
    AutoMove = 15,
    Rest = 16,
    Journal = 17,
    Run = 18,
    Crouch = 19,
    QuickKeysMenu = 20,
    QuickKey1 = 21,
    QuickKey2 = 22,
    QuickKey3 = 23,
    QuickKey4 = 24,
    QuickKey5 = 25,
    QuickKey6 = 26,
    QuickKey7 = 27,
    QuickKey8 = 28,
    QuickKey9 = 29,
    QuickKey10 = 30,
    ToggleHud = 31,
}

impl Action {
    /// Every action, in id order.
    pub const ALL: [Action; 32] = [
        Action::GameMenu,
        Action::Quit,
        Action::Screenshot,
        Action::Inventory,
        Action::Console,
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveForward,
        Action::MoveBackward,
        Action::Activate,
        Action::Use,
        Action::Jump,
        Action::ToggleWeapon,
        Action::ToggleSpell,
        Action::TogglePov,
        Action::AutoMove,
        Action::Rest,
        Action::Journal,
        Action::Run,
        Action::Crouch,
        Action::QuickKeysMenu,
        Action::QuickKey1,
        Action::QuickKey2,
        Action::QuickKey3,
        Action::QuickKey4,
        Action::QuickKey5,
        Action::QuickKey6,
        Action::QuickKey7,
        Action::QuickKey8,
        Action::QuickKey9,
        Action::QuickKey10,
        Action::ToggleHud,
    ];

    /// The stable id this action is persisted under.
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Look up an action by its persisted id.
    pub fn from_id(id: u32) -> Option<Action> {
        Action::ALL.iter().copied().find(|a| a.id() == id)
    }

    /// Description shown in the controls menu, or `None` for actions the
    /// player cannot reconfigure.
    pub fn description(self) -> Option<&'static str> {
        match self {
            Action::Inventory => Some("Inventory"),
            Action::Console => Some("Console"),
            Action::MoveLeft => Some("Left"),
            Action::MoveRight => Some("Right"),
            Action::MoveForward => Some("Forward"),
            Action::MoveBackward => Some("Back"),
            Action::Activate => Some("Activate"),
            Action::Jump => Some("Jump"),
            Action::ToggleWeapon => Some("Ready Weapon"),
            Action::ToggleSpell => Some("Ready Magic"),
            Action::TogglePov => Some("Toggle POV"),
            Action::AutoMove => Some("Auto Run"),
            Action::Rest => Some("Rest"),
            Action::Journal => Some("Journal"),
            Action::Crouch => Some("Crouch/Sneak"),
            Action::QuickKeysMenu => Some("Quick Menu"),
            Action::QuickKey1 => Some("Quick 1"),
            Action::QuickKey2 => Some("Quick 2"),
            Action::QuickKey3 => Some("Quick 3"),
            Action::QuickKey4 => Some("Quick 4"),
            Action::QuickKey5 => Some("Quick 5"),
            Action::QuickKey6 => Some("Quick 6"),
            Action::QuickKey7 => Some("Quick 7"),
            Action::QuickKey8 => Some("Quick 8"),
            Action::QuickKey9 => Some("Quick 9"),
            Action::QuickKey10 => Some("Quick 10"),
            _ => None,
        }
    }

    /// Fixed presentation order for the controls menu: movement first,
    /// quick keys last.
    pub fn sorted_for_display() -> Vec<Action> {
        vec![
            Action::MoveForward,
            Action::MoveBackward,
            Action::MoveLeft,
            Action::MoveRight,
            Action::TogglePov,
            Action::Crouch,
            Action::Activate,
            Action::ToggleWeapon,
            Action::ToggleSpell,
            Action::AutoMove,
            Action::Jump,
            Action::Inventory,
            Action::Journal,
            Action::Rest,
            Action::Console,
            Action::QuickKeysMenu,
            Action::QuickKey1,
            Action::QuickKey2,
            Action::QuickKey3,
            Action::QuickKey4,
            Action::QuickKey5,
            Action::QuickKey6,
            Action::QuickKey7,
            Action::QuickKey8,
            Action::QuickKey9,
            Action::QuickKey10,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_id(action.id()), Some(action));
        }
    }

    #[test]
    fn ids_are_dense_and_stable() {
        for (index, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.id(), index as u32);
        }
        // Spot-check a few pins; these must never change.
        assert_eq!(Action::GameMenu.id(), 0);
        assert_eq!(Action::Use.id(), 10);
        assert_eq!(Action::QuickKey10.id(), 30);
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(Action::from_id(9999), None);
    }

    #[test]
    fn display_order_contains_only_configurable_actions() {
        for action in Action::sorted_for_display() {
            assert!(action.description().is_some(), "{action:?} has no description");
        }
    }

    #[test]
    fn non_configurable_actions_have_no_description() {
        assert_eq!(Action::Quit.description(), None);
        assert_eq!(Action::Screenshot.description(), None);
        assert_eq!(Action::GameMenu.description(), None);
    }
}
