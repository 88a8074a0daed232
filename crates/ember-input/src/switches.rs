//! Named control switches
//!
//! Boolean gates that game logic flips to disable whole categories of
//! input (scripted sequences, paralysis, cutscenes). The switch store is a
//! plain map; the cleanup obligations that come with flipping a switch live
//! in the dispatcher, which knows the player intent and world collaborator.

use std::collections::HashMap;

/// The seven switches the engine defines, all on by default.
pub const CONTROL_SWITCHES: [&str; 7] = [
    "playercontrols",
    "playerfighting",
    "playerjumping",
    "playerlooking",
    "playermagic",
    "playerviewswitch",
    "vanitymode",
];

/// Map of named boolean control switches.
pub struct ControlSwitches {
    switches: HashMap<String, bool>,
}

impl ControlSwitches {
    /// All engine switches seeded to `true`.
    pub fn new() -> Self {
        let mut switches = HashMap::new();
        for name in CONTROL_SWITCHES {
            switches.insert(name.to_string(), true);
        }
        Self { switches }
    }

    /// Read a switch. Unknown names read as `false`.
    pub fn get(&self, name: &str) -> bool {
        self.switches.get(name).copied().unwrap_or(false)
    }

    /// Store a switch value. Unknown names are tolerated and stored.
    pub fn set(&mut self, name: &str, value: bool) {
        self.switches.insert(name.to_string(), value);
    }
}

impl Default for ControlSwitches {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_switches_start_on() {
        let switches = ControlSwitches::new();
        for name in CONTROL_SWITCHES {
            assert!(switches.get(name), "{name} should start true");
        }
    }

    #[test]
    fn unknown_switch_reads_false() {
        let switches = ControlSwitches::new();
        assert!(!switches.get("no_such_switch"));
    }

    #[test]
    fn unknown_switch_can_be_stored() {
        let mut switches = ControlSwitches::new();
        switches.set("modswitch", true);
        assert!(switches.get("modswitch"));
    }
}
