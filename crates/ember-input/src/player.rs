//! Player movement intent and draw state

/// What the player's hands are readied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    Nothing,
    Weapon,
    Spell,
}

/// Movement intent written by the input layer, read by the simulation.
///
/// Directional intents are −1, 0 or 1; actual movement happens in the
/// physics step, which consumes this each tick.
pub struct PlayerIntent {
    forward_backward: f32,
    left_right: f32,
    up_down: f32,
    auto_move: bool,
    running: bool,
    draw_state: DrawState,
}

impl PlayerIntent {
    pub fn new() -> Self {
        Self {
            forward_backward: 0.0,
            left_right: 0.0,
            up_down: 0.0,
            auto_move: false,
            running: true,
            draw_state: DrawState::Nothing,
        }
    }

    pub fn forward_backward(&self) -> f32 {
        self.forward_backward
    }

    pub fn set_forward_backward(&mut self, value: f32) {
        self.forward_backward = value;
    }

    pub fn left_right(&self) -> f32 {
        self.left_right
    }

    pub fn set_left_right(&mut self, value: f32) {
        self.left_right = value;
    }

    pub fn up_down(&self) -> f32 {
        self.up_down
    }

    pub fn set_up_down(&mut self, value: f32) {
        self.up_down = value;
    }

    pub fn auto_move(&self) -> bool {
        self.auto_move
    }

    pub fn set_auto_move(&mut self, auto_move: bool) {
        self.auto_move = auto_move;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    pub fn draw_state(&self) -> DrawState {
        self.draw_state
    }

    pub fn set_draw_state(&mut self, state: DrawState) {
        self.draw_state = state;
    }

    /// Zero every movement intent and cancel auto-move. Used when player
    /// controls are switched off.
    pub fn clear_movement(&mut self) {
        self.forward_backward = 0.0;
        self.left_right = 0.0;
        self.up_down = 0.0;
        self.auto_move = false;
    }
}

impl Default for PlayerIntent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_movement_zeroes_everything() {
        let mut player = PlayerIntent::new();
        player.set_forward_backward(1.0);
        player.set_left_right(-1.0);
        player.set_up_down(1.0);
        player.set_auto_move(true);

        player.clear_movement();
        assert_eq!(player.forward_backward(), 0.0);
        assert_eq!(player.left_right(), 0.0);
        assert_eq!(player.up_down(), 0.0);
        assert!(!player.auto_move());
    }

    #[test]
    fn running_toggles() {
        let mut player = PlayerIntent::new();
        assert!(player.running());
        player.toggle_running();
        assert!(!player.running());
    }
}
