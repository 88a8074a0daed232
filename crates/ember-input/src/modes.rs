//! GUI mode stack
//!
//! Overlay UI modes form a stack: pushing opens a window over whatever was
//! active, popping returns to it. A non-empty stack means the game is in
//! GUI mode and world input is suppressed; the top entry decides routing.

/// An overlay UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiMode {
    MainMenu,
    Inventory,
    Console,
    Journal,
    Rest,
    QuickKeysMenu,
    Video,
}

/// Ordered stack of active UI modes. Starts empty (game mode).
pub struct ModeStack {
    stack: Vec<GuiMode>,
}

impl ModeStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, mode: GuiMode) {
        self.stack.push(mode);
    }

    pub fn pop(&mut self) -> Option<GuiMode> {
        self.stack.pop()
    }

    /// The mode input is currently routed to.
    pub fn top(&self) -> Option<GuiMode> {
        self.stack.last().copied()
    }

    pub fn contains(&self, mode: GuiMode) -> bool {
        self.stack.contains(&mode)
    }

    /// True while any mode is open; game-world actions are suppressed.
    pub fn is_gui_mode(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_in_game_mode() {
        let stack = ModeStack::new();
        assert!(!stack.is_gui_mode());
        assert_eq!(stack.top(), None);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn push_and_pop_discipline() {
        let mut stack = ModeStack::new();
        stack.push(GuiMode::Inventory);
        stack.push(GuiMode::Console);

        assert!(stack.is_gui_mode());
        assert_eq!(stack.top(), Some(GuiMode::Console));
        assert!(stack.contains(GuiMode::Inventory));

        assert_eq!(stack.pop(), Some(GuiMode::Console));
        assert_eq!(stack.top(), Some(GuiMode::Inventory));
        assert_eq!(stack.pop(), Some(GuiMode::Inventory));
        assert!(!stack.is_gui_mode());
        assert_eq!(stack.pop(), None);
    }
}
