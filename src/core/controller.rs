use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyR,
    KeyF,
    KeyC,
    Space,
    Shift,
    Control,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Controller - the host's view of input for the current frame
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Current pointer position in window coordinates
    fn pointer_position(&self) -> Vec2;

    /// Scroll wheel movement accumulated this frame, in lines
    fn scroll_delta(&self) -> f32;

    /// Ask the host to hide the cursor and lock it to the window
    fn disable_cursor(&mut self);
}
