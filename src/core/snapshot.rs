use glam::Vec2;

use super::controller::{Button, Controller};

/// Plain per-frame input sample.
///
/// Hosts that poll input on their own fill one of these each frame and hand
/// it to the camera. Cursor requests are recorded and left for the host to
/// act on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub pointer: Vec2,
    pub scroll: f32,
    pub down: Vec<Button>,
    pub cursor_disabled: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the pointer at `pointer` and the given buttons held
    pub fn with_state(pointer: Vec2, down: &[Button]) -> Self {
        Self {
            pointer,
            down: down.to_vec(),
            ..Self::default()
        }
    }

    pub fn press(&mut self, button: Button) {
        if !self.down.contains(&button) {
            self.down.push(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        self.down.retain(|&b| b != button);
    }

    /// Move the pointer by a relative amount
    pub fn move_pointer(&mut self, dx: f32, dy: f32) {
        self.pointer += Vec2::new(dx, dy);
    }
}

impl Controller for InputSnapshot {
    fn is_down(&self, button: Button) -> bool {
        self.down.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.down
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll
    }

    fn disable_cursor(&mut self) {
        self.cursor_disabled = true;
    }
}
