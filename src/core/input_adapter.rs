use glam::Vec2;
use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Pixels per scroll line when the platform reports pixel deltas
const PIXELS_PER_LINE: f32 = 120.0;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Pointer position. Driven by raw mouse motion while the cursor is
    /// disabled, by cursor events otherwise.
    pointer: Vec2,
    /// Scroll lines accumulated since last reset
    scroll: f32,
    cursor_disabled: bool,
    /// Set by `disable_cursor`, cleared once the host applies it
    cursor_request: bool,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            pointer: Vec2::ZERO,
            scroll: 0.0,
            cursor_disabled: false,
            cursor_request: false,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_button(btn, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if !self.cursor_disabled {
                    self.pointer = Vec2::new(position.x as f32, position.y as f32);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.scroll += lines;
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Process a raw device event. Only mouse motion is used, and only while
    /// the cursor is disabled, where the OS stops reporting cursor moves.
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.cursor_disabled {
                self.add_motion(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    /// Reset per-frame state (scroll)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.scroll = 0.0;
    }

    /// Returns true once after `disable_cursor` was called
    pub fn take_cursor_request(&mut self) -> bool {
        std::mem::take(&mut self.cursor_request)
    }

    pub fn is_cursor_disabled(&self) -> bool {
        self.cursor_disabled
    }

    fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    fn add_motion(&mut self, dx: f32, dy: f32) {
        self.pointer += Vec2::new(dx, dy);
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyR => Some(Button::KeyR),
            KeyCode::KeyF => Some(Button::KeyF),
            KeyCode::KeyC => Some(Button::KeyC),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::ControlLeft | KeyCode::ControlRight => Some(Button::Control),
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll
    }

    fn disable_cursor(&mut self) {
        self.cursor_disabled = true;
        self.cursor_request = true;
    }
}
