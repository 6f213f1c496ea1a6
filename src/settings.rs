use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::controller::Button;

pub const MOUSE_SENSITIVITY: f32 = 0.003;
pub const MOVEMENT_DIVISOR: f32 = 20.0;
pub const PITCH_LIMIT_DEGREES: f32 = 85.0;
pub const FOCUS_DISTANCE: f32 = 25.0;
pub const EYE_HEIGHT: f32 = 1.85;

/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Back,
    Right,
    Left,
    Up,
    Down,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 6] = [
        MoveDirection::Forward,
        MoveDirection::Back,
        MoveDirection::Right,
        MoveDirection::Left,
        MoveDirection::Up,
        MoveDirection::Down,
    ];
}

/// Which button drives each movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementKeyBindings {
    pub forward: Button,
    pub back: Button,
    pub right: Button,
    pub left: Button,
    pub up: Button,
    pub down: Button,
}

impl MovementKeyBindings {
    pub const fn key(&self, direction: MoveDirection) -> Button {
        match direction {
            MoveDirection::Forward => self.forward,
            MoveDirection::Back => self.back,
            MoveDirection::Right => self.right,
            MoveDirection::Left => self.left,
            MoveDirection::Up => self.up,
            MoveDirection::Down => self.down,
        }
    }
}

impl Default for MovementKeyBindings {
    fn default() -> Self {
        Self {
            forward: Button::KeyW,
            back: Button::KeyS,
            right: Button::KeyD,
            left: Button::KeyA,
            up: Button::KeyE,
            down: Button::KeyQ,
        }
    }
}

/// Camera tuning, fixed once the camera is built
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Radians of rotation per pixel of pointer movement
    pub mouse_sensitivity: f32,
    /// Each held key moves the camera 1/divisor units per frame
    pub movement_divisor: f32,
    /// Pitch is clamped to +/- this many degrees
    pub pitch_limit_degrees: f32,
    /// Distance from position to target
    pub focus_distance: f32,
    pub eye_height: f32,
    pub bindings: MovementKeyBindings,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: MOUSE_SENSITIVITY,
            movement_divisor: MOVEMENT_DIVISOR,
            pitch_limit_degrees: PITCH_LIMIT_DEGREES,
            focus_distance: FOCUS_DISTANCE,
            eye_height: EYE_HEIGHT,
            bindings: MovementKeyBindings::default(),
        }
    }
}

impl CameraSettings {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera settings: {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid camera settings in {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(text).context("Failed to parse camera settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.movement_divisor.is_finite() || self.movement_divisor == 0.0 {
            bail!(
                "movement_divisor must be finite and non-zero, got {}",
                self.movement_divisor
            );
        }
        if !(self.pitch_limit_degrees > 0.0 && self.pitch_limit_degrees < 90.0) {
            bail!(
                "pitch_limit_degrees must be within (0, 90), got {}",
                self.pitch_limit_degrees
            );
        }
        if !(self.focus_distance > 0.0) || !self.focus_distance.is_finite() {
            bail!("focus_distance must be positive, got {}", self.focus_distance);
        }
        if !self.mouse_sensitivity.is_finite() || !self.eye_height.is_finite() {
            bail!("mouse_sensitivity and eye_height must be finite");
        }
        Ok(())
    }

    /// Pitch bound in radians
    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit_degrees.to_radians()
    }
}
