use anyhow::Result;
use glam::{Vec2, Vec3};
use log::{debug, trace};

use crate::core::controller::Controller;
use crate::pose::{CameraMode, CameraPose};
use crate::settings::{CameraSettings, MoveDirection, MovementKeyBindings};

/// Held state of the six movement directions for one frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub back: bool,
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementState {
    pub fn sample<C: Controller + ?Sized>(input: &C, bindings: &MovementKeyBindings) -> Self {
        let held = |direction: MoveDirection| input.is_down(bindings.key(direction));
        Self {
            forward: held(MoveDirection::Forward),
            back: held(MoveDirection::Back),
            right: held(MoveDirection::Right),
            left: held(MoveDirection::Left),
            up: held(MoveDirection::Up),
            down: held(MoveDirection::Down),
        }
    }

    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// (forward, right, up) axis values in {-1, 0, 1}
    pub const fn velocity(&self) -> (f32, f32, f32) {
        (
            Self::to_direction(self.forward, self.back),
            Self::to_direction(self.right, self.left),
            Self::to_direction(self.up, self.down),
        )
    }

    pub const fn is_moving(&self) -> bool {
        self.forward || self.back || self.right || self.left || self.up || self.down
    }
}

/// First-person camera controller.
///
/// Yaw rotates about +Y; with yaw and pitch at zero the camera looks down -Z.
/// The camera walks at a fixed eye height: vertical movement is computed but
/// the height is reset at the end of every update.
#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    settings: CameraSettings,
    yaw: f32,
    pitch: f32,
    previous_pointer: Vec2,
}

impl FirstPersonCamera {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            settings,
            yaw: 0.0,
            pitch: 0.0,
            previous_pointer: Vec2::ZERO,
        }
    }

    /// Like `new`, but rejects settings that fail `CameraSettings::validate`
    pub fn try_new(settings: CameraSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::new(settings))
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Reset the pose to its defaults, take first-person control of it and
    /// ask the host to lock the cursor.
    pub fn init<C: Controller + ?Sized>(&mut self, pose: &mut CameraPose, input: &mut C) {
        *pose = CameraPose {
            mode: CameraMode::FirstPerson,
            ..CameraPose::default()
        };
        input.disable_cursor();
        self.previous_pointer = input.pointer_position();

        debug!(
            "First-person camera initialised at {:?}, eye height {}",
            pose.position, self.settings.eye_height
        );
    }

    /// Advance one frame. Call once per frame after input polling, before render.
    pub fn update<C: Controller + ?Sized>(&mut self, pose: &mut CameraPose, input: &C) {
        let pointer = input.pointer_position();
        let delta = pointer - self.previous_pointer;
        self.previous_pointer = pointer;

        let movement = MovementState::sample(input, &self.settings.bindings);

        self.rotate(delta);
        pose.position += self.step(&movement);
        // Height is locked before the target is rebuilt so the target stays
        // exactly focus_distance away from the final position.
        pose.position.y = self.settings.eye_height;
        pose.target = pose.position + self.look_direction() * self.settings.focus_distance;

        trace!(
            "camera update: delta={:?} scroll={} moving={} yaw={:.4} pitch={:.4} position={:?}",
            delta,
            input.scroll_delta(),
            movement.is_moving(),
            self.yaw,
            self.pitch,
            pose.position
        );
    }

    fn rotate(&mut self, delta: Vec2) {
        let sensitivity = self.settings.mouse_sensitivity;
        let limit = self.settings.pitch_limit().abs();

        self.yaw += delta.x * -sensitivity;
        let pitch = self.pitch + delta.y * -sensitivity;
        // NaN pitch passes through; a NaN limit leaves pitch unclamped
        self.pitch = if pitch > limit {
            limit
        } else if pitch < -limit {
            -limit
        } else {
            pitch
        };
    }

    /// World-space displacement for this frame's held keys
    fn step(&self, movement: &MovementState) -> Vec3 {
        let (fwd, right, up) = movement.velocity();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        Vec3::new(
            -sin_yaw * fwd + cos_yaw * right,
            self.pitch.sin() * fwd + up,
            -cos_yaw * fwd - sin_yaw * right,
        ) / self.settings.movement_divisor
    }

    /// Unit vector the camera looks along
    pub fn look_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}
