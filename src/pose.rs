use glam::{Mat4, Vec3};

pub const DEFAULT_FOVY: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.01;
pub const FAR_PLANE: f32 = 1000.0;

/// Who is driving the pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    Free,
    FirstPerson,
}

/// Camera pose read by the renderer. Owned by the host; controllers mutate
/// it in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fovy: f32,
    pub mode: CameraMode,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: DEFAULT_FOVY,
            mode: CameraMode::Free,
        }
    }
}

impl CameraPose {
    /// Unit vector from position towards target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
    }
}
