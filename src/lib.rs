pub mod camera;
pub mod cli;
pub mod core;
pub mod pose;
pub mod settings;

pub use camera::{FirstPersonCamera, MovementState};
pub use crate::core::{Button, Controller, InputSnapshot, WinitController};
pub use pose::{CameraMode, CameraPose};
pub use settings::{CameraSettings, MoveDirection, MovementKeyBindings};
