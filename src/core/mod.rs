pub mod controller;
pub mod input_adapter;
pub mod snapshot;

pub use controller::{Button, Controller};
pub use input_adapter::WinitController;
pub use snapshot::InputSnapshot;
