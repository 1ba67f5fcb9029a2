pub mod controls;
pub mod osc;

pub use controls::{ControlAction, PageControls};
pub use osc::{OscCommand, OscController, OscSender};
