pub mod controller;
pub mod element;
pub mod frame_queue;

pub use controller::{AnimationController, ControllerState};
pub use element::{AnimatedElement, AnimationPhase};
pub use frame_queue::{CancelToken, FrameQueue, PendingTransform};
