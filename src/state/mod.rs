pub mod camera;
pub mod gesture;
pub mod listeners;
pub mod position;

pub use camera::Camera;
pub use gesture::Gesture;
pub use listeners::{SlideHandle, SlideListener, SlideListeners, notify_all, slide_listener};
pub use position::PositionState;
