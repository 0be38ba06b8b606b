//! Swipe compare control for two stacked map views, plus a small yew demo.

pub mod canvas_map;
pub mod compare;
pub mod components;
pub mod dom;
pub mod error;
pub mod map;
pub mod model;
pub mod state;
pub mod util;


pub use compare::Compare;
pub use error::CompareError;
pub use map::{CompareMap, MapEvents, MapHandler, SyncHandle};
pub use model::{Bounds, CompareOptions};
pub use state::{SlideHandle, SlideListener, slide_listener};
