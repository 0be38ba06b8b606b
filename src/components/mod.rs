pub mod app;
pub mod compare_controls;

pub use app::App;
