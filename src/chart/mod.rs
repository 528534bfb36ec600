pub mod layout;
pub mod model;
mod window;

pub use model::{Bar, ChartModel};
pub use window::show;
