pub mod desktop;
pub mod window;

pub use desktop::Desktop;
pub use window::{Window, WindowId};
