//! Directional window focus and desktop insertion for a window manager.
//!
//! Focus moves left or right between the windows of the active desktop in
//! screen order, wrapping around at the ends. New desktops are inserted next
//! to the active one by shifting the windows of the following desktops,
//! instead of only ever being appended.

pub mod actions;
pub mod config;
pub mod desktops;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod host;
pub mod keyboard;
pub mod navigation;
pub mod ordering;
pub mod session;

pub use actions::{dispatch, Action, VerticalDirection};
pub use error::ActionError;
pub use host::Host;
pub use ordering::Direction;
