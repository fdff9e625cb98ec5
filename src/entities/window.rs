use crate::geometry::Rectangle;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A window as seen by the navigation code.
///
/// This is a snapshot, the window itself is owned by the host.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Window {
  pub id: WindowId,
  /// The visible drawn bounds (buffer rect)
  pub rect: Rectangle,
  /// Creation order, unique across all windows
  pub stable_sequence: u64,
}

impl Window {
  pub fn new(id: u64, rect: Rectangle, stable_sequence: u64) -> Window {
    Window {
      id: WindowId(id),
      rect,
      stable_sequence,
    }
  }
}
