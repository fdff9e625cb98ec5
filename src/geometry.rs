use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis aligned rectangle in screen coordinates.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Rectangle {
  pub x: i32,
  pub y: i32,
  pub width: i32,
  pub height: i32,
}

impl Rectangle {
  pub fn new(x: i32, y: i32, width: i32, height: i32) -> Rectangle {
    Rectangle {
      x,
      y,
      width,
      height,
    }
  }
}

impl fmt::Display for Rectangle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
  }
}
