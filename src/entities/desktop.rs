use super::WindowId;
use log::trace;
use serde::{Deserialize, Serialize};

/// Window membership of a single desktop.
///
/// Desktops are identified by their position in the desktop list, so this
/// only tracks which windows are on it and in which order.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Desktop {
  windows: Vec<WindowId>,
}

impl Desktop {
  pub fn new() -> Desktop {
    Desktop { windows: vec![] }
  }

  pub fn windows(&self) -> &[WindowId] {
    &self.windows
  }

  pub fn is_empty(&self) -> bool {
    self.windows.is_empty()
  }

  pub fn has_window(&self, window: WindowId) -> bool {
    self.windows.iter().any(|w| *w == window)
  }

  pub fn add_window(&mut self, window: WindowId) {
    if !self.has_window(window) {
      trace!("Adding window {} to desktop", window);
      self.windows.push(window);
    }
  }

  pub fn remove_window(&mut self, window: WindowId) -> bool {
    let len = self.windows.len();
    self.windows.retain(|w| *w != window);
    len != self.windows.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add_keeps_insertion_order_and_ignores_duplicates() {
    let mut desktop = Desktop::new();
    desktop.add_window(WindowId(3));
    desktop.add_window(WindowId(1));
    desktop.add_window(WindowId(3));

    assert_eq!(desktop.windows(), &[WindowId(3), WindowId(1)]);
  }

  #[test]
  fn remove_reports_membership() {
    let mut desktop = Desktop::new();
    desktop.add_window(WindowId(1));

    assert!(desktop.remove_window(WindowId(1)));
    assert!(!desktop.remove_window(WindowId(1)));
    assert!(desktop.is_empty());
  }
}
