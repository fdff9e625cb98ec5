use crate::entities::{Window, WindowId};

/// Event timestamp handed back to the host when activating things.
pub type Timestamp = u32;

/// The window manager that owns windows and desktops.
///
/// Desktops are addressed by their zero based position. Appending a desktop
/// never changes the index of an existing one.
pub trait Host {
  fn windows_on_active_desktop(&self) -> Vec<Window>;
  fn focused_window(&self) -> Option<Window>;
  fn active_desktop_index(&self) -> usize;
  fn desktop_count(&self) -> usize;
  fn windows_on_desktop(&self, desktop: usize) -> Vec<WindowId>;
  fn current_time(&self) -> Timestamp;

  /// Adds an empty desktop after the last one and returns its index.
  fn append_desktop(&mut self) -> usize;
  fn change_desktop(&mut self, window: WindowId, desktop: usize);
  fn activate_desktop(&mut self, desktop: usize, timestamp: Timestamp);
  fn activate_desktop_with_focus(&mut self, desktop: usize, window: WindowId, timestamp: Timestamp);
  fn activate_window(&mut self, window: WindowId, timestamp: Timestamp);
  fn raise_window(&mut self, window: WindowId);
}
