//! An in-memory window manager.
//!
//! `Session` keeps desktops as an ordered list of window memberships and
//! implements [`Host`] on top of it. The binary drives it from a YAML snapshot
//! and the tests use it to observe what the actions do.

use crate::entities::{Desktop, Window, WindowId};
use crate::host::{Host, Timestamp};
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use std::{
  cell::Cell,
  collections::{BTreeMap, HashMap},
  error::Error,
  fmt, fs,
};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Snapshot {
  pub active_desktop: usize,
  pub focused: Option<WindowId>,
  pub desktops: Vec<Vec<Window>>,
}

#[derive(Debug)]
pub struct Session {
  desktops: Vec<Desktop>,
  windows: BTreeMap<WindowId, Window>,
  focused: Option<WindowId>,
  active_desktop: usize,
  /// Bottom to top
  stacking: Vec<WindowId>,
  time: Cell<Timestamp>,
}

impl Default for Session {
  fn default() -> Self {
    Session {
      desktops: vec![Desktop::new()],
      windows: BTreeMap::new(),
      focused: None,
      active_desktop: 0,
      stacking: vec![],
      time: Cell::new(0),
    }
  }
}

impl Session {
  pub fn load(path: &str) -> Result<Session, Box<dyn Error>> {
    let snapshot_string = fs::read_to_string(shellexpand::tilde(path).to_string())?;
    Session::from_yaml(&snapshot_string)
  }

  pub fn from_yaml(snapshot: &str) -> Result<Session, Box<dyn Error>> {
    let snapshot: Snapshot = serde_yaml::from_str(snapshot)?;
    Session::from_snapshot(snapshot)
  }

  pub fn from_snapshot(snapshot: Snapshot) -> Result<Session, Box<dyn Error>> {
    if snapshot.desktops.is_empty() {
      return Err("desktops: At least one desktop is required".into());
    }
    if snapshot.active_desktop >= snapshot.desktops.len() {
      return Err(
        format!(
          "active_desktop: Index {} is out of range ({} desktops)",
          snapshot.active_desktop,
          snapshot.desktops.len()
        )
        .into(),
      );
    }

    let mut session = Session {
      desktops: Vec::with_capacity(snapshot.desktops.len()),
      active_desktop: snapshot.active_desktop,
      ..Session::default()
    };
    let mut window_desktops = HashMap::new();
    let mut sequences = HashMap::new();

    for (index, windows) in snapshot.desktops.into_iter().enumerate() {
      let mut desktop = Desktop::new();
      for window in windows {
        if let Some(other) = window_desktops.insert(window.id, index) {
          return Err(
            format!(
              "desktops: Duplicated window id {} on desktop {} and {}",
              window.id, other, index
            )
            .into(),
          );
        }
        if let Some(other) = sequences.insert(window.stable_sequence, window.id) {
          return Err(
            format!(
              "desktops: Duplicated stable sequence {} for windows {} and {}",
              window.stable_sequence, other, window.id
            )
            .into(),
          );
        }
        desktop.add_window(window.id);
        session.stacking.push(window.id);
        session.windows.insert(window.id, window);
      }
      session.desktops.push(desktop);
    }

    if let Some(focused) = snapshot.focused {
      if !session.windows.contains_key(&focused) {
        return Err(format!("focused: Unknown window {}", focused).into());
      }
      session.focused = Some(focused);
      session.put_on_top(focused);
    }

    Ok(session)
  }

  /// Builds a session from windows per desktop with the first desktop active.
  pub fn with_desktops(desktops: Vec<Vec<Window>>) -> Result<Session, Box<dyn Error>> {
    Session::from_snapshot(Snapshot {
      desktops,
      ..Snapshot::default()
    })
  }

  pub fn desktops(&self) -> &[Desktop] {
    &self.desktops
  }
  pub fn focused(&self) -> Option<WindowId> {
    self.focused
  }
  pub fn active_desktop(&self) -> usize {
    self.active_desktop
  }
  /// Windows from bottom to top.
  pub fn stacking(&self) -> &[WindowId] {
    &self.stacking
  }
  pub fn window_count(&self) -> usize {
    self.desktops.iter().map(|d| d.windows().len()).sum()
  }

  pub fn desktop_by_window(&self, window: WindowId) -> Option<usize> {
    self.desktops.iter().position(|d| d.has_window(window))
  }

  fn put_on_top(&mut self, window: WindowId) {
    self.stacking.retain(|w| *w != window);
    self.stacking.push(window);
  }

  /// Focuses the topmost window of the desktop, or nothing if it is empty.
  fn focus_desktop(&mut self, desktop: usize) {
    self.active_desktop = desktop;
    let desktops = &self.desktops;
    let top_window = self
      .stacking
      .iter()
      .rev()
      .find(|w| desktops[desktop].has_window(**w))
      .cloned();
    self.focused = top_window;
  }
}

impl Host for Session {
  fn windows_on_active_desktop(&self) -> Vec<Window> {
    self.desktops[self.active_desktop]
      .windows()
      .iter()
      .filter_map(|id| self.windows.get(id).cloned())
      .collect()
  }

  fn focused_window(&self) -> Option<Window> {
    self.focused.and_then(|id| self.windows.get(&id).cloned())
  }

  fn active_desktop_index(&self) -> usize {
    self.active_desktop
  }

  fn desktop_count(&self) -> usize {
    self.desktops.len()
  }

  fn windows_on_desktop(&self, desktop: usize) -> Vec<WindowId> {
    self
      .desktops
      .get(desktop)
      .map(|d| d.windows().to_vec())
      .unwrap_or_default()
  }

  fn current_time(&self) -> Timestamp {
    let time = self.time.get() + 1;
    self.time.set(time);
    time
  }

  fn append_desktop(&mut self) -> usize {
    self.desktops.push(Desktop::new());
    trace!("Appended desktop {}", self.desktops.len() - 1);
    self.desktops.len() - 1
  }

  fn change_desktop(&mut self, window: WindowId, desktop: usize) {
    if desktop >= self.desktops.len() {
      warn!("change_desktop: Desktop {} does not exist", desktop);
      return;
    }
    if !self.windows.contains_key(&window) {
      warn!("change_desktop: Unknown window {}", window);
      return;
    }
    for d in self.desktops.iter_mut() {
      d.remove_window(window);
    }
    self.desktops[desktop].add_window(window);
  }

  fn activate_desktop(&mut self, desktop: usize, timestamp: Timestamp) {
    if desktop >= self.desktops.len() {
      warn!("activate_desktop: Desktop {} does not exist", desktop);
      return;
    }
    trace!("Activating desktop {} at {}", desktop, timestamp);
    self.focus_desktop(desktop);
  }

  fn activate_desktop_with_focus(&mut self, desktop: usize, window: WindowId, timestamp: Timestamp) {
    if desktop >= self.desktops.len() {
      warn!("activate_desktop_with_focus: Desktop {} does not exist", desktop);
      return;
    }
    trace!(
      "Activating desktop {} with window {} at {}",
      desktop,
      window,
      timestamp
    );
    if self.desktops[desktop].has_window(window) {
      self.active_desktop = desktop;
      self.focused = Some(window);
      self.put_on_top(window);
    } else {
      warn!(
        "activate_desktop_with_focus: Window {} is not on desktop {}",
        window, desktop
      );
      self.focus_desktop(desktop);
    }
  }

  fn activate_window(&mut self, window: WindowId, timestamp: Timestamp) {
    if let Some(desktop) = self.desktop_by_window(window) {
      trace!("Activating window {} at {}", window, timestamp);
      self.active_desktop = desktop;
      self.focused = Some(window);
    } else {
      warn!("activate_window: Unknown window {}", window);
    }
  }

  fn raise_window(&mut self, window: WindowId) {
    if self.windows.contains_key(&window) {
      self.put_on_top(window);
    }
  }
}

impl fmt::Display for Session {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, desktop) in self.desktops.iter().enumerate() {
      let marker = if index == self.active_desktop { '*' } else { ' ' };
      write!(f, "{} {}:", marker, index)?;
      for window in desktop.windows() {
        if Some(*window) == self.focused {
          write!(f, " [{}]", window)?;
        } else {
          write!(f, " {}", window)?;
        }
      }
      writeln!(f)?;
    }
    Ok(())
  }
}
