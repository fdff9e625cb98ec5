use crate::desktops::insert_desktop;
use crate::entities::WindowId;
use crate::error::ActionError;
use crate::host::Host;
use crate::navigation::find_next;
use crate::ordering::{sort_windows, Direction};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalDirection {
  Up,
  Down,
}

/// Focuses and raises the next window on the active desktop in `direction`.
pub fn move_focus<H: Host>(host: &mut H, direction: Direction) -> Result<WindowId, ActionError> {
  // TODO: skip minimized windows once the host reports them
  let mut windows = host.windows_on_active_desktop();
  sort_windows(&mut windows, direction);
  let current_window = host.focused_window();

  let target_window = match find_next(&windows, direction, current_window.as_ref()) {
    Some(window) => window.id,
    None => {
      debug!("Still no window to focus - aborting");
      return Err(ActionError::NoCandidateWindow);
    }
  };

  match current_window {
    Some(current_window) => debug!("Window focused ({} -> {})", current_window.id, target_window),
    None => debug!("Window focused (none -> {})", target_window),
  }
  let timestamp = host.current_time();
  host.activate_window(target_window, timestamp);
  host.raise_window(target_window);
  Ok(target_window)
}

/// Inserts an empty desktop after the active one and switches to it.
pub fn insert_desktop_below_current<H: Host>(host: &mut H) -> Result<usize, ActionError> {
  let timestamp = host.current_time();
  let current = host.active_desktop_index();
  let target = insert_desktop(host, current + 1)?;
  host.activate_desktop(target, timestamp);
  Ok(target)
}

/// Moves the focused window to a new desktop inserted above or below the
/// active one and follows it there.
pub fn move_window_to_new_desktop<H: Host>(
  host: &mut H,
  direction: VerticalDirection,
) -> Result<usize, ActionError> {
  let window = host.focused_window().ok_or_else(|| {
    debug!("Can't move window - no window focused");
    ActionError::NoFocusedWindow
  })?;
  let timestamp = host.current_time();
  let current = host.active_desktop_index();

  let target = match direction {
    VerticalDirection::Up => current,
    VerticalDirection::Down => current + 1,
  };
  let target = insert_desktop(host, target)?;

  trace!(
    "Moving window {} to new desktop {} ({:?})",
    window.id,
    target,
    direction
  );
  host.change_desktop(window.id, target);
  host.activate_desktop_with_focus(target, window.id, timestamp);
  Ok(target)
}

/// Moves the focused window to the desktop above or below the active one and
/// follows it there.
///
/// An existing neighbour is used as is. Only when there is no neighbour a new
/// desktop is inserted, at the start when moving up from the first desktop
/// and at the end when moving down from the last one.
pub fn move_window_to_adjacent_desktop<H: Host>(
  host: &mut H,
  direction: VerticalDirection,
) -> Result<usize, ActionError> {
  let window = host.focused_window().ok_or_else(|| {
    debug!("Can't move window - no window focused");
    ActionError::NoFocusedWindow
  })?;
  let timestamp = host.current_time();
  let current = host.active_desktop_index();
  let count = host.desktop_count();

  let target = match direction {
    VerticalDirection::Up if current == 0 => {
      debug!("No desktop above the first one - creating");
      insert_desktop(host, 0)?
    }
    VerticalDirection::Up => current - 1,
    VerticalDirection::Down if current + 1 >= count => {
      debug!("No desktop below the last one - creating");
      insert_desktop(host, count)?
    }
    VerticalDirection::Down => current + 1,
  };

  trace!(
    "Moving window {} to desktop {} ({:?})",
    window.id,
    target,
    direction
  );
  host.change_desktop(window.id, target);
  host.activate_desktop_with_focus(target, window.id, timestamp);
  Ok(target)
}

/// The operations that can be bound to a key.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Action {
  MoveFocusLeft,
  MoveFocusRight,
  InsertWorkspaceBelowCurrent,
  MoveWindowToNewWorkspaceUp,
  MoveWindowToNewWorkspaceDown,
  MoveWindowToAdjacentWorkspaceUp,
  MoveWindowToAdjacentWorkspaceDown,
}

impl Action {
  pub const ALL: [Action; 7] = [
    Action::MoveFocusLeft,
    Action::MoveFocusRight,
    Action::InsertWorkspaceBelowCurrent,
    Action::MoveWindowToNewWorkspaceUp,
    Action::MoveWindowToNewWorkspaceDown,
    Action::MoveWindowToAdjacentWorkspaceUp,
    Action::MoveWindowToAdjacentWorkspaceDown,
  ];

  /// The name used for the binding in the configuration.
  pub fn name(self) -> &'static str {
    match self {
      Action::MoveFocusLeft => "move-focus-left",
      Action::MoveFocusRight => "move-focus-right",
      Action::InsertWorkspaceBelowCurrent => "switch-to-new-workspace-down",
      Action::MoveWindowToNewWorkspaceUp => "move-to-new-workspace-up",
      Action::MoveWindowToNewWorkspaceDown => "move-to-new-workspace-down",
      Action::MoveWindowToAdjacentWorkspaceUp => "move-to-workspace-up-anywhere",
      Action::MoveWindowToAdjacentWorkspaceDown => "move-to-workspace-down-anywhere",
    }
  }
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Action {
  type Err = String;

  fn from_str(name: &str) -> Result<Self, Self::Err> {
    Action::ALL
      .iter()
      .cloned()
      .find(|action| action.name() == name)
      .ok_or_else(|| format!("Unknown action \"{}\"", name))
  }
}

/// Runs `action`, returns whether it did anything.
///
/// Failures are only logged, the host never sees them.
pub fn dispatch<H: Host>(host: &mut H, action: Action) -> bool {
  trace!("Dispatching {}", action);
  let result = match action {
    Action::MoveFocusLeft => move_focus(host, Direction::Left).map(|_| ()),
    Action::MoveFocusRight => move_focus(host, Direction::Right).map(|_| ()),
    Action::InsertWorkspaceBelowCurrent => insert_desktop_below_current(host).map(|_| ()),
    Action::MoveWindowToNewWorkspaceUp => {
      move_window_to_new_desktop(host, VerticalDirection::Up).map(|_| ())
    }
    Action::MoveWindowToNewWorkspaceDown => {
      move_window_to_new_desktop(host, VerticalDirection::Down).map(|_| ())
    }
    Action::MoveWindowToAdjacentWorkspaceUp => {
      move_window_to_adjacent_desktop(host, VerticalDirection::Up).map(|_| ())
    }
    Action::MoveWindowToAdjacentWorkspaceDown => {
      move_window_to_adjacent_desktop(host, VerticalDirection::Down).map(|_| ())
    }
  };

  match result {
    Ok(()) => true,
    Err(error) => {
      debug!("{}: {}", action, error);
      false
    }
  }
}
