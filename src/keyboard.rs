use crate::actions::{dispatch, Action};
use crate::host::Host;
use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{error, fmt, str::FromStr, sync::LazyLock};
use thiserror::Error;

static ACCELERATOR_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\s*((?:<[A-Za-z]+>\s*)*)([A-Za-z0-9_]+)\s*$").unwrap());
static MODIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([A-Za-z]+)>").unwrap());

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Modifiers {
  pub shift: bool,
  pub ctrl: bool,
  pub alt: bool,
  pub logo: bool,
}

#[derive(Debug, Error)]
pub enum AcceleratorError {
  #[error("\"{0}\" is not an accelerator, expected something like <Super>Left")]
  Malformed(String),
  #[error("unknown modifier \"{modifier}\" in \"{accelerator}\"")]
  UnknownModifier {
    modifier: String,
    accelerator: String,
  },
}

/// A key combination written like `<Super><Shift>Left`.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Accelerator {
  pub modifiers: Modifiers,
  /// Keysym name, case sensitive
  pub key: String,
}

impl FromStr for Accelerator {
  type Err = AcceleratorError;

  fn from_str(accelerator: &str) -> Result<Self, Self::Err> {
    let captures = ACCELERATOR_RE
      .captures(accelerator)
      .ok_or_else(|| AcceleratorError::Malformed(accelerator.to_string()))?;

    let mut modifiers = Modifiers::default();
    if let Some(modifier_names) = captures.get(1) {
      for m in MODIFIER_RE.captures_iter(modifier_names.as_str()) {
        let name = &m[1];
        match name.to_lowercase().as_str() {
          "shift" => modifiers.shift = true,
          "control" | "ctrl" | "primary" => modifiers.ctrl = true,
          "alt" => modifiers.alt = true,
          "super" | "logo" => modifiers.logo = true,
          _ => {
            return Err(AcceleratorError::UnknownModifier {
              modifier: name.to_string(),
              accelerator: accelerator.to_string(),
            })
          }
        }
      }
    }

    Ok(Accelerator {
      modifiers,
      key: captures[2].to_string(),
    })
  }
}

impl fmt::Display for Accelerator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.modifiers.shift {
      f.write_str("<Shift>")?;
    }
    if self.modifiers.ctrl {
      f.write_str("<Control>")?;
    }
    if self.modifiers.alt {
      f.write_str("<Alt>")?;
    }
    if self.modifiers.logo {
      f.write_str("<Super>")?;
    }
    f.write_str(&self.key)
  }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct KeyPress {
  pub modifiers: Modifiers,
  pub key: String,
  /// Generated by key repeat rather than a physical press
  pub repeat: bool,
}

impl From<Accelerator> for KeyPress {
  fn from(accelerator: Accelerator) -> Self {
    KeyPress {
      modifiers: accelerator.modifiers,
      key: accelerator.key,
      repeat: false,
    }
  }
}

fn bindings(bindings: &[&str]) -> Vec<String> {
  bindings.iter().map(|b| b.to_string()).collect()
}

/// Accelerators per action as written in the config file.
///
/// An empty list disables the action.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct KeyboardShortcutsConfig {
  pub move_focus_left: Vec<String>,
  pub move_focus_right: Vec<String>,
  pub switch_to_new_workspace_down: Vec<String>,
  pub move_to_new_workspace_up: Vec<String>,
  pub move_to_new_workspace_down: Vec<String>,
  pub move_to_workspace_up_anywhere: Vec<String>,
  pub move_to_workspace_down_anywhere: Vec<String>,
}

impl Default for KeyboardShortcutsConfig {
  fn default() -> Self {
    KeyboardShortcutsConfig {
      move_focus_left: bindings(&["<Super>h"]),
      move_focus_right: bindings(&["<Super>l"]),
      switch_to_new_workspace_down: bindings(&["<Super>n"]),
      move_to_new_workspace_up: bindings(&["<Super><Control>k"]),
      move_to_new_workspace_down: bindings(&["<Super><Control>j"]),
      move_to_workspace_up_anywhere: bindings(&["<Super><Shift>k"]),
      move_to_workspace_down_anywhere: bindings(&["<Super><Shift>j"]),
    }
  }
}

impl KeyboardShortcutsConfig {
  fn for_action(&self, action: Action) -> &[String] {
    match action {
      Action::MoveFocusLeft => &self.move_focus_left,
      Action::MoveFocusRight => &self.move_focus_right,
      Action::InsertWorkspaceBelowCurrent => &self.switch_to_new_workspace_down,
      Action::MoveWindowToNewWorkspaceUp => &self.move_to_new_workspace_up,
      Action::MoveWindowToNewWorkspaceDown => &self.move_to_new_workspace_down,
      Action::MoveWindowToAdjacentWorkspaceUp => &self.move_to_workspace_up_anywhere,
      Action::MoveWindowToAdjacentWorkspaceDown => &self.move_to_workspace_down_anywhere,
    }
  }
}

/// Parsed and validated key bindings.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Shortcuts {
  bindings: Vec<(Accelerator, Action)>,
}

impl Shortcuts {
  pub fn from_config(config: &KeyboardShortcutsConfig) -> Result<Shortcuts, Box<dyn error::Error>> {
    let mut shortcuts = Shortcuts::default();

    for action in Action::ALL.iter().cloned() {
      for binding in config.for_action(action) {
        let accelerator: Accelerator = binding
          .parse()
          .map_err(|error| format!("keyboard_shortcuts.{}: {}", action, error))?;

        if let Some(other) = shortcuts.action_for_accelerator(&accelerator) {
          return Err(
            format!(
              "keyboard_shortcuts: {} is bound to both {} and {}",
              accelerator, other, action
            )
            .into(),
          );
        }
        shortcuts.bindings.push((accelerator, action));
      }
    }

    Ok(shortcuts)
  }

  fn action_for_accelerator(&self, accelerator: &Accelerator) -> Option<Action> {
    self
      .bindings
      .iter()
      .find(|(a, _)| a == accelerator)
      .map(|(_, action)| *action)
  }

  pub fn action_for(&self, press: &KeyPress) -> Option<Action> {
    self
      .bindings
      .iter()
      .find(|(a, _)| a.modifiers == press.modifiers && a.key == press.key)
      .map(|(_, action)| *action)
  }
}

/// Runs the action bound to `press`, returns whether the press was consumed.
pub fn handle_key_press<H: Host>(host: &mut H, shortcuts: &Shortcuts, press: &KeyPress) -> bool {
  if press.repeat {
    return false;
  }

  match shortcuts.action_for(press) {
    Some(action) => {
      trace!("Key press {} triggers {}", press.key, action);
      dispatch(host, action);
      true
    }
    None => false,
  }
}
