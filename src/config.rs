use crate::keyboard::{KeyboardShortcutsConfig, Shortcuts};
use serde::{Deserialize, Serialize};
use std::{error::Error, fs};

pub const CONFIG_PATH: &str = "~/.config/movefocus/config.yaml";

#[derive(Default, Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  pub keyboard_shortcuts: KeyboardShortcutsConfig,
}

impl Config {
  pub fn load() -> Result<Config, Box<dyn Error>> {
    let config_string = fs::read_to_string(shellexpand::tilde(CONFIG_PATH).to_string())?;
    Config::from_yaml(&config_string)
  }

  pub fn from_yaml(config_string: &str) -> Result<Config, Box<dyn Error>> {
    let config: Config = serde_yaml::from_str(config_string)?;
    config.shortcuts()?;
    Ok(config)
  }

  pub fn shortcuts(&self) -> Result<Shortcuts, Box<dyn Error>> {
    Shortcuts::from_config(&self.keyboard_shortcuts)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::actions::Action;
  use crate::keyboard::{Accelerator, KeyPress};
  use pretty_assertions::assert_eq;

  #[test]
  fn empty_file_gives_defaults() {
    let config = Config::from_yaml("{}").unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn overrides_single_binding() {
    let config = Config::from_yaml(
      r#"
keyboard_shortcuts:
  move-focus-left: ["<Super>Left", "<Super>a"]
  move-to-new-workspace-up: []
"#,
    )
    .unwrap();

    assert_eq!(
      config.keyboard_shortcuts.move_focus_left,
      vec!["<Super>Left".to_string(), "<Super>a".to_string()]
    );
    assert!(config.keyboard_shortcuts.move_to_new_workspace_up.is_empty());
    assert_eq!(
      config.keyboard_shortcuts.move_focus_right,
      KeyboardShortcutsConfig::default().move_focus_right
    );

    let shortcuts = config.shortcuts().unwrap();
    let press: KeyPress = "<Super>a".parse::<Accelerator>().unwrap().into();
    assert_eq!(shortcuts.action_for(&press), Some(Action::MoveFocusLeft));
  }

  #[test]
  fn rejects_unknown_action() {
    let error = Config::from_yaml(
      r#"
keyboard_shortcuts:
  move-focus-up: ["<Super>k"]
"#,
    )
    .unwrap_err();
    assert!(error.to_string().contains("move-focus-up"));
  }

  #[test]
  fn rejects_conflicting_bindings() {
    let error = Config::from_yaml(
      r#"
keyboard_shortcuts:
  switch-to-new-workspace-down: ["<Super>h"]
"#,
    )
    .unwrap_err();
    assert_eq!(
      error.to_string(),
      "keyboard_shortcuts: <Super>h is bound to both move-focus-left and switch-to-new-workspace-down"
    );
  }
}
