use log::{error, info, warn};
use movefocus::{
  actions::{dispatch, Action},
  config::Config,
  keyboard::{handle_key_press, Accelerator, KeyPress},
  session::Session,
};
use std::{
  env,
  io::{self, BufRead},
  process,
};

fn main() {
  env_logger::init();
  let config = match Config::load() {
    Ok(config) => config,
    Err(error) => {
      error!("Error loading config (falling back to default): {}", error);
      Config::default()
    }
  };
  let shortcuts = match config.shortcuts() {
    Ok(shortcuts) => shortcuts,
    Err(error) => {
      error!("Invalid keyboard shortcuts: {}", error);
      process::exit(1);
    }
  };

  let mut session = match env::args().nth(1) {
    Some(path) => match Session::load(&path) {
      Ok(session) => session,
      Err(error) => {
        error!("Error loading snapshot \"{}\": {}", path, error);
        process::exit(1);
      }
    },
    None => Session::default(),
  };
  info!("Loaded session with {} desktops", session.desktops().len());
  print!("{}", session);

  let stdin = io::stdin();
  for line in stdin.lock().lines() {
    let line = match line {
      Ok(line) => line,
      Err(error) => {
        error!("Error reading input: {}", error);
        break;
      }
    };
    if line.trim().is_empty() {
      continue;
    }

    // Action names run directly, anything else is a key press
    if let Ok(action) = line.trim().parse::<Action>() {
      dispatch(&mut session, action);
      print!("{}", session);
      continue;
    }

    let press: KeyPress = match line.parse::<Accelerator>() {
      Ok(accelerator) => accelerator.into(),
      Err(error) => {
        warn!("{}", error);
        continue;
      }
    };
    if handle_key_press(&mut session, &shortcuts, &press) {
      print!("{}", session);
    } else {
      warn!("{} is not bound", line.trim());
    }
  }
}
