use thiserror::Error;

/// Reasons an action did nothing.
///
/// None of these are fatal, every check happens before anything is changed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum ActionError {
  #[error("no window focused")]
  NoFocusedWindow,
  #[error("no window to focus")]
  NoCandidateWindow,
  #[error("desktop index {index} is out of range (there are {count} desktops)")]
  DesktopOutOfRange { index: usize, count: usize },
}
