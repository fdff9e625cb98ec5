use crate::entities::Window;
use crate::ordering::{compare, Candidate, Direction};
use log::{debug, trace};
use std::cmp::Ordering;

fn find_after<'a>(
  windows: &'a [Window],
  direction: Direction,
  current: Option<&Window>,
) -> Option<&'a Window> {
  let current = match current {
    Some(window) => Candidate::Window(window),
    None => {
      match direction {
        Direction::Left => trace!("Focusing rightmost window"),
        Direction::Right => trace!("Focusing leftmost window"),
      }
      Candidate::Boundary(direction.start_boundary())
    }
  };

  windows
    .iter()
    .find(|window| compare(direction, Candidate::Window(*window), current) == Ordering::Greater)
}

/// Finds the window after `current` in `windows`, which must already be
/// sorted for `direction`.
///
/// When `current` is in the list its successor in the list is taken, so
/// repeated calls visit every window once even where the epsilon makes the
/// comparison inconsistent. Otherwise the first window comparing greater
/// than `current` is taken. Either way it wraps around to the first window
/// past the end, and without a current window the first window in
/// `direction` is returned. Only an empty list gives `None`.
pub fn find_next<'a>(
  windows: &'a [Window],
  direction: Direction,
  current: Option<&Window>,
) -> Option<&'a Window> {
  let next = match current {
    Some(current) => match windows.iter().position(|w| w.id == current.id) {
      Some(index) => windows.get(index + 1),
      None => find_after(windows, direction, Some(current)),
    },
    None => find_after(windows, direction, None),
  };

  if next.is_none() && current.is_some() {
    debug!("No window to focus - looping around");
    return find_after(windows, direction, None);
  }
  next
}
