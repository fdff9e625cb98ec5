use crate::error::ActionError;
use crate::host::Host;
use log::trace;

/// Makes room for an empty desktop at `target`.
///
/// A new desktop is appended at the end and then the windows of every
/// desktop from the old last one down to `target` are moved one desktop
/// later, starting from the end. Afterwards `target` is empty and its index
/// is returned. `target` may be at most the number of desktops, which is the
/// same as appending.
pub fn insert_desktop<H: Host>(host: &mut H, target: usize) -> Result<usize, ActionError> {
  let count = host.desktop_count();
  if target > count {
    return Err(ActionError::DesktopOutOfRange {
      index: target,
      count,
    });
  }

  let last = host.append_desktop();
  trace!("Inserting desktop at {} (appended {})", target, last);

  for index in (target..last).rev() {
    for window in host.windows_on_desktop(index) {
      host.change_desktop(window, index + 1);
    }
  }

  Ok(target)
}
