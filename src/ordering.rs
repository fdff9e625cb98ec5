//! Spatial ordering of windows.
//!
//! Windows are ordered left to right, then top to bottom, then wide to narrow
//! and tall to short, with the stable sequence as the last resort. Differences
//! of at most [`EPSILON`] are treated as equal so that roughly aligned windows
//! order the way a human reads the screen instead of by a stray pixel.
//!
//! Ordering to the left reverses everything except the stable sequence
//! tie-break, so windows that are indistinguishable by geometry keep their
//! creation order in both directions.

use crate::entities::Window;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Differences of this many screen units or less are ignored.
pub const EPSILON: i64 = 15;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Left,
  Right,
}

impl Direction {
  fn coefficient(self) -> i64 {
    match self {
      Direction::Left => -1,
      Direction::Right => 1,
    }
  }

  /// The boundary that sorts before every window when ordering in this
  /// direction.
  pub fn start_boundary(self) -> Boundary {
    match self {
      Direction::Left => Boundary::Max,
      Direction::Right => Boundary::Min,
    }
  }
}

/// Stand-in for a coordinate past the edge of the screen.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Boundary {
  Max,
  Min,
}

/// Something that can take part in a comparison: a real window or a
/// boundary used when nothing is focused.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Candidate<'a> {
  Window(&'a Window),
  Boundary(Boundary),
}

impl<'a> From<&'a Window> for Candidate<'a> {
  fn from(window: &'a Window) -> Self {
    Candidate::Window(window)
  }
}

fn directed(difference: i64, direction: Direction) -> Option<Ordering> {
  if difference.abs() > EPSILON {
    Some((difference * direction.coefficient()).cmp(&0))
  } else {
    None
  }
}

fn oriented(ordering: Ordering, direction: Direction) -> Ordering {
  match direction {
    Direction::Left => ordering.reverse(),
    Direction::Right => ordering,
  }
}

/// Compares two windows for ordering in `direction`.
pub fn compare_windows(direction: Direction, a: &Window, b: &Window) -> Ordering {
  let (aa, bb) = (&a.rect, &b.rect);
  let dx = i64::from(aa.x) - i64::from(bb.x);
  let dy = i64::from(aa.y) - i64::from(bb.y);
  // Larger first, hence the sign flip
  let dw = i64::from(bb.width) - i64::from(aa.width);
  let dh = i64::from(bb.height) - i64::from(aa.height);

  directed(dx, direction)
    .or_else(|| directed(dy, direction))
    .or_else(|| directed(dw, direction))
    .or_else(|| directed(dh, direction))
    .unwrap_or_else(|| a.stable_sequence.cmp(&b.stable_sequence))
}

/// Compares two candidates for ordering in `direction`.
///
/// [`Boundary::Max`] is past every window on both axes and [`Boundary::Min`]
/// is before every window, before the direction is applied.
pub fn compare(direction: Direction, a: Candidate<'_>, b: Candidate<'_>) -> Ordering {
  match (a, b) {
    (Candidate::Window(a), Candidate::Window(b)) => compare_windows(direction, a, b),
    (Candidate::Boundary(a), Candidate::Boundary(b)) => {
      oriented(boundary_rank(a).cmp(&boundary_rank(b)), direction)
    }
    (Candidate::Window(_), Candidate::Boundary(b)) => {
      oriented(0.cmp(&boundary_rank(b)), direction)
    }
    (Candidate::Boundary(a), Candidate::Window(_)) => {
      oriented(boundary_rank(a).cmp(&0), direction)
    }
  }
}

fn boundary_rank(boundary: Boundary) -> i8 {
  match boundary {
    Boundary::Max => 1,
    Boundary::Min => -1,
  }
}

/// Sorts `windows` in place for navigation in `direction`.
///
/// The epsilon makes [`compare_windows`] intransitive for windows chained a
/// few pixels apart (x at 0, 10 and 20), which `slice::sort_by` is allowed to
/// panic on. Insertion sort only ever swaps neighbours that compare greater,
/// so it terminates with some order for any input.
pub fn sort_windows(windows: &mut [Window], direction: Direction) {
  for i in 1..windows.len() {
    let mut j = i;
    while j > 0 && compare_windows(direction, &windows[j - 1], &windows[j]) == Ordering::Greater {
      windows.swap(j - 1, j);
      j -= 1;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geometry::Rectangle;
  use pretty_assertions::assert_eq;

  fn window(id: u64, x: i32, y: i32, width: i32, height: i32) -> Window {
    Window::new(id, Rectangle::new(x, y, width, height), id)
  }

  fn ids(windows: &[Window]) -> Vec<u64> {
    windows.iter().map(|w| w.id.0).collect()
  }

  #[test]
  fn orders_by_x_beyond_epsilon() {
    let a = window(1, 0, 0, 100, 100);
    let b = window(2, 200, 0, 50, 50);

    assert_eq!(compare_windows(Direction::Right, &a, &b), Ordering::Less);
    assert_eq!(compare_windows(Direction::Left, &a, &b), Ordering::Greater);
  }

  #[test]
  fn ignores_x_within_epsilon() {
    // x differs by 10, y decides
    let c = window(1, 0, 100, 100, 100);
    let d = window(2, 10, 0, 100, 100);
    assert_eq!(compare_windows(Direction::Right, &c, &d), Ordering::Greater);

    // x differs by exactly epsilon, still ignored
    let e = window(3, 0, 0, 100, 100);
    let f = window(4, 15, 0, 100, 100);
    assert_eq!(compare_windows(Direction::Right, &e, &f), Ordering::Less);
    assert_eq!(compare_windows(Direction::Right, &f, &e), Ordering::Greater);

    // 16 is enough
    let g = window(5, 16, 0, 100, 100);
    assert_eq!(compare_windows(Direction::Right, &g, &e), Ordering::Greater);
  }

  #[test]
  fn wider_then_taller_first_when_ordering_right() {
    let narrow = window(1, 0, 0, 100, 100);
    let wide = window(2, 5, 5, 300, 100);
    assert_eq!(compare_windows(Direction::Right, &wide, &narrow), Ordering::Less);
    assert_eq!(compare_windows(Direction::Left, &wide, &narrow), Ordering::Greater);

    let short = window(3, 0, 0, 100, 100);
    let tall = window(4, 0, 0, 110, 400);
    assert_eq!(compare_windows(Direction::Right, &tall, &short), Ordering::Less);
    assert_eq!(compare_windows(Direction::Left, &tall, &short), Ordering::Greater);
  }

  #[test]
  fn stable_sequence_is_not_reversed() {
    let a = Window::new(1, Rectangle::new(0, 0, 100, 100), 7);
    let b = Window::new(2, Rectangle::new(3, 3, 103, 97), 9);

    assert_eq!(compare_windows(Direction::Right, &a, &b), Ordering::Less);
    assert_eq!(compare_windows(Direction::Left, &a, &b), Ordering::Less);
  }

  #[test]
  fn distinct_windows_never_compare_equal() {
    let windows = vec![
      window(1, 0, 0, 100, 100),
      window(2, 0, 0, 100, 100),
      window(3, 400, 0, 100, 100),
      window(4, 400, 300, 100, 100),
      window(5, 400, 300, 500, 100),
      window(6, 10, 10, 90, 90),
    ];

    for direction in [Direction::Left, Direction::Right].iter().cloned() {
      for a in &windows {
        for b in &windows {
          let ab = compare_windows(direction, a, b);
          let ba = compare_windows(direction, b, a);
          if a.id == b.id {
            assert_eq!(ab, Ordering::Equal);
          } else {
            assert_ne!(ab, Ordering::Equal);
            assert_eq!(ab, ba.reverse());
          }
        }
      }
    }
  }

  #[test]
  fn left_order_is_right_order_reversed_for_separated_windows() {
    let mut right = vec![
      window(1, 800, 0, 400, 600),
      window(2, 0, 600, 400, 600),
      window(3, 0, 0, 800, 600),
      window(4, 400, 600, 400, 600),
      window(5, 0, 0, 400, 600),
    ];
    let mut left = right.clone();

    sort_windows(&mut right, Direction::Right);
    sort_windows(&mut left, Direction::Left);

    assert_eq!(ids(&right), vec![3, 5, 2, 4, 1]);
    right.reverse();
    assert_eq!(ids(&left), ids(&right));
  }

  #[test]
  fn indistinguishable_windows_keep_creation_order_both_ways() {
    let mut right = vec![
      window(3, 2, 2, 500, 500),
      window(1, 0, 0, 500, 500),
      window(2, 1, 1, 500, 500),
    ];
    let mut left = right.clone();

    sort_windows(&mut right, Direction::Right);
    sort_windows(&mut left, Direction::Left);

    assert_eq!(ids(&right), vec![1, 2, 3]);
    assert_eq!(ids(&left), vec![1, 2, 3]);
  }

  #[test]
  fn sorts_windows_chained_within_epsilon() {
    // Cascaded windows 5px apart with creation order unrelated to position
    let windows = (0..40u64)
      .map(|i| Window::new(i, Rectangle::new(i as i32 * 5, 0, 400, 300), (i * 41) % 101))
      .collect::<Vec<_>>();

    for direction in [Direction::Left, Direction::Right].iter().cloned() {
      let mut sorted = windows.clone();
      sort_windows(&mut sorted, direction);

      let mut sorted_ids = ids(&sorted);
      sorted_ids.sort();
      assert_eq!(sorted_ids, ids(&windows));
    }
  }

  #[test]
  fn start_boundary_sorts_before_every_window() {
    let far = window(1, i32::MAX, i32::MAX, 1, 1);
    let near = window(2, i32::MIN, i32::MIN, 1, 1);

    for direction in [Direction::Left, Direction::Right].iter().cloned() {
      let boundary = Candidate::Boundary(direction.start_boundary());
      for w in [&far, &near].iter().cloned() {
        assert_eq!(compare(direction, boundary, w.into()), Ordering::Less);
        assert_eq!(compare(direction, w.into(), boundary), Ordering::Greater);
      }
    }
  }

  #[test]
  fn boundaries_compare_with_each_other() {
    let max = Candidate::Boundary(Boundary::Max);
    let min = Candidate::Boundary(Boundary::Min);

    assert_eq!(compare(Direction::Right, min, max), Ordering::Less);
    assert_eq!(compare(Direction::Left, min, max), Ordering::Greater);
    assert_eq!(compare(Direction::Left, max, max), Ordering::Equal);
  }
}
