//! Keyboard layout model.
//!
//! A [`Keymap`] is one named layer of a keyboard layout. It owns an ordered
//! list of [`Key`]s, each a rectangle on the source diagram's character grid
//! carrying a text label.
//!
//! Key coordinates are border intersections: `(x, y)` is the top-left corner
//! character of the key's border and `(x + dx, y + dy)` the bottom-right one.
//! Adjacent keys share a border column or row, so the right edge of one key
//! is the left edge of its neighbour.
//!
//! ```text
//!   x=0  x=3  x=6
//!    ┌──┬──┐      y=0
//!    │A │B │
//!    └──┴──┘      y=2
//! ```
//!
//! Here `A` is `{x: 0, y: 0, dx: 3, dy: 2}` and `B` is `{x: 3, y: 0, dx: 3, dy: 2}`.

use crate::geometry::{Bounds, Point};

/// A single key of a keymap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    x: usize,
    y: usize,
    dx: usize,
    dy: usize,
    label: String,
}

impl Key {
    /// Creates a key anchored at `(x, y)` spanning `dx` columns and `dy` rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use keygrid_core::keymap::Key;
    /// let key = Key::new(0, 0, 3, 2, "Q");
    /// assert_eq!(key.right(), 3);
    /// assert_eq!(key.bottom(), 2);
    /// assert_eq!(key.label(), "Q");
    /// ```
    pub fn new(x: usize, y: usize, dx: usize, dy: usize, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            dx,
            dy,
            label: label.into(),
        }
    }

    /// Column of the top-left border intersection
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row of the top-left border intersection
    pub fn y(&self) -> usize {
        self.y
    }

    /// Columns from the left border to the right border
    pub fn dx(&self) -> usize {
        self.dx
    }

    /// Rows from the top border to the bottom border
    pub fn dy(&self) -> usize {
        self.dy
    }

    /// Column of the right border
    pub fn right(&self) -> usize {
        self.x + self.dx
    }

    /// Row of the bottom border
    pub fn bottom(&self) -> usize {
        self.y + self.dy
    }

    /// The trimmed interior text of the key; may be empty
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the key's rectangle in grid units.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            Point::new(self.x as i64, self.y as i64),
            Point::new(self.right() as i64, self.bottom() as i64),
        )
    }
}

/// A titled layer of keys, in detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keymap {
    title: String,
    keys: Vec<Key>,
}

impl Keymap {
    pub fn new(title: impl Into<String>, keys: Vec<Key>) -> Self {
        Self {
            title: title.into(),
            keys,
        }
    }

    /// The layer name taken from the block's opening line
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the first key whose label equals `label`.
    pub fn find_by_label(&self, label: &str) -> Option<&Key> {
        self.keys.iter().find(|key| key.label == label)
    }

    /// Returns the smallest grid rectangle covering every key, or `None` for
    /// an empty keymap.
    pub fn bounds(&self) -> Option<Bounds> {
        self.keys
            .iter()
            .map(Key::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }
}
