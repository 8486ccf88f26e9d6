//! Key detection over an accumulated block grid.
//!
//! Keys are found from their bottom-right corner. While scanning a row, a
//! blank cell whose right neighbour and lower neighbour are both grid
//! characters sits in the bottom-right corner of a key's interior:
//!
//! ```text
//!   ┌──┐
//!   │Q*│   * = (x, y), the scanned blank
//!   └──┘       (x + 1, y) is the right border, (x, y + 1) the bottom border
//! ```
//!
//! The left border is the last grid character seen on the same row, and the
//! top border is found by walking up the column just right of the left
//! border. The resulting rectangle is accepted only if its top row and left
//! column consist entirely of grid characters and nothing else inside it is
//! one. Rejected candidates are skipped without error, so decorative
//! box-drawing never aborts a parse.

use log::trace;

use keygrid_core::keymap::Key;

use crate::grid::Grid;

/// Finds every well-formed key in `grid`, in scan order.
///
/// Keys are ordered by the position of their bottom-right interior cell,
/// top to bottom and then left to right.
pub fn detect_keys(grid: &Grid) -> Vec<Key> {
    let width = grid.width();
    let mut keys = Vec::new();

    for y in 0..grid.height() {
        // Until a grid character is seen the cursor sits past the right edge,
        // which makes any candidate too narrow.
        let mut left = width;
        for x in 0..width {
            if grid.is_grid(x, y) {
                left = x;
            } else if grid.is_grid(x + 1, y) && grid.is_grid(x, y + 1) {
                if let Some(key) = candidate_key(grid, left, x + 1, y + 1) {
                    keys.push(key);
                }
            }
        }
    }

    keys
}

/// Materializes the key bounded by the `left` and `right` border columns and
/// the `bottom` border row, if its borders are sound.
fn candidate_key(grid: &Grid, left: usize, right: usize, bottom: usize) -> Option<Key> {
    if left + 1 >= right || grid.is_grid(left + 1, bottom - 1) {
        trace!(left, right, bottom; "Skipping candidate without interior");
        return None;
    }

    let mut top = bottom - 1;
    while top > 0 && !grid.is_grid(left + 1, top) {
        top -= 1;
    }

    let Some(label) = extract_label(grid, left, top, right, bottom) else {
        trace!(left, top, right, bottom; "Rejecting candidate with broken border");
        return None;
    };

    Some(Key::new(left, top, right - left, bottom - top, label))
}

/// Validates the rectangle `left..right` × `top..bottom` and collects its
/// interior text.
///
/// Cells on the top row or the left column must be grid characters; all
/// other cells must not be. Interior characters are concatenated row by row
/// and the result is whitespace-trimmed.
fn extract_label(
    grid: &Grid,
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
) -> Option<String> {
    let mut label = String::new();
    for y in top..bottom {
        for x in left..right {
            let is_edge = x == left || y == top;
            if grid.is_grid(x, y) != is_edge {
                return None;
            }
            if !is_edge {
                label.push(grid.at(x, y));
            }
        }
    }

    Some(label.trim().to_string())
}
