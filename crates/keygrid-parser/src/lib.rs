//! # Keygrid Parser
//!
//! Parser for keyboard layouts drawn with box-drawing characters inside
//! comment blocks, as commonly found in QMK `keymap.c` files.
//!
//! ## Input format
//!
//! ```text
//! /* Qwerty
//!  * ┌─────┬─────┬─────┐
//!  * │ Esc │  Q  │  W  │
//!  * ├─────┼─────┴─────┤
//!  * │ Tab │   Space   │
//!  * └─────┴───────────┘
//!  */
//! ```
//!
//! Each block yields one [`Keymap`] titled with the text after `/*`. Every
//! rectangle with a clean border becomes a [`Key`] whose label is the text
//! inside it.
//!
//! ## Pipeline
//!
//! 1. **Block recognition** - [`BlockParser`] tracks `/*` ... `*/` blocks
//! 2. **Line trimming** - [`trim_grid_line`] reduces lines to their diagram part
//! 3. **Key detection** - [`detect_keys`] finds bordered rectangles in a [`Grid`]
//!
//! ## Usage
//!
//! ```
//! # use keygrid_parser::{parse, ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let source = "/* Base\n┌──┬──┐\n│A │B │\n└──┴──┘\n*/\n";
//!
//!     let keymaps = parse(source)?;
//!     assert_eq!(keymaps[0].title(), "Base");
//!     assert_eq!(keymaps[0].keys()[1].label(), "B");
//!     Ok(())
//! }
//! ```

mod block;
mod connectivity;
mod detect;
mod error;
mod grid;
mod trim;

pub use block::BlockParser;
pub use connectivity::{Connectivity, is_grid_char};
pub use detect::detect_keys;
pub use error::ParseError;
pub use grid::Grid;
pub use trim::trim_grid_line;

pub use keygrid_core::keymap::{Key, Keymap};

use std::io::BufRead;

use log::{debug, info};

/// Parses every keymap block from a line source.
///
/// Lines are pulled in order until the source is exhausted. Keymaps are
/// returned in the order their blocks appear. Bytes that are not valid
/// UTF-8 decode to U+FFFD, which is never a grid character, so a stray
/// Latin-1 byte in a comment does not stop the parse.
///
/// # Errors
///
/// - [`ParseError::Io`] if reading from the source fails; nothing parsed so
///   far is returned.
/// - [`ParseError::NotFound`] if no block produced a key.
pub fn parse_keymaps<R: BufRead>(reader: R) -> Result<Vec<Keymap>, ParseError> {
    let mut parser = BlockParser::new();
    for raw in reader.split(b'\n') {
        let raw = raw?;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(raw.as_slice());
        parser.feed(&String::from_utf8_lossy(bytes));
    }

    let keymaps = parser.finish();
    if keymaps.is_empty() {
        debug!("Source contains no keymap");
        return Err(ParseError::NotFound);
    }

    info!(keymaps = keymaps.len(); "Keymaps parsed");
    Ok(keymaps)
}

/// Parses every keymap block from an in-memory source.
///
/// # Errors
///
/// Returns [`ParseError::NotFound`] if no block produced a key.
pub fn parse(source: &str) -> Result<Vec<Keymap>, ParseError> {
    parse_keymaps(source.as_bytes())
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Strategy for arbitrary small grids mixing border glyphs, label text and blanks.
    fn noisy_grid_strategy() -> impl Strategy<Value = Vec<String>> {
        let cell = prop::sample::select(vec![
            '─', '│', '┌', '┐', '└', '┘', '├', '┤', '┴', '┬', '┼', ' ', ' ', 'a', 'b',
        ]);
        prop::collection::vec(
            prop::collection::vec(cell, 0..10)
                .prop_map(|row: Vec<char>| row.into_iter().collect::<String>()),
            0..10,
        )
    }

    /// A regular board: `rows` x `cols` keys with labels padded to `width`.
    #[derive(Debug, Clone)]
    struct Board {
        rows: usize,
        cols: usize,
        width: usize,
    }

    fn board_strategy() -> impl Strategy<Value = Board> {
        (1usize..5, 1usize..7, 3usize..7).prop_map(|(rows, cols, width)| Board {
            rows,
            cols,
            width,
        })
    }

    impl Board {
        fn label(&self, row: usize, col: usize) -> String {
            format!("k{}", row * self.cols + col)
        }

        fn border(&self, left: char, join: char, right: char) -> String {
            let segment = "─".repeat(self.width + 2);
            let mut line = String::from(left);
            for col in 0..self.cols {
                line.push_str(&segment);
                line.push(if col + 1 == self.cols { right } else { join });
            }
            line
        }

        fn source(&self) -> String {
            let mut lines = vec!["/* Board".to_string(), self.border('┌', '┬', '┐')];
            for row in 0..self.rows {
                let mut content = String::from("│");
                for col in 0..self.cols {
                    let label = self.label(row, col);
                    content.push_str(&format!(" {label:<w$} │", w = self.width));
                }
                lines.push(content);
                if row + 1 == self.rows {
                    lines.push(self.border('└', '┴', '┘'));
                } else {
                    lines.push(self.border('├', '┼', '┤'));
                }
            }
            lines.push("*/".to_string());
            lines.join("\n")
        }
    }

    fn check_border_symmetry(lines: &[String]) -> Result<(), TestCaseError> {
        let grid = Grid::from_rows(lines.iter().map(|line| line.chars().collect()));
        for key in detect_keys(&grid) {
            for y in key.y()..key.bottom() {
                for x in key.x()..key.right() {
                    let is_edge = x == key.x() || y == key.y();
                    prop_assert_eq!(
                        grid.is_grid(x, y),
                        is_edge,
                        "cell ({}, {}) of {:?}",
                        x,
                        y,
                        key
                    );
                }
            }
            prop_assert!(key.dx() >= 2);
            prop_assert!(key.dy() >= 1);
        }
        Ok(())
    }

    fn check_board_yields_every_key(board: &Board) -> Result<(), TestCaseError> {
        let keymaps = parse(&board.source()).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(keymaps.len(), 1);

        let keys = keymaps[0].keys();
        prop_assert_eq!(keys.len(), board.rows * board.cols);
        for row in 0..board.rows {
            for col in 0..board.cols {
                let key = &keys[row * board.cols + col];
                let expected = Key::new(
                    col * (board.width + 3),
                    row * 2,
                    board.width + 3,
                    2,
                    board.label(row, col),
                );
                prop_assert_eq!(key, &expected);
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn detected_keys_have_sound_borders(lines in noisy_grid_strategy()) {
            check_border_symmetry(&lines)?;
        }

        #[test]
        fn parsing_is_idempotent(lines in noisy_grid_strategy()) {
            let source = format!("/* Noise\n{}\n*/\n", lines.join("\n"));
            let first = parse(&source).ok();
            let second = parse(&source).ok();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn regular_board_yields_every_key(board in board_strategy()) {
            check_board_yields_every_key(&board)?;
        }
    }
}
