//! Line-driven recognition of titled diagram blocks.
//!
//! A block opens with a line starting with `/*`; the rest of that line is the
//! block title. It closes with a line that is exactly `*/`. Lines in between
//! are trimmed to their grid content and accumulated; lines without any grid
//! character (blank lines, prose) are dropped. On close, the accumulated grid
//! is handed to key detection and, if any key is found, becomes a [`Keymap`].
//!
//! ```text
//! /* Qwerty                         <- open, title "Qwerty"
//!  * ┌─────┬─────┐
//!  * │ Esc │  Q  │                  <- accumulated rows
//!  * └─────┴─────┘
//!  */                               <- close
//! ```

use std::mem;

use log::{debug, warn};

use keygrid_core::keymap::Keymap;

use crate::{detect::detect_keys, grid::Grid, trim::trim_grid_line};

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

#[derive(Debug, Default)]
enum State {
    #[default]
    Outside,
    InBlock {
        title: String,
    },
}

/// Incremental block parser fed one line at a time.
///
/// # Examples
///
/// ```
/// # use keygrid_parser::BlockParser;
/// let mut parser = BlockParser::new();
/// for line in ["/* Base", "┌──┐", "│Q │", "└──┘", "*/"] {
///     parser.feed(line);
/// }
///
/// let keymaps = parser.finish();
/// assert_eq!(keymaps.len(), 1);
/// assert_eq!(keymaps[0].title(), "Base");
/// assert_eq!(keymaps[0].keys()[0].label(), "Q");
/// ```
#[derive(Debug, Default)]
pub struct BlockParser {
    state: State,
    grid: Grid,
    keymaps: Vec<Keymap>,
}

impl BlockParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` between an opening line and its closing line.
    pub fn is_in_block(&self) -> bool {
        matches!(self.state, State::InBlock { .. })
    }

    /// Keymaps completed so far, in block order.
    pub fn keymaps(&self) -> &[Keymap] {
        &self.keymaps
    }

    /// Processes one line of input, without its line terminator.
    pub fn feed(&mut self, line: &str) {
        let trimmed = line.trim();
        if self.is_in_block() {
            if trimmed == BLOCK_CLOSE {
                self.close_block();
            } else if let Some(row) = trim_grid_line(line) {
                self.grid.push_row(row);
            }
        } else if let Some(rest) = trimmed.strip_prefix(BLOCK_OPEN) {
            let title = rest.trim().to_string();
            debug!(title = title.as_str(); "Block opened");
            self.grid.clear();
            self.state = State::InBlock { title };
        }
    }

    /// Ends the input and returns every keymap found.
    ///
    /// A block still open at this point is discarded.
    pub fn finish(self) -> Vec<Keymap> {
        if let State::InBlock { title } = &self.state {
            warn!(
                title = title.as_str(),
                rows = self.grid.height();
                "Discarding unterminated block"
            );
        }
        self.keymaps
    }

    fn close_block(&mut self) {
        let State::InBlock { title } = mem::take(&mut self.state) else {
            return;
        };

        let keys = detect_keys(&self.grid);
        let rows = self.grid.height();
        self.grid.clear();

        if keys.is_empty() {
            debug!(title = title.as_str(), rows; "Block closed without keys");
            return;
        }

        debug!(title = title.as_str(), rows, keys = keys.len(); "Block closed");
        self.keymaps.push(Keymap::new(title, keys));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(lines: &[&str]) -> BlockParser {
        let mut parser = BlockParser::new();
        for line in lines {
            parser.feed(line);
        }
        parser
    }

    #[test]
    fn test_open_and_close_transitions() {
        let mut parser = BlockParser::new();
        assert!(!parser.is_in_block());

        parser.feed("  /* Layer  ");
        assert!(parser.is_in_block());

        parser.feed("   */   ");
        assert!(!parser.is_in_block());
    }

    #[test]
    fn test_title_is_trimmed_remainder() {
        let keymaps = feed_all(&[
            "   /*   Adjust (Lower + Raise)  ",
            "┌──┐",
            "│Q │",
            "└──┘",
            "*/",
        ])
        .finish();
        assert_eq!(keymaps[0].title(), "Adjust (Lower + Raise)");
    }

    #[test]
    fn test_empty_title() {
        let keymaps = feed_all(&["/*", "┌──┐", "│Q │", "└──┘", "*/"]).finish();
        assert_eq!(keymaps[0].title(), "");
    }

    #[test]
    fn test_c_comment_prefix_is_ignored() {
        let keymaps = feed_all(&[
            "/* Base",
            " * ┌──┬──┐",
            " * │A │B │",
            " * └──┴──┘",
            " */",
        ])
        .finish();
        assert_eq!(keymaps.len(), 1);
        assert_eq!(keymaps[0].len(), 2);
        assert_eq!(keymaps[0].keys()[0].x(), 3);
    }

    #[test]
    fn test_prose_and_blank_lines_inside_block_are_dropped() {
        let keymaps = feed_all(&[
            "/* Base",
            "",
            " * Hold the left key for the lower layer.",
            " * ┌──┐",
            "",
            " * │Q │",
            " * └──┘",
            " *",
            " */",
        ])
        .finish();
        assert_eq!(keymaps.len(), 1);
        assert_eq!(keymaps[0].keys()[0].y(), 0);
        assert_eq!(keymaps[0].keys()[0].dy(), 2);
    }

    #[test]
    fn test_block_without_keys_emits_nothing() {
        let keymaps = feed_all(&[
            "/* Copyright 2024",
            " * Licensed under the MIT license.",
            " */",
        ])
        .finish();
        assert!(keymaps.is_empty());
    }

    #[test]
    fn test_lines_outside_blocks_are_ignored() {
        let keymaps = feed_all(&["┌──┐", "│Q │", "└──┘", "*/", "int x = 0;"]).finish();
        assert!(keymaps.is_empty());
    }

    #[test]
    fn test_unterminated_block_is_discarded() {
        let parser = feed_all(&["/* Base", "┌──┐", "│Q │", "└──┘"]);
        assert!(parser.is_in_block());
        assert!(parser.finish().is_empty());
    }

    #[test]
    fn test_blocks_keep_encounter_order() {
        let keymaps = feed_all(&[
            "/* First",
            "┌──┐",
            "│1 │",
            "└──┘",
            "*/",
            "/* Empty",
            "*/",
            "/* Second",
            "┌──┐",
            "│2 │",
            "└──┘",
            "*/",
        ])
        .finish();
        let titles: Vec<_> = keymaps.iter().map(Keymap::title).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_grid_does_not_leak_between_blocks() {
        let parser = feed_all(&["/* First", "┌──┐", "│1 │", "└──┘", "*/", "/* Second", "*/"]);
        assert_eq!(parser.keymaps().len(), 1);
        assert!(parser.grid.is_empty());
    }
}
