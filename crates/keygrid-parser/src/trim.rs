//! Normalization of raw source lines into grid rows.

use crate::connectivity::is_grid_char;

/// Trims a raw line down to its diagram content.
///
/// Characters before the first grid character are replaced with blanks, so
/// column positions are preserved, and everything after the last grid
/// character is dropped. Text enclosed between grid characters is kept as-is.
/// Columns are counted in `char`s.
///
/// Returns `None` if the line contains no grid character at all.
///
/// # Examples
///
/// ```
/// # use keygrid_parser::trim_grid_line;
/// let row: String = trim_grid_line(" * │ Tab  │  Q  │ // row 2").unwrap().into_iter().collect();
/// assert_eq!(row, "   │ Tab  │  Q  │");
///
/// assert!(trim_grid_line("[_QWERTY] = LAYOUT(").is_none());
/// ```
pub fn trim_grid_line(line: &str) -> Option<Vec<char>> {
    let end = line
        .chars()
        .enumerate()
        .filter(|&(_, c)| is_grid_char(c))
        .map(|(i, _)| i + 1)
        .last()?;

    let mut seen_grid = false;
    let row = line
        .chars()
        .take(end)
        .map(|c| {
            seen_grid |= is_grid_char(c);
            if seen_grid { c } else { ' ' }
        })
        .collect();

    Some(row)
}
