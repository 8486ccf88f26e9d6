//! Box-drawing character classification.
//!
//! Every character maps to the set of directions in which it connects to a
//! neighbouring cell. Only the light single-line glyphs `─│┌┐└┘├┤┴┬┼` take part
//! in key borders; everything else has no connectivity and counts as label
//! text or blank space.

use bitflags::bitflags;

bitflags! {
    /// Directions in which a box-drawing glyph connects to its neighbours.
    ///
    /// Combine with bitwise OR: `Connectivity::NORTH | Connectivity::SOUTH`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Connectivity: u8 {
        const NORTH = 1 << 0;
        const SOUTH = 1 << 1;
        const WEST = 1 << 2;
        const EAST = 1 << 3;
    }
}

impl Connectivity {
    /// Classifies a single character.
    ///
    /// Total over all characters; unrecognized ones yield the empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use keygrid_parser::Connectivity;
    /// assert_eq!(Connectivity::of('┌'), Connectivity::SOUTH | Connectivity::EAST);
    /// assert!(Connectivity::of('Q').is_empty());
    /// ```
    pub fn of(c: char) -> Self {
        match c {
            '─' => Self::WEST | Self::EAST,
            '│' => Self::NORTH | Self::SOUTH,
            '┌' => Self::SOUTH | Self::EAST,
            '┐' => Self::SOUTH | Self::WEST,
            '└' => Self::NORTH | Self::EAST,
            '┘' => Self::NORTH | Self::WEST,
            '├' => Self::NORTH | Self::SOUTH | Self::EAST,
            '┤' => Self::NORTH | Self::SOUTH | Self::WEST,
            '┴' => Self::NORTH | Self::WEST | Self::EAST,
            '┬' => Self::SOUTH | Self::WEST | Self::EAST,
            '┼' => Self::all(),
            _ => Self::empty(),
        }
    }
}

/// Returns `true` if `c` is part of a key border.
#[inline]
pub fn is_grid_char(c: char) -> bool {
    !Connectivity::of(c).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_lines() {
        assert_eq!(Connectivity::of('─'), Connectivity::WEST | Connectivity::EAST);
        assert_eq!(
            Connectivity::of('│'),
            Connectivity::NORTH | Connectivity::SOUTH
        );
    }

    #[test]
    fn test_corners_and_tees() {
        assert_eq!(Connectivity::of('┘'), Connectivity::NORTH | Connectivity::WEST);
        assert_eq!(
            Connectivity::of('┴'),
            Connectivity::NORTH | Connectivity::WEST | Connectivity::EAST
        );
        assert_eq!(
            Connectivity::of('├'),
            Connectivity::NORTH | Connectivity::SOUTH | Connectivity::EAST
        );
        assert_eq!(Connectivity::of('┼'), Connectivity::all());
    }

    #[test]
    fn test_every_border_glyph_is_grid() {
        for c in "─│┌┐└┘├┤┴┬┼".chars() {
            assert!(is_grid_char(c), "{c:?} should be a grid character");
        }
    }

    #[test]
    fn test_non_border_characters() {
        // Heavy, double and rounded variants are not part of the border set
        for c in ['a', ' ', '|', '-', '+', '━', '═', '╭', '*', '/'] {
            assert!(!is_grid_char(c), "{c:?} should not be a grid character");
        }
    }

    #[test]
    fn test_every_glyph_connects_at_least_twice() {
        for c in "─│┌┐└┘├┤┴┬┼".chars() {
            assert!(Connectivity::of(c).bits().count_ones() >= 2);
        }
    }
}
