//! Spatial helpers for grid-based modules: coordinates, dimensions,
//! operator coordinate entry, and edge-walled maze pathfinding.

use defuse_core::console::Console;
use defuse_core::error::SolveError;

pub mod maze;
pub use maze::{Direction, Wall, shortest_path};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Size of a 2D square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: u32,
    pub cols: u32,
}

impl Dimensions {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
}

/// A 0-indexed coordinate on a 2D square grid. (0, 0) is the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

// ---------------------------------------------------------------------------
// Coordinate entry
// ---------------------------------------------------------------------------

/// Get a coordinate from the operator in the `"B4"` form: the letter is the
/// column and the number is the 1-based row.
pub fn ask_coord(console: &mut dyn Console) -> Result<Coord, SolveError> {
    console.emit("(Submit a coordinate like \"B4\", where the letter is the column");
    console.emit("and the number is the row.)");
    let answer = console.string_matching(&alpha_coord_valid, false)?;
    Ok(parse_alpha_coord(&answer).unwrap_or(Coord::new(0, 0)))
}

fn alpha_coord_valid(text: &str) -> bool {
    parse_alpha_coord(text).is_some()
}

fn parse_alpha_coord(text: &str) -> Option<Coord> {
    let mut chars = text.chars();
    let letter = chars.next()?;
    if !letter.is_ascii_lowercase() {
        return None;
    }
    let digits = chars.as_str();
    if digits.is_empty() || digits.starts_with('0') || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let row: u32 = digits.parse().ok()?;
    let col = letter as u32 - 'a' as u32;
    Some(Coord::new(row - 1, col))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use defuse_core::test_utils::ScriptedConsole;

    #[test]
    fn alpha_coords_parse_to_zero_indexed_row_col() {
        assert_eq!(parse_alpha_coord("a1"), Some(Coord::new(0, 0)));
        assert_eq!(parse_alpha_coord("b4"), Some(Coord::new(3, 1)));
        assert_eq!(parse_alpha_coord("f12"), Some(Coord::new(11, 5)));
    }

    #[test]
    fn bad_alpha_coords_rejected() {
        assert_eq!(parse_alpha_coord(""), None);
        assert_eq!(parse_alpha_coord("a"), None);
        assert_eq!(parse_alpha_coord("a0"), None);
        assert_eq!(parse_alpha_coord("4b"), None);
        assert_eq!(parse_alpha_coord("ab"), None);
    }

    #[test]
    fn ask_coord_lowercases_and_reprompts() {
        let mut console = ScriptedConsole::new(["nope", "C3"]);
        let coord = ask_coord(&mut console).unwrap();
        assert_eq!(coord, Coord::new(2, 2));
    }
}
