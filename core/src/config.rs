//! Fixed game constants. There are no difficulty levels; every game uses these.

use crate::{CellCount, Coord};

pub const DEFAULT_ROWS: Coord = 10;
pub const DEFAULT_COLS: Coord = 10;
pub const DEFAULT_MINES: CellCount = 15;

/// Side length of one square cell on the drawing surface, in CSS pixels.
pub const CELL_SIZE: f64 = 40.0;
