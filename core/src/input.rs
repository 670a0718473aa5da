//! Pointer-to-cell mapping for the drawing surface.

use serde::{Deserialize, Serialize};

use crate::*;

/// Pointer button, from the DOM `MouseEvent.button` discriminator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

impl From<i16> for PointerButton {
    fn from(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            2 => Self::Secondary,
            _ => Self::Other,
        }
    }
}

/// A pointer-down in surface pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub button: PointerButton,
    pub x: f64,
    pub y: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerAction {
    Reveal(Coord2),
    Flag(Coord2),
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    pub size: Coord2,
    pub cell_size: f64,
}

impl BoardGeometry {
    pub const fn new(size: Coord2, cell_size: f64) -> Self {
        Self { size, cell_size }
    }

    /// Width and height of the whole board in pixels.
    pub fn pixel_size(&self) -> (f64, f64) {
        let (rows, cols) = self.size;
        (
            f64::from(cols) * self.cell_size,
            f64::from(rows) * self.cell_size,
        )
    }

    /// Top-left pixel corner of a cell.
    pub fn cell_origin(&self, (row, col): Coord2) -> (f64, f64) {
        (
            f64::from(col) * self.cell_size,
            f64::from(row) * self.cell_size,
        )
    }

    /// Maps a pixel position to the cell under it, `None` when off the board.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Coord2> {
        let col = self.axis_index(x, self.size.1)?;
        let row = self.axis_index(y, self.size.0)?;
        Some((row, col))
    }

    fn axis_index(&self, pos: f64, len: Coord) -> Option<Coord> {
        if !pos.is_finite() || pos < 0.0 || self.cell_size <= 0.0 {
            return None;
        }
        // truncation is floor for non-negative values
        let index = (pos / self.cell_size) as u64;
        if index < u64::from(len) {
            Coord::try_from(index).ok()
        } else {
            None
        }
    }

    pub fn action_for(&self, input: PointerInput) -> Option<PointerAction> {
        let coords = self.cell_at(input.x, input.y)?;
        match input.button {
            PointerButton::Primary => Some(PointerAction::Reveal(coords)),
            PointerButton::Secondary => Some(PointerAction::Flag(coords)),
            PointerButton::Other => None,
        }
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(GameConfig::default().size, config::CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(button: i16, x: f64, y: f64) -> PointerInput {
        PointerInput {
            button: button.into(),
            x,
            y,
        }
    }

    #[test]
    fn maps_pixels_to_row_and_column() {
        let geometry = BoardGeometry::new((10, 10), 40.0);

        assert_eq!(geometry.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(geometry.cell_at(85.0, 39.9), Some((0, 2)));
        assert_eq!(geometry.cell_at(39.9, 85.0), Some((2, 0)));
        assert_eq!(geometry.cell_at(399.0, 399.0), Some((9, 9)));
    }

    #[test]
    fn off_board_positions_are_ignored() {
        let geometry = BoardGeometry::new((10, 10), 40.0);

        assert_eq!(geometry.cell_at(-1.0, 10.0), None);
        assert_eq!(geometry.cell_at(10.0, 400.0), None);
        assert_eq!(geometry.cell_at(400.0, 10.0), None);
        assert_eq!(geometry.cell_at(f64::NAN, 10.0), None);
    }

    #[test]
    fn buttons_select_action() {
        let geometry = BoardGeometry::default();

        assert_eq!(
            geometry.action_for(input(0, 50.0, 10.0)),
            Some(PointerAction::Reveal((0, 1)))
        );
        assert_eq!(
            geometry.action_for(input(2, 50.0, 10.0)),
            Some(PointerAction::Flag((0, 1)))
        );
        assert_eq!(geometry.action_for(input(1, 50.0, 10.0)), None);
        assert_eq!(geometry.action_for(input(0, 500.0, 10.0)), None);
    }

    #[test]
    fn non_square_board_size() {
        let geometry = BoardGeometry::new((2, 5), 40.0);

        assert_eq!(geometry.pixel_size(), (200.0, 80.0));
        assert_eq!(geometry.cell_origin((1, 4)), (160.0, 40.0));
        assert_eq!(geometry.cell_at(199.0, 79.0), Some((1, 4)));
        assert_eq!(geometry.cell_at(79.0, 199.0), None);
    }
}
