#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use session::*;
pub use types::*;
pub use view::*;

mod cell;
pub mod config;
mod engine;
mod error;
mod generator;
mod input;
mod session;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates the board shape; at least one cell must stay free of mines.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }

        let cells = self.total_cells();
        if self.mines >= cells {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }

        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        use config::*;
        Self::new_unchecked((DEFAULT_ROWS, DEFAULT_COLS), DEFAULT_MINES)
    }
}

/// Hidden contents of a board: where the mines are and every cell's adjacency count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    contents: Array2<CellContent>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let mut mine_count: CellCount = 0;
        let contents = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            if mine_mask[(row, col)] {
                mine_count += 1;
                return CellContent::Mine;
            }
            let coords = dim_to_size((row, col));
            let adjacent = mine_mask
                .iter_neighbors(coords)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            // at most 8 neighbours
            CellContent::Number(adjacent as u8)
        });

        Self {
            contents,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(&mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn in_bounds(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn size(&self) -> Coord2 {
        dim_to_size(self.contents.dim())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.contents.len().try_into().unwrap_or(CellCount::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    /// Iterates every mine position in row-major order.
    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.contents
            .indexed_iter()
            .filter(|(_, content)| content.is_mine())
            .map(|(index, _)| dim_to_size(index))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.contents.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = CellContent;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.contents[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_full_board() {
        assert_eq!(
            GameConfig::new((3, 3), 9),
            Err(GameError::TooManyMines { mines: 9, cells: 9 })
        );
        assert!(GameConfig::new((3, 3), 8).is_ok());
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new((0, 5), 0), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::new((5, 0), 0), Err(GameError::EmptyBoard));
    }

    #[test]
    fn default_config_uses_fixed_constants() {
        let config = GameConfig::default();
        assert_eq!(config.size, (10, 10));
        assert_eq!(config.mines, 15);
        assert_eq!(config.safe_cells(), 85);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn layout_counts_adjacent_mines() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0)]).unwrap();

        assert_eq!(layout.mine_count(), 1);
        assert_eq!(layout[(0, 0)], CellContent::Mine);
        assert_eq!(layout[(1, 1)], CellContent::Number(1));
        assert_eq!(layout[(2, 2)], CellContent::Number(0));
        assert_eq!(layout.safe_cell_count(), 8);
    }

    #[test]
    fn layout_counts_surrounded_cell() {
        let ring = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ];
        let layout = MineLayout::from_mine_coords((3, 3), &ring).unwrap();

        assert_eq!(layout[(1, 1)], CellContent::Number(8));
        assert_eq!(layout.iter_mines().count(), 8);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mine() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }
}
