use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the renderer draws for one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    RevealedEmpty,
    RevealedNumber(u8),
    RevealedMine,
}

/// Snapshot of everything the front end needs to draw a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub total_mines: CellCount,
    pub flags_placed: CellCount,
    pub state: EngineState,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_engine(engine: &PlayEngine) -> Self {
        let size = engine.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            let coords = dim_to_size((row, col));
            Self::cell_view(engine.cell_at(coords), engine.content_at(coords))
        });

        Self {
            size,
            total_mines: engine.total_mines(),
            flags_placed: engine.flags_placed(),
            state: engine.state(),
            triggered_mine: engine.triggered_mine(),
            cells,
        }
    }

    const fn cell_view(cell: EngineCell, content: CellContent) -> CellView {
        match (cell, content) {
            (EngineCell::Hidden, _) => CellView::Hidden,
            (EngineCell::Flagged, _) => CellView::Flagged,
            (EngineCell::Revealed, CellContent::Mine) => CellView::RevealedMine,
            (EngineCell::Revealed, CellContent::Number(0)) => CellView::RevealedEmpty,
            (EngineCell::Revealed, CellContent::Number(count)) => CellView::RevealedNumber(count),
        }
    }

    pub fn cell(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }

    /// Iterates `((row, col), view)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        self.cells
            .indexed_iter()
            .map(|(index, &view)| (dim_to_size(index), view))
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_finished()
    }
}
