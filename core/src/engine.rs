use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Cells opened by a single reveal, in the order they were opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealResult {
    pub outcome: RevealOutcome,
    pub revealed: Vec<Coord2>,
    pub state: EngineState,
}

impl RevealResult {
    fn no_change(state: EngineState) -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            revealed: Vec::new(),
            state,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_finished()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    mine_layout: MineLayout,
    board: Array2<EngineCell>,
    safe_remaining: CellCount,
    flagged_count: CellCount,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        let safe_remaining = mine_layout.safe_cell_count();
        Self {
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            safe_remaining,
            flagged_count: 0,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    /// Validates `config` and builds a fresh board from `generator`.
    pub fn initialize(config: GameConfig, generator: impl LayoutGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(generator.generate(config)?))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    /// Flags currently on the board. Purely informational, never checked against the mines.
    pub fn flags_placed(&self) -> CellCount {
        self.flagged_count
    }

    pub fn safe_cells_remaining(&self) -> CellCount {
        self.safe_remaining
    }

    pub fn cell_at(&self, coords: Coord2) -> EngineCell {
        self.board[coords.to_nd_index()]
    }

    pub fn content_at(&self, coords: Coord2) -> CellContent {
        self.mine_layout[coords]
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use EngineCell::*;
        use MarkOutcome::*;

        let Ok(coords) = self.mine_layout.validate_coords(coords) else {
            log::trace!("flag ignored, out of bounds: {:?}", coords);
            return NoChange;
        };
        if self.state.is_finished() {
            return NoChange;
        }

        let cell = &mut self.board[coords.to_nd_index()];
        match *cell {
            Hidden => {
                *cell = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                *cell = Hidden;
                self.flagged_count -= 1;
                Changed
            }
            Revealed => NoChange,
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealResult {
        let Ok(coords) = self.mine_layout.validate_coords(coords) else {
            log::trace!("reveal ignored, out of bounds: {:?}", coords);
            return RevealResult::no_change(self.state);
        };
        if self.state.is_finished() || !matches!(self.cell_at(coords), EngineCell::Hidden) {
            return RevealResult::no_change(self.state);
        }

        if self.mine_layout.contains_mine(coords) {
            log::debug!("mine hit at {:?}", coords);
            self.triggered_mine = Some(coords);
            let revealed = self.reveal_all_mines();
            self.end_game(false);
            return RevealResult {
                outcome: RevealOutcome::HitMine,
                revealed,
                state: self.state,
            };
        }

        let revealed = self.flood_reveal(coords);

        let outcome = if self.safe_remaining == 0 {
            self.end_game(true);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        };

        RevealResult {
            outcome,
            revealed,
            state: self.state,
        }
    }

    /// Opens `start` and, through zero cells, everything connected to it.
    ///
    /// The revealed flag doubles as the visited set, so each cell is opened at most once.
    fn flood_reveal(&mut self, start: Coord2) -> Vec<Coord2> {
        let mut revealed = Vec::new();
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.board[coords.to_nd_index()];
            if !matches!(*cell, EngineCell::Hidden) {
                continue;
            }

            let CellContent::Number(adjacent) = self.mine_layout[coords] else {
                // zero cells never border a mine
                log::warn!("flood fill reached a mine at {:?}", coords);
                continue;
            };

            *cell = EngineCell::Revealed;
            self.safe_remaining -= 1;
            revealed.push(coords);

            if adjacent == 0 {
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(coords)
                        .filter(|&pos| matches!(self.board[pos.to_nd_index()], EngineCell::Hidden)),
                );
            }
        }

        revealed
    }

    fn reveal_all_mines(&mut self) -> Vec<Coord2> {
        let mines: Vec<_> = self.mine_layout.iter_mines().collect();
        for &coords in &mines {
            self.board[coords.to_nd_index()] = EngineCell::Revealed;
        }
        mines
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        log::debug!("game over: {:?}", self.state);
    }
}
