use serde::{Deserialize, Serialize};

/// What a cell holds underneath, fixed once the layout is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    /// Count of mines among the up-to-8 neighbours.
    Number(u8),
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Canonical player-visible state stored by the gameplay engine.
///
/// A cell is never revealed and flagged at the same time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineCell {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

impl EngineCell {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}
