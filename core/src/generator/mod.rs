use crate::*;
pub use random::*;

mod random;

/// Produces the hidden mine layout for a new board.
pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}
