use ndarray::Array2;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Places mines uniformly at random without replacement, seeded for reproducible boards.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        RngLayoutGenerator::new(&mut rng).generate(config)
    }
}

/// Same placement as [`RandomLayoutGenerator`], drawing from a caller-owned random source.
#[derive(Debug)]
pub struct RngLayoutGenerator<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RngLayoutGenerator<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> LayoutGenerator for RngLayoutGenerator<'_, R> {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        config.validate()?;

        let (rows, cols) = config.size;
        let total = config.total_cells() as usize;
        let mines = config.mines as usize;

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        {
            let cells = mine_mask
                .as_slice_mut()
                .ok_or(GameError::EmptyBoard)?;
            for place in index::sample(self.rng, total, mines) {
                cells[place] = true;
            }
        }

        let layout = MineLayout::from_mine_mask(&mine_mask);
        log::debug!(
            "generated {}x{} layout with {} mines",
            rows,
            cols,
            layout.mine_count()
        );

        // double check mine count
        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        Ok(layout)
    }
}
