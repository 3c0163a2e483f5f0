use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement by rejection sampling, keeping the 3×3 block around the start tile free of mines.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: &GameConfig, start: Coord2) -> MineLayout {
        let size = config.size();
        let (height, width) = size;
        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());

        let excluded = neighbors_of(start, size).count() as CellCount + 1;
        let available = config.total_cells().saturating_sub(excluded);
        let mut requested = config.mine_count();
        if requested > available {
            // only reachable when the config skipped validation
            log::warn!(
                "Minefield too small, requested {} mines but only {} fit outside the start area",
                requested,
                available
            );
            requested = available;
        }

        let mut placed = 0;
        while placed < requested {
            let coords = (
                self.rng.random_range(0..height),
                self.rng.random_range(0..width),
            );
            if mines[coords.to_nd_index()] || is_within_block(start, coords) {
                continue;
            }
            mines[coords.to_nd_index()] = true;
            placed += 1;
        }

        log::debug!("Placed {} mines around safe start {:?}", placed, start);
        MineLayout::from_mine_mask(mines)
    }
}
