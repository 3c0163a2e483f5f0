#![no_std]

extern crate alloc;

use core::ops::{BitOr, Index};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;
mod view;

/// Board parameters, the mine count is derived from the density.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mine_density: f64,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mine_density: f64) -> Self {
        Self {
            width,
            height,
            mine_density,
        }
    }

    pub fn new(width: Coord, height: Coord, mine_density: f64) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mine_density);
        config.validate()?;
        Ok(config)
    }

    /// Rejects boards where placement could not finish for some start position.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }

        if !(0.0..1.0).contains(&self.mine_density) {
            return Err(GameError::InvalidDensity(self.mine_density));
        }

        let mines = self.mine_count();
        let available = self.total_cells() - self.safe_zone_cells();
        if mines > available {
            return Err(GameError::TooManyMines { mines, available });
        }

        Ok(())
    }

    /// `(height, width)`, matching `(row, col)` addressing.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub fn mine_count(&self) -> CellCount {
        let mines = libm::round(self.mine_density * f64::from(self.total_cells()));
        // `as` saturates, which keeps unvalidated densities in range
        mines as CellCount
    }

    /// Largest start area kept free of mines, reached when the first click is away from the edges.
    pub const fn safe_zone_cells(&self) -> CellCount {
        mult(min_coord(self.width, 3), min_coord(self.height, 3))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(32, 16, 0.2)
    }
}

const fn min_coord(a: Coord, b: Coord) -> Coord {
    if a < b { a } else { b }
}

/// Where the mines are, fixed for the rest of the game once generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds { coords, size });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
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

#[derive(Copy, Clone, Debug, PartialEq)]
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
}

impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

impl core::ops::BitOrAssign for RevealOutcome {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_classic_board() {
        let config = GameConfig::default();

        assert_eq!(config.size(), (16, 32));
        assert_eq!(config.mine_count(), 102);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(
            GameConfig::new(0, 4, 0.1),
            Err(GameError::EmptyBoard {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn config_rejects_density_out_of_range() {
        assert_eq!(
            GameConfig::new(4, 4, 1.0),
            Err(GameError::InvalidDensity(1.0))
        );
        assert_eq!(
            GameConfig::new(4, 4, -0.1),
            Err(GameError::InvalidDensity(-0.1))
        );
        assert!(matches!(
            GameConfig::new(4, 4, f64::NAN),
            Err(GameError::InvalidDensity(_))
        ));
    }

    #[test]
    fn config_rejects_mines_that_cannot_avoid_start() {
        // a single mine on 3×3 has nowhere to go once the center is clicked
        let config = GameConfig::new_unchecked(3, 3, 0.12);
        assert_eq!(config.mine_count(), 1);

        assert_eq!(
            config.validate(),
            Err(GameError::TooManyMines {
                mines: 1,
                available: 0
            })
        );
    }

    #[test]
    fn safe_zone_shrinks_on_thin_boards() {
        assert_eq!(GameConfig::new_unchecked(10, 1, 0.0).safe_zone_cells(), 3);
        assert_eq!(GameConfig::new_unchecked(2, 2, 0.0).safe_zone_cells(), 4);
        assert_eq!(GameConfig::new_unchecked(9, 9, 0.0).safe_zone_cells(), 9);
    }

    #[test]
    fn layout_counts_mines_and_rejects_out_of_range() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 0), (1, 2)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.size(), (2, 3));
        assert!(layout.contains_mine((1, 2)));
        assert!(!layout.contains_mine((1, 1)));
        assert_eq!(
            MineLayout::from_mine_coords((2, 3), &[(2, 0)]),
            Err(GameError::OutOfBounds {
                coords: (2, 0),
                size: (2, 3)
            })
        );
    }

    #[test]
    fn reveal_outcomes_merge_by_priority() {
        use RevealOutcome::*;

        assert_eq!(Revealed | HitMine, HitMine);
        assert_eq!(Won | Revealed, Won);
        assert_eq!(NoChange | NoChange, NoChange);

        let mut outcome = NoChange;
        outcome |= Revealed;
        assert_eq!(outcome, Revealed);
    }
}
