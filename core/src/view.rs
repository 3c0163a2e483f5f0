use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of everything a presenter may show, without hidden mine truth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub phase: GamePhase,
    pub mine_total: CellCount,
    pub flag_count: CellCount,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_engine<G: MineGenerator>(engine: &BoardEngine<G>) -> Self {
        Self {
            size: engine.size(),
            phase: engine.phase(),
            mine_total: engine.mine_total(),
            flag_count: engine.flag_count(),
            cells: engine.cells().map(|cell| cell.view()),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellView> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}
