use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Mines are not placed yet, they wait for the first reveal
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_not_started(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Terminal phases accept no further moves
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Owns the grid and drives a game from the first click to a win or a loss.
#[derive(Clone, Debug)]
pub struct BoardEngine<G = RandomMineGenerator> {
    config: GameConfig,
    generator: G,
    cells: Array2<Cell>,
    phase: GamePhase,
    mine_total: CellCount,
    flag_count: CellCount,
    safe_revealed: CellCount,
    triggered_mine: Option<Coord2>,
}

impl BoardEngine {
    /// Fresh board with mines drawn from a generator seeded with `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }

    /// Board that already went through placement, using `layout` as the mine truth.
    ///
    /// Restarts place the same number of mines from seed 0, so they repeat from run to run.
    /// Use [`BoardEngine::from_layout_seeded`] for varying restarts.
    pub fn from_layout(layout: MineLayout) -> Self {
        Self::from_layout_seeded(layout, 0)
    }

    /// Like [`BoardEngine::from_layout`], with restarts drawing mines from `seed`.
    pub fn from_layout_seeded(layout: MineLayout, seed: u64) -> Self {
        let (height, width) = layout.size();
        let total_cells = mult(width, height);
        let mine_density = if total_cells == 0 {
            0.0
        } else {
            f64::from(layout.mine_count()) / f64::from(total_cells)
        };
        let config = GameConfig::new_unchecked(width, height, mine_density);
        let mut engine = Self::new_unvalidated(config, RandomMineGenerator::new(seed));
        engine.apply_layout(&layout);
        engine.phase = GamePhase::InProgress;
        engine
    }
}

impl<G: MineGenerator> BoardEngine<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        config.validate()?;
        Ok(Self::new_unvalidated(config, generator))
    }

    fn new_unvalidated(config: GameConfig, generator: G) -> Self {
        Self {
            config,
            generator,
            cells: Array2::default(config.size().to_nd_index()),
            phase: GamePhase::default(),
            mine_total: 0,
            flag_count: 0,
            safe_revealed: 0,
            triggered_mine: None,
        }
    }

    /// Starts over with new parameters, the current game is kept if they are invalid.
    pub fn reset(&mut self, width: Coord, height: Coord, mine_density: f64) -> Result<()> {
        self.reset_with(GameConfig::new(width, height, mine_density)?);
        Ok(())
    }

    /// Starts over with the current parameters.
    pub fn restart(&mut self) {
        self.reset_with(self.config);
    }

    fn reset_with(&mut self, config: GameConfig) {
        log::debug!(
            "Reset board to {}x{} with density {}",
            config.width,
            config.height,
            config.mine_density
        );
        self.config = config;
        self.cells = Array2::default(config.size().to_nd_index());
        self.phase = GamePhase::NotStarted;
        self.mine_total = 0;
        self.flag_count = 0;
        self.safe_revealed = 0;
        self.triggered_mine = None;
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// `(height, width)`
    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    /// Zero until the mines are placed.
    pub fn mine_total(&self) -> CellCount {
        self.mine_total
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines not accounted for by flags, negative when the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.mine_total) - i32::from(self.flag_count)
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()].view())
    }

    /// Mine truth, for hosts that check results after the game ends.
    pub fn has_mine_at(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()].mine)
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_engine(self)
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;

        let cell = &mut self.cells[coords.to_nd_index()];
        if self.phase.is_finished() || cell.revealed {
            return Ok(MarkOutcome::NoChange);
        }

        cell.flagged = !cell.flagged;
        log::debug!("Flag at {:?} set to {}", coords, cell.flagged);
        self.recount_flags();
        Ok(MarkOutcome::Changed)
    }

    /// Opens a cell, or chords when the cell is already open and fully flagged around.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        let cell = self.cells[coords.to_nd_index()];
        if self.phase.is_finished() || cell.flagged {
            return Ok(RevealOutcome::NoChange);
        }

        let mut outcome = RevealOutcome::NoChange;

        if cell.revealed && self.count_flagged_neighbors(coords) == cell.adjacent_mines {
            log::debug!("Chord at {:?}", coords);
            outcome |= self.open_from(neighbors_of(coords, self.size()));
        }

        if self.phase.is_not_started() {
            self.place_mines(coords);
        }

        outcome |= self.open_from(core::iter::once(coords));

        if outcome == RevealOutcome::HitMine {
            self.lose();
        } else if self.safe_revealed == self.config.total_cells() - self.mine_total {
            self.win();
            outcome = RevealOutcome::Won;
        }

        Ok(outcome)
    }

    fn place_mines(&mut self, start: Coord2) {
        let layout = self.generator.generate(&self.config, start);
        self.apply_layout(&layout);
        self.phase = GamePhase::InProgress;
        log::debug!("Game started at {:?} with {} mines", start, self.mine_total);
    }

    fn apply_layout(&mut self, layout: &MineLayout) {
        debug_assert_eq!(layout.size(), self.size(), "mine layout does not fit the board");
        for ((row, col), cell) in self.cells.indexed_iter_mut() {
            cell.mine = layout[(row as Coord, col as Coord)];
        }

        let size = self.size();
        let (height, width) = size;
        for row in 0..height {
            for col in 0..width {
                let adjacent_mines = neighbors_of((row, col), size)
                    .filter(|&pos| layout[pos])
                    .count() as u8;
                self.cells[(row, col).to_nd_index()].adjacent_mines = adjacent_mines;
            }
        }

        self.mine_total = layout.mine_count();
    }

    /// Breadth-first opening of `start`, spreading from every safe cell with no adjacent mines.
    ///
    /// `revealed` doubles as the visited marker, so each cell is opened at most once.
    fn open_from(&mut self, start: impl IntoIterator<Item = Coord2>) -> RevealOutcome {
        let size = self.size();
        let mut outcome = RevealOutcome::NoChange;
        let mut to_visit: VecDeque<Coord2> = start.into_iter().collect();

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if !cell.is_openable() {
                continue;
            }

            cell.revealed = true;
            if cell.mine {
                log::debug!("Mine exposed at {:?}", visit_coords);
                self.triggered_mine.get_or_insert(visit_coords);
                outcome |= RevealOutcome::HitMine;
                continue;
            }

            self.safe_revealed += 1;
            outcome |= RevealOutcome::Revealed;
            log::trace!(
                "Opened {:?}, adjacent mines: {}",
                visit_coords,
                cell.adjacent_mines
            );

            if cell.adjacent_mines == 0 {
                to_visit.extend(
                    neighbors_of(visit_coords, size)
                        .filter(|&pos| self.cells[pos.to_nd_index()].is_openable()),
                );
            }
        }

        outcome
    }

    fn lose(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.mine) {
            if cell.is_openable() {
                cell.revealed = true;
            }
        }
        self.phase = GamePhase::Lost;
        log::debug!("Game lost at {:?}", self.triggered_mine);
    }

    fn win(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.mine) {
            cell.flagged = true;
        }
        self.recount_flags();
        self.phase = GamePhase::Won;
        log::debug!("Game won with {} mines flagged", self.flag_count);
    }

    fn recount_flags(&mut self) {
        self.flag_count = self.cells.iter().filter(|cell| cell.flagged).count() as CellCount;
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].flagged)
            .count() as u8
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { coords, size })
        }
    }
}
