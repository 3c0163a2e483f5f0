use serde::{Deserialize, Serialize};

/// Full state of one grid position, including the hidden mine truth.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) mine: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Closed and not flagged, the only state a reveal can open.
    pub(crate) const fn is_openable(self) -> bool {
        !self.revealed && !self.flagged
    }

    /// What the player is allowed to see of this cell.
    pub const fn view(self) -> CellView {
        match self {
            Self { flagged: true, .. } => CellView::Flagged,
            Self {
                revealed: true,
                mine: true,
                ..
            } => CellView::Mine,
            Self {
                revealed: true,
                adjacent_mines,
                ..
            } => CellView::Revealed(adjacent_mines),
            _ => CellView::Hidden,
        }
    }
}

/// Player-visible state of a cell, never carries mine truth for closed cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_mine_looks_like_any_hidden_cell() {
        let mine = Cell {
            mine: true,
            adjacent_mines: 3,
            ..Default::default()
        };

        assert_eq!(mine.view(), Cell::default().view());
        assert_eq!(mine.view(), CellView::Hidden);
    }

    #[test]
    fn flag_wins_over_everything_else() {
        let cell = Cell {
            mine: true,
            flagged: true,
            ..Default::default()
        };

        assert_eq!(cell.view(), CellView::Flagged);
        assert!(!cell.is_openable());
    }

    #[test]
    fn revealed_cells_show_content() {
        let safe = Cell {
            adjacent_mines: 2,
            revealed: true,
            ..Default::default()
        };
        let mine = Cell {
            mine: true,
            revealed: true,
            ..Default::default()
        };

        assert_eq!(safe.view(), CellView::Revealed(2));
        assert_eq!(mine.view(), CellView::Mine);
        assert!(!CellView::Mine.is_unrevealed());
    }
}
