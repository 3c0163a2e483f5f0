use std::fmt::Write;

use sweeper_core::{BoardView, CellView, GamePhase};

fn cell_char(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Mine => '*',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from(b'0' + count),
    }
}

pub fn status_line(view: &BoardView) -> String {
    let state = match view.phase {
        GamePhase::NotStarted => "ready",
        GamePhase::InProgress => "playing",
        GamePhase::Won => "won!",
        GamePhase::Lost => "boom, lost",
    };
    let restart = if view.phase.is_finished() {
        "New Game"
    } else {
        "Start Over"
    };
    format!(
        "flags {}/{} | {} | [n] {}",
        view.flag_count, view.mine_total, state, restart
    )
}

/// Text grid with column and row rulers, digits are the column/row index modulo 10.
pub fn render_board(view: &BoardView) -> String {
    let (_, width) = view.size;
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..width {
        out.push(char::from(b'0' + col % 10));
    }
    out.push('\n');

    for (row, cells) in view.rows().enumerate() {
        let _ = write!(out, "{row:>3} ");
        out.extend(cells.map(cell_char));
        out.push('\n');
    }

    out.push_str(&status_line(view));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{BoardEngine, MineLayout};

    #[test]
    fn renders_grid_and_status() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 2), (1, 2)]).unwrap();
        let mut engine = BoardEngine::from_layout(layout);
        engine.reveal((1, 0)).unwrap();

        let text = render_board(&engine.view());

        assert_eq!(
            text,
            "    012\n  0 .2F\n  1 .2F\nflags 2/2 | won! | [n] New Game"
        );
    }

    #[test]
    fn hidden_mines_render_like_hidden_cells() {
        let layout = MineLayout::from_mine_coords((1, 3), &[(0, 2)]).unwrap();
        let mut engine = BoardEngine::from_layout(layout);
        engine.toggle_flag((0, 0)).unwrap();

        let text = render_board(&engine.view());

        assert!(text.starts_with("    012\n  0 F##\n"));
        assert!(text.ends_with("flags 1/1 | playing | [n] Start Over"));
    }
}
