use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;
use sweeper_core::{BoardEngine, Coord, GameConfig, GameError};

use command::Command;

mod command;
mod logging;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of columns
    #[arg(long, default_value_t = GameConfig::default().width)]
    width: Coord,

    /// Number of rows
    #[arg(long, default_value_t = GameConfig::default().height)]
    height: Coord,

    /// Share of cells holding a mine, in [0, 1)
    #[arg(short, long, default_value_t = GameConfig::default().mine_density)]
    density: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig, GameError> {
        GameConfig::new(self.width, self.height, self.density)
    }
}

/// What the loop does after a command.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Step {
    Redraw,
    Keep,
    Quit,
}

impl Step {
    fn redraw_if(changed: bool) -> Self {
        if changed { Self::Redraw } else { Self::Keep }
    }
}

fn report(out: &mut impl Write, err: GameError) -> std::io::Result<()> {
    let kind = if err.is_config_error() {
        "bad board settings"
    } else {
        "bad move"
    };
    writeln!(out, "{kind}: {err}")
}

fn apply(engine: &mut BoardEngine, command: Command, out: &mut impl Write) -> anyhow::Result<Step> {
    let step = match command {
        Command::Reveal(coords) => match engine.reveal(coords) {
            Ok(outcome) => {
                log::debug!("reveal {:?}: {:?}", coords, outcome);
                Step::redraw_if(outcome.has_update())
            }
            Err(err) => {
                report(out, err)?;
                Step::Keep
            }
        },
        Command::Flag(coords) => match engine.toggle_flag(coords) {
            Ok(outcome) => {
                log::debug!("flag {:?}: {:?}", coords, outcome);
                Step::redraw_if(outcome.has_update())
            }
            Err(err) => {
                report(out, err)?;
                Step::Keep
            }
        },
        Command::Restart => {
            engine.restart();
            Step::Redraw
        }
        Command::Resize {
            width,
            height,
            mine_density,
        } => match engine.reset(width, height, mine_density) {
            Ok(()) => Step::Redraw,
            Err(err) => {
                report(out, err)?;
                Step::Keep
            }
        },
        Command::Help => {
            writeln!(out, "{}", command::HELP)?;
            Step::Keep
        }
        Command::Quit => Step::Quit,
    };
    Ok(step)
}

fn run(engine: &mut BoardEngine, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", render::render_board(&engine.view()))?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => match apply(engine, command, &mut out)? {
                Step::Redraw => writeln!(out, "{}", render::render_board(&engine.view()))?,
                Step::Keep => {}
                Step::Quit => break,
            },
            Err(err) => writeln!(out, "{err:#}, try 'h'")?,
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose.log_level_filter());

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let config = args.game_config().context("invalid board settings")?;
    let mut engine = BoardEngine::new(config, seed)?;

    run(&mut engine, std::io::stdin().lock(), std::io::stdout().lock())
}
