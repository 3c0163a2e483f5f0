use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use sweeper_core::{Coord, Coord2};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Restart,
    Resize {
        width: Coord,
        height: Coord,
        mine_density: f64,
    },
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  r <row> <col>               reveal a cell, or chord an open number
  f <row> <col>               toggle a flag
  n                           start over with the same board
  new <width> <height> <dens> start over with a new board
  h                           show this help
  q                           quit";

fn parse_arg<T: FromStr>(arg: Option<&str>, name: &str) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    arg.ok_or_else(|| anyhow!("missing {name}"))?
        .parse()
        .with_context(|| format!("invalid {name}"))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        let command = match verb {
            "r" | "reveal" => Self::Reveal((
                parse_arg(words.next(), "row")?,
                parse_arg(words.next(), "column")?,
            )),
            "f" | "flag" => Self::Flag((
                parse_arg(words.next(), "row")?,
                parse_arg(words.next(), "column")?,
            )),
            "n" | "restart" => Self::Restart,
            "new" => Self::Resize {
                width: parse_arg(words.next(), "width")?,
                height: parse_arg(words.next(), "height")?,
                mine_density: parse_arg(words.next(), "density")?,
            },
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument {extra:?}");
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!("r 3 4".parse::<Command>().unwrap(), Command::Reveal((3, 4)));
        assert_eq!(" f  0 12 ".parse::<Command>().unwrap(), Command::Flag((0, 12)));
        assert_eq!("n".parse::<Command>().unwrap(), Command::Restart);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn parses_new_board() {
        assert_eq!(
            "new 9 9 0.12".parse::<Command>().unwrap(),
            Command::Resize {
                width: 9,
                height: 9,
                mine_density: 0.12
            }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!("".parse::<Command>().is_err());
        assert!("r 1".parse::<Command>().is_err());
        assert!("r 1 x".parse::<Command>().is_err());
        assert!("r 1 300".parse::<Command>().is_err());
        assert!("r 1 2 3".parse::<Command>().is_err());
        assert!("boom".parse::<Command>().is_err());
    }

    #[test]
    fn error_names_the_missing_argument() {
        let err = "f 2".parse::<Command>().unwrap_err();

        assert_eq!(err.to_string(), "missing column");
    }
}
