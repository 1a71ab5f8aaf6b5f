use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use seedsweeper_core::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board size and mine count to start from
    #[arg(short, long, value_enum, default_value_t = Preset::Easy)]
    preset: Preset,

    /// Override the preset's height
    #[arg(long)]
    height: Option<Coord>,

    /// Override the preset's width
    #[arg(long)]
    width: Option<Coord>,

    /// Override the preset's mine count
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u32>,

    /// Resume a game written by --save
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Write the final game as JSON
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print every mine and count once the moves are played
    #[arg(long)]
    solution: bool,

    /// Moves to play in order: `r:X,Y` reveals, `f:X,Y` toggles a flag, `u` undoes a loss,
    /// `reset` clears the board
    #[arg(value_parser = parse_move)]
    moves: Vec<Action>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Easy,
    Medium,
    Hard,
}

impl Preset {
    fn difficulty(self) -> Difficulty {
        match self {
            Self::Easy => Difficulty::EASY,
            Self::Medium => Difficulty::MEDIUM,
            Self::Hard => Difficulty::HARD,
        }
    }
}

fn parse_coords(s: &str) -> Result<Coord2> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected X,Y but got {s:?}"))?;
    let x = x.trim().parse().with_context(|| format!("bad column {x:?}"))?;
    let y = y.trim().parse().with_context(|| format!("bad row {y:?}"))?;
    Ok((x, y))
}

fn parse_move(s: &str) -> Result<Action> {
    match s {
        "u" | "undo" => return Ok(Action::UndoLosingMove),
        "reset" => return Ok(Action::Reset),
        _ => {}
    }
    let Some((kind, coords)) = s.split_once(':') else {
        bail!("unknown move {s:?}");
    };
    let coords = parse_coords(coords)?;
    match kind {
        "r" => Ok(Action::Reveal(coords)),
        "f" => Ok(Action::ToggleFlag(coords)),
        _ => bail!("unknown move kind {kind:?} in {s:?}"),
    }
}

impl Args {
    fn difficulty(&self) -> Result<Difficulty> {
        let preset = self.preset.difficulty();
        Difficulty::new(
            self.height.unwrap_or(preset.height),
            self.width.unwrap_or(preset.width),
            self.mines.unwrap_or(preset.mines),
        )
        .context("invalid board settings")
    }

    fn initial_game(&self) -> Result<GameState> {
        if let Some(path) = &self.load {
            return load_game(path);
        }
        let difficulty = self.difficulty()?;
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("seed: {}", seed);
        Ok(reduce(
            &GameState::default(),
            Action::Start { difficulty, seed },
        ))
    }
}

fn load_game(path: &Path) -> Result<GameState> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("{} is not a saved game", path.display()))
}

fn save_game(path: &Path, game: &GameState) -> Result<()> {
    let json = serde_json::to_string_pretty(game)?;
    fs::write(path, json).with_context(|| format!("could not write {}", path.display()))
}

fn print_game(game: &GameState) {
    let view = game.view();
    print!("{}", game.grid().display());
    println!(
        "{:?}: {}/{} revealed, {} flags left",
        view.status, view.counts.revealed, view.counts.total, view.remaining_flags
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();

    let mut game = args.initial_game()?;
    print_game(&game);

    for action in &args.moves {
        log::debug!("move: {:?}", action);
        game = reduce(&game, action.clone());
        print_game(&game);
    }

    if args.solution {
        print!("{}", game.grid().display_solution());
    }
    if let Some(path) = &args.save {
        save_game(path, &game)?;
        log::info!("saved to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!(parse_move("r:3,0").unwrap(), Action::Reveal((3, 0)));
        assert_eq!(parse_move("f: 1, 2").unwrap(), Action::ToggleFlag((1, 2)));
        assert_eq!(parse_move("u").unwrap(), Action::UndoLosingMove);
        assert_eq!(parse_move("reset").unwrap(), Action::Reset);
    }

    #[test]
    fn rejects_bad_moves() {
        assert!(parse_move("x:1,1").is_err());
        assert!(parse_move("r:1").is_err());
        assert!(parse_move("r:-1,0").is_err());
        assert!(parse_move("r:256,0").is_err());
        assert!(parse_move("reveal").is_err());
    }

    #[test]
    fn overrides_preset() {
        let args = Args::try_parse_from(["seedsweeper", "-p", "medium", "--mines", "12"]).unwrap();
        assert_eq!(args.difficulty().unwrap(), Difficulty::new_unchecked(16, 16, 12));

        let args = Args::try_parse_from(["seedsweeper", "--height", "2", "--width", "2", "-m", "4"])
            .unwrap();
        assert!(args.difficulty().is_err());
    }

    #[test]
    fn plays_a_script() {
        let args = Args::try_parse_from([
            "seedsweeper",
            "--height",
            "4",
            "--width",
            "4",
            "-m",
            "2",
            "-s",
            "6",
            "r:3,0",
            "r:1,2",
            "u",
        ])
        .unwrap();

        let game = args
            .moves
            .iter()
            .fold(args.initial_game().unwrap(), |game, action| reduce(&game, action.clone()));

        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.view().counts.revealed, 8);
    }

    #[test]
    fn saved_game_round_trips() {
        let game = GameState::start(Difficulty::EASY, 6).reveal_cell((4, 4));
        let path = std::env::temp_dir().join(format!("seedsweeper-{}.json", std::process::id()));

        save_game(&path, &game).unwrap();
        let loaded = load_game(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, game);
    }

    #[test]
    fn mismatched_save_is_an_error() {
        let game = GameState::start(Difficulty::new_unchecked(3, 3, 2), 6);
        let json = serde_json::to_string(&game)
            .unwrap()
            .replace(r#""height":3"#, r#""height":9"#);
        let path = std::env::temp_dir().join(format!("seedsweeper-bad-{}.json", std::process::id()));
        fs::write(&path, json).unwrap();

        let loaded = load_game(&path);
        fs::remove_file(&path).unwrap();

        assert!(loaded.is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
