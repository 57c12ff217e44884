//! Nine Men's Morris in the terminal.
//!
//! ## Usage
//!
//! - `morris play --ai black` - Play White against the search
//! - `morris selfplay --depth 3` - Watch the search play itself
//! - `morris replay game.json --upto 20` - Step through a saved game
//!
//! Set `RUST_LOG=debug` to see search statistics.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use rust_morris::core::{Action, Color, GameState};
use rust_morris::games::morris::{Morris, Session};
use rust_morris::search::{Agent, RandomMover, SearchConfig, Searcher};

/// Nine Men's Morris with an alpha-beta opponent
#[derive(Parser, Debug)]
#[command(name = "morris")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game on stdin
    Play(PlayArgs),
    /// Let the search play both sides
    Selfplay(SelfplayArgs),
    /// Print the moves of a saved game and the position they lead to
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Threads for scoring root moves
    #[arg(long)]
    threads: Option<usize>,

    /// JSON file with a search configuration; flags override it
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Color played by the computer (white or black)
    #[arg(long)]
    ai: Option<Color>,

    /// Resume a saved game
    #[arg(long)]
    load: Option<PathBuf>,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args, Debug)]
struct SelfplayArgs {
    /// Stop after this many plies even if undecided
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Save the finished game here
    #[arg(long)]
    save: Option<PathBuf>,

    /// Replace Black with a random mover using this seed
    #[arg(long)]
    random_black: Option<u64>,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Saved game
    path: PathBuf,

    /// Only replay the first N moves
    #[arg(long)]
    upto: Option<usize>,
}

const HELP: &str = "\
Commands:
  place N        put a piece from your hand on point N
  move A B       move (or fly) your piece from A to B
  remove N       capture the opponent piece on N after a mill
  moves          list your legal actions
  board          show the board
  save PATH      save the game
  load PATH      load a saved game
  help           show this text
  quit           leave";

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => play(args),
        Command::Selfplay(args) => selfplay(args),
        Command::Replay(args) => replay(args),
    }
}

fn search_config(args: &SearchArgs) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading search config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing search config {}", path.display()))?
        }
        None => SearchConfig::default(),
    };
    if let Some(depth) = args.depth {
        config = config.with_depth(depth);
    }
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }
    Ok(config)
}

enum Flow {
    Continue,
    Quit,
}

fn play(args: PlayArgs) -> Result<()> {
    let mut session = match &args.load {
        Some(path) => Session::from_state(GameState::load(path)?),
        None => Session::new(),
    };
    let mut ai = Searcher::new(Morris, search_config(&args.search)?);
    info!("computer plays {:?} with {:?}", args.ai, ai.config());

    println!("{}", session.state());
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if let Some(winner) = session.winner() {
            println!("{winner} wins.");
            break;
        }

        let to_move = session.state().current_player();
        if args.ai == Some(to_move) {
            let Some(action) = ai.get_move(session.state()) else {
                println!("{to_move} has no legal moves.");
                break;
            };
            let report = session.apply(&action);
            println!("{to_move} plays {action}: {}", report.message);
            println!("{}", session.state());
            continue;
        }

        print!("{to_move}> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        if let Flow::Quit = handle_command(&mut session, line?.trim()) {
            break;
        }
    }
    Ok(())
}

fn handle_command(session: &mut Session, line: &str) -> Flow {
    let mut words = line.split_whitespace();
    match (words.next(), words.next()) {
        (None, _) => {}
        (Some("quit" | "exit" | "q"), _) => return Flow::Quit,
        (Some("help" | "?"), _) => println!("{HELP}"),
        (Some("board"), _) => println!("{}", session.state()),
        (Some("moves"), _) => {
            let color = session.state().current_player();
            let moves: Vec<String> = session
                .get_possible_moves(color)
                .iter()
                .map(Action::to_string)
                .collect();
            println!("{}", moves.join(", "));
        }
        (Some("save"), Some(path)) => match session.save(path) {
            Ok(()) => println!("Saved to {path}."),
            Err(err) => println!("Save failed: {err}"),
        },
        (Some("load"), Some(path)) => match session.load(path) {
            Ok(()) => println!("{}", session.state()),
            Err(err) => println!("Load failed: {err}"),
        },
        _ => match line.parse::<Action>() {
            Ok(action) => {
                let report = session.apply(&action);
                println!("{}", report.message);
                if report.success {
                    println!("{}", session.state());
                }
            }
            Err(err) => println!("{err}. Type 'help' for commands."),
        },
    }
    Flow::Continue
}

fn selfplay(args: SelfplayArgs) -> Result<()> {
    let config = search_config(&args.search)?;
    let mut white: Box<dyn Agent> = Box::new(Searcher::new(Morris, config.clone()));
    let mut black: Box<dyn Agent> = match args.random_black {
        Some(seed) => Box::new(RandomMover::new(Morris, seed)),
        None => Box::new(Searcher::new(Morris, config)),
    };
    println!("White: {}  Black: {}", white.name(), black.name());

    let mut session = Session::new();
    for ply in 1..=args.max_plies {
        if session.is_over() {
            break;
        }
        let to_move = session.state().current_player();
        let agent = match to_move {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let Some(action) = agent.select(session.state()) else {
            println!("{to_move} has no legal moves.");
            break;
        };
        let report = session.apply(&action);
        if !report.success {
            bail!("{} chose an illegal action {action}: {}", agent.name(), report.message);
        }
        println!("{ply:>3}. {to_move} {action}");
    }

    println!("{}", session.state());
    match session.winner() {
        Some(winner) => println!("{winner} wins after {} moves.", session.state().history().len()),
        None => println!("No result after {} plies.", args.max_plies),
    }

    if let Some(path) = &args.save {
        session.save(path)?;
        println!("Saved to {}.", path.display());
    }
    Ok(())
}

fn replay(args: ReplayArgs) -> Result<()> {
    let saved = load_game(&args.path)?;
    let history = saved.history();
    let upto = args.upto.unwrap_or(history.len()).min(history.len());

    for (n, record) in history.iter().take(upto).enumerate() {
        println!("{:>3}. {} {}", n + 1, record.actor(), record.action());
    }

    let state = Morris.replay(history.iter().take(upto))?;
    println!("{state}");
    if upto == history.len() && state != saved {
        println!("Warning: replayed position differs from the saved one.");
    }
    Ok(())
}

fn load_game(path: &Path) -> Result<GameState> {
    GameState::load(path).with_context(|| format!("loading {}", path.display()))
}
