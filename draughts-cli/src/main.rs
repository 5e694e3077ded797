use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use draughts_cli::{render, MoveRequest, Session, Settings};
use draughts_core::{Board, Coordinate, Layout, MoveGenerator, Side};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "draughts-cli", about = "Simplified English draughts move engine")]
struct Args {
    /// Settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write the effective settings to this path and exit
    #[arg(long, global = true)]
    write_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the opening demo: two X advances, an O capture, then a move from an empty square
    Demo,

    /// Apply moves in order, each written as `row,col:row,col`
    Play {
        #[arg(required = true)]
        moves: Vec<MoveRequest>,

        /// Start from a layout file instead of the standard opening
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Require sides to alternate, starting with --first
        #[arg(long)]
        strict_turns: bool,

        /// Side that moves first when --strict-turns is set (x or o)
        #[arg(long, default_value = "o", value_parser = parse_side)]
        first: Side,
    },

    /// List the legal destinations of the piece on one square
    Moves {
        /// Square written as `row,col`
        square: Coordinate,

        /// Start from a layout file instead of the standard opening
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// Random self-play from the standard opening
    Selfplay {
        /// Random seed
        #[arg(long, default_value_t = 1u64)]
        seed: u64,

        /// Stop after this many plies
        #[arg(long, default_value_t = 200)]
        max_plies: u32,
    },
}

fn parse_side(s: &str) -> std::result::Result<Side, String> {
    let mut chars = s.chars();
    match (chars.next().and_then(Side::from_glyph), chars.next()) {
        (Some(side), None) => Ok(side),
        _ => Err(format!("expected `x` or `o`, got `{}`", s)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("draughts_cli={}", settings.log_level).parse()?)
                .add_directive(format!("draughts_core={}", settings.log_level).parse()?),
        )
        .init();

    if let Some(path) = &args.write_config {
        settings.save(path)?;
        info!("Settings written to {:?}", path);
        return Ok(());
    }

    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&settings),
        Command::Play {
            moves,
            layout,
            strict_turns,
            first,
        } => {
            let board = load_board(layout.as_deref())?;
            if strict_turns {
                run_session(Session::with_turn(board, first), &moves, &settings)
            } else {
                run_moves(board, &moves, &settings)
            }
        }
        Command::Moves { square, layout } => {
            let board = load_board(layout.as_deref())?;
            print!("{}", render(&board, &settings));
            print_candidates(&board, square)
        }
        Command::Selfplay { seed, max_plies } => run_selfplay(seed, max_plies, &settings),
    }
}

fn load_board(layout: Option<&Path>) -> Result<Board> {
    match layout {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read layout file: {:?}", path))?;
            Layout::parse(&text).with_context(|| format!("Failed to parse layout file: {:?}", path))
        }
        None => Ok(Board::initial()),
    }
}

fn print_candidates(board: &Board, square: Coordinate) -> Result<()> {
    let destinations = MoveGenerator::legal_destinations(board, square)?;
    let listed: Vec<String> = destinations.iter().map(ToString::to_string).collect();
    println!("legal from {}: [{}]", square, listed.join(", "));
    Ok(())
}

fn run_demo(settings: &Settings) -> Result<()> {
    let mut board = Board::initial();
    println!("{}", render(&board, settings));

    let script = [
        MoveRequest { from: Coordinate::new(2, 1), to: Coordinate::new(3, 2) },
        MoveRequest { from: Coordinate::new(3, 2), to: Coordinate::new(4, 1) },
        MoveRequest { from: Coordinate::new(5, 0), to: Coordinate::new(3, 2) },
    ];

    for req in script {
        if settings.show_candidates {
            print_candidates(&board, req.from)?;
        }
        let applied = MoveGenerator::execute(&mut board, req.from, req.to)?;
        match applied {
            Some(mv) if mv.is_capture() => println!("{} (capture)", mv),
            Some(mv) => println!("{}", mv),
            None => bail!("Demo move {} was rejected", req),
        }
        println!("{}", render(&board, settings));
    }
    println!("pieces on board: {}", board.piece_count());

    // 空格子上没有棋子可走
    let mut fresh = Board::initial();
    let empty = MoveRequest { from: Coordinate::new(0, 0), to: Coordinate::new(1, 1) };
    let accepted = MoveGenerator::apply_move(&mut fresh, empty.from, empty.to)?;
    println!("{} on a fresh board: {}", empty, if accepted { "accepted" } else { "rejected" });

    Ok(())
}

fn run_moves(mut board: Board, moves: &[MoveRequest], settings: &Settings) -> Result<()> {
    for req in moves {
        if settings.show_candidates {
            print_candidates(&board, req.from)?;
        }
        if !MoveGenerator::apply_move(&mut board, req.from, req.to)? {
            bail!("Illegal move: {}", req);
        }
        debug!("Applied {}", req);
        println!("{}", render(&board, settings));
    }
    Ok(())
}

fn run_session(mut session: Session, moves: &[MoveRequest], settings: &Settings) -> Result<()> {
    for req in moves {
        if settings.show_candidates {
            print_candidates(session.board(), req.from)?;
        }
        if session.play(req.from, req.to)?.is_none() {
            bail!("Illegal move for {}: {}", session.turn(), req);
        }
        println!("{}", render(session.board(), settings));
    }
    println!("{} to move after {} plies", session.turn(), session.plies());
    Ok(())
}

fn run_selfplay(seed: u64, max_plies: u32, settings: &Settings) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut session = Session::new(Board::initial());
    info!("Self-play with seed {} (max {} plies)", seed, max_plies);

    while session.plies() < max_plies {
        match session.random_move(&mut rng)? {
            Some(mv) => println!("{:>3}. {}", session.plies(), mv),
            None => break,
        }
    }

    println!("{}", render(session.board(), settings));
    println!(
        "X: {}  O: {}  plies: {}",
        session.board().count(Side::X),
        session.board().count(Side::O),
        session.plies()
    );
    Ok(())
}
