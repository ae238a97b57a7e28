use std::process::ExitCode;

use clap::arg;
use clap::command;
use clap::ArgMatches;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use tracing_subscriber::EnvFilter;

use rulebook::chess_board::INITIAL_POSITION;
use rulebook::perft::divide;
use rulebook::{ChessBoard, ChessField, Config, GameStatus};

fn fen_arg() -> clap::Arg {
    arg!(
        -f --fen <FEN> "Board position"
    )
    .default_value(INITIAL_POSITION)
}

fn main() -> ExitCode {
    let matches = command!()
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(
            Command::new("moves")
                .about("List the legal moves of a piece")
                .arg(fen_arg())
                .arg(arg!(<square> "Square of the piece, e.g. g1")),
        )
        .subcommand(
            Command::new("status")
                .about("Report check, checkmate, stalemate or the fifty-move draw")
                .arg(fen_arg()),
        )
        .subcommand(
            Command::new("perft")
                .about("Run Perft test")
                .arg(fen_arg())
                .arg(
                    arg!(
                    -x --depth <d> "depth"
                            )
                    .default_value("3")
                    .value_parser(clap::value_parser!(u8)),
                ),
        )
        .subcommand(
            Command::new("random")
                .about("Play random legal moves")
                .arg(fen_arg())
                .arg(arg!(-s --seed <seed> "Seed of the random bot").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(
                    -p --plies <plies> "Number of half-moves to play"
                            )
                    .default_value("10")
                    .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand_required(true)
        .get_matches();

    init_logging(matches.get_flag("debug"));

    let result = match matches.subcommand() {
        Some(("moves", arg_matches)) => list_moves(arg_matches),
        Some(("status", arg_matches)) => status(arg_matches),
        Some(("perft", arg_matches)) => perft(arg_matches),
        Some(("random", arg_matches)) => random(arg_matches),
        _ => unreachable!("Exhausted list of subcommands"),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn config(arg_matches: &ArgMatches) -> Config {
    Config {
        start_position: arg_matches.get_one::<String>("fen").cloned().unwrap_or_default(),
        seed: arg_matches.try_get_one::<u64>("seed").ok().flatten().copied(),
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Tabled)]
struct MoveRow {
    destination: String,
    capture: bool,
}

fn list_moves(arg_matches: &ArgMatches) -> CliResult {
    let board = config(arg_matches).load()?;
    let square = arg_matches.get_one::<String>("square").map(String::as_str).unwrap_or_default();
    let field = ChessField::from_algebraic(square)?;
    let color = board.board.piece_at(field).map_or(board.active_color, |p| p.color);
    let moves = board.legal_moves(field, color);

    let mut table_rows: Vec<_> = moves
        .empty
        .iter()
        .map(|to| MoveRow {
            destination: to.as_algebraic(),
            capture: false,
        })
        .chain(moves.captures.iter().map(|to| MoveRow {
            destination: to.as_algebraic(),
            capture: true,
        }))
        .collect();
    table_rows.sort_by(|a, b| a.destination.cmp(&b.destination));

    println!("{}", board.board);
    if table_rows.is_empty() {
        println!("No legal moves from {}", field);
    } else {
        println!("{}", Table::new(table_rows).with(Style::modern()));
    }
    Ok(())
}

fn describe(board: &ChessBoard) -> String {
    match board.status() {
        GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
        GameStatus::Stalemate => "stalemate".to_string(),
        GameStatus::FiftyMoveDraw => "draw by the fifty-move rule".to_string(),
        GameStatus::Ongoing if board.is_king_in_check(board.active_color) => {
            format!("{} is in check", board.active_color)
        }
        GameStatus::Ongoing => format!("{} to move", board.active_color),
    }
}

fn status(arg_matches: &ArgMatches) -> CliResult {
    let board = config(arg_matches).load()?;
    println!("{}", describe(&board));
    Ok(())
}

#[derive(Tabled)]
struct PerftRow {
    mv: String,
    nodes: u64,
}

fn perft(arg_matches: &ArgMatches) -> CliResult {
    let board = config(arg_matches).load()?;
    let depth = arg_matches.get_one::<u8>("depth").copied().unwrap_or(1).max(1);
    println!("Perft test for {} with depth {}", board.to_fen(), depth);

    let result = divide(&board, depth);
    let num_nodes: u64 = result.iter().map(|(_, count)| count).sum();
    let table_rows: Vec<_> = result
        .into_iter()
        .map(|(mv, nodes)| PerftRow {
            mv: mv.as_algebraic(),
            nodes,
        })
        .collect();
    println!("{}", Table::new(table_rows).with(Style::modern()));
    println!("\nNodes searched: {}", num_nodes);
    Ok(())
}

#[derive(Tabled)]
struct PlyRow {
    ply: u32,
    mv: String,
    fen: String,
}

fn random(arg_matches: &ArgMatches) -> CliResult {
    let config = config(arg_matches);
    let mut board = config.load()?;
    let mut bot = config.bot();
    let plies = arg_matches.get_one::<u32>("plies").copied().unwrap_or(0);

    let mut table_rows = Vec::new();
    for ply in 1..=plies {
        let Some(mv) = bot.choose(&board) else {
            break;
        };
        board.play(mv)?;
        table_rows.push(PlyRow {
            ply,
            mv: mv.as_algebraic(),
            fen: board.to_fen(),
        });
        if board.status() != GameStatus::Ongoing {
            break;
        }
    }
    println!("{}", Table::new(table_rows).with(Style::modern()));
    println!("{}", describe(&board));
    Ok(())
}
