//! Thin CLI host over the engine library.
//!
//! `perft` drives the move-generation oracle; `selfplay` pits the iterative
//! engine against itself with a per-move time budget. All game logic lives
//! behind the library's public surface.

use std::env;
use std::process::ExitCode;

use rowan_chess::engines::engine_iterative::IterativeEngine;
use rowan_chess::engines::engine_trait::Engine;
use rowan_chess::game_state::game_state::GameState;
use rowan_chess::move_generation::game_status::{game_status, GameStatus};
use rowan_chess::move_generation::legal_move_apply::play_move;
use rowan_chess::move_generation::perft::perft;
use rowan_chess::utils::algebraic::square_to_algebraic;
use rowan_chess::utils::render_game_state::render_game_state;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("perft") => run_perft(&args[1..]),
        Some("selfplay") => run_selfplay(&args[1..]),
        _ => {
            eprintln!("usage: rowan_chess perft <depth> [fen]");
            eprintln!("       rowan_chess selfplay <movetime_ms> [max_plies]");
            ExitCode::FAILURE
        }
    }
}

fn run_perft(args: &[String]) -> ExitCode {
    let Some(depth) = args.first().and_then(|raw| raw.parse::<u8>().ok()) else {
        eprintln!("perft: expected a numeric depth");
        return ExitCode::FAILURE;
    };

    let game = match args.get(1) {
        Some(fen) => match GameState::from_fen(fen) {
            Ok(game) => game,
            Err(err) => {
                eprintln!("perft: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => GameState::new_game(),
    };

    for d in 1..=depth {
        println!("perft({d}) = {}", perft(&game, d));
    }
    ExitCode::SUCCESS
}

fn run_selfplay(args: &[String]) -> ExitCode {
    let Some(movetime_ms) = args.first().and_then(|raw| raw.parse::<u64>().ok()) else {
        eprintln!("selfplay: expected a numeric per-move budget in milliseconds");
        return ExitCode::FAILURE;
    };
    let max_plies: u32 = args
        .get(1)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(200);

    let mut engine = IterativeEngine::new();
    let mut game = GameState::new_game();

    for ply in 0..max_plies {
        if game_status(&game) != GameStatus::Ongoing {
            break;
        }

        let Some(mv) = engine.choose_move(&game, movetime_ms) else {
            break;
        };

        game = match play_move(&game, &mv) {
            Ok(next) => next,
            Err(err) => {
                eprintln!("selfplay: engine produced a rejected move: {err}");
                return ExitCode::FAILURE;
            }
        };

        println!(
            "{:>3}. {}{}",
            ply + 1,
            square_to_algebraic(mv.from),
            square_to_algebraic(mv.to)
        );
    }

    println!("\n{}", render_game_state(&game));
    match game_status(&game) {
        GameStatus::Checkmate => println!("result: checkmate"),
        GameStatus::Draw => println!("result: draw"),
        GameStatus::Ongoing => println!("result: unfinished"),
    }
    ExitCode::SUCCESS
}
