//! Replace Tic-Tac-Toe Solver
//!
//! Plays perfectly using memoized full-depth minimax. Run with --populate
//! to solve the whole game up front and persist the evaluation cache.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rttt_core::{GameState, Move, Outcome, Player, Size};

use rttt_solver::cache::EvalCache;
use rttt_solver::solver::Solver;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let populate = args.contains(&"--populate".to_string());
    let cache_path = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/evals.bin"));

    println!("Replace Tic-Tac-Toe Solver");
    println!("==========================");
    println!(
        "Mode: {}",
        if populate {
            "Populate (full solve)"
        } else {
            "Interactive play"
        }
    );
    println!("Cache: {:?}", cache_path);
    println!();

    // Set up SIGINT handler for graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        println!("\n\nInterrupt received, saving cache...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    // Create data directory if needed
    if let Some(parent) = cache_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    // Load existing cache if present
    let start = Instant::now();
    let cache = match EvalCache::load(&cache_path) {
        Ok(cache) => {
            if !cache.is_empty() {
                println!(
                    "Loaded {} positions in {:.2}s\n",
                    cache.len(),
                    start.elapsed().as_secs_f64()
                );
            }
            cache
        }
        Err(e) => {
            println!("Warning: Failed to load cache: {}", e);
            println!("Starting fresh.\n");
            EvalCache::new()
        }
    };

    let mut solver = Solver::with_cache(cache);

    if populate {
        run_populate(&mut solver, &running);
    } else {
        run_interactive(&mut solver, &running);
    }

    save_cache(&solver, &cache_path);
}

fn run_populate(solver: &mut Solver, running: &AtomicBool) {
    solver.log_interval_secs = Some(5);

    println!("Solving from the initial position...\n");
    let start = Instant::now();
    let opening = solver.populate(running);
    let elapsed = start.elapsed();

    println!("\n==========================");
    match opening {
        Some(mv) => {
            println!("Solve complete!");
            println!("Best opening: {} at ({}, {})", mv.size.letter(), mv.pos.row(), mv.pos.col());
        }
        None => println!("Solve interrupted; partial cache will be saved."),
    }
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!();
    solver.stats.print_summary();
}

fn run_interactive(solver: &mut Solver, running: &AtomicBool) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let human = loop {
        print!("Play as X (first) or O (second)? [x/o]: ");
        io::stdout().flush().ok();
        let Some(Ok(line)) = lines.next() else { return };
        match line.trim().to_lowercase().as_str() {
            "x" => break Player::One,
            "o" => break Player::Two,
            _ => println!("Please answer x or o."),
        }
    };

    let mut state = GameState::new();

    loop {
        print_board(&state);

        let over = match state.outcome() {
            Outcome::Won(p) => {
                println!(
                    "{} wins!",
                    if p == human { "You" } else { "The engine" }
                );
                true
            }
            Outcome::Draw => {
                println!("Draw.");
                true
            }
            Outcome::InProgress => false,
        };
        if over || !running.load(Ordering::SeqCst) {
            return;
        }

        if state.to_move() == human {
            let Some(mv) = read_move(&mut lines, &state) else { return };
            if let Err(e) = state.apply(mv) {
                println!("Illegal move: {}", e);
            }
        } else {
            println!("Thinking...");
            match solver.best_move(&mut state, running) {
                Ok(Some(mv)) => {
                    println!(
                        "Engine plays {} at ({}, {})",
                        mv.size.letter(),
                        mv.pos.row(),
                        mv.pos.col()
                    );
                    state.apply(mv).expect("engine move must be legal");
                }
                Ok(None) => return, // interrupted
                Err(_) => {
                    // No legal moves; outcome() resolves it next iteration.
                }
            }
        }
    }
}

/// Prompt for a move as "row col size", e.g. "0 2 m". Returns None on EOF
/// or interrupt.
fn read_move(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    state: &GameState,
) -> Option<Move> {
    let you = state.to_move();
    let reserve = state.reserves(you);
    loop {
        print!(
            "Your move (row col size; reserve s={} m={} l={}): ",
            reserve[0], reserve[1], reserve[2]
        );
        io::stdout().flush().ok();
        let line = lines.next()?.ok()?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            println!("Expected three fields, e.g. \"1 1 s\".");
            continue;
        }
        let row = parts[0].parse::<u8>().ok();
        let col = parts[1].parse::<u8>().ok();
        let size = parts[2]
            .to_lowercase()
            .chars()
            .next()
            .and_then(Size::from_letter);
        match (row, col, size) {
            (Some(row), Some(col), Some(size)) if row < 3 && col < 3 => {
                return Some(Move::new(row, col, size));
            }
            _ => println!("Rows and columns are 0-2; sizes are s, m, or l."),
        }
    }
}

fn print_board(state: &GameState) {
    println!();
    for row in 0..3 {
        let mut line = String::new();
        for col in 0..3 {
            let cell = state.piece_at(rttt_core::Pos::from_row_col(row, col));
            let text = match cell {
                Some(p) => format!(" {} ", p),
                None => " .. ".to_string(),
            };
            line.push_str(&text);
            if col < 2 {
                line.push('|');
            }
        }
        println!("{}", line);
        if row < 2 {
            println!("----+----+----");
        }
    }
    println!();
}

fn save_cache(solver: &Solver, path: &Path) {
    println!("\nSaving cache...");
    let start = Instant::now();
    match solver.cache.save(path) {
        Ok(count) => {
            println!(
                "Saved {} positions in {:.2}s",
                count,
                start.elapsed().as_secs_f64()
            );
        }
        Err(e) => {
            println!("Error saving cache: {}", e);
        }
    }
}
