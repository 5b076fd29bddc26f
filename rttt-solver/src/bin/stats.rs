//! Compute statistics from a solved evaluation cache.
//!
//! Usage: cargo run --release --bin stats [cache.bin]

use std::path::PathBuf;
use std::time::Instant;

use rttt_core::{GameState, Outcome};
use rttt_solver::cache::EvalCache;

/// Score distribution: wins by margin, draws, losses by margin.
fn score_distribution(cache: &EvalCache) {
    println!("=== Score Distribution ===");

    let mut p1_wins = 0u64;
    let mut p2_wins = 0u64;
    let mut draws = 0u64;
    let mut histogram: Vec<(i8, u64)> = Vec::new();

    for (_, score) in cache.entries() {
        if score > 0 {
            p1_wins += 1;
        } else if score < 0 {
            p2_wins += 1;
        } else {
            draws += 1;
        }

        match histogram.iter_mut().find(|(s, _)| *s == score) {
            Some((_, n)) => *n += 1,
            None => histogram.push((score, 1)),
        }
    }
    histogram.sort_by_key(|&(s, _)| s);

    let total = cache.len() as f64;
    println!(
        "P1 favored: {} ({:.2}%)",
        p1_wins,
        100.0 * p1_wins as f64 / total
    );
    println!(
        "P2 favored: {} ({:.2}%)",
        p2_wins,
        100.0 * p2_wins as f64 / total
    );
    println!("Draws:      {} ({:.2}%)", draws, 100.0 * draws as f64 / total);
    println!("Total:      {}", cache.len());

    println!("\nScore histogram:");
    for (score, n) in histogram {
        println!("  {:>3}: {}", score, n);
    }
    println!();
}

/// Branching factor via random playouts from the initial position.
fn branching_factor_stats() {
    println!("=== Branching Factor ===");

    let initial = GameState::new();
    println!(
        "Initial position: {} legal moves",
        initial.legal_moves().len()
    );

    println!("\nSampling branching factor via random games...");
    let mut rng_state = 12345u64;
    let mut total_bf = 0u64;
    let mut bf_count = 0u64;
    let mut max_moves = 0usize;
    let mut min_moves = usize::MAX;
    let mut game_lengths = 0u64;
    let mut games = 0u64;

    for _ in 0..1000 {
        let mut state = GameState::new();
        let mut length = 0u64;
        loop {
            if state.outcome() != Outcome::InProgress {
                break;
            }
            let moves = state.legal_moves();

            total_bf += moves.len() as u64;
            bf_count += 1;
            if moves.len() > max_moves {
                max_moves = moves.len();
            }
            if moves.len() < min_moves {
                min_moves = moves.len();
            }

            // Simple PRNG
            rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let idx = (rng_state >> 32) as usize % moves.len();

            state.apply(moves[idx]).expect("legal move must apply");
            length += 1;
        }
        game_lengths += length;
        games += 1;
    }

    println!(
        "Average branching factor: {:.1}",
        total_bf as f64 / bf_count as f64
    );
    println!("Max branching factor: {}", max_moves);
    println!("Min branching factor: {}", min_moves);
    println!(
        "Average random game length: {:.1} moves",
        game_lengths as f64 / games as f64
    );
    println!();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let cache_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("data/evals.bin")
    };

    println!("Loading cache from {:?}...", cache_path);
    let start = Instant::now();
    let cache = match EvalCache::load(&cache_path) {
        Ok(cache) => cache,
        Err(e) => {
            eprintln!("Failed to load cache: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} positions in {:.2}s\n",
        cache.len(),
        start.elapsed().as_secs_f64()
    );

    if !cache.is_empty() {
        score_distribution(&cache);
    }
    branching_factor_stats();
}
