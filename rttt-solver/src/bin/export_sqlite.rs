//! Export a cache snapshot to a queryable SQLite database.
//!
//! Usage: export_sqlite [input.bin] [output.db]
//!
//! Each row carries the raw cache key and score plus columns decoded from
//! the key (board code, reserve counters, side to move, plies played), so
//! the solved tree can be explored with plain SQL instead of bit twiddling.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use rusqlite::{params, Connection};

use rttt_core::encoding::RESERVE_BITS;
use rttt_solver::cache::EvalCache;

/// Columns decoded from a 39-bit cache key.
struct DecodedKey {
    board: u32,
    reserves: [u8; 6],
    to_move: char,
    plies: u8,
}

fn decode_key(key: u64) -> DecodedKey {
    let board = (key >> RESERVE_BITS) as u32;
    let packed = (key & 0xFFF) as u16;
    let mut reserves = [0u8; 6];
    for (i, slot) in reserves.iter_mut().enumerate() {
        *slot = ((packed >> (10 - 2 * i)) & 0b11) as u8;
    }
    // Full reserves are 16 pieces; each ply consumes exactly one.
    let remaining: u8 = reserves.iter().sum();
    let plies = 16 - remaining;
    let to_move = if plies % 2 == 0 { 'X' } else { 'O' };
    DecodedKey {
        board,
        reserves,
        to_move,
        plies,
    }
}

fn run(input_path: &PathBuf, output_path: &PathBuf) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let cache = EvalCache::load(input_path)?;
    if cache.is_empty() {
        return Err(format!("snapshot {:?} holds no positions", input_path).into());
    }
    let entries = cache.entries();
    println!(
        "Loaded {} positions in {:.2}s",
        entries.len(),
        start.elapsed().as_secs_f64()
    );

    if output_path.exists() {
        std::fs::remove_file(output_path)?;
    }

    let mut conn = Connection::open(output_path)?;
    conn.execute(
        "CREATE TABLE positions (
            key       INTEGER PRIMARY KEY,
            score     INTEGER NOT NULL,
            board     INTEGER NOT NULL,
            p1_small  INTEGER NOT NULL,
            p1_medium INTEGER NOT NULL,
            p1_large  INTEGER NOT NULL,
            p2_small  INTEGER NOT NULL,
            p2_medium INTEGER NOT NULL,
            p2_large  INTEGER NOT NULL,
            to_move   TEXT NOT NULL,
            plies     INTEGER NOT NULL
        )",
        [],
    )?;

    let start = Instant::now();
    let mut favored = [0u64; 3]; // P1 / draw / P2 tallies for verification

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO positions VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        )?;
        for &(key, score) in &entries {
            let d = decode_key(key);
            stmt.execute(params![
                key as i64,
                score as i32,
                d.board as i64,
                d.reserves[0],
                d.reserves[1],
                d.reserves[2],
                d.reserves[3],
                d.reserves[4],
                d.reserves[5],
                d.to_move.to_string(),
                d.plies,
            ])?;
            match score.cmp(&0) {
                std::cmp::Ordering::Greater => favored[0] += 1,
                std::cmp::Ordering::Equal => favored[1] += 1,
                std::cmp::Ordering::Less => favored[2] += 1,
            }
        }
    }
    tx.commit()?;

    let elapsed = start.elapsed().as_secs_f64();
    println!(
        "Inserted {} rows in {:.2}s ({:.0} rows/sec)",
        entries.len(),
        elapsed,
        entries.len() as f64 / elapsed
    );

    // Cross-check the database against the in-memory tallies.
    let queries = [
        ("score > 0", favored[0]),
        ("score = 0", favored[1]),
        ("score < 0", favored[2]),
    ];
    for (predicate, expected) in queries {
        let got: u64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM positions WHERE {}", predicate),
            [],
            |row| row.get(0),
        )?;
        if got != expected {
            return Err(format!(
                "verification failed: {} rows with {}, expected {}",
                got, predicate, expected
            )
            .into());
        }
    }
    println!(
        "Verified: {} P1-favored, {} drawn, {} P2-favored",
        favored[0], favored[1], favored[2]
    );

    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let input_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/evals.bin"));
    let output_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/evals.db"));

    println!("Exporting {:?} -> {:?}", input_path, output_path);
    if let Err(e) = run(&input_path, &output_path) {
        eprintln!("Export failed: {}", e);
        std::process::exit(1);
    }
    println!("Done.");
}
