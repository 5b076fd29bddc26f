//! Search statistics tracking.

use std::time::Instant;

use rttt_core::{Outcome, Player};

/// Resident set size of this process in bytes, from the VmRSS line of
/// /proc/self/status. None off Linux or if the line is missing.
#[cfg(target_os = "linux")]
pub fn resident_memory() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kb: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb * 1024)
}

#[cfg(not(target_os = "linux"))]
pub fn resident_memory() -> Option<u64> {
    None
}

/// Format a byte count with a binary unit suffix.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in ["B", "KiB", "MiB", "GiB"] {
        if value < 1024.0 || unit == "GiB" {
            return if unit == "B" {
                format!("{} B", bytes)
            } else {
                format!("{:.1} {}", value, unit)
            };
        }
        value /= 1024.0;
    }
    unreachable!()
}

/// Statistics collected while searching.
#[derive(Debug, Default)]
pub struct SearchStats {
    /// Positions whose score was computed by folding over children
    pub positions_evaluated: u64,

    /// Cache hits (position already in the transposition cache)
    pub cache_hits: u64,

    /// Terminal positions reached (line win, count win, or draw)
    pub terminal_positions: u64,

    /// Maximum recursion depth reached
    pub max_depth: u32,

    /// Breakdown of terminal outcomes
    pub p1_wins: u64,
    pub p2_wins: u64,
    pub draws: u64,

    /// For rate calculation
    start_time: Option<Instant>,
    last_log_time: Option<Instant>,
    last_log_positions: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_log_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Record a terminal position outcome.
    pub fn record_terminal(&mut self, outcome: Outcome) {
        self.terminal_positions += 1;
        match outcome {
            Outcome::Won(Player::One) => self.p1_wins += 1,
            Outcome::Won(Player::Two) => self.p2_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Check if the log interval has elapsed.
    pub fn should_log(&self, interval_secs: u64) -> bool {
        match self.last_log_time {
            Some(last) => last.elapsed().as_secs() >= interval_secs,
            None => true,
        }
    }

    /// Log progress and reset the log timer.
    pub fn log_progress(&mut self, cache_size: usize) {
        let elapsed_total = self.start_time.map(|s| s.elapsed().as_secs()).unwrap_or(0);

        let rate = if let Some(last) = self.last_log_time {
            let elapsed = last.elapsed().as_secs_f64();
            let positions = self.positions_evaluated - self.last_log_positions;
            if elapsed > 0.0 {
                positions as f64 / elapsed
            } else {
                0.0
            }
        } else {
            0.0
        };

        let mem_str = resident_memory()
            .map(|m| format!(", rss {}", format_bytes(m)))
            .unwrap_or_default();

        println!(
            "[{}s] {} evaluated ({:.0}/s), {} cached, {} hits, depth {} | terminals X:{} O:{} draw:{}{}",
            elapsed_total,
            self.positions_evaluated,
            rate,
            cache_size,
            self.cache_hits,
            self.max_depth,
            self.p1_wins,
            self.p2_wins,
            self.draws,
            mem_str,
        );

        self.last_log_time = Some(Instant::now());
        self.last_log_positions = self.positions_evaluated;
    }

    /// Print final summary.
    pub fn print_summary(&self) {
        println!("Positions evaluated: {}", self.positions_evaluated);
        println!("Cache hits: {}", self.cache_hits);
        println!("Terminal positions: {}", self.terminal_positions);
        println!("  - P1 wins: {}", self.p1_wins);
        println!("  - P2 wins: {}", self.p2_wins);
        println!("  - Draws: {}", self.draws);
        println!("Max depth: {}", self.max_depth);

        if let Some(start) = self.start_time {
            let elapsed = start.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                println!(
                    "Average rate: {:.0} positions/sec",
                    self.positions_evaluated as f64 / elapsed
                );
            }
        }
    }
}
