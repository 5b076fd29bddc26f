//! Transposition cache with binary snapshot persistence.
//!
//! Format:
//! - Header (32 bytes):
//!   - Magic: "RTT1" (4 bytes)
//!   - Version: u32 LE (4 bytes)
//!   - Entry count: u64 LE (8 bytes)
//!   - Checksum: u64 LE xxhash of data section (8 bytes)
//!   - Reserved: 8 bytes (zeros)
//! - Data section (entry_count x 9 bytes):
//!   - Canonical key: u64 LE (8 bytes)
//!   - Score: i8 (1 byte)
//!
//! Entries are sorted by key. The file is read wholesale at startup and
//! rewritten wholesale at shutdown; a missing file means an empty cache,
//! and an unreadable one is reported and treated as empty rather than
//! failing startup.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use xxhash_rust::xxh64::xxh64;

const MAGIC: &[u8; 4] = b"RTT1";
const VERSION: u32 = 1;
const HEADER_SIZE: usize = 32;
const ENTRY_SIZE: usize = 9;

/// Exact evaluation cache: canonical key -> minimax score.
///
/// No eviction and no staleness: a stored value depends only on the state
/// itself, so it stays valid across runs.
#[derive(Debug, Default)]
pub struct EvalCache {
    map: HashMap<u64, i8>,
}

impl EvalCache {
    pub fn new() -> EvalCache {
        EvalCache {
            map: HashMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, key: u64) -> Option<i8> {
        self.map.get(&key).copied()
    }

    #[inline]
    pub fn put(&mut self, key: u64, score: i8) {
        self.map.insert(key, score);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All entries, sorted by key.
    pub fn entries(&self) -> Vec<(u64, i8)> {
        let mut entries: Vec<(u64, i8)> = self.map.iter().map(|(&k, &v)| (k, v)).collect();
        entries.sort_by_key(|&(k, _)| k);
        entries
    }

    /// Load a snapshot file. A missing file yields an empty cache; any
    /// malformed content (bad magic, version, checksum, truncation) is an
    /// `InvalidData` error for the caller to report and recover from.
    pub fn load(path: &Path) -> io::Result<EvalCache> {
        if !path.exists() {
            return Ok(EvalCache::new());
        }

        let file = File::open(path)?;
        let file_len = file.metadata()?.len();
        let mut reader = BufReader::new(file);

        let mut header = [0u8; HEADER_SIZE];
        reader.read_exact(&mut header).map_err(corrupt)?;

        if &header[0..4] != MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "invalid cache magic",
            ));
        }

        let version = u32::from_le_bytes(header[4..8].try_into().unwrap());
        if version != VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported cache version: {}", version),
            ));
        }

        let count = u64::from_le_bytes(header[8..16].try_into().unwrap());
        let stored_checksum = u64::from_le_bytes(header[16..24].try_into().unwrap());

        // The count is untrusted input. Check it against the actual file
        // size before sizing any allocation from it.
        let expected_len = count
            .checked_mul(ENTRY_SIZE as u64)
            .and_then(|data_len| data_len.checked_add(HEADER_SIZE as u64));
        if expected_len != Some(file_len) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "cache entry count {} does not match file length {}",
                    count, file_len
                ),
            ));
        }
        let count = count as usize;

        let mut data = vec![0u8; count * ENTRY_SIZE];
        reader.read_exact(&mut data).map_err(corrupt)?;

        let computed_checksum = xxh64(&data, 0);
        if computed_checksum != stored_checksum {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "cache checksum mismatch",
            ));
        }

        let mut map = HashMap::with_capacity(count);
        for i in 0..count {
            let offset = i * ENTRY_SIZE;
            let key = u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap());
            let score = data[offset + 8] as i8;
            map.insert(key, score);
        }

        Ok(EvalCache { map })
    }

    /// Write the whole cache to a snapshot file, replacing any previous
    /// content. Returns the number of entries written.
    pub fn save(&self, path: &Path) -> io::Result<usize> {
        let entries = self.entries();
        let count = entries.len();

        let mut data = Vec::with_capacity(count * ENTRY_SIZE);
        for (key, score) in &entries {
            data.extend_from_slice(&key.to_le_bytes());
            data.push(*score as u8);
        }

        let checksum = xxh64(&data, 0);

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(MAGIC)?;
        writer.write_all(&VERSION.to_le_bytes())?;
        writer.write_all(&(count as u64).to_le_bytes())?;
        writer.write_all(&checksum.to_le_bytes())?;
        writer.write_all(&[0u8; 8])?;

        writer.write_all(&data)?;
        writer.flush()?;

        Ok(count)
    }
}

fn corrupt(e: io::Error) -> io::Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        io::Error::new(io::ErrorKind::InvalidData, "truncated cache file")
    } else {
        e
    }
}
