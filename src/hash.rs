//! Rolling checksum primitive used for both file contents and manifest text.
//!
//! One mixing rule serves both purposes: `acc = (acc + byte) * 65521` under
//! unsigned 32-bit wraparound, seeded at 1. Hashing file bytes and manifest
//! lines with the same rule means the aggregate checksum detects tampering
//! with either a file's content (via the hash embedded in its line) or the
//! manifest text itself (line insertion, deletion, edit, reordering).
//!
//! This is an Adler-32-like mix, not a cryptographic hash.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Seed value for both per-file and manifest-wide accumulation.
pub const HASH_SEED: u32 = 1;

/// Multiplier applied after each byte (the largest prime below 2^16).
const MIX_MULTIPLIER: u32 = 65521;

/// Incremental rolling checksum over a byte stream.
///
/// Wraparound semantics are part of the wire contract: `wrapping_add` and
/// `wrapping_mul` on `u32`, no wider intermediates.
#[derive(Debug, Clone)]
pub struct RollingChecksum {
    acc: u32,
}

impl RollingChecksum {
    /// Create a checksum seeded to 1.
    pub fn new() -> Self {
        Self { acc: HASH_SEED }
    }

    /// Fold `bytes` into the accumulator in order.
    pub fn update(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.acc = self.acc.wrapping_add(u32::from(b)).wrapping_mul(MIX_MULTIPLIER);
        }
    }

    /// Current accumulator value.
    pub fn value(&self) -> u32 {
        self.acc
    }

    /// Reset to the seed value for a fresh accumulation.
    pub fn reset(&mut self) {
        self.acc = HASH_SEED;
    }
}

impl Default for RollingChecksum {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the rolling checksum of a file's contents.
///
/// Streams the file through a buffered reader in strict sequential byte
/// order. A zero-length file hashes to the seed value 1. Open or read
/// failures surface as `io::Error`; the caller decides whether that is
/// fatal (the walker records a sentinel hash and continues).
pub fn hash_file(path: &Path) -> io::Result<u32> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut checksum = RollingChecksum::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let consumed = buf.len();
        checksum.update(buf);
        reader.consume(consumed);
    }
    Ok(checksum.value())
}
