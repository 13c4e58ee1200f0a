//! Manifest verification: replay manifest lines and compare checksums.
//!
//! Verification re-runs the exact line accumulation that generation
//! performed, skipping only the stored checksum line, then compares the
//! recovered value against the stored one. It never trusts the manifest's
//! structure beyond finding that single line.

use crate::error::ManifestError;
use crate::hash::RollingChecksum;
use crate::manifest;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of verifying a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Stored and recomputed checksums agree.
    Valid,
    /// Checksums disagree: the manifest body or checksum line was altered.
    Corrupted,
    /// No checksum line was found; the file is not a complete manifest.
    Invalid,
}

impl VerifyOutcome {
    pub fn is_valid(self) -> bool {
        self == VerifyOutcome::Valid
    }
}

impl fmt::Display for VerifyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyOutcome::Valid => write!(f, "Valid"),
            VerifyOutcome::Corrupted => write!(f, "Corrupted"),
            VerifyOutcome::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Verify a manifest file against its stored checksum line.
///
/// Lines are read as raw bytes so a manifest containing non-UTF-8 path
/// bytes still verifies. The first line matching the checksum format is
/// taken as the stored checksum and excluded from accumulation; every
/// other line, wherever it occurs, is accumulated in file order with its
/// newline byte, exactly as generation emitted it.
pub fn verify(manifest_path: &Path) -> Result<VerifyOutcome, ManifestError> {
    let file = File::open(manifest_path)?;
    let mut reader = BufReader::new(file);
    let mut checksum = RollingChecksum::new();
    let mut stored: Option<u32> = None;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if stored.is_none() {
            if let Some(value) = manifest::parse_checksum_line(&line) {
                stored = Some(value);
                continue;
            }
        }
        checksum.update(&line);
    }

    let Some(stored) = stored else {
        warn!(
            "invalid or missing checksum line in {}",
            manifest_path.display()
        );
        return Ok(VerifyOutcome::Invalid);
    };

    let computed = checksum.value();
    if stored == computed {
        Ok(VerifyOutcome::Valid)
    } else {
        debug!(
            "checksum mismatch: stored {:08X}, computed {:08X}",
            stored, computed
        );
        Ok(VerifyOutcome::Corrupted)
    }
}
