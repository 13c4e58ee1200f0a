//! Command-line interface: clap definitions and command dispatch.
//!
//! The dispatch lives in the library so integration tests can drive the
//! full generate/verify flow against an in-memory sink without spawning a
//! process. The binary is a thin wrapper around [`run`].

use crate::error::ManifestError;
use crate::manifest;
use crate::verify::{self, VerifyOutcome};
use crate::walker::{DirectoryWalker, ExclusionFilter};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Generate a manifest of directory files with hashes, or verify one.
#[derive(Parser, Debug)]
#[command(name = "mangen")]
#[command(version, about = "Generate and verify directory manifests with integrity checksums")]
pub struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Exclude files or directories with exactly this name
    #[arg(short = 'e', value_name = "NAME")]
    pub exclude_name: Option<String>,

    /// Exclude files or directories matching this pattern
    /// ('*' = any run of characters, '.' = any single character)
    #[arg(short = 'E', value_name = "PATTERN")]
    pub exclude_pattern: Option<String>,

    /// Verify a previously generated manifest file instead of generating
    #[arg(long, value_name = "FILE")]
    pub verify: Option<PathBuf>,

    /// Log level for diagnostics (trace, debug, info, warn, error, off)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Execute the parsed command, writing manifest or verdict lines to `out`.
///
/// Returns the process exit code: 0 for a generated manifest or a `Valid`
/// verdict, 1 for `Corrupted` or `Invalid`. `Invalid` writes nothing to
/// `out`; its diagnostic goes to the log stream.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<i32, ManifestError> {
    if let Some(manifest_path) = &cli.verify {
        return match verify::verify(manifest_path)? {
            VerifyOutcome::Valid => {
                writeln!(out, "{}", VerifyOutcome::Valid)?;
                Ok(0)
            }
            VerifyOutcome::Corrupted => {
                writeln!(out, "{}", VerifyOutcome::Corrupted)?;
                Ok(1)
            }
            VerifyOutcome::Invalid => Ok(1),
        };
    }

    let filter = ExclusionFilter {
        exclude_name: cli.exclude_name.clone(),
        exclude_pattern: cli.exclude_pattern.clone(),
    };
    let walker = DirectoryWalker::with_filter(cli.root.clone(), filter);
    let checksum = walker.walk(out)?;
    out.write_all(manifest::checksum_line(checksum).as_bytes())?;
    Ok(0)
}
