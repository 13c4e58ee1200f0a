//! Error types for manifest generation and verification.
//!
//! Traversal-level failures (unreadable entries, overlong paths) are
//! recoverable diagnostics, not error values: the walk continues and the
//! manifest stays best-effort complete. Only sink/manifest I/O and logging
//! setup surface as errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
