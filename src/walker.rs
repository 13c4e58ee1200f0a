//! Filtered directory traversal that emits manifest lines.
//!
//! The walker visits every entry under a root, prunes excluded names and
//! patterns, and for each surviving regular file writes one manifest line
//! to the output sink while folding that line into a manifest-wide rolling
//! checksum. Generation and verification must agree on this line stream
//! byte for byte, so the traversal order is fixed (sorted by file name
//! within each directory) and the rendering lives in [`crate::manifest`].

use crate::error::ManifestError;
use crate::hash::{self, RollingChecksum};
use crate::manifest::ManifestEntry;
use crate::pattern;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Composed relative paths longer than this are reported and skipped.
/// Keeps the recoverable-skip behavior for pathological tree depths
/// instead of letting one branch dominate or break a run. On most
/// filesystems a tree deep enough to exceed this fails the directory
/// listing first and takes the unreadable-entry branch; this check
/// covers the residual case where the listing still succeeds.
pub const MAX_RELATIVE_PATH_BYTES: usize = 4096;

/// Exclusion rules applied to every entry name during a walk.
///
/// Owned by the walker instance, so independent walks in one process
/// cannot contaminate each other.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    /// Skip entries whose name equals this exactly.
    pub exclude_name: Option<String>,
    /// Skip entries whose name matches this wildcard pattern.
    pub exclude_pattern: Option<String>,
}

impl ExclusionFilter {
    /// Whether an entry with this name should be skipped (and, for a
    /// directory, not descended into).
    pub fn excludes(&self, name: &str) -> bool {
        if let Some(excluded) = &self.exclude_name {
            if name == excluded {
                return true;
            }
        }
        if let Some(excluded) = &self.exclude_pattern {
            if pattern::matches(excluded, name) {
                return true;
            }
        }
        false
    }
}

/// Recursive directory walker producing manifest lines.
pub struct DirectoryWalker {
    root: PathBuf,
    filter: ExclusionFilter,
    max_path_bytes: usize,
}

impl DirectoryWalker {
    /// Create a walker with no exclusions.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            filter: ExclusionFilter::default(),
            max_path_bytes: MAX_RELATIVE_PATH_BYTES,
        }
    }

    /// Create a walker with the given exclusion filter.
    pub fn with_filter(root: PathBuf, filter: ExclusionFilter) -> Self {
        Self {
            root,
            filter,
            max_path_bytes: MAX_RELATIVE_PATH_BYTES,
        }
    }

    /// Lower the path-length limit so tests can exercise the skip branch
    /// without materializing a multi-kilobyte tree.
    #[cfg(test)]
    fn with_max_path_bytes(mut self, max_path_bytes: usize) -> Self {
        self.max_path_bytes = max_path_bytes;
        self
    }

    /// Walk the tree, writing one manifest line per regular file to `out`,
    /// and return the manifest-wide checksum over the emitted lines.
    ///
    /// Traversal is depth-first with entries sorted by file name inside
    /// each directory, symlinks not followed. Unreadable directories and
    /// entries are reported and skipped; an unreadable file still gets a
    /// line, with sentinel hash `0`. The only fatal error is a failure to
    /// write to `out`.
    pub fn walk<W: Write>(&self, out: &mut W) -> Result<u32, ManifestError> {
        let mut manifest_checksum = RollingChecksum::new();

        let entries = WalkDir::new(&self.root)
            .follow_links(false)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.filter.excludes(&e.file_name().to_string_lossy()));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };

            // Directories are descended into by the iterator itself;
            // symlinks, devices, fifos and sockets are skipped silently.
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = match entry.path().strip_prefix(&self.root) {
                Ok(relative) => relative,
                Err(_) => continue,
            };
            let relative_path = render_relative(relative);
            if relative_path.len() > self.max_path_bytes {
                let head: String = relative_path.chars().take(64).collect();
                warn!(
                    "relative path too long ({} bytes), skipping: {}...",
                    relative_path.len(),
                    head
                );
                continue;
            }

            let file_hash = match hash::hash_file(entry.path()) {
                Ok(file_hash) => file_hash,
                Err(e) => {
                    // Unreadable files keep their line with a sentinel
                    // hash so the manifest records their presence.
                    warn!("failed to hash {}: {}", entry.path().display(), e);
                    0
                }
            };

            let line = ManifestEntry {
                relative_path,
                file_hash,
            }
            .render();
            out.write_all(line.as_bytes())?;
            manifest_checksum.update(line.as_bytes());
        }

        Ok(manifest_checksum.value())
    }
}

/// Render a relative path with `/` separators regardless of platform.
fn render_relative(path: &Path) -> String {
    let mut rendered = String::new();
    for component in path.components() {
        if !rendered.is_empty() {
            rendered.push('/');
        }
        rendered.push_str(&component.as_os_str().to_string_lossy());
    }
    rendered
}
