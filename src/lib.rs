//! Mangen: Directory Manifest Generation and Verification
//!
//! Walks a directory tree, computes a rolling checksum for every regular
//! file, emits a manifest of relative paths and hashes terminated by an
//! aggregate checksum line, and verifies previously generated manifests
//! against that checksum.

pub mod cli;
pub mod error;
pub mod hash;
pub mod logging;
pub mod manifest;
pub mod pattern;
pub mod verify;
pub mod walker;
