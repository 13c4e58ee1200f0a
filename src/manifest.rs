//! Manifest wire format: entry lines and the terminal checksum line.
//!
//! The textual byte sequence is what the aggregate checksum is computed
//! over, not the structured entry, so the rendering here is a wire
//! contract: any change to spacing, hex case, or line terminator breaks
//! verification of manifests produced under the old format.

/// Literal prefix of the terminal checksum line.
pub const CHECKSUM_PREFIX: &str = "Manifest checksum: ";

/// One manifest entry: a file that survived exclusion filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path relative to the walk root, rendered with `/` separators.
    pub relative_path: String,
    /// Rolling checksum of the file's contents (`0` for unreadable files).
    pub file_hash: u32,
}

impl ManifestEntry {
    /// Render the entry as its manifest line, newline included.
    pub fn render(&self) -> String {
        format!("{} : {:08X}\n", self.relative_path, self.file_hash)
    }
}

/// Render the terminal checksum line, newline included.
pub fn checksum_line(value: u32) -> String {
    format!("{}{:08X}\n", CHECKSUM_PREFIX, value)
}

/// Parse a checksum line: the literal prefix followed by exactly 8 hex
/// digits and end-of-line. Deliberately not a general format scan, so a
/// file line crafted to resemble a checksum line (wrong digit count,
/// trailing text) is not mistaken for one.
pub fn parse_checksum_line(line: &[u8]) -> Option<u32> {
    let rest = line.strip_prefix(CHECKSUM_PREFIX.as_bytes())?;
    let digits = rest.strip_suffix(b"\n").unwrap_or(rest);
    if digits.len() != 8 || !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let digits = std::str::from_utf8(digits).ok()?;
    u32::from_str_radix(digits, 16).ok()
}
