//! Wildcard matching of a single filename against an exclude pattern.
//!
//! Two wildcard tokens: `*` matches any run of characters (including none),
//! `.` matches exactly one character. Everything else is literal. Matching
//! is anchored at both ends. No character classes, no escaping.
//!
//! The matcher is a pure recursive backtracking function. Worst case is
//! exponential for adversarial runs of `*`; filenames are short enough that
//! this is an accepted limitation rather than something to optimize away.

/// Check whether `name` matches `pattern` in full.
pub fn matches(pattern: &str, name: &str) -> bool {
    match_bytes(pattern.as_bytes(), name.as_bytes())
}

fn match_bytes(pattern: &[u8], name: &[u8]) -> bool {
    match (pattern.first(), name.first()) {
        (Some(b'*'), Some(_)) => {
            // '*' either matches nothing here, or consumes one more byte of
            // the name while staying pending.
            match_bytes(&pattern[1..], name) || match_bytes(pattern, &name[1..])
        }
        (Some(&p), Some(&c)) => (p == b'.' || p == c) && match_bytes(&pattern[1..], &name[1..]),
        // Name exhausted: only trailing '*' tokens may remain.
        (Some(_), None) => pattern.iter().all(|&b| b == b'*'),
        (None, Some(_)) => false,
        (None, None) => true,
    }
}
