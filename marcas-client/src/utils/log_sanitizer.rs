//! Log sanitization utilities
//!
//! Keeps large list responses from flooding the debug log.

/// Maximum number of bytes of a body that is written to the log.
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary `<= index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a body for logging.
///
/// Bodies within the limit are returned unchanged; longer ones keep the
/// first `TRUNCATE_LIMIT` bytes (cut on a char boundary) and note the total size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}
