//! Project-name slugification.
//!
//! One shared function serves both link generation and deep-link lookup, so
//! any spelling that normalizes to the same slug resolves to the same
//! project.

/// Derive a URL-safe slug from a human-readable name.
///
/// Lowercases, drops everything outside `[a-z0-9 -]`, collapses whitespace
/// and hyphen runs to a single hyphen, and trims hyphens from both ends.
/// Deterministic and idempotent: `slugify(slugify(x)) == slugify(x)`.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            out.push(ch);
            pending_hyphen = false;
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
        // Any other character is dropped without breaking the word.
    }
    out
}
