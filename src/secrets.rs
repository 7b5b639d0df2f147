/*!
 * Heuristic detection of API keys in file content
 *
 * A cheap approximation of common secret-key shapes. False positives are
 * expected; `--no-skip` turns the guard off.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that must be present before the key shapes are checked
pub const SECRET_MARKER: &str = "API_KEY";

/// Key shapes, any one of which counts as a suspected secret
static SECRET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"[a-zA-Z0-9]{32}",
        r"sk_[a-zA-Z0-9]{64}",
        r"pk_[a-zA-Z0-9]{64}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("secret pattern is valid"))
    .collect()
});

/// True if the content matches any of the key shapes
pub fn has_suspected_secret(content: &str) -> bool {
    SECRET_PATTERNS.iter().any(|re| re.is_match(content))
}

/// True if the content mentions `API_KEY` and looks like it carries a key
pub fn should_redact(content: &str) -> bool {
    content.contains(SECRET_MARKER) && has_suspected_secret(content)
}
