//! Email address syntax check.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("valid email regex")
});

/// Returns whether `value` is a syntactically valid email address.
///
/// The local part may not start with a dot or contain consecutive dots; the
/// regex crate has no look-around, so those two rules are checked directly.
pub fn is_valid_email(value: &str) -> bool {
    let local = match value.split_once('@') {
        Some((local, _)) => local,
        None => return false,
    };
    if local.starts_with('.') || local.contains("..") {
        return false;
    }
    EMAIL_RE.is_match(value)
}
