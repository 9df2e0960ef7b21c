//! Public contact-form rules.

use std::sync::LazyLock;

use regex::Regex;

/// Deliberately permissive: one `@`, a dot somewhere after it, no whitespace.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Returns `true` if `email` passes the contact-form e-mail check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
