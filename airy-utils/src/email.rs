//! email address validation

use std::sync::LazyLock;

use regex::Regex;

// local part: dotted atoms or a quoted string;
// domain: a bracketed IPv4 literal, or dotted labels with an
// alphabetic tld of at least two chars.
const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#;

// the pattern is const and known-good
#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Returns `true` if `address` is a syntactically plausible email address.
///
/// This is a syntax check only: it does not prove the mailbox exists,
/// nor does it implement every corner of RFC 5322.
pub fn is_valid_email(address: impl AsRef<str>) -> bool {
    EMAIL_RE.is_match(address.as_ref())
}
