//! Check primitives
//!
//! Single pass/fail predicates evaluated against one field value. Lengths are
//! counted in UTF-16 code units and "whitespace" is the ECMAScript set, so a
//! value gets the same verdict here as in the browser.

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld` shape: no whitespace and no extra '@' in any part
///
/// The class spells out ECMAScript `\s` (which includes U+FEFF and excludes
/// U+0085) instead of using the Unicode `White_Space` property.
pub const EMAIL_PATTERN: &str = concat!(
    r"^",
    r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+",
    r"@",
    r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+",
    r"\.",
    r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+",
    r"$",
);

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Length of `value` in UTF-16 code units, as the browser reports it
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// True when `value` has at least `min` characters
pub fn has_min_length(value: &str, min: usize) -> bool {
    utf16_len(value) >= min
}

/// Validates basic email shape
///
/// Accepts one or more non-space/non-@ characters, an '@', one or more
/// non-space/non-@ characters, a '.', and one or more non-space/non-@
/// characters. The dot may appear anywhere after the '@' as long as both
/// sides of it are non-empty.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Exact, case-sensitive equality
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}
