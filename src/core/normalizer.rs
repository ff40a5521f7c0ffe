use once_cell::sync::Lazy;
use regex::Regex;

/// Everything except ASCII letters, digits, whitespace and periods
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s.]").expect("valid normalizer regex"));

/// Removes every character that is not an ASCII letter, digit, whitespace or period.
///
/// This is lossy: separators such as commas, colons, hyphens and apostrophes
/// disappear ("10:30" becomes "1030", "o'clock" becomes "oclock").
pub fn normalize(text: &str) -> String {
    DISALLOWED.replace_all(text, "").into_owned()
}
