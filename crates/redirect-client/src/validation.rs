use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ALPHANUMERIC_RUN: Regex = Regex::new(r"[0-9A-Za-z]+").unwrap();
}

/// Returns true when `candidate` contains at least one ASCII letter or digit.
///
/// This is a partial match: `"a!!!"` passes. Anything else is left for the
/// redirect service to reject.
pub fn is_valid_custom_address(candidate: &str) -> bool {
    ALPHANUMERIC_RUN.is_match(candidate)
}
