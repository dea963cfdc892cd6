//! Hungarian numeral lookup.
//!
//! Maps bare digit strings ("1".."12") and Hungarian number words ("egy",
//! "kettő", ...) to an hour on the clock. Hours 13-23 are deliberately not
//! representable here; they are only reachable through offset arithmetic in
//! the resolver.

use std::collections::HashMap;

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// Hungarian number words for 1-12, keyed to their digit-string form.
///
/// "két"/"kettő" and "tizenkét"/"tizenkettő" are attributive/standalone
/// variants of the same numbers.
static NUMBER_WORDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("egy", "1"),
        ("két", "2"),
        ("kettő", "2"),
        ("három", "3"),
        ("négy", "4"),
        ("öt", "5"),
        ("hat", "6"),
        ("hét", "7"),
        ("nyolc", "8"),
        ("kilenc", "9"),
        ("tíz", "10"),
        ("tizenegy", "11"),
        ("tizenkét", "12"),
        ("tizenkettő", "12"),
    ])
});

static DIGIT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(1[0-2]|[1-9])$").unwrap_or_else(|e| panic!("Invalid digit regex: {e}"))
});

/// Look up a numeral token as an hour on the clock.
///
/// Accepts digit strings "1".."12" and the Hungarian number words for the
/// same range, returning that hour with minute 0. Returns `None` for
/// anything else, which callers treat as "this rule does not apply", not as
/// an error.
#[must_use]
pub fn lookup_hour(token: &str) -> Option<NaiveTime> {
    let digits = if DIGIT_TOKEN.is_match(token) {
        token
    } else {
        NUMBER_WORDS.get(token).copied()?
    };
    let hour: u32 = digits.parse().ok()?;
    NaiveTime::from_hms_opt(hour, 0, 0)
}
