//! The pattern rule engine.
//!
//! Rules are tried in the fixed order of [`RULE_ORDER`]; the first match
//! wins and later rules are never consulted. Every phrase resolves to some
//! interval: when nothing matches, the fallback is "approximately now, for
//! the next hour", tagged as unrecognized so callers can tell the two
//! outcomes apart.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::core::{add_minutes, lookup_hour, round_to_quarter, Interval, CAN_BE_LATE};

/// Suffix variants of the exact-hour pattern: "5", "öt órakor", "5-kor",
/// "5kor". The empty suffix covers the bare numeral.
const EXACT_HOUR_SUFFIXES: [&str; 4] = ["", " órakor", "-kor", "kor"];

/// The pattern rules, one per recognized phrase shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// A numeral with an optional "at that hour" suffix: "5", "öt órakor".
    ExactHour,
    /// "X körül": half an hour either side of X.
    Around,
    /// "X előtt": from midnight until a quarter before X.
    Before,
    /// "X után": from a quarter past X until the end of the day.
    After,
    /// "most" / "mostanában": the coming hour.
    Now,
    /// "reggel": the fixed morning range.
    Morning,
    /// "délben": the fixed midday range.
    Noon,
    /// "este": the fixed evening range.
    Evening,
    /// "X óra múlva": a quarter either side of X hours from now.
    HoursFromNow,
    /// "X órán belül": from now until X hours from now.
    WithinHours,
}

/// Evaluation order. First match wins; phrases matched by an earlier rule
/// never reach a later one.
pub const RULE_ORDER: [Rule; 10] = [
    Rule::ExactHour,
    Rule::Around,
    Rule::Before,
    Rule::After,
    Rule::Now,
    Rule::Morning,
    Rule::Noon,
    Rule::Evening,
    Rule::HoursFromNow,
    Rule::WithinHours,
];

impl Rule {
    /// Try this rule against a lowercased phrase.
    ///
    /// `rounded_now` is the quarter-rounded current time; only the relative
    /// rules (`Now`, `HoursFromNow`, `WithinHours`) look at it.
    fn apply(self, phrase: &str, rounded_now: NaiveTime) -> Option<Interval> {
        match self {
            Self::ExactHour => EXACT_HOUR_SUFFIXES
                .into_iter()
                .find_map(|suffix| suffix_numeral(phrase, suffix).map(Interval::instant)),
            Self::Around => {
                let t = suffix_numeral(phrase, " körül")?;
                Some(Interval::new(add_minutes(t, -30), add_minutes(t, 30)))
            }
            Self::Before => {
                let t = suffix_numeral(phrase, " előtt")?;
                Some(Interval::new(hm(0, 0), add_minutes(t, -15)))
            }
            Self::After => {
                // XXX day change? how?
                let t = suffix_numeral(phrase, " után")?;
                Some(Interval::new(add_minutes(t, 15), hm(23, 59)))
            }
            Self::Now => {
                matches!(phrase, "most" | "mostanában").then(|| hour_ahead(rounded_now))
            }
            Self::Morning => (phrase == "reggel").then(|| Interval::new(hm(0, 0), hm(10, 0))),
            Self::Noon => (phrase == "délben").then(|| Interval::new(hm(11, 0), hm(13, 0))),
            Self::Evening => (phrase == "este").then(|| Interval::new(hm(17, 0), hm(23, 59))),
            Self::HoursFromNow => {
                let hours = suffix_numeral(phrase, " óra múlva")?.hour();
                let center = add_minutes(rounded_now, i64::from(hours) * 60);
                Some(Interval::new(add_minutes(center, -15), add_minutes(center, 15)))
            }
            Self::WithinHours => {
                let hours = suffix_numeral(phrase, " órán belül")?.hour();
                Some(Interval::new(
                    rounded_now,
                    add_minutes(rounded_now, i64::from(hours) * 60),
                ))
            }
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ExactHour => "exact hour",
            Self::Around => "around",
            Self::Before => "before",
            Self::After => "after",
            Self::Now => "now",
            Self::Morning => "morning",
            Self::Noon => "noon",
            Self::Evening => "evening",
            Self::HoursFromNow => "hours from now",
            Self::WithinHours => "within hours",
        })
    }
}

/// Result of resolving a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The resolved interval.
    pub interval: Interval,
    /// Which rule matched, or `None` when the phrase fell through to the
    /// fallback. The fallback interval is numerically identical to the
    /// "most" result; this tag is the only way to tell them apart.
    pub matched: Option<Rule>,
}

impl Resolution {
    /// Check whether a pattern rule matched the phrase.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        self.matched.is_some()
    }

    /// Render the resolved interval as `"HH:MM"` or `"HH:MM-HH:MM"`.
    #[must_use]
    pub fn render(&self) -> String {
        self.interval.render()
    }
}

/// Resolve a time phrase against the given current time.
///
/// The phrase is lowercased; no other preprocessing happens. Every phrase
/// yields an interval: unmatched input falls back to the coming hour from
/// the quarter-rounded `now`, tagged unrecognized.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mikor::resolve;
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 1)
///     .and_then(|d| d.and_hms_opt(14, 7, 0))
///     .unwrap();
///
/// assert_eq!(resolve("öt körül", now).render(), "04:30-05:30");
/// assert_eq!(resolve("5-kor", now).render(), "05:00");
/// ```
#[must_use]
pub fn resolve(phrase: &str, now: NaiveDateTime) -> Resolution {
    let phrase = phrase.to_lowercase();
    let rounded_now = round_to_quarter(now, CAN_BE_LATE).time();

    for rule in RULE_ORDER {
        if let Some(interval) = rule.apply(&phrase, rounded_now) {
            return Resolution {
                interval,
                matched: Some(rule),
            };
        }
    }

    Resolution {
        interval: hour_ahead(rounded_now),
        matched: None,
    }
}

/// Strip `suffix` from the phrase and look the rest up as a numeral.
fn suffix_numeral(phrase: &str, suffix: &str) -> Option<NaiveTime> {
    lookup_hour(phrase.strip_suffix(suffix)?)
}

/// The coming hour from `start`: the "most" interval and the fallback.
fn hour_ahead(start: NaiveTime) -> Interval {
    Interval::new(start, add_minutes(start, 60))
}

/// Build a time of day from in-range components.
fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}
