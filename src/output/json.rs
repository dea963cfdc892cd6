//! JSON output formatting for mikor.

use serde_json::json;

use crate::error::MikorError;
use crate::resolver::Resolution;

/// Format a resolution as JSON
///
/// # Errors
///
/// Returns `MikorError::Parse` if JSON serialization fails.
pub fn format_resolution_json(
    phrase: &str,
    resolution: &Resolution,
) -> Result<String, MikorError> {
    let output = json!({
        "phrase": phrase,
        "start": resolution.interval.start.format("%H:%M").to_string(),
        "end": resolution.interval.end.format("%H:%M").to_string(),
        "display": resolution.render(),
        "matched": resolution.matched,
    });
    Ok(serde_json::to_string(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::resolver::resolve;

    fn now() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(14, 7, 0)
            .unwrap()
    }

    #[test]
    fn test_json_recognized() {
        let out = format_resolution_json("öt körül", &resolve("öt körül", now())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["phrase"], "öt körül");
        assert_eq!(value["start"], "04:30");
        assert_eq!(value["end"], "05:30");
        assert_eq!(value["display"], "04:30-05:30");
        assert_eq!(value["matched"], "around");
    }

    #[test]
    fn test_json_unrecognized_has_null_rule() {
        let out = format_resolution_json("zagyvaság", &resolve("zagyvaság", now())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["matched"].is_null());
        assert_eq!(value["display"], "14:15-15:15");
    }
}
