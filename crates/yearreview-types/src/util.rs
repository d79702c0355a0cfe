use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse an ISO-8601 timestamp into UTC.
///
/// Accepts RFC 3339 (`2025-01-15T10:00:00Z`, `...+02:00`), naive date-times
/// (read as UTC) and bare dates (midnight UTC). Anything else yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    parse_calendar_date(raw)
}

/// Parse a bare `YYYY-MM-DD` date as midnight UTC.
pub fn parse_calendar_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// First `max_chars` characters of `s`, never splitting a code point.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Shorten `s` to at most `max_chars` characters, ending in `...` when cut.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    format!("{}...", truncate_chars(s, keep))
}

/// Upper-case the first letter of each alphabetic run, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_timestamp_rfc3339_with_offset() {
        let dt = parse_timestamp("2025-03-31T23:30:00-02:00").unwrap();
        assert_eq!(dt.month(), 4);
        assert_eq!(dt.hour(), 1);
    }

    #[test]
    fn test_parse_timestamp_naive_and_bare_date() {
        assert!(parse_timestamp("2025-01-15T10:00:00").is_some());
        let date = parse_timestamp("2025-01-10").unwrap();
        assert_eq!(date.day(), 10);
        assert_eq!(date.hour(), 0);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("next tuesday").is_none());
        assert!(parse_calendar_date("2025-13-40").is_none());
    }

    #[test]
    fn test_truncate_chars_respects_code_points() {
        assert_eq!(truncate_chars("2025-01-15T10:00:00Z", 10), "2025-01-15");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }

    #[test]
    fn test_ellipsize() {
        assert_eq!(ellipsize("tiny", 100), "tiny");
        let long = "x".repeat(150);
        let cut = ellipsize(&long, 100);
        assert_eq!(cut.chars().count(), 100);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("infrastructure"), "Infrastructure");
        assert_eq!(title_case("cost savings"), "Cost Savings");
        assert_eq!(title_case("AI"), "Ai");
    }
}
