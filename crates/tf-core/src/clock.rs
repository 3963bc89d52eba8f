//! Clock and calendar-day helpers.
//!
//! "Today" is always judged in the UTC offset carried by `now`, so the same
//! instant can be today for one viewer and yesterday for another. Callers pick
//! the offset once (system local time, or a configured fixed offset) and pass
//! the resulting `now` everywhere.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::errors::CoreError;

/// Source of "now".
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock. Uses the system's local offset unless a fixed one is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    #[must_use]
    pub const fn new(offset: Option<FixedOffset>) -> Self {
        Self { offset }
    }

    #[must_use]
    pub const fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset),
            None => Local::now().fixed_offset(),
        }
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Whether `ts` is strictly before `now`.
#[must_use]
pub fn is_past<Tz: TimeZone>(ts: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    *ts < now.with_timezone(&Utc)
}

/// Whether `ts` falls on the same calendar day as `now`, in `now`'s offset.
#[must_use]
pub fn is_same_day<Tz: TimeZone>(ts: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    ts.with_timezone(&now.timezone()).date_naive() == now.date_naive()
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 (`2024-01-10T09:00:00+00:00`), `SQLite`'s
/// `2024-01-10 09:00:00`, and offset-less `2024-01-10T09:00:00[.fff]`; the
/// latter two are read as UTC. A bare `2024-01-10` is the last second of that
/// day in UTC.
///
/// # Errors
///
/// Returns `CoreError::InvalidTimestamp` naming `field` if no format matches.
pub fn parse_timestamp(field: &str, s: &str) -> Result<DateTime<Utc>, CoreError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Some(end_of_day) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(23, 59, 59))
    {
        return Ok(end_of_day.and_utc());
    }
    Err(CoreError::invalid_timestamp(
        field,
        s,
        "expected RFC 3339 or YYYY-MM-DD HH:MM:SS",
    ))
}

/// Parse an optional stored timestamp; empty text is `None`.
///
/// # Errors
///
/// Returns `CoreError::InvalidTimestamp` if a non-empty value cannot be parsed.
pub fn parse_optional_timestamp(
    field: &str,
    s: Option<&str>,
) -> Result<Option<DateTime<Utc>>, CoreError> {
    match s {
        Some(s) if !s.trim().is_empty() => Ok(Some(parse_timestamp(field, s)?)),
        _ => Ok(None),
    }
}

/// Parse user-entered date/time text in the viewer's offset.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM`, `YYYY-MM-DD HH:MM`, and a bare
/// `YYYY-MM-DD`, which means the last second of that day.
///
/// # Errors
///
/// Returns `CoreError::InvalidTimestamp` if the text matches none of these.
pub fn parse_user_input(
    field: &str,
    s: &str,
    offset: FixedOffset,
) -> Result<DateTime<Utc>, CoreError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| NaiveTime::from_hms_opt(23, 59, 59).map(|t| date.and_time(t)))
        })
        .ok_or_else(|| {
            CoreError::invalid_timestamp(field, s, "expected YYYY-MM-DDTHH:MM or YYYY-MM-DD")
        })?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| CoreError::invalid_timestamp(field, s, "not representable in offset"))
}

/// Parse a `±HH:MM` offset (or `Z` / `UTC`).
///
/// # Errors
///
/// Returns `CoreError::Validation` for malformed or out-of-range offsets.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset, CoreError> {
    let s = s.trim();
    let invalid = || CoreError::Validation(format!("invalid UTC offset '{s}', expected ±HH:MM"));

    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn fixed(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn past_is_strict() {
        let now = fixed("2024-01-10T09:00:00Z");
        assert!(!is_past(&utc("2024-01-10T09:00:00Z"), &now));
        assert!(is_past(&utc("2024-01-10T08:59:59Z"), &now));
    }

    #[test]
    fn same_day_uses_offset_of_now() {
        // 23:30 on the 10th in UTC+2.
        let deadline = utc("2024-01-10T21:30:00Z");
        assert!(!is_same_day(&deadline, &fixed("2024-01-11T00:30:00+02:00")));
        // The same instant is still the 10th in UTC.
        assert!(is_same_day(&deadline, &fixed("2024-01-10T22:30:00Z")));
    }

    #[rstest]
    #[case("2024-01-10T09:00:00+00:00", "2024-01-10T09:00:00Z")]
    #[case("2024-01-10T11:00:00+02:00", "2024-01-10T09:00:00Z")]
    #[case("2024-01-10 09:00:00", "2024-01-10T09:00:00Z")]
    #[case("2024-01-10T09:00:00.250", "2024-01-10T09:00:00.250Z")]
    #[case("2024-01-10", "2024-01-10T23:59:59Z")]
    fn parses_stored_formats(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_timestamp("deadline", input).unwrap(), utc(expected));
    }

    #[test]
    fn garbage_timestamp_names_field() {
        let err = parse_timestamp("completed_at", "yesterday").unwrap_err();
        assert!(err.to_string().contains("completed_at"));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn optional_empty_is_none() {
        assert_eq!(parse_optional_timestamp("completed_at", Some("")).unwrap(), None);
        assert_eq!(parse_optional_timestamp("completed_at", None).unwrap(), None);
    }

    #[rstest]
    #[case("2024-01-10T09:00", "2024-01-10T07:00:00Z")]
    #[case("2024-01-10 09:00", "2024-01-10T07:00:00Z")]
    #[case("2024-01-10", "2024-01-10T21:59:59Z")]
    #[case("2024-01-10T09:00:00Z", "2024-01-10T09:00:00Z")]
    fn user_input_is_read_in_viewer_offset(#[case] input: &str, #[case] expected: &str) {
        let offset = parse_utc_offset("+02:00").unwrap();
        assert_eq!(parse_user_input("deadline", input, offset).unwrap(), utc(expected));
    }

    #[rstest]
    #[case("+02:00", 7200)]
    #[case("-05:30", -19800)]
    #[case("Z", 0)]
    #[case("utc", 0)]
    fn parses_offsets(#[case] input: &str, #[case] seconds: i32) {
        assert_eq!(parse_utc_offset(input).unwrap().local_minus_utc(), seconds);
    }

    #[rstest]
    #[case("0200")]
    #[case("+25:00")]
    #[case("+02:xx")]
    #[case("")]
    fn rejects_bad_offsets(#[case] input: &str) {
        assert!(parse_utc_offset(input).is_err());
    }

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = fixed("2024-01-10T23:00:00Z");
        assert_eq!(FixedClock(instant).now(), instant);
    }

    #[test]
    fn system_clock_honours_fixed_offset() {
        let offset = parse_utc_offset("+05:00").unwrap();
        let now = SystemClock::new(Some(offset)).now();
        assert_eq!(now.offset().local_minus_utc(), 5 * 3600);
    }
}
