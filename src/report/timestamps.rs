//! Scan start/end reconstruction
//!
//! Reports carry the start as a spelled-out English timestamp
//! (`Sunday, February 26, 2017 12:17:09 PM`) and the elapsed time as a bare
//! clock reading (`00h:05m:00s`). The duration has no calendar part, so it is
//! read as a plain hours/minutes/seconds offset and added to the start.
//!
//! The leading weekday is not checked against the date: it is dropped before
//! parsing, so `Monday, February 26, 2017 ...` still yields February 26.

use chrono::{NaiveDateTime, TimeDelta, Weekday};

use crate::error::TimestampError;

/// Pattern of the `ScanStart` attribute after its `<Weekday>, ` prefix
pub const START_FORMAT: &str = "%B %d, %Y %I:%M:%S %p";

/// Pattern used for displaying scan start and end (`dd/MM/yy HH:mm`)
pub const DISPLAY_FORMAT: &str = "%d/%m/%y %H:%M";

/// Start and end of a scan, in the report's local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ScanWindow {
    pub fn display_start(&self) -> String {
        self.start.format(DISPLAY_FORMAT).to_string()
    }

    pub fn display_end(&self) -> String {
        self.end.format(DISPLAY_FORMAT).to_string()
    }
}

/// Combine the `ScanStart` and `ScanTime` attribute values into a window
pub fn reconstruct(
    scan_start: Option<&str>,
    scan_time: Option<&str>,
) -> Result<ScanWindow, TimestampError> {
    let scan_start = scan_start.ok_or(TimestampError::Missing("ScanStart"))?;
    let scan_time = scan_time.ok_or(TimestampError::Missing("ScanTime"))?;

    let start = parse_start(scan_start)?;
    let elapsed = parse_duration(scan_time)?;
    let end = start
        .checked_add_signed(elapsed)
        .ok_or(TimestampError::OutOfRange)?;

    Ok(ScanWindow { start, end })
}

/// Parse a `ScanStart` value such as `Sunday, February 26, 2017 12:17:09 PM`
pub fn parse_start(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = value.trim();
    let dated = match trimmed.split_once(", ") {
        Some((weekday, rest)) if is_weekday_name(weekday) => rest,
        _ => trimmed,
    };

    NaiveDateTime::parse_from_str(dated, START_FORMAT).map_err(|source| {
        TimestampError::InvalidStart {
            value: value.to_string(),
            source,
        }
    })
}

/// Parse a `ScanTime` value such as `01h:02m:03s` into an offset.
///
/// Hours are not capped at 23; minutes and seconds must be below 60.
pub fn parse_duration(value: &str) -> Result<TimeDelta, TimestampError> {
    let invalid = || TimestampError::InvalidDuration(value.to_string());

    let mut parts = value.trim().split(':');
    let hours = component(parts.next(), 'h').ok_or_else(invalid)?;
    let minutes = component(parts.next(), 'm').ok_or_else(invalid)?;
    let seconds = component(parts.next(), 's').ok_or_else(invalid)?;
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return Err(invalid());
    }

    Ok(TimeDelta::hours(i64::from(hours))
        + TimeDelta::minutes(i64::from(minutes))
        + TimeDelta::seconds(i64::from(seconds)))
}

fn is_weekday_name(word: &str) -> bool {
    word.parse::<Weekday>().is_ok()
}

fn component(part: Option<&str>, unit: char) -> Option<u32> {
    let digits = part?.strip_suffix(unit)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_start_pm() {
        let start = parse_start("Sunday, February 26, 2017 12:17:09 PM").unwrap();
        assert_eq!(start, at(2017, 2, 26, 12, 17, 9));
    }

    #[test]
    fn test_parse_start_am_and_single_digit_day() {
        let start = parse_start("Wednesday, March 1, 2017 9:05:00 AM").unwrap();
        assert_eq!(start, at(2017, 3, 1, 9, 5, 0));

        let midnight = parse_start("Wednesday, March 01, 2017 12:00:00 AM").unwrap();
        assert_eq!(midnight, at(2017, 3, 1, 0, 0, 0));
    }

    #[test]
    fn test_parse_start_ignores_wrong_weekday() {
        let start = parse_start("Monday, February 26, 2017 12:17:09 PM").unwrap();
        assert_eq!(start, at(2017, 2, 26, 12, 17, 9));

        let abbreviated = parse_start("Thu, February 26, 2017 12:17:09 PM").unwrap();
        assert_eq!(abbreviated, at(2017, 2, 26, 12, 17, 9));
    }

    #[test]
    fn test_parse_start_rejects_other_formats() {
        assert!(parse_start("2017-02-26T12:17:09").is_err());
        assert!(parse_start("").is_err());
        assert!(parse_start("Sunday, Febtober 26, 2017 12:17:09 PM").is_err());
        assert!(parse_start("Someday, February 26, 2017 12:17:09 PM").is_err());
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("00h:00m:30s").unwrap(), TimeDelta::seconds(30));
        assert_eq!(
            parse_duration("01h:02m:03s").unwrap(),
            TimeDelta::seconds(3600 + 120 + 3)
        );
        assert_eq!(parse_duration("26h:00m:00s").unwrap(), TimeDelta::hours(26));
    }

    #[test]
    fn test_parse_duration_rejects_malformed() {
        for bad in [
            "",
            "00:05:00",
            "00h:05m",
            "00h:05m:00s:00",
            "00h:60m:00s",
            "00h:00m:75s",
            "-1h:00m:00s",
            "aah:00m:00s",
            "00m:00h:00s",
        ] {
            assert!(parse_duration(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_reconstruct_adds_duration_only() {
        let window = reconstruct(
            Some("Sunday, February 26, 2017 12:17:09 PM"),
            Some("00h:00m:30s"),
        )
        .unwrap();

        assert_eq!(window.end - window.start, TimeDelta::seconds(30));
        assert_eq!(window.display_start(), "26/02/17 12:17");
        assert_eq!(window.display_end(), "26/02/17 12:17");
    }

    #[test]
    fn test_reconstruct_minute_granularity() {
        let window = reconstruct(
            Some("Sunday, February 26, 2017 12:17:09 PM"),
            Some("00h:05m:00s"),
        )
        .unwrap();

        assert_eq!(window.display_start(), "26/02/17 12:17");
        assert_eq!(window.display_end(), "26/02/17 12:22");
    }

    #[test]
    fn test_reconstruct_crosses_midnight() {
        let window = reconstruct(
            Some("Tuesday, February 28, 2017 11:30:00 PM"),
            Some("01h:00m:00s"),
        )
        .unwrap();

        assert_eq!(window.display_start(), "28/02/17 23:30");
        assert_eq!(window.display_end(), "01/03/17 00:30");
    }

    #[test]
    fn test_reconstruct_missing_fragments() {
        assert!(matches!(
            reconstruct(None, Some("00h:00m:30s")),
            Err(TimestampError::Missing("ScanStart"))
        ));
        assert!(matches!(
            reconstruct(Some("Sunday, February 26, 2017 12:17:09 PM"), None),
            Err(TimestampError::Missing("ScanTime"))
        ));
    }

    #[test]
    fn test_reconstruct_bad_duration() {
        let err = reconstruct(
            Some("Sunday, February 26, 2017 12:17:09 PM"),
            Some("30 seconds"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("30 seconds"));
    }
}
