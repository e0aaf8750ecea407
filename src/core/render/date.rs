use chrono::{Datelike, Duration, NaiveDateTime};

use crate::error::{Error, Result};

/// Format of `createdAt` in the issue export.
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Naive ISO-8601 output, seconds precision.
const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// Offset applied to every timestamp.
const OFFSET_HOURS: i64 = 8;
/// Shifted timestamps must stay within years 1..=9999 (four digits).
const MAX_YEAR: i32 = 9999;
/// Zone suffix appended after the shifted timestamp.
pub const ZONE_SUFFIX: &str = "+08:00";

/// Shift a UTC `createdAt` value by eight hours and render it without a zone.
pub fn shift_to_local(created_at: &str) -> Result<String> {
    let utc = NaiveDateTime::parse_from_str(created_at, INPUT_FORMAT).map_err(|source| {
        Error::InvalidDate {
            value: created_at.to_string(),
            source,
        }
    })?;
    let local = utc
        .checked_add_signed(Duration::hours(OFFSET_HOURS))
        .filter(|local| (1..=MAX_YEAR).contains(&local.year()))
        .ok_or_else(|| Error::DateOutOfRange {
            value: created_at.to_string(),
        })?;
    Ok(local.format(OUTPUT_FORMAT).to_string())
}

/// Value of the front-matter `date` field. The suffix is appended as text,
/// not derived from the shift.
pub fn front_matter_date(created_at: &str) -> Result<String> {
    Ok(format!("{}{}", shift_to_local(created_at)?, ZONE_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_midnight_utc() {
        assert_eq!(
            front_matter_date("2021-06-01T00:00:00Z").unwrap(),
            "2021-06-01T08:00:00+08:00"
        );
    }

    #[test]
    fn rolls_over_day_month_and_year() {
        assert_eq!(shift_to_local("2020-12-31T20:30:15Z").unwrap(), "2021-01-01T04:30:15");
        assert_eq!(shift_to_local("2020-02-28T16:00:00Z").unwrap(), "2020-02-29T00:00:00");
    }

    #[test]
    fn shift_past_year_9999_is_an_error() {
        for value in ["9999-12-31T20:00:00Z", "+262142-12-31T20:00:00Z"] {
            assert!(
                matches!(front_matter_date(value), Err(Error::DateOutOfRange { .. })),
                "{value:?} should be out of range"
            );
        }
        assert_eq!(
            front_matter_date("9999-12-31T15:59:59Z").unwrap(),
            "9999-12-31T23:59:59+08:00"
        );
    }

    #[test]
    fn rejects_other_formats() {
        for bad in ["2021-06-01", "2021-06-01T00:00:00+00:00", "", "yesterday"] {
            assert!(
                matches!(shift_to_local(bad), Err(Error::InvalidDate { .. })),
                "{bad:?} should be rejected"
            );
        }
    }
}
