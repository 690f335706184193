use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate};

pub const MS_IN_S: i64 = 1000;
pub const MS_IN_D: i64 = MS_IN_S * 60 * 60 * 24;

/// Date format used by the price CSVs and for axis labels.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date into epoch milliseconds at midnight UTC.
pub fn date_string_to_epoch_ms(raw: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .with_context(|| format!("invalid date '{}'", raw))?;
    let dt = date
        .and_hms_opt(0, 0, 0)
        .context("date out of range")?
        .and_utc();
    Ok(dt.timestamp_millis())
}

// Used for display purposes
pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => format!("{}", dt.format(DATE_FORMAT)),
        None => String::new(),
    }
}

/// Whole days since epoch as the plot x unit (keeps daily candles evenly spaced).
pub fn epoch_ms_to_days(epoch_ms: i64) -> f64 {
    epoch_ms as f64 / MS_IN_D as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_roundtrip() {
        let ms = date_string_to_epoch_ms("2024-03-15").unwrap();
        assert_eq!(epoch_ms_to_date_string(ms), "2024-03-15");
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(date_string_to_epoch_ms("15/03/2024").is_err());
        assert!(date_string_to_epoch_ms("not-a-date").is_err());
    }

    #[test]
    fn day_unit_is_whole_for_midnight_timestamps() {
        let ms = date_string_to_epoch_ms("2024-01-02").unwrap();
        let days = epoch_ms_to_days(ms);
        assert_eq!(days.fract(), 0.0);
    }
}
