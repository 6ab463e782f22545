use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::core::error::{Error, Result};

/// Parse an ISO-8601 timestamp into a UTC instant.
///
/// Accepts a trailing `Z`, an explicit offset, or no offset at all, in
/// which case the time is taken to be UTC. A bare date is midnight UTC.
pub fn parse_utc_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = value.parse::<NaiveDateTime>() {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = value.parse::<NaiveDate>() {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(Error::InvalidTimeFormat(value.to_string()))
}
