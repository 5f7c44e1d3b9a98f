use time::{OffsetDateTime, UtcOffset, macros::format_description};

/// `2025-08-01T12:34:56.789012Z`
pub fn utc_timestamp(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.to_offset(UtcOffset::UTC).format(&format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
    ))
}

pub fn now_utc_timestamp() -> Result<String, time::error::Format> {
    utc_timestamp(OffsetDateTime::now_utc())
}
