// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;

/// "HH:mm:ss"
pub const TIME_PATTERN: &str = "%H:%M:%S";
/// "MMM dd, yyyy"
pub const DATE_PATTERN: &str = "%b %d, %Y";
/// "HH:mm"
pub const HOUR_MINUTE_PATTERN: &str = "%H:%M";
/// "HH"
pub const HOUR_PATTERN: &str = "%H";
/// "MMM dd"
pub const MONTH_DAY_PATTERN: &str = "%b %d";
/// Signed "±HH:mm"
pub const OFFSET_PATTERN: &str = "%:z";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("Invalid time zone: {zone_id}")]
    UnknownZone { zone_id: String },
    #[error("Instant out of range for time zone {zone_id}")]
    InvalidInstant { zone_id: String },
}

pub fn parse_zone(zone_id: &str) -> Result<Tz, OracleError> {
    zone_id.parse().map_err(|_| OracleError::UnknownZone {
        zone_id: zone_id.to_string(),
    })
}

/// Wall-clock view of a UTC instant in the given zone.
pub fn zoned_instant(at: DateTime<Utc>, zone_id: &str) -> Result<DateTime<Tz>, OracleError> {
    let tz = parse_zone(zone_id)?;
    Ok(at.with_timezone(&tz))
}

pub fn format_instant(instant: &DateTime<Tz>, pattern: &str) -> String {
    instant.format(pattern).to_string()
}

/// UTC offset of the zone at `at`, positive east of Greenwich.
pub fn offset_seconds(at: DateTime<Utc>, zone_id: &str) -> Result<i32, OracleError> {
    let local = zoned_instant(at, zone_id)?;
    Ok(local.offset().fix().local_minus_utc())
}

pub fn offset_label(at: DateTime<Utc>, zone_id: &str) -> Result<String, OracleError> {
    let local = zoned_instant(at, zone_id)?;
    Ok(format_instant(&local, OFFSET_PATTERN))
}
