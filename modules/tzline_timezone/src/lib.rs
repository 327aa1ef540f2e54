// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Tracked time zones.
//!
//! A [`TimezoneRecord`] caches the display fields of one IANA zone (wall-clock
//! time, date, UTC offset and DST flag) for the instant it was last refreshed.
//! Records are values: [`create`], [`refresh`] and [`remove`] never mutate their
//! input and never keep state of their own, so the caller owns the list.
//!
//! Zone rules come from the compiled `chrono-tz` database. A zone id it does
//! not know is not an error at this layer: [`refresh`] logs it and hands the
//! record back untouched, so one bad entry never stops the others.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tzline_timezone::create;
//!
//! let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
//! let tokyo = create("Tokyo", "Asia/Tokyo", at, chrono_tz::UTC);
//!
//! assert_eq!(tokyo.formatted_time(), "21:00:00");
//! assert_eq!(tokyo.formatted_date(), "Jan 15, 2024");
//! assert_eq!(tokyo.utc_offset_label(), "+09:00");
//! assert!(!tokyo.is_dst());
//! ```

mod catalog;
mod dst;
mod oracle;
mod record;

pub use catalog::{
    common_timezones, default_display_name, grouped, lookup, search, CatalogEntry,
};
pub use dst::is_daylight_saving_time;
pub use oracle::{
    format_instant, offset_label, offset_seconds, parse_zone, zoned_instant, OracleError,
    DATE_PATTERN, HOUR_MINUTE_PATTERN, HOUR_PATTERN, MONTH_DAY_PATTERN, OFFSET_PATTERN,
    TIME_PATTERN,
};
pub use record::{create, is_night_hour, refresh, remove, TimezoneRecord};

#[cfg(test)]
mod tests;
