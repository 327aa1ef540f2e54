// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};

/// `instant + hours`, `None` only when leaving chrono's representable range.
pub fn add_hours(instant: DateTime<Utc>, hours: i64) -> Option<DateTime<Utc>> {
    instant.checked_add_signed(TimeDelta::try_hours(hours)?)
}

/// Start of the hour containing a wall-clock time (`H:00:00`).
pub fn hour_bucket(wall: NaiveDateTime) -> NaiveDateTime {
    let start = NaiveTime::from_hms_opt(wall.hour(), 0, 0).unwrap_or(NaiveTime::MIN);
    wall.date().and_time(start)
}

/// Hours between two instants as a fraction, positive when `to` is later.
pub fn fractional_hours(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 3_600_000.0
}
