// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Utc};
use tracing::warn;
use tzline_utils::time::add_hours;

/// Steps offered by the quick navigation buttons, in hours.
pub const QUICK_STEPS: [i64; 10] = [-24, -12, -6, -3, -1, 1, 3, 6, 12, 24];

const NOW_TOLERANCE_MILLIS: i64 = 60_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewingDirection {
    Now,
    Past,
    Future,
}

/// Move the base time by whole hours. Out of range moves leave it unchanged.
pub fn shift_base(base: DateTime<Utc>, hours: i64) -> DateTime<Utc> {
    add_hours(base, hours).unwrap_or_else(|| {
        warn!(%base, hours, "Base time shift out of range");
        base
    })
}

/// The base time counts as "now" while it is less than a minute away.
pub fn is_viewing_now(base: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (base - now).num_milliseconds().abs() < NOW_TOLERANCE_MILLIS
}

pub fn viewing_direction(base: DateTime<Utc>, now: DateTime<Utc>) -> ViewingDirection {
    if is_viewing_now(base, now) {
        ViewingDirection::Now
    } else if base > now {
        ViewingDirection::Future
    } else {
        ViewingDirection::Past
    }
}
