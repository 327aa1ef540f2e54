// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use tracing::warn;
use tzline_timezone::{format_instant, HOUR_PATTERN, MONTH_DAY_PATTERN};
use tzline_utils::time::hour_bucket;

use crate::window::TimelineWindow;

/// One hour cell of the shared axis above the zone rows.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderSlot {
    pub hour_of_day: u32,
    /// Host-local "HH".
    pub formatted_label: String,
    /// `base + offset` hours, not tied to any zone.
    pub slot_instant: DateTime<Utc>,
    pub is_current_hour: bool,
    pub is_new_day: bool,
    /// Host-local "MMM dd", only on slots that start a new day.
    pub date_label: Option<String>,
}

/// Header cells for `window` around `base`, read off the host clock.
pub fn generate_header_slots(
    base: DateTime<Utc>,
    window: TimelineWindow,
    host: Tz,
    now: DateTime<Utc>,
) -> Vec<HeaderSlot> {
    let now_local = now.with_timezone(&host).naive_local();

    window
        .hour_instants(base)
        .enumerate()
        .filter_map(|(index, hour_instant)| {
            let Some(hour_instant) = hour_instant else {
                warn!(index, "Header hour out of range");
                return None;
            };
            let local = hour_instant.with_timezone(&host);
            let is_new_day = index > 0 && local.hour() == 0;
            Some(HeaderSlot {
                hour_of_day: local.hour(),
                formatted_label: format_instant(&local, HOUR_PATTERN),
                slot_instant: hour_instant,
                is_current_hour: hour_bucket(local.naive_local()) == hour_bucket(now_local),
                is_new_day,
                date_label: is_new_day.then(|| format_instant(&local, MONTH_DAY_PATTERN)),
            })
        })
        .collect()
}
