// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;
use tzline_timezone::{
    format_instant, is_night_hour, parse_zone, OracleError, HOUR_MINUTE_PATTERN,
};
use tzline_utils::time::hour_bucket;

use crate::window::TimelineWindow;

/// Where a slot's hour bucket sits relative to the hour bucket of "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HourRelation {
    Past,
    Current,
    Future,
}

impl HourRelation {
    /// Compare two wall-clock times by the hour they fall in.
    pub fn classify(slot: NaiveDateTime, now: NaiveDateTime) -> Self {
        match hour_bucket(slot).cmp(&hour_bucket(now)) {
            Ordering::Less => HourRelation::Past,
            Ordering::Equal => HourRelation::Current,
            Ordering::Greater => HourRelation::Future,
        }
    }
}

/// One hour cell of a zone row.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineSlot {
    pub hour_of_day: u32,
    /// Zone-local "HH:mm".
    pub formatted_label: String,
    pub slot_instant: DateTime<Tz>,
    pub relation: HourRelation,
}

impl TimelineSlot {
    pub fn is_current_hour(&self) -> bool {
        self.relation == HourRelation::Current
    }

    pub fn is_past_hour(&self) -> bool {
        self.relation == HourRelation::Past
    }

    pub fn is_future_hour(&self) -> bool {
        self.relation == HourRelation::Future
    }

    pub fn is_night(&self) -> bool {
        is_night_hour(self.hour_of_day)
    }

    /// Whether the slot at `index` of its row opens a new zone-local day.
    pub fn is_day_start(&self, index: usize) -> bool {
        index > 0 && self.hour_of_day == 0
    }
}

/// The hourly slots of one zone for `window` around `base`.
///
/// The result always holds `window.size` slots in chronological order. Each
/// slot is classified against `now` seen through the same zone.
pub fn generate_zone_hours(
    zone_id: &str,
    base: DateTime<Utc>,
    window: TimelineWindow,
    now: DateTime<Utc>,
) -> Result<Vec<TimelineSlot>, OracleError> {
    let tz = parse_zone(zone_id)?;
    let now_local = now.with_timezone(&tz).naive_local();

    window
        .hour_instants(base)
        .map(|hour_instant| -> Result<TimelineSlot, OracleError> {
            let hour_instant = hour_instant.ok_or_else(|| OracleError::InvalidInstant {
                zone_id: zone_id.to_string(),
            })?;
            let local = hour_instant.with_timezone(&tz);
            Ok(TimelineSlot {
                hour_of_day: local.hour(),
                formatted_label: format_instant(&local, HOUR_MINUTE_PATTERN),
                relation: HourRelation::classify(local.naive_local(), now_local),
                slot_instant: local,
            })
        })
        .collect()
}

/// Indices where a new zone-local day starts, the first slot excluded.
pub fn day_boundaries(slots: &[TimelineSlot]) -> Vec<usize> {
    slots
        .iter()
        .enumerate()
        .filter(|(index, slot)| slot.is_day_start(*index))
        .map(|(index, _)| index)
        .collect()
}
