// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Utc};
use tracing::warn;
use tzline_timezone::TimezoneRecord;

use crate::{
    slot::{day_boundaries, generate_zone_hours, TimelineSlot},
    window::TimelineWindow,
};

/// A tracked zone paired with its slots for the active window.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineRow {
    pub record: TimezoneRecord,
    pub slots: Vec<TimelineSlot>,
}

impl TimelineRow {
    pub fn day_boundaries(&self) -> Vec<usize> {
        day_boundaries(&self.slots)
    }

    pub fn current_slot(&self) -> Option<usize> {
        self.slots.iter().position(TimelineSlot::is_current_hour)
    }
}

/// One row per record, in input order. A record whose zone cannot be resolved
/// gets an empty row instead of failing the whole timeline.
pub fn generate_timeline_rows(
    records: &[TimezoneRecord],
    base: DateTime<Utc>,
    window: TimelineWindow,
    now: DateTime<Utc>,
) -> Vec<TimelineRow> {
    records
        .iter()
        .map(|record| {
            let slots = generate_zone_hours(record.zone_id(), base, window, now).unwrap_or_else(|err| {
                warn!(zone_id = record.zone_id(), %err, "Unable to build timeline row");
                Vec::new()
            });
            TimelineRow {
                record: record.clone(),
                slots,
            }
        })
        .collect()
}
