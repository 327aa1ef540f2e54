// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::{
    dst::is_daylight_saving_time,
    oracle::{format_instant, offset_label, zoned_instant, DATE_PATTERN, TIME_PATTERN},
};

static LAST_ID_MILLIS: AtomicI64 = AtomicI64::new(i64::MIN);

/// One tracked time zone and its cached display fields.
///
/// The derived fields only change through [`refresh`], which recomputes all of
/// them from the same instant.
#[derive(Clone, Debug, PartialEq)]
pub struct TimezoneRecord {
    id: String,
    display_name: String,
    zone_id: String,
    local_instant: Option<DateTime<Tz>>,
    formatted_time: String,
    formatted_date: String,
    utc_offset_label: String,
    is_dst: bool,
}

impl TimezoneRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// Wall-clock instant in the zone, `None` until a refresh has succeeded.
    pub fn local_instant(&self) -> Option<&DateTime<Tz>> {
        self.local_instant.as_ref()
    }

    pub fn formatted_time(&self) -> &str {
        &self.formatted_time
    }

    pub fn formatted_date(&self) -> &str {
        &self.formatted_date
    }

    pub fn utc_offset_label(&self) -> &str {
        &self.utc_offset_label
    }

    pub fn is_dst(&self) -> bool {
        self.is_dst
    }

    pub fn is_night(&self) -> bool {
        self.local_instant
            .map(|local| is_night_hour(local.hour()))
            .unwrap_or(false)
    }
}

/// Hours drawn with the moon icon: before 06:00 or from 20:00.
pub fn is_night_hour(hour: u32) -> bool {
    !(6..20).contains(&hour)
}

/// Start tracking `zone_id` under `display_name`, populated for `at`.
pub fn create(display_name: &str, zone_id: &str, at: DateTime<Utc>, host: Tz) -> TimezoneRecord {
    let id = [zone_id, "-", &next_id_millis(at.timestamp_millis()).to_string()].concat();
    debug!(id = %id, zone_id, "Adding timezone");

    let record = TimezoneRecord {
        id,
        display_name: display_name.to_string(),
        zone_id: zone_id.to_string(),
        local_instant: None,
        formatted_time: String::new(),
        formatted_date: String::new(),
        utc_offset_label: String::new(),
        is_dst: false,
    };
    refresh(&record, at, host)
}

/// Recompute the display fields of `record` for the UTC instant `at`.
///
/// When the zone cannot be resolved the failure is logged and a copy of the
/// input is returned unchanged.
pub fn refresh(record: &TimezoneRecord, at: DateTime<Utc>, host: Tz) -> TimezoneRecord {
    let zoned = zoned_instant(at, &record.zone_id)
        .and_then(|local| Ok((local, offset_label(at, &record.zone_id)?)));
    let (local, utc_offset_label) = match zoned {
        Ok(zoned) => zoned,
        Err(err) => {
            warn!(zone_id = %record.zone_id, %err, "Error updating time for timezone");
            return record.clone();
        },
    };

    TimezoneRecord {
        formatted_time: format_instant(&local, TIME_PATTERN),
        formatted_date: format_instant(&local, DATE_PATTERN),
        utc_offset_label,
        is_dst: is_daylight_saving_time(at, &record.zone_id, host),
        local_instant: Some(local),
        ..record.clone()
    }
}

/// `records` without the entry whose id is `id`. Unknown ids are not an error.
pub fn remove(records: &[TimezoneRecord], id: &str) -> Vec<TimezoneRecord> {
    records
        .iter()
        .filter(|record| record.id != id)
        .cloned()
        .collect()
}

/// `at_millis`, bumped past every value handed out before in this process.
fn next_id_millis(at_millis: i64) -> i64 {
    let issue = |last: i64| last.saturating_add(1).max(at_millis);
    match LAST_ID_MILLIS.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| Some(issue(last))) {
        Ok(last) | Err(last) => issue(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_millis_are_strictly_increasing() {
        let first = next_id_millis(1_000);
        let second = next_id_millis(1_000);
        let third = next_id_millis(0);
        assert!(second > first);
        assert!(third > second);

        let jump = next_id_millis(i64::MAX / 2);
        assert!(jump >= i64::MAX / 2);
        assert!(next_id_millis(i64::MAX / 2) > jump);
    }

    #[test]
    fn test_night_hours() {
        let night: Vec<u32> = (0..24).filter(|h| is_night_hour(*h)).collect();
        assert_eq!(night, vec![0, 1, 2, 3, 4, 5, 20, 21, 22, 23]);
    }
}
