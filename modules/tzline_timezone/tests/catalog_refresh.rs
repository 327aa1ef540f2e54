// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Every catalog zone refreshes cleanly and agrees with chrono-tz.

use chrono::{Offset, TimeZone, Utc};
use chrono_tz::Tz;
use tzline_timezone::{common_timezones, create, default_display_name};

fn expected_offset_minutes(zone_id: &str, at: chrono::DateTime<Utc>) -> i32 {
    let tz: Tz = zone_id.parse().unwrap();
    at.with_timezone(&tz).offset().fix().local_minus_utc() / 60
}

fn label_minutes(label: &str) -> i32 {
    let sign = if label.starts_with('-') { -1 } else { 1 };
    let hours: i32 = label[1..3].parse().unwrap();
    let minutes: i32 = label[4..6].parse().unwrap();
    sign * (hours * 60 + minutes)
}

#[test]
fn test_catalog_zones_refresh() {
    let instants = [
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap(),
    ];
    for entry in common_timezones() {
        for at in instants {
            let name = default_display_name(entry.zone_id, None);
            let record = create(&name, entry.zone_id, at, chrono_tz::UTC);
            assert!(record.local_instant().is_some(), "{}", entry.zone_id);
            assert_eq!(record.formatted_time().len(), 8);
            assert_eq!(
                label_minutes(record.utc_offset_label()),
                expected_offset_minutes(entry.zone_id, at),
                "{} at {}",
                entry.zone_id,
                at
            );
        }
    }
}
