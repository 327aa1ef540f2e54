// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::{create, is_daylight_saving_time, refresh, remove};

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn every_day_of(year: i32) -> impl Iterator<Item = DateTime<Utc>> {
    let start = at(year, 1, 1, 12);
    (0..366)
        .map(move |day| start + TimeDelta::days(day))
        .filter(move |instant| instant.format("%Y").to_string() == year.to_string())
}

#[test]
fn test_create_populates_fields() {
    let record = create("New York", "America/New_York", at(2024, 1, 15, 12), chrono_tz::UTC);
    assert!(record.id().starts_with("America/New_York-"));
    assert_eq!(record.display_name(), "New York");
    assert_eq!(record.zone_id(), "America/New_York");
    assert_eq!(record.formatted_time(), "07:00:00");
    assert_eq!(record.formatted_date(), "Jan 15, 2024");
    assert_eq!(record.utc_offset_label(), "-05:00");
    assert_eq!(
        record.local_instant().map(|local| local.to_rfc3339()),
        Some("2024-01-15T07:00:00-05:00".to_string())
    );
}

#[test]
fn test_refresh_is_idempotent() {
    let record = create("Sydney", "Australia/Sydney", at(2024, 1, 1, 0), chrono_tz::UTC);
    let instant = at(2024, 7, 4, 18);
    let once = refresh(&record, instant, chrono_tz::UTC);
    let twice = refresh(&once, instant, chrono_tz::UTC);
    assert_eq!(once, twice);
    assert_eq!(once.id(), record.id());
}

#[test]
fn test_create_then_refresh_does_not_drift() {
    let instant = at(2024, 3, 10, 6);
    let created = create("Chicago", "America/Chicago", instant, chrono_tz::UTC);
    assert_eq!(refresh(&created, instant, chrono_tz::UTC), created);
}

#[test]
fn test_refresh_unknown_zone_returns_input() {
    let record = create("Nowhere", "Invalid/Timezone", at(2024, 1, 1, 0), chrono_tz::UTC);
    assert_eq!(record.formatted_time(), "");
    assert!(record.local_instant().is_none());
    assert_eq!(refresh(&record, at(2024, 6, 1, 0), chrono_tz::UTC), record);
}

#[test]
fn test_refresh_failure_is_isolated() {
    let instant = at(2024, 1, 15, 12);
    let records = vec![
        create("Bad", "Invalid/Timezone", instant, chrono_tz::UTC),
        create("Tokyo", "Asia/Tokyo", instant, chrono_tz::UTC),
    ];
    let later = instant + TimeDelta::hours(1);
    let refreshed: Vec<_> = records
        .iter()
        .map(|record| refresh(record, later, chrono_tz::UTC))
        .collect();
    assert_eq!(refreshed[0], records[0]);
    assert_eq!(refreshed[1].formatted_time(), "22:00:00");
}

#[test]
fn test_remove() {
    let instant = at(2024, 1, 15, 12);
    let records = vec![
        create("Tokyo", "Asia/Tokyo", instant, chrono_tz::UTC),
        create("Paris", "Europe/Paris", instant, chrono_tz::UTC),
        create("Tokyo again", "Asia/Tokyo", instant, chrono_tz::UTC),
    ];
    assert_ne!(records[0].id(), records[2].id());

    let without_paris = remove(&records, records[1].id());
    assert_eq!(without_paris, vec![records[0].clone(), records[2].clone()]);

    assert_eq!(remove(&records, "Asia/Tokyo-0"), records);
    assert!(remove(&[], "anything").is_empty());
}

#[test]
fn test_constant_offset_zone_is_never_dst() {
    for zone in ["Asia/Tokyo", "UTC", "Asia/Kolkata", "Etc/GMT+5"] {
        for instant in every_day_of(2024) {
            assert!(
                !is_daylight_saving_time(instant, zone, chrono_tz::UTC),
                "{zone} flagged at {instant}"
            );
        }
    }
}

#[test]
fn test_northern_zone_is_dst_in_summer() {
    for day in 1..=31 {
        assert!(is_daylight_saving_time(at(2024, 7, day, 12), "America/New_York", chrono_tz::UTC));
    }
    let record = create("London", "Europe/London", at(2024, 8, 1, 12), chrono_tz::UTC);
    assert!(record.is_dst());
    assert_eq!(record.utc_offset_label(), "+01:00");
}

#[test]
fn test_two_offset_zone_differs_from_one_sample_in_winter() {
    // Current == January offset but != July offset, and the predicate is
    // "differs from either sample", so winter instants are flagged too.
    assert!(is_daylight_saving_time(at(2024, 1, 15, 12), "America/New_York", chrono_tz::UTC));
    assert!(is_daylight_saving_time(at(2024, 12, 15, 12), "Europe/Berlin", chrono_tz::UTC));
}
