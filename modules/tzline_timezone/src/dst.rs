// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Datelike, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::oracle::{offset_seconds, OracleError};

/// Whether `zone_id` is on daylight saving time at `at`.
///
/// The zone offset at `at` is compared against its offset at January 1st and
/// July 1st, both taken at midnight on the host clock in the host's calendar
/// year of `at`. The result is `true` when the current offset differs from
/// either sample. A zone that keeps one offset all year is never flagged.
///
/// Unknown zones are reported through `tracing` and yield `false`.
pub fn is_daylight_saving_time(at: DateTime<Utc>, zone_id: &str, host: Tz) -> bool {
    match sample_offsets(at, zone_id, host) {
        Ok(samples) => samples.current != samples.january || samples.current != samples.july,
        Err(err) => {
            warn!(zone_id, %err, "Unable to detect daylight saving time");
            false
        },
    }
}

struct OffsetSamples {
    january: i32,
    july: i32,
    current: i32,
}

fn sample_offsets(at: DateTime<Utc>, zone_id: &str, host: Tz) -> Result<OffsetSamples, OracleError> {
    let year = at.with_timezone(&host).year();
    let out_of_range = || OracleError::InvalidInstant {
        zone_id: zone_id.to_string(),
    };
    let january = host_midnight(host, year, 1).ok_or_else(out_of_range)?;
    let july = host_midnight(host, year, 7).ok_or_else(out_of_range)?;

    Ok(OffsetSamples {
        january: offset_seconds(january, zone_id)?,
        july: offset_seconds(july, zone_id)?,
        current: offset_seconds(at, zone_id)?,
    })
}

/// First instant of `month`/1 on the host clock. Hosts that skip midnight on a
/// transition day get the first valid wall time after it.
fn host_midnight(host: Tz, year: i32, month: u32) -> Option<DateTime<Utc>> {
    (0..3)
        .find_map(|hour| host.with_ymd_and_hms(year, month, 1, hour, 0, 0).earliest())
        .map(|local| local.with_timezone(&Utc))
}
