// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;
use tzline_timeline::{
    current_time_offset, generate_header_slots, generate_timeline_rows, marker_slot_index,
    HeaderSlot, TimelineRow, TimelineWindow,
};
use tzline_timezone::{create, refresh, remove, TimezoneRecord};

use crate::{
    config::DashboardConfig,
    navigation::{self, ViewingDirection},
};

pub const LOCAL_DISPLAY_NAME: &str = "Local";

/// Everything the dashboard shows, computed for one captured `now`.
///
/// A state is never edited: each transition builds a new one, and the rows,
/// header and marker are always derived from the same `now` as the records.
#[derive(Clone, Debug)]
pub struct DashboardState {
    zones: Vec<TimezoneRecord>,
    base_time: DateTime<Utc>,
    window: TimelineWindow,
    host: Tz,
    now: DateTime<Utc>,
    rows: Vec<TimelineRow>,
    header: Vec<HeaderSlot>,
    marker_offset: f64,
}

impl DashboardState {
    pub fn new(
        zones: Vec<TimezoneRecord>,
        base_time: DateTime<Utc>,
        window: TimelineWindow,
        host: Tz,
        now: DateTime<Utc>,
    ) -> Self {
        let rows = generate_timeline_rows(&zones, base_time, window, now);
        let header = generate_header_slots(base_time, window, host, now);
        let marker_offset = current_time_offset(base_time, now, window);
        Self {
            zones,
            base_time,
            window,
            host,
            now,
            rows,
            header,
            marker_offset,
        }
    }

    /// Initial state: the host zone as "Local", then the configured zones,
    /// with the base time at `now`.
    pub fn mount(config: &DashboardConfig, now: DateTime<Utc>) -> Self {
        let zones = std::iter::once(create(LOCAL_DISPLAY_NAME, config.host.name(), now, config.host))
            .chain(
                config
                    .zones
                    .iter()
                    .map(|zone| create(&zone.display_name, &zone.zone_id, now, config.host)),
            )
            .collect();
        Self::new(zones, now, config.window, config.host, now)
    }

    fn rebuild(&self, zones: Vec<TimezoneRecord>, base_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::new(zones, base_time, self.window, self.host, now)
    }

    pub fn add_zone(&self, display_name: &str, zone_id: &str, now: DateTime<Utc>) -> Self {
        let mut zones = self.zones.clone();
        zones.push(create(display_name, zone_id, now, self.host));
        self.rebuild(zones, self.base_time, now)
    }

    /// Drop the zone `id`. The last remaining zone is kept.
    pub fn remove_zone(&self, id: &str, now: DateTime<Utc>) -> Self {
        if !self.can_remove() {
            debug!(id, "Keeping the last timezone");
            return self.rebuild(self.zones.clone(), self.base_time, now);
        }
        self.rebuild(remove(&self.zones, id), self.base_time, now)
    }

    pub fn set_base_time(&self, base_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        self.rebuild(self.zones.clone(), base_time, now)
    }

    pub fn shift_base(&self, hours: i64, now: DateTime<Utc>) -> Self {
        self.set_base_time(navigation::shift_base(self.base_time, hours), now)
    }

    pub fn reset_to_now(&self, now: DateTime<Utc>) -> Self {
        self.set_base_time(now, now)
    }

    /// Periodic refresh: every record and the marker move to the same `now`.
    pub fn tick(&self, now: DateTime<Utc>) -> Self {
        debug!(%now, zones = self.zones.len(), "Refreshing dashboard");
        let zones = self
            .zones
            .iter()
            .map(|zone| refresh(zone, now, self.host))
            .collect();
        self.rebuild(zones, self.base_time, now)
    }

    pub fn zones(&self) -> &[TimezoneRecord] {
        &self.zones
    }

    pub fn base_time(&self) -> DateTime<Utc> {
        self.base_time
    }

    pub fn window(&self) -> TimelineWindow {
        self.window
    }

    pub fn host(&self) -> Tz {
        self.host
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn rows(&self) -> &[TimelineRow] {
        &self.rows
    }

    pub fn header(&self) -> &[HeaderSlot] {
        &self.header
    }

    /// Marker position in slot widths from the left edge of the window.
    pub fn marker_offset(&self) -> f64 {
        self.marker_offset
    }

    pub fn marker_slot(&self) -> Option<usize> {
        marker_slot_index(self.base_time, self.now, self.window)
    }

    pub fn viewing_direction(&self) -> ViewingDirection {
        navigation::viewing_direction(self.base_time, self.now)
    }

    /// Removing a zone is offered only while more than one is tracked.
    pub fn can_remove(&self) -> bool {
        self.zones.len() > 1
    }
}
