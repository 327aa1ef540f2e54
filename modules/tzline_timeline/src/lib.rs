// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Hourly timeline for a set of zones.
//!
//! Every function here is a pure function of its inputs: the zone list, the
//! base instant, the [`TimelineWindow`] and an explicit `now`. Each zone row is
//! laid out on its own wall clock, while the shared header follows the host
//! clock, so the viewer can line hours up across regions.

mod header;
mod marker;
mod row;
mod slot;
mod window;

pub use header::{generate_header_slots, HeaderSlot};
pub use marker::{current_time_offset, marker_slot_index};
pub use row::{generate_timeline_rows, TimelineRow};
pub use slot::{day_boundaries, generate_zone_hours, HourRelation, TimelineSlot};
pub use window::{TimelineWindow, DEFAULT_START_OFFSET_HOURS, DEFAULT_WINDOW_SIZE};
