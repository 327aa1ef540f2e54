// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Plain-text rendering of a [`DashboardState`].
//!
//! Layout, left to right: a fixed label column, then one seven character cell
//! per visible hour. A cell is `[HH:mm]` for the current hour and ` HH:mm `
//! otherwise; `|` opens a cell where a new day starts and `☾` closes a night
//! hour of a zone row. When the terminal is narrower than the window, the
//! visible hours are centred on the "now" marker.

use std::fmt::Write;

use tzline_timezone::{format_instant, DATE_PATTERN};

use crate::{navigation::ViewingDirection, state::DashboardState};

const LABEL_WIDTH: usize = 34;
const CELL_WIDTH: usize = 7;

pub fn render(state: &DashboardState, max_width: Option<usize>) -> String {
    let size = state.window().size;
    let visible = visible_range(state, max_width);
    let mut out = String::with_capacity((LABEL_WIDTH + visible.len() * CELL_WIDTH + 1) * (state.rows().len() + 4));

    let host = state.host();
    let base_local = state.base_time().with_timezone(&host);
    let direction = match state.viewing_direction() {
        ViewingDirection::Now => "now",
        ViewingDirection::Past => "past time",
        ViewingDirection::Future => "future time",
    };
    let _ = writeln!(
        out,
        "{} - {} ({}), viewing {}",
        format_instant(&base_local, DATE_PATTERN),
        base_local.format("%H:%M"),
        host.name(),
        direction
    );

    // Date row
    let today = format_instant(&state.now().with_timezone(&host), DATE_PATTERN);
    let _ = write!(out, "{:<LABEL_WIDTH$}", today);
    for slot in &state.header()[visible.clone()] {
        match &slot.date_label {
            Some(label) => {
                let _ = write!(out, "|{:<width$}", label, width = CELL_WIDTH - 1);
            },
            None => out.push_str(&" ".repeat(CELL_WIDTH)),
        }
    }
    out.push('\n');

    // Hour row
    let _ = write!(out, "{:<LABEL_WIDTH$}", "Time Zones");
    for slot in &state.header()[visible.clone()] {
        let hour = [slot.formatted_label.as_str(), ":00"].concat();
        out.push_str(&cell(&hour, slot.is_current_hour, slot.is_new_day, false));
    }
    out.push('\n');

    // Marker row
    out.push_str(&" ".repeat(LABEL_WIDTH));
    let offset = state.marker_offset();
    if offset >= visible.start as f64 && offset < visible.end as f64 {
        let column = ((offset - visible.start as f64) * CELL_WIDTH as f64) as usize;
        out.push_str(&" ".repeat(column));
        out.push('v');
    }
    out.push('\n');

    if state.rows().is_empty() {
        out.push_str("No timezones added yet\n");
        return out;
    }

    for row in state.rows() {
        let record = &row.record;
        let mut label = format!(
            "{} {} {} {}",
            if record.is_night() { "☾" } else { "☀" },
            truncate(record.display_name(), 12),
            record.utc_offset_label(),
            record.formatted_time()
        );
        if record.is_dst() {
            label.push_str(" DST");
        }
        let _ = write!(out, "{:<LABEL_WIDTH$}", label);

        if row.slots.len() != size {
            let _ = write!(out, "unavailable ({})", record.zone_id());
        } else {
            let boundaries = row.day_boundaries();
            for (index, slot) in row.slots.iter().enumerate().skip(visible.start).take(visible.len()) {
                out.push_str(&cell(
                    &slot.formatted_label,
                    slot.is_current_hour(),
                    boundaries.contains(&index),
                    slot.is_night(),
                ));
            }
        }
        out.push('\n');
    }

    out
}

fn cell(label: &str, current: bool, new_day: bool, night: bool) -> String {
    let open = match (current, new_day) {
        (true, _) => '[',
        (false, true) => '|',
        (false, false) => ' ',
    };
    let close = match (current, night) {
        (true, _) => ']',
        (false, true) => '☾',
        (false, false) => ' ',
    };
    let mut cell = String::with_capacity(CELL_WIDTH);
    cell.push(open);
    cell.push_str(&format!("{:<width$}", label, width = CELL_WIDTH - 2));
    cell.push(close);
    cell
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let mut truncated: String = value.chars().take(max_chars - 1).collect();
        truncated.push('…');
        truncated
    }
}

/// Slot indices that fit in `max_width`, centred on the marker when it is in
/// view and pinned to the nearest edge otherwise.
fn visible_range(state: &DashboardState, max_width: Option<usize>) -> std::ops::Range<usize> {
    let size = state.header().len();
    let fits = max_width
        .map(|width| (width.saturating_sub(LABEL_WIDTH) / CELL_WIDTH).max(1))
        .unwrap_or(size)
        .min(size);
    if fits == size {
        return 0..size;
    }
    let centre = state.marker_offset().clamp(0.0, size as f64) as usize;
    let start = centre.saturating_sub(fits / 2).min(size - fits);
    start..start + fits
}
