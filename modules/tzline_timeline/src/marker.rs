// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Utc};
use tzline_utils::time::fractional_hours;

use crate::window::TimelineWindow;

/// Position of the "now" marker in slot widths from the left edge of the
/// window. Values outside `0..window.size` lie off screen.
pub fn current_time_offset(base: DateTime<Utc>, now: DateTime<Utc>, window: TimelineWindow) -> f64 {
    fractional_hours(base, now) - window.start_offset_hours as f64
}

/// Slot the marker falls in, if it is inside the window.
pub fn marker_slot_index(base: DateTime<Utc>, now: DateTime<Utc>, window: TimelineWindow) -> Option<usize> {
    let offset = current_time_offset(base, now, window);
    (offset >= 0.0 && offset < window.size as f64).then(|| offset.floor() as usize)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};

    use super::*;

    #[test]
    fn test_marker_at_base_is_window_middle() {
        let base = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let window = TimelineWindow::default();
        assert_eq!(current_time_offset(base, base, window), 24.0);
        assert_eq!(marker_slot_index(base, base, window), Some(24));

        let now = base + TimeDelta::minutes(90);
        assert_eq!(current_time_offset(base, now, window), 25.5);
        assert_eq!(marker_slot_index(base, now, window), Some(25));
    }

    #[test]
    fn test_marker_off_screen() {
        let base = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let window = TimelineWindow::default();
        assert_eq!(marker_slot_index(base, base + TimeDelta::hours(24), window), None);
        assert_eq!(marker_slot_index(base, base - TimeDelta::minutes(24 * 60 + 1), window), None);
        assert_eq!(marker_slot_index(base, base - TimeDelta::hours(24), window), Some(0));
    }
}
