// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Utc};
use tzline_utils::time::add_hours;

pub const DEFAULT_WINDOW_SIZE: usize = 48;
pub const DEFAULT_START_OFFSET_HOURS: i64 = -24;

/// Which hours around the base time are shown: `size` consecutive hours
/// starting `start_offset_hours` from the base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineWindow {
    pub size: usize,
    pub start_offset_hours: i64,
}

impl Default for TimelineWindow {
    fn default() -> Self {
        Self {
            size: DEFAULT_WINDOW_SIZE,
            start_offset_hours: DEFAULT_START_OFFSET_HOURS,
        }
    }
}

impl TimelineWindow {
    pub fn new(size: usize, start_offset_hours: i64) -> Self {
        Self {
            size,
            start_offset_hours,
        }
    }

    /// Hour offsets from `start_offset_hours` to `start_offset_hours + size - 1`,
    /// `None` for any offset past the range of `i64`.
    pub fn offsets(&self) -> impl Iterator<Item = Option<i64>> {
        let start = self.start_offset_hours;
        (0..self.size).map(move |i| i64::try_from(i).ok().and_then(|i| start.checked_add(i)))
    }

    /// `base + offset` hours for every slot of the window, `None` where the
    /// instant is out of range.
    pub(crate) fn hour_instants(
        &self,
        base: DateTime<Utc>,
    ) -> impl Iterator<Item = Option<DateTime<Utc>>> {
        self.offsets()
            .map(move |offset| offset.and_then(|offset| add_hours(base, offset)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_default_window() {
        let window = TimelineWindow::default();
        assert_eq!(window, TimelineWindow::new(48, -24));
        let offsets: Vec<_> = window.offsets().collect();
        assert_eq!(offsets.len(), 48);
        assert_eq!(offsets.first(), Some(&Some(-24)));
        assert_eq!(offsets.last(), Some(&Some(23)));
    }

    #[test]
    fn test_offsets_any_start() {
        assert_eq!(
            TimelineWindow::new(3, 5).offsets().collect::<Vec<_>>(),
            vec![Some(5), Some(6), Some(7)]
        );
        assert_eq!(
            TimelineWindow::new(2, -100).offsets().collect::<Vec<_>>(),
            vec![Some(-100), Some(-99)]
        );
        assert_eq!(TimelineWindow::new(0, 0).offsets().count(), 0);
    }

    #[test]
    fn test_offsets_stop_at_i64_range() {
        assert_eq!(
            TimelineWindow::new(3, i64::MAX - 1).offsets().collect::<Vec<_>>(),
            vec![Some(i64::MAX - 1), Some(i64::MAX), None]
        );

        let base = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let instants: Vec<_> = TimelineWindow::new(2, i64::MIN).hour_instants(base).collect();
        assert_eq!(instants, vec![None, None]);
    }
}
