// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{env, time::Duration};

use chrono_tz::Tz;
use tracing::warn;
use tzline_timeline::{TimelineWindow, DEFAULT_START_OFFSET_HOURS, DEFAULT_WINDOW_SIZE};
use tzline_timers::DEFAULT_TICK_PERIOD;
use tzline_timezone::default_display_name;
use tzline_utils::{host_zone, host_zone_from};

use crate::environment;

const MAX_SENSIBLE_WINDOW_HOURS: usize = 24 * 14;

/// A zone to add when the dashboard is mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneSpec {
    pub display_name: String,
    pub zone_id: String,
}

impl ZoneSpec {
    /// Parse `Zone/Id` or `Label=Zone/Id`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let (custom, zone_id) = match value.split_once('=') {
            Some((label, zone_id)) => (Some(label), zone_id.trim()),
            None => (None, value),
        };
        if zone_id.is_empty() {
            return None;
        }
        Some(Self {
            display_name: default_display_name(zone_id, custom),
            zone_id: zone_id.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub zones: Vec<ZoneSpec>,
    pub window: TimelineWindow,
    pub tick_period: Duration,
    pub host: Tz,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            zones: Vec::new(),
            window: TimelineWindow::default(),
            tick_period: DEFAULT_TICK_PERIOD,
            host: chrono_tz::UTC,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());
        if env::var_os(environment::ENV_TZLINE_HOST_TZ).is_none() {
            config.host = host_zone();
        }
        config
    }

    /// Build from any key lookup; the host zone stays UTC unless
    /// `TZLINE_HOST_TZ` is present.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let zones = lookup(environment::ENV_TZLINE_ZONES)
            .map(|value| value.split(',').filter_map(ZoneSpec::parse).collect())
            .unwrap_or_default();

        let mut size = parse_or(&lookup, environment::ENV_TZLINE_WINDOW_HOURS, DEFAULT_WINDOW_SIZE);
        if size == 0 {
            warn!(
                "\"{}\" must be at least 1, using {}",
                environment::ENV_TZLINE_WINDOW_HOURS,
                DEFAULT_WINDOW_SIZE
            );
            size = DEFAULT_WINDOW_SIZE;
        } else if size > MAX_SENSIBLE_WINDOW_HOURS {
            warn!(
                "\"{}\" is {} hours, rendering may be slow",
                environment::ENV_TZLINE_WINDOW_HOURS,
                size
            );
        }
        let start_offset_hours = parse_or(
            &lookup,
            environment::ENV_TZLINE_START_OFFSET,
            DEFAULT_START_OFFSET_HOURS,
        );

        let tick_secs = parse_or(
            &lookup,
            environment::ENV_TZLINE_TICK_SECS,
            DEFAULT_TICK_PERIOD.as_secs(),
        )
        .max(1);

        let host = lookup(environment::ENV_TZLINE_HOST_TZ)
            .map(|name| host_zone_from(Some(&name)))
            .unwrap_or(chrono_tz::UTC);

        Self {
            zones,
            window: TimelineWindow::new(size, start_offset_hours),
            tick_period: Duration::from_secs(tick_secs),
            host,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(value) = lookup(key) else {
        return default;
    };
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!("Invalid value \"{}\" for \"{}\", using default", value, key);
            default
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.window, TimelineWindow::new(48, -24));
        assert_eq!(config.tick_period, Duration::from_secs(60));
    }

    #[test]
    fn test_all_values() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("TZLINE_ZONES", "Asia/Tokyo, Office=Europe/Paris,,Etc/GMT+5"),
            ("TZLINE_WINDOW_HOURS", "24"),
            ("TZLINE_START_OFFSET", "-12"),
            ("TZLINE_TICK_SECS", "0"),
            ("TZLINE_HOST_TZ", "America/Denver"),
        ]));
        assert_eq!(
            config.zones,
            vec![
                ZoneSpec {
                    display_name: "Tokyo".to_string(),
                    zone_id: "Asia/Tokyo".to_string()
                },
                ZoneSpec {
                    display_name: "Office".to_string(),
                    zone_id: "Europe/Paris".to_string()
                },
                ZoneSpec {
                    display_name: "Etc/GMT+5".to_string(),
                    zone_id: "Etc/GMT+5".to_string()
                },
            ]
        );
        assert_eq!(config.window, TimelineWindow::new(24, -12));
        assert_eq!(config.tick_period, Duration::from_secs(1));
        assert_eq!(config.host, chrono_tz::America::Denver);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("TZLINE_WINDOW_HOURS", "0"),
            ("TZLINE_START_OFFSET", "yesterday"),
            ("TZLINE_TICK_SECS", "-5"),
            ("TZLINE_HOST_TZ", "Nowhere/Special"),
        ]));
        assert_eq!(config.window, TimelineWindow::default());
        assert_eq!(config.tick_period, DEFAULT_TICK_PERIOD);
        assert_eq!(config.host, chrono_tz::UTC);
    }

    #[test]
    fn test_zone_spec_parse() {
        assert_eq!(ZoneSpec::parse("  "), None);
        assert_eq!(ZoneSpec::parse("Home="), None);
        assert_eq!(
            ZoneSpec::parse("=Asia/Seoul"),
            Some(ZoneSpec {
                display_name: "Seoul".to_string(),
                zone_id: "Asia/Seoul".to_string()
            })
        );
    }
}
