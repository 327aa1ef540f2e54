// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//zones
pub const ENV_TZLINE_ZONES: &str = "TZLINE_ZONES";
pub const ENV_TZLINE_HOST_TZ: &str = "TZLINE_HOST_TZ";

//timeline
pub const ENV_TZLINE_WINDOW_HOURS: &str = "TZLINE_WINDOW_HOURS";
pub const ENV_TZLINE_START_OFFSET: &str = "TZLINE_START_OFFSET";

//ticker
pub const ENV_TZLINE_TICK_SECS: &str = "TZLINE_TICK_SECS";
