// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod dashboard;
pub mod environment;
pub mod navigation;
pub mod render;
pub mod state;

pub use config::{DashboardConfig, ZoneSpec};
pub use dashboard::Dashboard;
pub use navigation::ViewingDirection;
pub use state::DashboardState;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
