// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
pub mod clock;
pub mod host;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use host::{host_zone, host_zone_from};
