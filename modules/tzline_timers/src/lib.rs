// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{ops::ControlFlow, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use tokio::{
    select,
    sync::Notify,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::trace;
use tzline_utils::Clock;

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(60);

/// A recurring task that reads the clock once per period and hands that
/// instant to a callback.
///
/// The task belongs to the `Ticker`: dropping it (or calling [`Ticker::cancel`])
/// stops the schedule, so nothing keeps firing after its owner is gone. The
/// callback may also end the schedule by returning `ControlFlow::Break`.
pub struct Ticker {
    cancel: Arc<Notify>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking on the current tokio runtime. The first tick fires one
    /// `period` from now.
    pub fn spawn<F>(period: Duration, clock: Arc<dyn Clock>, mut on_tick: F) -> Self
    where
        F: FnMut(DateTime<Utc>) -> ControlFlow<()> + Send + 'static,
    {
        let cancel = Arc::new(Notify::new());
        let cancelled = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                select! {
                    _ = cancelled.notified() => {
                        trace!("Ticker cancelled");
                        break;
                    }
                    _ = interval.tick() => {}
                }

                let now = clock.now();
                trace!(%now, "Tick");
                if on_tick(now).is_break() {
                    trace!("Ticker stopped by its callback");
                    break;
                }
            }
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Stop the schedule. Calling it again is a no-op.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.cancel.notify_one();
            handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle
            .as_ref()
            .map(JoinHandle::is_finished)
            .unwrap_or(true)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
