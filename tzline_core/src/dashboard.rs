// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{
    ops::ControlFlow,
    sync::{Arc, Weak},
};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::trace;
use tzline_timers::Ticker;
use tzline_utils::Clock;

use crate::{config::DashboardConfig, state::DashboardState};

type StateSender = watch::Sender<Arc<DashboardState>>;

/// Owner of the live dashboard state and of the ticker that refreshes it.
///
/// Every change replaces the published [`DashboardState`] as a whole.
/// Dropping the dashboard cancels the ticker.
pub struct Dashboard {
    state: Arc<StateSender>,
    clock: Arc<dyn Clock>,
    ticker: Ticker,
}

impl Dashboard {
    /// Mount the dashboard and start ticking. Must be called inside a tokio
    /// runtime.
    pub fn start(config: &DashboardConfig, clock: Arc<dyn Clock>) -> Self {
        let initial = DashboardState::mount(config, clock.now());
        let (sender, _) = watch::channel(Arc::new(initial));
        let state = Arc::new(sender);

        let weak = Arc::downgrade(&state);
        let ticker = Ticker::spawn(config.tick_period, clock.clone(), move |now| {
            apply_tick(&weak, now)
        });

        Self {
            state,
            clock,
            ticker,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<DashboardState>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> Arc<DashboardState> {
        self.state.borrow().clone()
    }

    pub fn add_zone(&self, display_name: &str, zone_id: &str) {
        self.update(|state, now| state.add_zone(display_name, zone_id, now));
    }

    pub fn remove_zone(&self, id: &str) {
        self.update(|state, now| state.remove_zone(id, now));
    }

    pub fn set_base_time(&self, base_time: DateTime<Utc>) {
        self.update(|state, now| state.set_base_time(base_time, now));
    }

    pub fn shift_base(&self, hours: i64) {
        self.update(|state, now| state.shift_base(hours, now));
    }

    pub fn reset_to_now(&self) {
        self.update(|state, now| state.reset_to_now(now));
    }

    /// Stop the periodic refresh; the state stays readable.
    pub fn stop(&mut self) {
        self.ticker.cancel();
    }

    pub fn is_ticking(&self) -> bool {
        !self.ticker.is_finished()
    }

    fn update<F>(&self, transition: F)
    where
        F: FnOnce(&DashboardState, DateTime<Utc>) -> DashboardState,
    {
        let now = self.clock.now();
        self.state
            .send_modify(|state| *state = Arc::new(transition(state, now)));
    }
}

fn apply_tick(state: &Weak<StateSender>, now: DateTime<Utc>) -> ControlFlow<()> {
    let Some(state) = state.upgrade() else {
        trace!("Dashboard gone, stopping ticker");
        return ControlFlow::Break(());
    };
    state.send_modify(|current| *current = Arc::new(current.tick(now)));
    ControlFlow::Continue(())
}
