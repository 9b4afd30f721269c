//! Dashboard State Store
//!
//! Hosts the reducer state in a Leptos signal so every dispatch re-renders
//! whatever read the affected fields.

use std::time::Duration;

use employee_core::dashboard::{StateCell, Timer};
use employee_core::state::{Action, DashboardState, Effect};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Reactive home of [`DashboardState`]
#[derive(Clone, Copy)]
pub struct SignalCell(RwSignal<DashboardState>);

impl SignalCell {
    pub fn new(state: DashboardState) -> Self {
        Self(RwSignal::new(state))
    }

    pub fn signal(&self) -> RwSignal<DashboardState> {
        self.0
    }
}

impl StateCell for SignalCell {
    fn dispatch(&self, action: Action) -> Vec<Effect> {
        // A disposed signal means the view is gone; nothing left to do.
        self.0.try_update(|state| state.reduce(action)).unwrap_or_default()
    }

    fn snapshot(&self) -> DashboardState {
        self.0.get_untracked()
    }
}

/// Browser `setTimeout` via gloo-timers
#[derive(Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}
