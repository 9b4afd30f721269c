//! Application Context
//!
//! Shared state provided via Leptos Context API.

use employee_core::{Dashboard, DashboardConfig, DashboardState, DraftField, Employee, EmployeeId, HttpBackend};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{GlooTimer, SignalCell};

pub type AppDashboard = Dashboard<HttpBackend, SignalCell, GlooTimer>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Dashboard state - read only, mutate through the methods below
    pub state: RwSignal<DashboardState>,
    /// Controller; holds `Rc`s so it stays on the local thread
    dashboard: StoredValue<AppDashboard, LocalStorage>,
}

impl AppContext {
    pub fn new(config: &DashboardConfig) -> Self {
        let cell = SignalCell::new(DashboardState::new(config.load_failure));
        let dashboard = Dashboard::new(HttpBackend::new(config), cell, GlooTimer, config);
        Self {
            state: cell.signal(),
            dashboard: StoredValue::new_local(dashboard),
        }
    }

    fn dashboard(&self) -> AppDashboard {
        self.dashboard.get_value()
    }

    /// Trigger a reload of the employee list
    pub fn reload(&self) {
        let dashboard = self.dashboard();
        spawn_local(async move { dashboard.load().await });
    }

    /// Validate the form and send it
    pub fn submit(&self) {
        let dashboard = self.dashboard();
        spawn_local(async move { dashboard.submit().await });
    }

    pub fn edit_field(&self, field: DraftField, value: String) {
        self.dashboard().edit_field(field, value);
    }

    pub fn begin_edit(&self, employee: Employee) {
        self.dashboard().begin_edit(employee);
    }

    pub fn cancel_edit(&self) {
        self.dashboard().cancel_edit();
    }

    /// Show the delete prompt for a row
    pub fn request_delete(&self, id: EmployeeId) {
        self.dashboard().request_delete(id);
    }

    pub fn decline_delete(&self) {
        self.dashboard().decline_delete();
    }

    pub fn confirm_delete(&self) {
        let dashboard = self.dashboard();
        spawn_local(async move { dashboard.confirm_delete().await });
    }
}
