//! Employee Dashboard App
//!
//! Single-page layout: banner, form, loading indicator, table.

use leptos::prelude::*;

use crate::components::{EmployeeForm, EmployeeTable, StatusBanner};
use crate::config::load_config;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let ctx = AppContext::new(&config);

    // Provide context to all children
    provide_context(ctx);

    // Load employees on mount
    Effect::new(move |_| {
        log::debug!("[APP] initial load");
        ctx.reload();
    });

    let busy = Memo::new(move |_| ctx.state.with(|s| s.busy()));
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <div class="page">
            <div class="dashboard-card">
                <h1>"Employee Dashboard"</h1>

                <StatusBanner />

                <EmployeeForm />

                <Show when=move || busy.get()>
                    <div class="loading">"Loading..."</div>
                </Show>

                <EmployeeTable />
            </div>
            <footer class="footer">
                {format!("© {} Employee Management App", year)}
            </footer>
        </div>
    }
}
