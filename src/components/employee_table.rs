//! Employee Table Component
//!
//! Lists the last fetched employees, one row each.

use leptos::prelude::*;

use crate::components::EmployeeRow;
use crate::context::AppContext;

#[component]
pub fn EmployeeTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let employees = Memo::new(move |_| ctx.state.with(|s| s.employees.clone()));

    view! {
        <table class="employee-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                // Keyed by the whole record so an edited row re-renders
                <For
                    each=move || employees.get()
                    key=|employee| employee.clone()
                    children=move |employee| view! { <EmployeeRow employee=employee /> }
                />
                <Show when=move || employees.with(|list| list.is_empty())>
                    <tr>
                        <td colspan="4" class="empty-row">"No employees yet."</td>
                    </tr>
                </Show>
            </tbody>
        </table>
    }
}
