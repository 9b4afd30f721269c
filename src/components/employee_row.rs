//! Employee Row Component

use employee_core::Employee;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;

/// A single employee row with edit and delete actions
#[component]
pub fn EmployeeRow(employee: Employee) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = employee.id.clone();
    let is_edit_target = {
        let id = id.clone();
        Memo::new(move |_| ctx.state.with(|s| s.editing.as_ref().is_some_and(|e| e.id == id)))
    };
    let name = employee.name.clone();
    let email = employee.email.clone();
    let role = employee.role.clone();

    view! {
        <tr class=move || if is_edit_target.get() { "employee-row editing" } else { "employee-row" }>
            <td class="name-cell">{name}</td>
            <td>{email}</td>
            <td>{role}</td>
            <td class="actions-cell">
                <button class="edit-btn" on:click=move |_| ctx.begin_edit(employee.clone())>
                    "Edit"
                </button>
                <DeleteConfirmButton id=id />
            </td>
        </tr>
    }
}
