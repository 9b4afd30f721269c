//! Delete Confirm Button Component
//!
//! Inline delete confirmation: "Delete" first, then a prompt with ✓/✗.

use employee_core::EmployeeId;
use leptos::prelude::*;

use crate::context::AppContext;

/// Inline delete confirmation button
///
/// The prompt state lives in the dashboard state (`pending_delete`), so
/// opening the prompt on one row closes it on any other.
///
/// # Arguments
/// * `id` - Employee deleted when the user confirms
#[component]
pub fn DeleteConfirmButton(id: EmployeeId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let confirming = {
        let id = id.clone();
        Memo::new(move |_| ctx.state.with(|s| s.pending_delete.as_ref() == Some(&id)))
    };

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="delete-btn"
                on:click={
                    let id = id.clone();
                    move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        ctx.request_delete(id.clone());
                    }
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete this employee?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.confirm_delete();
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.decline_delete();
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
