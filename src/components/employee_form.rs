//! Employee Form Component
//!
//! Name/email/role inputs. Adds a new employee, or updates the one picked
//! from the table when in edit mode.

use employee_core::DraftField;
use leptos::prelude::*;

use crate::context::AppContext;

/// Create/update form
#[component]
pub fn EmployeeForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let state = ctx.state;

    let busy = Memo::new(move |_| state.with(|s| s.busy()));
    let editing = Memo::new(move |_| state.with(|s| s.is_editing()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="employee-form" on:submit=on_submit>
            <DraftInput field=DraftField::Name placeholder="Name" autofocus=true />
            <DraftInput field=DraftField::Email placeholder="Email" />
            <DraftInput field=DraftField::Role placeholder="Role" />
            <button type="submit" class="submit-btn" disabled=move || busy.get()>
                {move || state.with(|s| s.submit_label())}
            </button>
            <Show when=move || editing.get()>
                <button
                    type="button"
                    class="cancel-btn"
                    disabled=move || busy.get()
                    on:click=move |_| ctx.cancel_edit()
                >
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}

/// Text input bound to one draft field
#[component]
fn DraftInput(
    field: DraftField,
    placeholder: &'static str,
    #[prop(optional)] autofocus: bool,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <input
            type="text"
            class=format!("draft-input {}-input", field.key())
            name=field.key()
            placeholder=placeholder
            autocomplete="off"
            autofocus=autofocus
            required=true
            prop:value=move || ctx.state.with(|s| s.draft.get(field).to_string())
            on:input=move |ev| ctx.edit_field(field, event_target_value(&ev))
        />
    }
}
