//! Status Banner Component
//!
//! Shows the current transient message; it disappears when the dashboard
//! clears it.

use employee_core::MessageKind;
use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let message = Memo::new(move |_| ctx.state.with(|s| s.message.clone()));

    move || {
        message.get().map(|message| {
            let class = match message.kind {
                MessageKind::Info => "status-banner",
                MessageKind::Error => "status-banner error",
            };
            view! { <div class=class role="status">{message.text}</div> }
        })
    }
}
