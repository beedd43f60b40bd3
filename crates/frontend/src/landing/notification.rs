use crate::landing::context::LandingContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Toast shown for a few seconds whenever the simulator records an entry.
#[component]
pub fn EntryNotification() -> impl IntoView {
    let ctx = use_context::<LandingContext>().expect("LandingContext not found");

    view! {
        <div
            class="notification"
            class:notification--visible=move || ctx.notification_visible.get()
        >
            <div class="notification__card">
                {icon("bell")}
                <p>"New entry received!"</p>
            </div>
        </div>
    }
}
