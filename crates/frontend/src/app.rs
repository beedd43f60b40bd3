use crate::landing::context::LandingContext;
use crate::landing::page::LandingPage;
use crate::landing::simulation;
use chrono::{Duration, Utc};
use leptos::prelude::*;
use promo::countdown::CountdownTime;

#[component]
pub fn App() -> impl IntoView {
    // Rolling deadline: the drawing always sits a few days out from the
    // moment the page loads.
    let now = Utc::now();
    let deadline = now + Duration::days(3) + Duration::hours(14) + Duration::minutes(22);

    // Provide the live page state to the whole tree via context.
    let ctx = LandingContext::new(CountdownTime::until(deadline, now));
    provide_context(ctx);

    simulation::start_countdown(ctx);
    simulation::start_entry_feed(ctx);

    view! { <LandingPage /> }
}
