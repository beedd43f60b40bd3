use crate::landing::context::LandingContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// "Recent Entries" list fed by the entry simulator. The key includes the
/// displayed age: every tick also ages the surviving rows, and those need a
/// re-render too, not just the inserted one.
#[component]
pub fn ActivityFeed() -> impl IntoView {
    let ctx = use_context::<LandingContext>().expect("LandingContext not found");

    view! {
        <section class="activity-feed">
            <div class="activity-feed__header">
                <h2>{icon("sparkles")} " Recent Entries"</h2>
                <div class="activity-feed__hint">{icon("clock")} <span>"Updates every few seconds"</span></div>
            </div>
            <div class="activity-feed__list">
                <For
                    each=move || ctx.recent_entries.get()
                    key=|entry| (entry.id, entry.minutes_ago)
                    children=move |entry| {
                        view! {
                            <div class="activity-feed__row">
                                <div class="activity-feed__avatar">{icon("users")}</div>
                                <div class="activity-feed__who">
                                    <p class="activity-feed__name">{entry.user.clone()}</p>
                                    <p class="activity-feed__when">{entry.age_label()}</p>
                                </div>
                                <span class="activity-feed__amount">
                                    {format!("${}", entry.amount)}
                                </span>
                                {icon("chevron-right")}
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
