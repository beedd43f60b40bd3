use crate::landing::context::LandingContext;
use crate::shared::format::{format_thousands, pad2};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// One unit of the countdown display (value + unit label).
#[component]
fn TimeBlock(#[prop(into)] value: Signal<u32>, label: &'static str) -> impl IntoView {
    view! {
        <div class="time-block">
            <span class="time-block__value">{move || pad2(value.get())}</span>
            <span class="time-block__label">{label}</span>
        </div>
    }
}

/// Top bar with the live entry counter and the countdown.
#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_context::<LandingContext>().expect("LandingContext not found");

    view! {
        <div class="stats-bar">
            <div class="stats-bar__item">
                {icon("users")}
                <div>
                    <p class="stats-bar__caption">"Total Entries"</p>
                    <p class="stats-bar__value">
                        {move || format_thousands(ctx.total_entries.get())}
                    </p>
                </div>
            </div>
            <div class="stats-bar__item">
                {icon("timer")}
                <div>
                    <p class="stats-bar__caption">"Time Left"</p>
                    <div class="stats-bar__countdown">
                        <TimeBlock
                            value=Signal::derive(move || ctx.countdown.get().days)
                            label="DAYS"
                        />
                        <span class="stats-bar__colon">":"</span>
                        <TimeBlock
                            value=Signal::derive(move || ctx.countdown.get().hours)
                            label="HRS"
                        />
                        <span class="stats-bar__colon">":"</span>
                        <TimeBlock
                            value=Signal::derive(move || ctx.countdown.get().minutes)
                            label="MIN"
                        />
                        <span class="stats-bar__colon">":"</span>
                        <TimeBlock
                            value=Signal::derive(move || ctx.countdown.get().seconds)
                            label="SEC"
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
