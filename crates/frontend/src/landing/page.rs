use crate::landing::activity_feed::ActivityFeed;
use crate::landing::floating_cta::FloatingCta;
use crate::landing::hero::Hero;
use crate::landing::info_tabs::InfoTabs;
use crate::landing::notification::EntryNotification;
use crate::landing::prize_tiers::PrizeTiers;
use crate::landing::stats_bar::StatsBar;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Full page assembly. Section order matches the reading flow: stats bar,
/// hero with CTA, prize tiers, info tabs, live feed; the toast and the
/// floating CTA sit outside the content column.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <FloatingCta />
            <EntryNotification />

            <div class="landing__decor">
                <div class="landing__decor-item landing__decor-item--gift">{icon("gift")}</div>
                <div class="landing__decor-item landing__decor-item--star">{icon("star")}</div>
                <div class="landing__decor-item landing__decor-item--dollar">{icon("dollar")}</div>
            </div>

            <div class="landing__content">
                <StatsBar />
                <Hero />
                <PrizeTiers />
                <InfoTabs />
                <ActivityFeed />
            </div>
        </div>
    }
}
