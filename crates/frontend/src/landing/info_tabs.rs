use crate::landing::redirect::open_entry_page;
use crate::shared::components::ui::{CtaButton, Tabs, TabsContent, TabsList, TabsTrigger};
use crate::shared::format::format_thousands;
use crate::shared::icons::icon;
use leptos::prelude::*;
use promo::winners::{PAST_WINNERS, WINNER_STATS};

/// (icon, title, description, feature bullets)
const ENTRY_STEPS: [(&str, &str, &str, [&str; 3]); 4] = [
    (
        "users",
        "1. Click to Enter",
        "Click any 'Enter Now' button to visit our secure entry page",
        ["No registration needed", "Takes 30 seconds", "100% free"],
    ),
    (
        "shield",
        "2. Complete Entry",
        "Fill out a simple form on our partner site",
        ["Basic info only", "No credit card", "Instant entry"],
    ),
    (
        "target",
        "3. Confirm Entry",
        "Get instant confirmation of your entry",
        ["Immediate confirmation", "Entry tracking", "Prize alerts"],
    ),
    (
        "bell",
        "4. Stay Updated",
        "We'll notify you if you win",
        ["Winner announcements", "Prize claiming info", "Next drawing dates"],
    ),
];

/// The main informational panel: three tabs, one visible at a time,
/// defaulting to the entry instructions.
#[component]
pub fn InfoTabs() -> impl IntoView {
    view! {
        <Tabs default_value="how-to-enter" class="info-tabs">
            <TabsList class="info-tabs__list">
                <TabsTrigger value="how-to-enter">
                    {icon("arrow-right")}
                    " How to Enter"
                </TabsTrigger>
                <TabsTrigger value="about">{icon("trophy")} " About"</TabsTrigger>
                <TabsTrigger value="winners">{icon("users")} " Previous Winners"</TabsTrigger>
            </TabsList>

            <TabsContent value="how-to-enter">
                <HowToEnterPanel />
            </TabsContent>
            <TabsContent value="about">
                <AboutPanel />
            </TabsContent>
            <TabsContent value="winners">
                <WinnersPanel />
            </TabsContent>
        </Tabs>
    }
}

#[component]
fn HowToEnterPanel() -> impl IntoView {
    view! {
        <div class="panel">
            <div class="panel__intro">
                <h2>"How to Enter & Win"</h2>
                <p>
                    "Follow these simple steps to enter the sweepstakes and get your chance to win the $500 cash prize!"
                </p>
            </div>

            <div class="steps-grid">
                {ENTRY_STEPS
                    .iter()
                    .map(|(icon_name, title, desc, features)| {
                        view! {
                            <div class="steps-grid__card">
                                <div class="steps-grid__icon">{icon(icon_name)}</div>
                                <div>
                                    <h3>{*title}</h3>
                                    <p>{*desc}</p>
                                    <ul>
                                        {features
                                            .iter()
                                            .map(|feature| {
                                                view! { <li>{icon("check")} {*feature}</li> }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="panel__cta">
                <h3>"Ready to Win $500?"</h3>
                <p>"Don't miss your chance - enter now and you could be our next winner!"</p>
                <CtaButton size="lg" on_click=Callback::new(move |_| open_entry_page())>
                    {icon("trophy")}
                    <span>"Enter Sweepstakes Now"</span>
                    {icon("arrow-right")}
                </CtaButton>
            </div>
        </div>
    }
}

#[component]
fn AboutPanel() -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"About the Sweepstakes"</h2>
            <p class="panel__lead">
                "Don't miss your chance to win $500 in cash! Our sweepstakes is open to all US residents aged 18 and above. The winner will be randomly selected and notified via email."
            </p>
            <div class="about-grid">
                <div class="about-grid__card">
                    {icon("dollar")}
                    <h3>"$500 Prize"</h3>
                    <p>"Cash prize for the lucky winner"</p>
                </div>
                <div class="about-grid__card">
                    {icon("clock")}
                    <h3>"Daily Entries"</h3>
                    <p>"Enter once every 24 hours"</p>
                </div>
                <div class="about-grid__card">
                    {icon("trophy")}
                    <h3>"Monthly Drawing"</h3>
                    <p>"Winner selected every month"</p>
                </div>
            </div>
            <div class="about-notes">
                <div class="about-notes__card">
                    <h3>{icon("shield")} " Security Guarantee"</h3>
                    <p>
                        "Your information is protected with industry-standard encryption. We never share your data with third parties."
                    </p>
                </div>
                <div class="about-notes__card">
                    <h3>{icon("target")} " Winner Selection"</h3>
                    <p>
                        "Winners are selected using a certified random number generator to ensure fair and unbiased results."
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn WinnersPanel() -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"Previous Winners"</h2>
            <div class="winners-list">
                {PAST_WINNERS
                    .iter()
                    .map(|winner| {
                        view! {
                            <div class="winners-list__row">
                                <div class="winners-list__icon">{icon("trophy")}</div>
                                <div class="winners-list__body">
                                    <div class="winners-list__head">
                                        <h3>{winner.month.clone()}</h3>
                                        <span class="winners-list__amount">
                                            {format!("${}", winner.amount)}
                                        </span>
                                    </div>
                                    <p>{format!("{} - {}", winner.name, winner.location)}</p>
                                </div>
                                <div class="winners-list__award">{icon("award")}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="winners-stats">
                <div class="winners-stats__card">
                    <h4>
                        {format!("${}", format_thousands(WINNER_STATS.total_awarded as u64))}
                    </h4>
                    <p>"Total Prizes Awarded"</p>
                </div>
                <div class="winners-stats__card">
                    <h4>{WINNER_STATS.winners_this_year.to_string()}</h4>
                    <p>"Winners This Year"</p>
                </div>
                <div class="winners-stats__card">
                    <h4>{format!("{}%", WINNER_STATS.claim_rate_percent)}</h4>
                    <p>"Prize Claim Rate"</p>
                </div>
            </div>
        </div>
    }
}
