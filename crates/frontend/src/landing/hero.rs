use crate::landing::context::LandingContext;
use crate::landing::redirect::open_entry_page;
use crate::shared::components::ui::CtaButton;
use crate::shared::format::format_thousands;
use crate::shared::icons::icon;
use leptos::prelude::*;
use promo::prizes::grand_prize_amount;

/// Hero section: headline, main CTA and the quick-stats grid.
#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<LandingContext>().expect("LandingContext not found");
    let prize = grand_prize_amount();

    view! {
        <section class="hero">
            <div class="hero__trophy">{icon("trophy")}</div>
            <h1 class="hero__title">{format!("Win ${} Cash Prize!", prize)}</h1>
            <p class="hero__subtitle">"Enter now for your chance to win big!"</p>

            <div class="hero__panel">
                <h2 class="hero__panel-title">{format!("Claim Your ${} Reward", prize)}</h2>
                <p class="hero__panel-text">
                    "Join thousands of others and enter our exclusive sweepstakes for a chance to win "
                    {format!("${} cash!", prize)}
                </p>
                <CtaButton
                    variant="inverse"
                    size="lg"
                    on_click=Callback::new(move |_| open_entry_page())
                >
                    {icon("sparkles")}
                    <span>"Enter Sweepstakes Now"</span>
                    {icon("arrow-right")}
                </CtaButton>
            </div>

            <div class="quick-stats">
                <div class="quick-stats__card">
                    {icon("dollar")}
                    <h3>{format!("${}", prize)}</h3>
                    <p>"Cash Prize"</p>
                </div>
                <div class="quick-stats__card">
                    {icon("users")}
                    <h3>{move || format!("{}+", format_thousands(ctx.total_entries.get()))}</h3>
                    <p>"Total Entries"</p>
                </div>
                <div class="quick-stats__card">
                    {icon("trophy")}
                    <h3>"100%"</h3>
                    <p>"Winner Rate"</p>
                </div>
            </div>
        </section>
    }
}
