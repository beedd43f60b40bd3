use crate::shared::components::ui::{Tabs, TabsContent, TabsList, TabsTrigger};
use leptos::prelude::*;
use promo::prizes::PRIZE_TIERS;

/// Prize tier selector: one trigger per tier, one detail card per tier.
/// Built on the same tab container as the info panels below it.
#[component]
pub fn PrizeTiers() -> impl IntoView {
    let default_tier = PRIZE_TIERS
        .first()
        .map(|t| t.tier.clone())
        .unwrap_or_default();

    view! {
        <section class="prize-tiers">
            <Tabs default_value=default_tier>
                <TabsList class="prize-tiers__list">
                    {PRIZE_TIERS
                        .iter()
                        .map(|tier| {
                            let value = tier.tier.clone();
                            let label = tier.tier.clone();
                            view! {
                                <TabsTrigger value=value class="prize-tiers__trigger">
                                    {label}
                                </TabsTrigger>
                            }
                        })
                        .collect_view()}
                </TabsList>
                {PRIZE_TIERS
                    .iter()
                    .map(|tier| {
                        let value = tier.tier.clone();
                        let tier = tier.clone();
                        view! {
                            <TabsContent value=value>
                                <div class="prize-card">
                                    <div class="prize-card__header">
                                        <h3>{tier.tier.clone()}</h3>
                                        <span class="prize-card__amount">
                                            {format!("${}", tier.amount)}
                                        </span>
                                    </div>
                                    <div class="prize-card__footer">
                                        <span>{format!("Winning Odds: {}", tier.odds)}</span>
                                        <button type="button" class="prize-card__more">
                                            "Learn More"
                                        </button>
                                    </div>
                                </div>
                            </TabsContent>
                        }
                    })
                    .collect_view()}
            </Tabs>
        </section>
    }
}
