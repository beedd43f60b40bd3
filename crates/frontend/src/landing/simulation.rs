//! Симуляторы «живой» активности страницы.
//!
//! Никакого сервера нет: и обратный отсчёт, и лента заявок крутятся целиком
//! на клиенте. Оба драйвера — циклы `spawn_local` + `TimeoutFuture` с флагом
//! остановки, который снимает `on_cleanup` при размонтировании.

use crate::landing::context::LandingContext;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use promo::entries;
use wasm_bindgen_futures::spawn_local;

const COUNTDOWN_TICK_MS: u32 = 1_000;
const FEED_TICK_MS: u32 = 3_000;
const NOTIFICATION_VISIBLE_MS: u32 = 3_000;

/// One-second ticker for the countdown. Stops decrementing on its own once
/// the countdown reaches zero (`tick` freezes there).
pub fn start_countdown(ctx: LandingContext) {
    let running = RwSignal::new(true);
    on_cleanup(move || running.set(false));

    log!("⏱ countdown simulator started");
    spawn_local(async move {
        loop {
            TimeoutFuture::new(COUNTDOWN_TICK_MS).await;
            if !running.get_untracked() {
                break;
            }
            ctx.countdown.update(|t| *t = t.tick());
        }
    });
}

/// Synthetic entry generator: every few seconds draws a name and an amount,
/// records the entry and flashes the notification toast.
pub fn start_entry_feed(ctx: LandingContext) {
    let running = RwSignal::new(true);
    on_cleanup(move || running.set(false));

    log!("📯 entry feed simulator started");
    spawn_local(async move {
        loop {
            TimeoutFuture::new(FEED_TICK_MS).await;
            if !running.get_untracked() {
                break;
            }

            let entry = entries::synthesize(js_sys::Math::random(), js_sys::Math::random());
            ctx.record_entry(entry);

            ctx.notification_visible.set(true);
            spawn_local(async move {
                TimeoutFuture::new(NOTIFICATION_VISIBLE_MS).await;
                ctx.notification_visible.set(false);
            });
        }
    });
}
