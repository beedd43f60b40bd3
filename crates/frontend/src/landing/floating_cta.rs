use crate::landing::redirect::open_entry_page;
use crate::shared::components::ui::CtaButton;
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Scroll depth past which the floating button appears.
const SHOW_AFTER_PX: f64 = 500.0;

/// Floating "Enter Now" button, shown once the reader scrolls past the hero.
#[component]
pub fn FloatingCta() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let y = window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or_default();
        set_visible.set(y > SHOW_AFTER_PX);
    });
    if let Some(w) = window() {
        let _ = w.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    // Note: the closure is intentionally leaked (.forget()) since the scroll
    // listener needs to live for the page lifetime. Safe for SPA context.
    on_scroll.forget();

    view! {
        <div class="floating-cta" class:floating-cta--visible=visible>
            <CtaButton variant="pill" on_click=Callback::new(move |_| open_entry_page())>
                {icon("trophy")}
                <span>"Enter Now"</span>
                {icon("arrow-right")}
            </CtaButton>
        </div>
    }
}
