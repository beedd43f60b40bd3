use leptos::logging::warn;
use web_sys::window;

/// Affiliate entry page. Every CTA on the page opens this same URL in a new
/// tab; entry itself happens entirely on the partner site.
pub const ENTRY_URL: &str = "https://smrturl.co/a/s8bc4ef91ea/3706?s1=Detailtrend";

/// Opens the entry page. Failure (popup blocked, no window) is logged and
/// otherwise ignored.
pub fn open_entry_page() {
    let opened = window()
        .and_then(|w| w.open_with_url_and_target(ENTRY_URL, "_blank").ok())
        .flatten();
    if opened.is_none() {
        warn!("could not open entry page, popup may be blocked");
    }
}
