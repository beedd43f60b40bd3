//! Tab container with a single shared selection.
//!
//! `Tabs` owns one active value and shares it through Leptos context, so
//! `TabsTrigger` and `TabsContent` keep working at any nesting depth below
//! the container — wrapper divs between them and `Tabs` are fine. The
//! container is agnostic to which values exist: a trigger or panel whose
//! value never matches anything is a silent no-op, not an error.

use leptos::prelude::*;

/// Shared selection state. `Copy` struct of signals, same shape as the other
/// app contexts, so components capture it by value in event handlers.
#[derive(Clone, Copy)]
pub struct TabsContext {
    active: RwSignal<String>,
}

impl TabsContext {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            active: RwSignal::new(initial.into()),
        }
    }

    /// Unconditional switch. Last writer wins; selecting the current value
    /// is a no-op for every derived view.
    pub fn select(&self, value: &str) {
        self.active.set(value.to_string());
    }

    /// Currently active value (reactive).
    pub fn current(&self) -> String {
        self.active.get()
    }

    /// Derived at read time, never stored, so it cannot drift from `active`.
    pub fn is_selected(&self, value: &str) -> bool {
        self.active.with(|active| active == value)
    }
}

/// Container that owns the active tab value and provides it as context.
#[component]
pub fn Tabs(
    /// Value active on first render. Not validated against existing
    /// triggers/panels; an unmatched value just means nothing renders active.
    #[prop(into)]
    default_value: String,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    provide_context(TabsContext::new(default_value));

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("tabs {}", additional_class())>
            {children()}
        </div>
    }
}

/// Layout wrapper for the trigger row. Carries no state of its own — the
/// triggers reach the container through context, not through this wrapper.
#[component]
pub fn TabsList(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("tabs__list {}", additional_class())>
            {children()}
        </div>
    }
}

/// Selectable tab header. Activating it makes its value current.
#[component]
pub fn TabsTrigger(
    /// Value this trigger selects
    #[prop(into)]
    value: String,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<TabsContext>()
        .expect("TabsContext not found. TabsTrigger must be inside <Tabs>.");

    let value_for_class = value.clone();
    let is_active = move || ctx.is_selected(&value_for_class);
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || {
                format!(
                    "tabs__trigger {} {}",
                    if is_active() { "tabs__trigger--active" } else { "" },
                    additional_class(),
                )
            }
            on:click=move |_| ctx.select(&value)
        >
            {children()}
        </button>
    }
}

/// Tab panel. Rendered only while its value is the active one — inactive
/// panels are absent from the DOM, not hidden, so their content runs nothing.
#[component]
pub fn TabsContent(
    /// Value this panel belongs to
    #[prop(into)]
    value: String,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = use_context::<TabsContext>()
        .expect("TabsContext not found. TabsContent must be inside <Tabs>.");

    move || ctx.is_selected(&value).then(|| children())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_reactive_scope<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.set();
        f()
    }

    #[test]
    fn test_select_then_read() {
        in_reactive_scope(|| {
            let ctx = TabsContext::new("about");
            assert_eq!(ctx.current(), "about");
            ctx.select("winners");
            assert_eq!(ctx.current(), "winners");
        });
    }

    #[test]
    fn test_last_select_wins() {
        in_reactive_scope(|| {
            let ctx = TabsContext::new("how-to-enter");
            for value in ["about", "winners", "about", "how-to-enter", "winners"] {
                ctx.select(value);
            }
            assert_eq!(ctx.current(), "winners");
        });
    }

    #[test]
    fn test_select_current_value_is_idempotent() {
        in_reactive_scope(|| {
            let ctx = TabsContext::new("about");
            ctx.select("about");
            assert_eq!(ctx.current(), "about");
            assert!(ctx.is_selected("about"));
        });
    }

    #[test]
    fn test_at_most_one_value_selected() {
        in_reactive_scope(|| {
            let ctx = TabsContext::new("about");
            let values = ["how-to-enter", "about", "winners"];
            let selected: Vec<&str> = values
                .iter()
                .copied()
                .filter(|v| ctx.is_selected(v))
                .collect();
            assert_eq!(selected, vec!["about"]);

            ctx.select("winners");
            let selected: Vec<&str> = values
                .iter()
                .copied()
                .filter(|v| ctx.is_selected(v))
                .collect();
            assert_eq!(selected, vec!["winners"]);
        });
    }

    #[test]
    fn test_unmatched_initial_value_selects_nothing() {
        in_reactive_scope(|| {
            let ctx = TabsContext::new("no-such-tab");
            let values = ["how-to-enter", "about", "winners"];
            assert!(values.iter().all(|v| !ctx.is_selected(v)));
            // still recoverable: a later select behaves normally
            ctx.select("about");
            assert!(ctx.is_selected("about"));
        });
    }
}
