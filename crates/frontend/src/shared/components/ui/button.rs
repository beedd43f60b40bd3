use leptos::prelude::*;

/// CTA button with variants (primary, inverse, pill) and sizes (md, lg)
#[component]
pub fn CtaButton(
    /// Button variant: "primary" (default, green), "inverse" (white on
    /// green), or "pill" (rounded floating variant)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "inverse" => "cta-button--inverse",
        "pill" => "cta-button--pill",
        _ => "cta-button--primary",
    };

    let size_class = move || {
        if size.get().as_deref() == Some("lg") {
            "cta-button--lg"
        } else {
            ""
        }
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || {
                format!("cta-button {} {} {}", variant_class(), size_class(), additional_class())
            }
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
