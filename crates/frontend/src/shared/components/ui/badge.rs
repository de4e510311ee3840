use leptos::prelude::*;

/// Pill with an emoji, e.g. "💪 Top sales"
#[component]
pub fn Badge(icon: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <span class="badge">
            <span>{icon}</span>
            " "
            {text}
        </span>
    }
}

/// Counter bubble next to a sidebar item
#[component]
pub fn CountBadge(#[prop(into)] count: String) -> impl IntoView {
    view! { <span class="badge badge--count">{count}</span> }
}
