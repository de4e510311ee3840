//! CardAnimated: Thaw `Card` that fades in on mount.
//!
//! The `card-appear` keyframes live in `style/dashboard.css`.
//!
//! # Example
//! ```rust,ignore
//! <CardAnimated delay_ms=0>"Revenue"</CardAnimated>
//! <CardAnimated delay_ms=80 class="dashboard-card--dark">"Best deal"</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in ms, for a staggered appearance
    #[prop(optional)]
    delay_ms: u32,
    /// Extra classes next to `dashboard-card`
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "dashboard-card".to_string()
    } else {
        format!("dashboard-card {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
