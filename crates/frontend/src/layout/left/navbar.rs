use crate::shared::icons::icon;
use leptos::prelude::*;

/// Narrow icon rail on the far left
#[component]
pub fn Navbar() -> impl IntoView {
    let top = vec![
        ("home", false),
        ("clock", false),
        ("layout-dashboard", true),
        ("file-text", false),
        ("target", false),
    ];

    view! {
        <nav class="main-nav-bar">
            <div class="main-nav-bar__logo">"C"</div>
            <ul class="main-nav-bar__items">
                {top.into_iter().map(|(kind, active)| {
                    view! { <NavIcon kind=kind active=active /> }
                }).collect_view()}
            </ul>
            <ul class="main-nav-bar__items main-nav-bar__items--bottom">
                <NavIcon kind="settings" active=false />
            </ul>
        </nav>
    }
}

#[component]
fn NavIcon(kind: &'static str, active: bool) -> impl IntoView {
    view! {
        <li class="main-nav-bar__item" class:main-nav-bar__item--active=active>
            {icon(kind)}
        </li>
    }
}
