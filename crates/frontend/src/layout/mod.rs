pub mod global_context;
pub mod left;

use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |  Navbar | Sidebar |       Content        |
/// |  (icon  | (text   |                      |
/// |   rail) |  panel) |                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>
            <main data-zone="center" class="app-main">
                {center()}
            </main>
        </div>
    }
}
