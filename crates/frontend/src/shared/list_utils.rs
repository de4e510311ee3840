//! List UI helpers: search box with a clear button, sort menu entries

use leptos::prelude::*;

use crate::shared::icons::icon_sized;

/// Search field; reports every keystroke so the lists update immediately
#[component]
pub fn SearchInput(
    /// Current query
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let clear_filter = move |_| on_change.run(String::new());

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon_sized("search", 18)}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear_filter>
                    "×"
                </button>
            </Show>
        </div>
    }
}

/// Dropdown entry; highlighted when it matches the current selection
#[component]
pub fn MenuOption(
    label: &'static str,
    /// Stable value code, exposed as `data-code`
    code: &'static str,
    #[prop(into)]
    selected: Signal<bool>,
    #[prop(into)]
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="menu-option"
            data-code=code
            class:menu-option--selected=move || selected.get()
            on:click=move |_| on_select.run(())
        >
            {label}
        </button>
    }
}
