use crate::layout::global_context::use_global_context;
use crate::shared::components::table::format_grouped;
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon_sized;
use crate::shared::list_utils::MenuOption;
use contracts::dashboards::d400_sales_report::{DashboardView, ReferrerRow};
use contracts::enums::ReferrerSort;
use leptos::prelude::*;

/// Referrers filtered by the search query, sorted by the selected key
#[component]
pub fn ReferrerList(view_model: Memo<DashboardView>) -> impl IntoView {
    let state = use_global_context().dashboard;
    let is_menu_open = move || state.with(|s| s.sort_menu_open);
    let has_rows = move || view_model.with(|v| !v.referrers.is_empty());

    view! {
        <CardAnimated class="referrers" delay_ms=80>
            <div class="card-toolbar">
                <div class="sort-menu">
                    <button
                        class="sort-menu__toggle"
                        on:click=move |_| state.update(|s| s.toggle_sort_menu())
                    >
                        {icon_sized("filter", 16)}
                        {icon_sized("chevron-down", 14)}
                    </button>
                    <Show when=is_menu_open>
                        <div class="dropdown">
                            <div class="dropdown__title">"Sort By"</div>
                            {ReferrerSort::all().into_iter().map(|sort| {
                                view! {
                                    <MenuOption
                                        label=sort.menu_label()
                                        code=sort.code()
                                        selected=Signal::derive(move || state.with(|s| s.sort == sort))
                                        on_select=Callback::new(move |_: ()| state.update(|s| s.select_sort(sort)))
                                    />
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                </div>
                <span class="card-toolbar__filters">"Filters " {icon_sized("menu", 12)}</span>
            </div>

            <Show
                when=has_rows
                fallback=|| view! { <div class="empty-state">"No results found"</div> }
            >
                <div class="referrers__rows">
                    <For
                        each=move || view_model.with(|v| v.referrers.clone())
                        key=|row| (row.name.clone(), row.amount.to_bits())
                        children=move |row: ReferrerRow| view! { <ReferrerItem row=row /> }
                    />
                </div>
            </Show>
        </CardAnimated>
    }
}

#[component]
fn ReferrerItem(row: ReferrerRow) -> impl IntoView {
    view! {
        <div class="referrer">
            <div class="referrer__who">
                <div class="referrer__avatar" style:background-color=row.color.clone()>
                    {row.initial()}
                </div>
                <span class="referrer__name">{row.name.clone()}</span>
            </div>
            <div class="referrer__figures">
                <div class="referrer__amount">{format!("${}", format_grouped(row.amount, 3))}</div>
                <div class="referrer__share">{format!("{}%", row.percentage)}</div>
            </div>
        </div>
    }
}
