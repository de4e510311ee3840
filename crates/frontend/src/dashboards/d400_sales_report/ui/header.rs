use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon_sized;
use crate::shared::list_utils::{MenuOption, SearchInput};
use contracts::dashboards::d400_sales_report::DashboardView;
use contracts::enums::Timeframe;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonShape};

/// Search box and profile controls
#[component]
pub fn TopBar() -> impl IntoView {
    let state = use_global_context().dashboard;

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let on_search = Callback::new(move |text: String| state.update(|s| s.set_query(text)));

    view! {
        <header class="d400-topbar">
            <SearchInput
                value=query
                on_change=on_search
                placeholder="Try searching 'insights' or names..."
            />
            <div class="d400-topbar__actions">
                <Button appearance=ButtonAppearance::Subtle shape=ButtonShape::Circular>
                    {icon_sized("menu", 20)}
                </Button>
                <div class="d400-topbar__profile">
                    <img src="https://picsum.photos/seed/profile/200" alt="Profile" />
                </div>
                <Button appearance=ButtonAppearance::Primary shape=ButtonShape::Circular>
                    {icon_sized("plus", 20)}
                </Button>
            </div>
        </header>
    }
}

/// Report title, collaborators, export actions and the timeframe selector
#[component]
pub fn ReportHeader(view_model: Memo<DashboardView>) -> impl IntoView {
    let ctx = use_global_context();

    let collaborators = ctx
        .dataset
        .users
        .iter()
        .take(3)
        .map(|user| {
            view! {
                <img class="avatar avatar--stacked" src=user.avatar.clone() alt=user.name.clone() />
            }
        })
        .collect_view();

    view! {
        <div class="d400-report-header">
            <div class="d400-report-header__title">
                <div class="d400-report-header__people">
                    <button class="icon-button icon-button--outline">{icon_sized("plus", 16)}</button>
                    <div class="avatar-stack">
                        {collaborators}
                        <div class="avatar avatar--stacked avatar--initial">"C"</div>
                    </div>
                </div>
                <h1>"New report"</h1>
            </div>

            <div class="d400-report-header__controls">
                <div class="d400-report-header__exports">
                    <ActionButton icon_name="share" />
                    <ActionButton icon_name="download" />
                    <ActionButton icon_name="upload-cloud" />
                </div>
                <TimeframeSelector view_model=view_model />
            </div>
        </div>
    }
}

#[component]
fn ActionButton(icon_name: &'static str) -> impl IntoView {
    view! {
        <Button appearance=ButtonAppearance::Subtle shape=ButtonShape::Circular>
            {icon_sized(icon_name, 18)}
        </Button>
    }
}

#[component]
fn TimeframeSelector(view_model: Memo<DashboardView>) -> impl IntoView {
    let ctx = use_global_context();
    let state = ctx.dashboard;
    let config = ctx.config;

    let is_open = move || state.with(|s| s.timeframe_menu_open);
    let period_label = move || view_model.with(|v| v.period_label.clone());

    view! {
        <div class="timeframe">
            <div class="timeframe__pill">
                <div class="timeframe__tag">
                    <div class="timeframe__tag-dot"></div>
                    <span>"Timeframe"</span>
                </div>
                <div
                    class="timeframe__current"
                    on:click=move |_| state.update(|s| s.toggle_timeframe_menu())
                >
                    <span>{period_label}</span>
                    <span class="chevron" class:chevron--open=is_open>
                        {icon_sized("chevron-down", 14)}
                    </span>
                </div>
            </div>

            <Show when=is_open>
                <div class="dropdown dropdown--right">
                    {Timeframe::all().into_iter().map(|timeframe| {
                        view! {
                            <MenuOption
                                label=config.timeframe(timeframe).option_label.as_str()
                                code=timeframe.code()
                                selected=Signal::derive(move || state.with(|s| s.timeframe == timeframe))
                                on_select=Callback::new(move |_: ()| {
                                    log::info!("Timeframe changed to {}", timeframe);
                                    state.update(|s| s.select_timeframe(timeframe));
                                })
                            />
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
