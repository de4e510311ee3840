use crate::layout::global_context::use_global_context;
use crate::shared::components::table::{format_currency, format_grouped};
use crate::shared::components::{CardAnimated, StatCard};
use crate::shared::icons::icon_sized;
use contracts::dashboards::d400_sales_report::top_seller;
use contracts::shared::dataset::Platform;
use leptos::prelude::*;

/// "Top sales" and "Best deal" cards
#[component]
pub fn HighlightCards() -> impl IntoView {
    let dataset = use_global_context().dataset;
    let top = top_seller(&dataset.sales_team).map(|record| {
        view! {
            <div class="highlight-card__who">
                <img class="avatar avatar--tiny" src=record.user.avatar.clone() alt="" />
                <span>{record.user.first_name().to_string()}</span>
            </div>
        }
    });

    view! {
        <div class="highlight-cards">
            <CardAnimated class="highlight-card">
                <div class="highlight-card__label">"Top sales"</div>
                <div class="highlight-card__value">"72"</div>
                {top}
                <button class="highlight-card__go">{icon_sized("arrow-right", 16)}</button>
            </CardAnimated>

            <CardAnimated class="highlight-card highlight-card--dark" delay_ms=80>
                <div class="highlight-card__label">
                    "Best deal"
                    {icon_sized("star", 14)}
                </div>
                <div class="highlight-card__value">{format_currency(42300.0)}</div>
                <div class="highlight-card__caption">"Rolf Inc."</div>
                <button class="highlight-card__go">{icon_sized("arrow-right", 16)}</button>
            </CardAnimated>
        </div>
    }
}

#[component]
pub fn StatRow() -> impl IntoView {
    view! {
        <div class="stat-row">
            <StatCard label="Deals" value="256" trend="- 5" trend_down=true />
            <StatCard label="Value" value="528k" trend="↗ 7.9%" highlight=true />
            <StatCard label="Win rate" value="44%" trend="↗ 1.2%" />
        </div>
    }
}

/// Revenue split across partner platforms; the first one gets the large tile
#[component]
pub fn PlatformsCard() -> impl IntoView {
    let dataset = use_global_context().dataset;
    let mut tiles = dataset.platforms.iter();
    let lead = tiles.next().map(|p| view! { <PlatformTile platform=p.clone() large=true /> });
    let rest = tiles
        .map(|p| view! { <PlatformTile platform=p.clone() large=false /> })
        .collect_view();

    view! {
        <CardAnimated class="platforms-card" delay_ms=160>
            <div class="platforms-card__header">
                <span>"Work with platforms"</span>
                <div class="platforms-card__chips">
                    <span class="chip">"↗ 3"</span>
                    <span class="chip">{format_currency(156841.0)}</span>
                </div>
            </div>
            <div class="platforms-card__grid">
                {lead}
                <div class="platforms-card__stack">{rest}</div>
            </div>
        </CardAnimated>
    }
}

#[component]
fn PlatformTile(platform: Platform, large: bool) -> impl IntoView {
    let initial = platform.name.chars().next().map(String::from).unwrap_or_default();

    view! {
        <div class="platform" class:platform--large=large>
            <div class="platform__who">
                <div class="platform__icon" style:color=platform.color.clone() style:border-color=platform.color.clone()>
                    {initial}
                </div>
                <span>{platform.name.clone()}</span>
            </div>
            <div class="platform__figures">
                <div class="platform__share">{format!("{}%", format_grouped(platform.share, 1))}</div>
                <div class="platform__amount">{format_currency(platform.amount)}</div>
            </div>
        </div>
    }
}
