use crate::layout::global_context::use_global_context;
use crate::shared::components::table::{format_currency, format_grouped, split_money};
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon_sized;
use contracts::dashboards::d400_sales_report::DashboardView;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Headline revenue figures and the featured seller
#[component]
pub fn RevenueCard(view_model: Memo<DashboardView>) -> impl IntoView {
    let headline = move || view_model.with(|v| v.headline);
    let whole_and_cents = move || split_money(headline().total);

    view! {
        <CardAnimated class="revenue-card">
            <div class="revenue-card__header">
                <span class="revenue-card__title">"Revenue"</span>
                <div class="revenue-card__figures">
                    <span class="revenue-card__total">
                        {move || whole_and_cents().0}
                        <span class="revenue-card__cents">{move || format!(".{}", whole_and_cents().1)}</span>
                    </span>
                    <span class="revenue-card__trend">
                        {icon_sized("trending-up", 14)}
                        {move || format!(" {}%", headline().trend)}
                    </span>
                    <span class="revenue-card__cash">{move || format_currency(headline().cash)}</span>
                </div>
                <div class="revenue-card__comparison">
                    <span>"vs prev."</span>
                    <span class="revenue-card__prev">{move || format_currency(headline().prev)}</span>
                    <span>{move || view_model.with(|v| v.comparison_label.clone())}</span>
                    {icon_sized("chevron-down", 14)}
                </div>
            </div>

            <FeaturedSeller view_model=view_model />
        </CardAnimated>
    }
}

#[component]
fn FeaturedSeller(view_model: Memo<DashboardView>) -> impl IntoView {
    let dataset = use_global_context().dataset;
    let teammates = dataset
        .users
        .iter()
        .skip(1)
        .take(2)
        .rev()
        .map(|user| view! { <img class="avatar avatar--small" src=user.avatar.clone() alt="" /> })
        .collect_view();

    view! {
        {move || view_model.with(|v| v.featured.clone()).map(|row| {
            view! {
                <div class="featured-seller">
                    <div class="featured-seller__who">
                        <img class="avatar" src=row.record.user.avatar.clone() alt="" />
                        <span class="featured-seller__revenue">
                            {format!("${}", format_grouped(row.revenue, 3))}
                        </span>
                    </div>
                </div>
            }
        })}
        <div class="featured-seller__team">
            <div class="avatar-stack">{teammates}</div>
            <Button appearance=ButtonAppearance::Primary>"Details"</Button>
        </div>
    }
}
