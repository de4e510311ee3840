use leptos::prelude::*;

/// Small KPI tile of the right column ("Deals", "Value", "Win rate")
#[component]
pub fn StatCard(
    label: &'static str,
    value: &'static str,
    /// Change against the previous period, already formatted
    trend: &'static str,
    #[prop(optional)]
    trend_down: bool,
    /// Draw the accent border
    #[prop(optional)]
    highlight: bool,
) -> impl IntoView {
    view! {
        <div class="stat-card" class:stat-card--highlight=highlight>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__change" class:stat-card__change--down=trend_down>
                {trend}
            </div>
        </div>
    }
}
