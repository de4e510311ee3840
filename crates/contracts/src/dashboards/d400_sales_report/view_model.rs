//! Derivation of the dashboard view-model.
//!
//! Pipeline for referrers: filter by query, sort by base amount or name,
//! then scale amounts by the timeframe multiplier. Sorting happens on the
//! unscaled amounts; with a uniform multiplier the displayed order is the same.

use std::cmp::Ordering;

use crate::domain::a002_referrer::Referrer;
use crate::domain::a003_sales_record::SalesRecord;
use crate::enums::ReferrerSort;
use crate::shared::config::DashboardConfig;
use crate::shared::dataset::Dataset;
use crate::shared::list_utils::{compare_names, filter_list, sort_list, Sortable};

use super::dto::{DashboardView, ReferrerRow, SalesRow};
use super::state::DashboardState;

impl Sortable<ReferrerSort> for Referrer {
    fn compare_by(&self, other: &Self, key: ReferrerSort) -> Ordering {
        match key {
            ReferrerSort::AmountDesc => other.amount.total_cmp(&self.amount),
            ReferrerSort::AmountAsc => self.amount.total_cmp(&other.amount),
            ReferrerSort::Name => compare_names(&self.name, &other.name),
        }
    }
}

pub fn sort_referrers(referrers: &mut [Referrer], sort: ReferrerSort) {
    sort_list(referrers, sort);
}

/// Rounded to the nearest whole currency unit
pub fn scale_referrer(referrer: &Referrer, multiplier: f64) -> ReferrerRow {
    ReferrerRow {
        name: referrer.name.clone(),
        base_amount: referrer.amount,
        amount: (referrer.amount * multiplier).round(),
        percentage: referrer.percentage,
        icon: referrer.icon.clone(),
        color: referrer.color.clone(),
    }
}

pub fn referrer_rows(
    referrers: &[Referrer],
    query: &str,
    sort: ReferrerSort,
    multiplier: f64,
) -> Vec<ReferrerRow> {
    let mut matching = filter_list(referrers, query);
    sort_referrers(&mut matching, sort);
    matching
        .iter()
        .map(|r| scale_referrer(r, multiplier))
        .collect()
}

pub fn scale_sales(record: &SalesRecord, multiplier: f64) -> SalesRow {
    SalesRow {
        record: record.clone(),
        revenue: record.revenue * multiplier,
    }
}

/// Sales team filtered by seller name, original order kept
pub fn sales_rows(team: &[SalesRecord], query: &str, multiplier: f64) -> Vec<SalesRow> {
    filter_list(team, query)
        .iter()
        .map(|r| scale_sales(r, multiplier))
        .collect()
}

/// Seller with the highest KPI score; the first one wins a tie
pub fn top_seller(team: &[SalesRecord]) -> Option<&SalesRecord> {
    team.iter()
        .fold(None, |best: Option<&SalesRecord>, r| match best {
            Some(b) if b.kpi >= r.kpi => Some(b),
            _ => Some(r),
        })
}

pub fn derive_view(
    dataset: &Dataset,
    config: &DashboardConfig,
    state: &DashboardState,
) -> DashboardView {
    let timeframe = config.timeframe(state.timeframe);

    DashboardView {
        headline: config.headline(state.timeframe),
        period_label: timeframe.period_label(),
        comparison_label: timeframe.comparison_label.clone(),
        referrers: referrer_rows(
            &dataset.referrers,
            &state.query,
            state.sort,
            timeframe.referrer_multiplier,
        ),
        sales: sales_rows(&dataset.sales_team, &state.query, timeframe.sales_multiplier),
        featured: dataset
            .sales_team
            .first()
            .map(|r| scale_sales(r, timeframe.featured_multiplier)),
        chart: dataset.chart(&timeframe.chart).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Timeframe;
    use crate::shared::config::load_config;
    use crate::shared::dataset::load_dataset;

    fn view_for(query: &str, sort: ReferrerSort, timeframe: Timeframe) -> DashboardView {
        let mut state = DashboardState::default();
        state.set_query(query);
        state.select_sort(sort);
        state.select_timeframe(timeframe);
        derive_view(load_dataset().unwrap(), load_config().unwrap(), &state)
    }

    fn names(rows: &[ReferrerRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_single_match_is_unscaled_for_current_period() {
        let view = view_for("dribbble", ReferrerSort::AmountDesc, Timeframe::ThisQuarter);
        assert_eq!(view.referrers.len(), 1);
        assert_eq!(view.referrers[0].name, "Dribbble");
        assert_eq!(view.referrers[0].amount, 227459.0);
    }

    #[test]
    fn test_name_sort_with_previous_period_scaling() {
        let view = view_for("", ReferrerSort::Name, Timeframe::LastQuarter);
        assert_eq!(
            names(&view.referrers),
            vec!["Behance", "Dribbble", "Google", "Instagram"]
        );
        for row in &view.referrers {
            assert_eq!(row.amount, (row.base_amount * 0.85).round());
        }
        // 227459 * 0.85 = 193340.15
        assert_eq!(view.referrers[1].amount, 193340.0);
    }

    #[test]
    fn test_no_match_yields_empty_collections() {
        for sort in ReferrerSort::all() {
            for timeframe in Timeframe::all() {
                let view = view_for("zzz-no-match", sort, timeframe);
                assert!(view.referrers.is_empty());
                assert!(view.sales.is_empty());
                // featured seller and chart do not depend on the query
                assert!(view.featured.is_some());
                assert!(!view.chart.is_empty());
            }
        }
    }

    #[test]
    fn test_amount_desc_is_non_increasing() {
        let view = view_for("", ReferrerSort::AmountDesc, Timeframe::YearToDate);
        assert_eq!(view.referrers.len(), 4);
        for pair in view.referrers.windows(2) {
            assert!(pair[0].amount >= pair[1].amount);
        }
    }

    #[test]
    fn test_amount_asc_is_non_decreasing() {
        let view = view_for("", ReferrerSort::AmountAsc, Timeframe::ThisQuarter);
        assert_eq!(
            names(&view.referrers),
            vec!["Google", "Behance", "Instagram", "Dribbble"]
        );
    }

    #[test]
    fn test_name_sort_ignores_input_order() {
        let dataset = load_dataset().unwrap();
        let mut reversed = dataset.referrers.clone();
        reversed.reverse();

        let a = referrer_rows(&dataset.referrers, "", ReferrerSort::Name, 1.0);
        let b = referrer_rows(&reversed, "", ReferrerSort::Name, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_name_sort_places_accented_names_by_base_letter() {
        let referrer = |name: &str| Referrer {
            name: name.into(),
            amount: 1.0,
            percentage: 0,
            icon: String::new(),
            color: String::new(),
        };
        let input = vec![referrer("Zalando"), referrer("Élan"), referrer("apple")];

        let rows = referrer_rows(&input, "", ReferrerSort::Name, 1.0);
        assert_eq!(names(&rows), vec!["apple", "Élan", "Zalando"]);
    }

    #[test]
    fn test_sort_ties_keep_original_order() {
        let referrer = |name: &str, amount: f64| Referrer {
            name: name.into(),
            amount,
            percentage: 0,
            icon: String::new(),
            color: String::new(),
        };
        let input = vec![referrer("B", 10.0), referrer("A", 10.0), referrer("C", 20.0)];

        let rows = referrer_rows(&input, "", ReferrerSort::AmountDesc, 1.0);
        assert_eq!(names(&rows), vec!["C", "B", "A"]);

        let rows = referrer_rows(&input, "", ReferrerSort::AmountAsc, 1.0);
        assert_eq!(names(&rows), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_year_to_date_scaling() {
        let view = view_for("google", ReferrerSort::AmountDesc, Timeframe::YearToDate);
        // 37028 * 3.5
        assert_eq!(view.referrers[0].amount, 129598.0);
        assert_eq!(view.referrers[0].base_amount, 37028.0);
    }

    #[test]
    fn test_base_records_untouched() {
        let dataset = load_dataset().unwrap();
        let before = dataset.referrers.clone();
        let _ = view_for("", ReferrerSort::Name, Timeframe::YearToDate);
        assert_eq!(dataset.referrers, before);
    }

    #[test]
    fn test_sales_filter_and_scaling() {
        let view = view_for("MIKASA", ReferrerSort::AmountDesc, Timeframe::LastQuarter);
        assert_eq!(view.sales.len(), 1);
        assert_eq!(view.sales[0].record.user.name, "Mikasa A.");
        assert!((view.sales[0].revenue - 156841.0 * 0.9).abs() < 1e-6);

        let view = view_for("", ReferrerSort::AmountDesc, Timeframe::ThisQuarter);
        assert_eq!(view.sales.len(), 2);
        assert_eq!(view.sales[0].revenue, 209633.0);
    }

    #[test]
    fn test_featured_seller_multiplier() {
        let current = view_for("", ReferrerSort::AmountDesc, Timeframe::ThisQuarter);
        let featured = current.featured.unwrap();
        assert_eq!(featured.record.user.name, "Armin A.");
        assert_eq!(featured.revenue, 209633.0);

        let previous = view_for("", ReferrerSort::AmountDesc, Timeframe::LastQuarter);
        assert!((previous.featured.unwrap().revenue - 209633.0 * 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_top_seller_by_kpi() {
        let dataset = load_dataset().unwrap();
        let top = top_seller(&dataset.sales_team).unwrap();
        assert_eq!(top.user.first_name(), "Mikasa");
        assert!(top_seller(&[]).is_none());
    }

    #[test]
    fn test_chart_follows_timeframe() {
        let current = view_for("", ReferrerSort::AmountDesc, Timeframe::ThisQuarter);
        let previous = view_for("", ReferrerSort::AmountDesc, Timeframe::LastQuarter);
        let ytd = view_for("", ReferrerSort::AmountDesc, Timeframe::YearToDate);

        assert_eq!(current.chart[1].value, 65.0);
        assert!(current.chart[1].striped);
        assert_eq!(previous.chart[1].value, 40.0);
        assert_eq!(previous.chart, ytd.chart);
    }

    #[test]
    fn test_timeframe_round_trip_restores_view() {
        let dataset = load_dataset().unwrap();
        let config = load_config().unwrap();
        let mut state = DashboardState::default();
        let original = derive_view(dataset, config, &state);

        state.select_timeframe(Timeframe::YearToDate);
        let ytd = derive_view(dataset, config, &state);
        assert_ne!(ytd.headline, original.headline);

        state.select_timeframe(Timeframe::ThisQuarter);
        assert_eq!(derive_view(dataset, config, &state), original);
    }

    #[test]
    fn test_headline_follows_timeframe() {
        let config = load_config().unwrap();
        for timeframe in Timeframe::all() {
            let view = view_for("", ReferrerSort::AmountDesc, timeframe);
            assert_eq!(view.headline, config.headline(timeframe));
        }
        let ytd = view_for("", ReferrerSort::AmountDesc, Timeframe::YearToDate);
        assert_eq!(ytd.headline.total, 1850430.12);
    }

    #[test]
    fn test_labels() {
        let current = view_for("", ReferrerSort::AmountDesc, Timeframe::ThisQuarter);
        assert_eq!(current.period_label, "Sep 1 - Nov 30, 2023");
        assert_eq!(current.comparison_label, "Jun 1 - Aug 31, 2023");

        let ytd = view_for("", ReferrerSort::AmountDesc, Timeframe::YearToDate);
        assert_eq!(ytd.period_label, "Jan 1 - Nov 30, 2023");
        assert_eq!(ytd.comparison_label, "Previous Period");
    }
}
