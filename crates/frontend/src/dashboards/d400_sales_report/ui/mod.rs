pub mod chart;
pub mod dashboard;
pub mod header;
pub mod referrers;
pub mod revenue_card;
pub mod sales_table;
pub mod side_cards;
