pub mod referrer_sort;
pub mod timeframe;
pub mod trend;

pub use referrer_sort::ReferrerSort;
pub use timeframe::Timeframe;
pub use trend::Trend;
