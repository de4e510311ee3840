pub mod number_format;

pub use number_format::{format_currency, format_grouped, split_money};
