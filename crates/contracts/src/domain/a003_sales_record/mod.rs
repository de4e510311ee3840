pub mod aggregate;

pub use aggregate::{SalesRecord, SalesRecordEntry};
