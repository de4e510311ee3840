pub mod aggregate;

pub use aggregate::Referrer;
