pub mod chart;
pub mod config;
pub mod dataset;
pub mod list_utils;
pub mod navigation;
