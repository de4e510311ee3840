pub mod dto;
pub mod state;
pub mod view_model;

pub use dto::*;
pub use state::DashboardState;
pub use view_model::*;
