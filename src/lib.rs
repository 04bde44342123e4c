pub mod api;
pub mod config;
pub mod docs;
pub mod error;
pub mod model;
pub mod report;
pub mod routes;
pub mod utils;

pub use config::Config;
pub use error::{DashboardError, DashboardResult};
