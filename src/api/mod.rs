pub mod charts;
pub mod colleges;
pub mod health;
pub mod org_members;
pub mod organizations;
pub mod programs;
pub mod students;

pub use health::health_handler;

use serde::Deserialize;

/// `?q=` search filter shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}
