use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Testnet",
    "Quest Hub",
    "Trading Testnet",
    "Node",
    "Waitlist",
    "Daily",
    "Retro",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(thiserror::Error, Debug)]
pub enum CategoryError {
    #[error("category already exists")]
    Duplicate,
    #[error("failed to persist category")]
    Storage(#[source] anyhow::Error),
}

/// Case-insensitive name comparison used for duplicate detection.
pub fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
