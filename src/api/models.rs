use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the store's `messages` table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl MessageRecord {
    pub fn new(email: impl Into<String>, message: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            message: message.into(),
            created_at,
        }
    }
}

/// Error object the store returns with a non-2xx status.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}
