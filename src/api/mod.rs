pub mod client;
pub mod models;

use async_trait::async_trait;

use crate::api::models::MessageRecord;
use crate::error::StoreError;

/// Write-only access to the table holding contact messages.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert_message(&self, record: &MessageRecord) -> Result<(), StoreError>;
}
