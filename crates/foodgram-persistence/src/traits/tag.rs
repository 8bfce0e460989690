//! Tag persistence trait

use async_trait::async_trait;

use crate::model::TagInfo;

#[async_trait]
pub trait TagPersistence: Send + Sync {
    /// List all tags ordered by name
    async fn tag_find_all(&self) -> anyhow::Result<Vec<TagInfo>>;

    /// Find a tag by ID
    async fn tag_find_by_id(&self, id: i32) -> anyhow::Result<Option<TagInfo>>;
}
