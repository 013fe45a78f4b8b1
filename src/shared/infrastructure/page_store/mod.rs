use async_trait::async_trait;
use thiserror::Error;

use crate::modules::simple_site::core::page::PageId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageStoreError {
    #[error("no page id left after {last}")]
    Exhausted { last: PageId },
}

/// Append-only storage of page ids, in insertion order.
///
/// `append` must pick the next id and record it in one step so that
/// concurrent readers never see an id that is not yet listed.
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn list(&self) -> Vec<PageId>;
    async fn append(&self) -> Result<PageId, PageStoreError>;
    async fn contains(&self, id: PageId) -> bool;
}

pub mod in_memory;
