use crate::modules::simple_site::core::page::PageId;
use crate::shared::infrastructure::page_store::{PageStore, PageStoreError};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryPageStore {
    pages: RwLock<Vec<PageId>>,
}

impl InMemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with ids `1..=count`.
    pub fn seeded(count: u64) -> Self {
        Self {
            pages: RwLock::new((1..=count).map(PageId::new).collect()),
        }
    }
}

#[async_trait::async_trait]
impl PageStore for InMemoryPageStore {
    async fn list(&self) -> Vec<PageId> {
        self.pages.read().await.clone()
    }

    async fn append(&self) -> Result<PageId, PageStoreError> {
        let mut pages = self.pages.write().await;
        let id = match pages.last() {
            None => PageId::FIRST,
            Some(&last) => last.next().ok_or(PageStoreError::Exhausted { last })?,
        };
        pages.push(id);
        Ok(id)
    }

    async fn contains(&self, id: PageId) -> bool {
        self.pages.read().await.contains(&id)
    }
}
