use crate::modules::simple_site::core::page::PageId;
use crate::shared::infrastructure::page_store::{PageStore, PageStoreError};
use std::sync::Arc;

pub struct AddPageHandler<TStore>
where
    TStore: PageStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> AddPageHandler<TStore>
where
    TStore: PageStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Appends a new page. Every call creates a distinct page.
    pub async fn handle(&self) -> Result<PageId, PageStoreError> {
        let id = self.store.append().await?;
        tracing::info!(page_id = %id, "page added");
        Ok(id)
    }
}
