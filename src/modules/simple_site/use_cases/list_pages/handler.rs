use crate::modules::simple_site::core::page::PageId;
use crate::shared::infrastructure::page_store::PageStore;
use std::sync::Arc;

pub struct ListPagesHandler<TStore>
where
    TStore: PageStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListPagesHandler<TStore>
where
    TStore: PageStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// All known pages in the order they were added.
    pub async fn handle(&self) -> Vec<PageId> {
        self.store.list().await
    }
}
