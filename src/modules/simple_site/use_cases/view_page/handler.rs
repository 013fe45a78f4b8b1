use crate::modules::simple_site::core::page::PageId;
use crate::modules::simple_site::use_cases::view_page::decision::ViewPageError;
use crate::shared::infrastructure::page_store::PageStore;
use std::sync::Arc;

pub struct ViewPageHandler<TStore>
where
    TStore: PageStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ViewPageHandler<TStore>
where
    TStore: PageStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: PageId) -> Result<PageId, ViewPageError> {
        if self.store.contains(id).await {
            Ok(id)
        } else {
            Err(ViewPageError::NotFound(id))
        }
    }
}
