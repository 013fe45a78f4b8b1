use crate::modules::simple_site::use_cases::add_page::handler::AddPageHandler;
use crate::modules::simple_site::use_cases::list_pages::handler::ListPagesHandler;
use crate::modules::simple_site::use_cases::view_page::handler::ViewPageHandler;
use crate::shared::infrastructure::page_store::in_memory::InMemoryPageStore;
use crate::shell::config::FixtureConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<FixtureConfig>,
    pub list_pages: Arc<ListPagesHandler<InMemoryPageStore>>,
    pub add_page: Arc<AddPageHandler<InMemoryPageStore>>,
    pub view_page: Arc<ViewPageHandler<InMemoryPageStore>>,
}

impl AppState {
    /// Wires every handler to one in-memory store seeded from `config`.
    pub fn from_config(config: FixtureConfig) -> Self {
        let store = Arc::new(InMemoryPageStore::seeded(config.seed_pages));
        Self {
            config: Arc::new(config),
            list_pages: Arc::new(ListPagesHandler::new(store.clone())),
            add_page: Arc::new(AddPageHandler::new(store.clone())),
            view_page: Arc::new(ViewPageHandler::new(store)),
        }
    }
}
