use crate::modules::catalog::adapters::outbound::store_in_memory::InMemoryEntityStore;
use crate::modules::catalog::use_cases::add_author::handler::AddAuthorHandler;
use crate::modules::catalog::use_cases::add_book::handler::AddBookHandler;
use crate::modules::catalog::use_cases::browse_catalog::queries_port::CatalogQueries;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn CatalogQueries + Send + Sync>,
    pub add_author_handler: Arc<AddAuthorHandler<InMemoryEntityStore>>,
    pub add_book_handler: Arc<AddBookHandler<InMemoryEntityStore>>,
}
