use crate::modules::catalog::adapters::outbound::store::{EntityStore, StoreError};
use crate::modules::catalog::core::author::Author;
use crate::modules::catalog::core::identity::fresh_id;
use crate::modules::catalog::use_cases::add_author::command::AddAuthor;
use std::sync::Arc;

// Inserts unconditionally: author creation has no invariant to check beyond
// what the input schema enforced at the boundary.
pub struct AddAuthorHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> AddAuthorHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AddAuthor) -> Result<Author, StoreError> {
        let author = Author {
            id: fresh_id(),
            name: command.name,
            age: command.age,
            email: command.email,
        };
        self.store.insert_author(author).await
    }
}
