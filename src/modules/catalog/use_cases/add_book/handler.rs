use crate::modules::catalog::adapters::outbound::store::{EntityStore, StoreError};
use crate::modules::catalog::core::book::Book;
use crate::modules::catalog::core::identity::fresh_id;
use crate::modules::catalog::use_cases::add_book::command::AddBook;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddBookError {
    /// The referential check failed: the command names an author the store
    /// does not hold. Nothing is inserted.
    #[error("cannot find author with id {author_id}")]
    UnknownAuthor { author_id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct AddBookHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> AddBookHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Check-then-insert. The two steps are not atomic, which is harmless
    /// while authors can never be deleted; a delete operation would need a
    /// mutual-exclusion discipline around the store first.
    pub async fn handle(&self, command: AddBook) -> Result<Book, AddBookError> {
        if self
            .store
            .find_author_by_id(&command.author_id)
            .await?
            .is_none()
        {
            return Err(AddBookError::UnknownAuthor {
                author_id: command.author_id,
            });
        }

        let book = Book {
            id: fresh_id(),
            title: command.title,
            author_id: command.author_id,
        };
        Ok(self.store.insert_book(book).await?)
    }
}
