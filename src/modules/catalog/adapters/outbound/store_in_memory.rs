// In memory implementation of the EntityStore port.
//
// Purpose
// - Back the running service and its tests without a database.
//
// Responsibilities
// - Hold the two collections as append-only vectors behind an async lock.
// - Hand out cloned snapshots so no caller can mutate stored records.

use crate::modules::catalog::adapters::outbound::store::{EntityStore, StoreError};
use crate::modules::catalog::core::author::Author;
use crate::modules::catalog::core::book::Book;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEntityStore {
    authors: RwLock<Vec<Author>>,
    books: RwLock<Vec<Book>>,
    is_offline: bool,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("entity store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn insert_author(&self, author: Author) -> Result<Author, StoreError> {
        self.check_online()?;
        let mut guard = self.authors.write().await;
        guard.push(author.clone());
        Ok(author)
    }

    async fn insert_book(&self, book: Book) -> Result<Book, StoreError> {
        self.check_online()?;
        let mut guard = self.books.write().await;
        guard.push(book.clone());
        Ok(book)
    }

    async fn find_author_by_id(&self, id: &str) -> Result<Option<Author>, StoreError> {
        self.check_online()?;
        let guard = self.authors.read().await;
        Ok(guard.iter().find(|author| author.id == id).cloned())
    }

    async fn find_book_by_id(&self, id: &str) -> Result<Option<Book>, StoreError> {
        self.check_online()?;
        let guard = self.books.read().await;
        Ok(guard.iter().find(|book| book.id == id).cloned())
    }

    async fn list_authors(&self) -> Result<Vec<Author>, StoreError> {
        self.check_online()?;
        Ok(self.authors.read().await.clone())
    }

    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        self.check_online()?;
        Ok(self.books.read().await.clone())
    }
}
