// Outbound port for the entity store that owns the author and book
// collections.
//
// Responsibilities
// - Describe the storage capability as a trait so handlers stay independent
//   of the backing implementation.
// - Both collections are append-only; callers always receive copies of the
//   stored records, never references into the store.
//
// Testing guidance
// - The in memory adapter implements this port for tests and local runs.

use crate::modules::catalog::core::author::Author;
use crate::modules::catalog::core::book::Book;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Appends the author and returns the stored record.
    async fn insert_author(&self, author: Author) -> Result<Author, StoreError>;

    /// Appends the book and returns the stored record. The caller is
    /// responsible for having validated `author_id` beforehand.
    async fn insert_book(&self, book: Book) -> Result<Book, StoreError>;

    /// Linear scan; first record whose id matches, or `None`.
    async fn find_author_by_id(&self, id: &str) -> Result<Option<Author>, StoreError>;

    /// Linear scan; first record whose id matches, or `None`.
    async fn find_book_by_id(&self, id: &str) -> Result<Option<Book>, StoreError>;

    /// Full snapshot in insertion order.
    async fn list_authors(&self) -> Result<Vec<Author>, StoreError>;

    /// Full snapshot in insertion order.
    async fn list_books(&self) -> Result<Vec<Book>, StoreError>;
}
