use crate::modules::catalog::adapters::outbound::store::StoreError;
use crate::modules::catalog::core::author::Author;
use crate::modules::catalog::use_cases::browse_catalog::view::BookView;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// A stored book points at an author that is not in the store. Cannot
    /// happen under create-only semantics; surfaced instead of producing a
    /// book without its author.
    #[error("book {book_id} references missing author {author_id}")]
    MissingAuthor { book_id: String, author_id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read-only lookups and listings over the catalog. An absent record is a
/// normal `Ok(None)` outcome, never an error.
#[async_trait]
pub trait CatalogQueries: Send + Sync {
    async fn book_by_id(&self, id: &str) -> Result<Option<BookView>, QueryError>;

    async fn list_books(&self) -> Result<Vec<BookView>, QueryError>;

    async fn author_by_id(&self, id: &str) -> Result<Option<Author>, QueryError>;

    async fn list_authors(&self) -> Result<Vec<Author>, QueryError>;
}
