use crate::modules::catalog::adapters::outbound::store::EntityStore;
use crate::modules::catalog::core::author::Author;
use crate::modules::catalog::core::book::Book;
use crate::modules::catalog::core::resolve::resolve_author;
use crate::modules::catalog::use_cases::browse_catalog::queries_port::{
    CatalogQueries, QueryError,
};
use crate::modules::catalog::use_cases::browse_catalog::view::BookView;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CatalogQueryHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CatalogQueryHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    fn compose(book: Book, authors: &[Author]) -> Result<BookView, QueryError> {
        let author = resolve_author(&book, authors).ok_or_else(|| QueryError::MissingAuthor {
            book_id: book.id.clone(),
            author_id: book.author_id.clone(),
        })?;
        Ok(BookView::compose(book, author))
    }
}

#[async_trait]
impl<TStore> CatalogQueries for CatalogQueryHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    async fn book_by_id(&self, id: &str) -> Result<Option<BookView>, QueryError> {
        let Some(book) = self.store.find_book_by_id(id).await? else {
            return Ok(None);
        };
        let authors = self.store.list_authors().await?;
        Ok(Some(Self::compose(book, &authors)?))
    }

    async fn list_books(&self) -> Result<Vec<BookView>, QueryError> {
        let books = self.store.list_books().await?;
        let authors = self.store.list_authors().await?;
        books
            .into_iter()
            .map(|book| Self::compose(book, &authors))
            .collect()
    }

    async fn author_by_id(&self, id: &str) -> Result<Option<Author>, QueryError> {
        Ok(self.store.find_author_by_id(id).await?)
    }

    async fn list_authors(&self) -> Result<Vec<Author>, QueryError> {
        Ok(self.store.list_authors().await?)
    }
}
