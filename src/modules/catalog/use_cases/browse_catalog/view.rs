use crate::modules::catalog::core::author::Author;
use crate::modules::catalog::core::book::Book;

/// A book composed with its resolved author, the shape every read of a book
/// returns.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookView {
    pub id: String,
    pub title: String,
    pub author: Author,
}

impl BookView {
    pub fn compose(book: Book, author: Author) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author,
        }
    }
}
