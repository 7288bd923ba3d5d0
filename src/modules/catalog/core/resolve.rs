// Read-time join from a book to its owning author.
//
// Boundaries
// - No input or output. Operates on snapshots handed in by the caller.

use crate::modules::catalog::core::author::Author;
use crate::modules::catalog::core::book::Book;

/// Scans `authors` for the record the book's `author_id` points at. Under
/// create-only semantics every stored book resolves; a `None` here means the
/// catalog is inconsistent and the caller must surface it as an internal
/// error rather than dropping the book from the response.
pub fn resolve_author(book: &Book, authors: &[Author]) -> Option<Author> {
    authors
        .iter()
        .find(|author| author.id == book.author_id)
        .cloned()
}
