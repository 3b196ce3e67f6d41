use crate::domain::book::{Author, Book, BookEvent, BookId, Title};
use crate::domain::errors::CatalogResult;

/// Repository trait for the Book entity
///
/// Defines the contract for storing and retrieving books.
/// Implementations own the id counter and must assign ids atomically with
/// the insert so ids stay unique and increasing.
pub trait BookRepository: Send + Sync {
    /// Assign the next id, store a new book, and return it with its events
    fn create(&self, title: Title, author: Author) -> CatalogResult<(Book, Vec<BookEvent>)>;

    /// Find a book by its ID
    fn find_by_id(&self, id: BookId) -> CatalogResult<Option<Book>>;

    /// All active books in insertion order
    fn find_all(&self) -> CatalogResult<Vec<Book>>;

    /// Delete a book by ID
    ///
    /// Fails with `CatalogError::NotFound` when no active book has that id.
    fn delete(&self, id: BookId) -> CatalogResult<BookEvent>;

    /// Number of active books
    fn count(&self) -> CatalogResult<usize>;
}
