use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::book::{Author, Book, BookEvent, BookId, Title};
use crate::domain::errors::{CatalogError, CatalogResult};
use crate::domain::repositories::BookRepository;

struct CatalogState {
    books: Vec<Book>,
    next_id: BookId,
}

/// In-memory implementation of BookRepository
///
/// Keeps books in a `Vec` in insertion order. The collection and the id
/// counter sit behind one mutex, so every operation is a single critical
/// section.
pub struct InMemoryBookRepository {
    state: Mutex<CatalogState>,
}

impl InMemoryBookRepository {
    /// Creates an empty repository whose first id will be 1
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CatalogState {
                books: Vec::new(),
                next_id: BookId::FIRST,
            }),
        }
    }

    // No operation can panic halfway through a mutation, so a poisoned
    // lock still guards consistent state.
    fn state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn create(&self, title: Title, author: Author) -> CatalogResult<(Book, Vec<BookEvent>)> {
        let mut state = self.state();

        let id = state.next_id;
        let (book, events) = Book::new(id, title, author);

        state.books.push(book.clone());
        state.next_id = id.next();

        Ok((book, events))
    }

    fn find_by_id(&self, id: BookId) -> CatalogResult<Option<Book>> {
        let state = self.state();
        Ok(state.books.iter().find(|book| book.id() == id).cloned())
    }

    fn find_all(&self) -> CatalogResult<Vec<Book>> {
        Ok(self.state().books.clone())
    }

    fn delete(&self, id: BookId) -> CatalogResult<BookEvent> {
        let mut state = self.state();

        let position = state
            .books
            .iter()
            .position(|book| book.id() == id)
            .ok_or(CatalogError::NotFound(id))?;

        let removed = state.books.remove(position);
        Ok(removed.deleted())
    }

    fn count(&self) -> CatalogResult<usize> {
        Ok(self.state().books.len())
    }
}
