use std::cmp::Ordering;

use serde::Serialize;

use super::events::BookEvent;
use super::value_objects::{Author, BookId, SortField, Title};

/// Book entity
///
/// A catalog record. Books are immutable once created; the only lifecycle
/// step after creation is removal from the catalog.
///
/// # Invariants
/// - Title and author are trimmed and non-empty (guaranteed by the value objects)
/// - The id is assigned by the catalog, never by the caller
///
/// # Example
/// ```
/// use book_catalog::domain::book::{Author, Book, BookId, Title};
///
/// let (book, events) = Book::new(
///     BookId::from(1),
///     Title::new("1984").expect("valid title"),
///     Author::new("George Orwell").expect("valid author"),
/// );
///
/// assert_eq!(book.title(), "1984");
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: Title,
    author: Author,
}

impl Book {
    /// Creates a new Book
    ///
    /// # Returns
    /// The book and the events generated by its creation
    pub fn new(id: BookId, title: Title, author: Author) -> (Self, Vec<BookEvent>) {
        let book = Self { id, title, author };

        let events = vec![BookEvent::Created {
            book_id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
        }];

        (book, events)
    }

    /// Builds the event recorded when this book is removed
    pub fn deleted(&self) -> BookEvent {
        BookEvent::Deleted { book_id: self.id }
    }

    /// Checks whether title or author contains `needle`
    ///
    /// `needle` must already be lowercased; both fields are lowercased here
    /// so the match ignores case, including non-ASCII letters.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.as_str().to_lowercase().contains(needle)
            || self.author.as_str().to_lowercase().contains(needle)
    }

    /// Orders two books by a single field
    ///
    /// String fields compare case-insensitively. Equal keys compare as
    /// `Ordering::Equal`; the caller decides the tie-break.
    pub fn compare_by(&self, other: &Book, field: SortField) -> Ordering {
        match field {
            SortField::Id => self.id.cmp(&other.id),
            SortField::Title => caseless_cmp(self.title.as_str(), other.title.as_str()),
            SortField::Author => caseless_cmp(self.author.as_str(), other.author.as_str()),
        }
    }

    // ===== Getters =====

    /// Returns the book's ID
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Returns the book's title
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the book's author
    pub fn author(&self) -> &str {
        self.author.as_str()
    }
}

fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
