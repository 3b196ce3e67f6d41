use super::value_objects::{Author, BookId, Title};

/// Domain events that occur within the book catalog
///
/// Events are emitted to the log by the service; they are not stored.
///
/// # Example
/// ```
/// use book_catalog::domain::book::events::BookEvent;
/// use book_catalog::domain::book::value_objects::BookId;
///
/// let event = BookEvent::Deleted { book_id: BookId::from(7) };
/// assert_eq!(event.book_id(), BookId::from(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookEvent {
    /// Fired when a book is added to the catalog
    Created {
        /// ID assigned to the new book
        book_id: BookId,
        title: Title,
        author: Author,
    },
    /// Fired when a book is removed from the catalog
    Deleted {
        /// ID of the removed book
        book_id: BookId,
    },
}

impl BookEvent {
    /// Returns the book_id for this event
    pub fn book_id(&self) -> BookId {
        match self {
            BookEvent::Created { book_id, .. } => *book_id,
            BookEvent::Deleted { book_id } => *book_id,
        }
    }

    /// Short name used when logging the event
    pub fn name(&self) -> &'static str {
        match self {
            BookEvent::Created { .. } => "book_created",
            BookEvent::Deleted { .. } => "book_deleted",
        }
    }
}
