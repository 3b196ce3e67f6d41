// Book domain module
// Contains the book entity, value objects, and domain events

#![allow(clippy::module_inception)]

pub mod book;
pub mod events;
pub mod value_objects;

// Re-export main types for convenience
pub use book::Book;
pub use events::BookEvent;
pub use value_objects::{Author, BookId, BookQuery, SortField, Title};
