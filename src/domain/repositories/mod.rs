// Repository ports
// Infrastructure adapters implement these traits

pub mod book_repository;

pub use book_repository::BookRepository;
