// Service layer module
// Application-facing operations built on the domain and its repository ports

pub mod book_service;

pub use book_service::BookService;
