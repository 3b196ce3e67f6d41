//! Book Catalog Library
//!
//! This library provides an in-memory book catalog, including the domain
//! model, the repository port and its in-memory adapter, and the
//! `BookService` facade used by callers.

pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::errors::{CatalogError, CatalogResult};
pub use services::BookService;
