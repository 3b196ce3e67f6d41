// Catalog domain: the book record, its validated fields, and the
// storage port. Nothing here knows how books are stored.

pub mod book;
pub mod errors;
pub mod repositories;
