use crate::domain::book::{Author, Book, BookEvent, BookId, BookQuery, SortField, Title};
use crate::domain::errors::{CatalogError, CatalogResult};
use crate::domain::repositories::BookRepository;
use crate::infrastructure::repositories::InMemoryBookRepository;

/// Book catalog service
///
/// Entry point for creating, reading, listing and deleting books. Each
/// service owns its repository, so the id counter is scoped to the
/// instance.
///
/// # Example
/// ```
/// use book_catalog::{BookService, CatalogError};
///
/// let service = BookService::new();
/// let a = service.create_book("1984", "George Orwell").expect("valid book");
/// let b = service.create_book("Animal Farm", "George Orwell").expect("valid book");
///
/// let by_title = service.list_books(None, Some("title"), true).expect("valid sort");
/// assert_eq!(by_title, vec![a.clone(), b.clone()]);
///
/// service.delete_book(a.id()).expect("book exists");
/// assert_eq!(service.get_book(a.id()), Err(CatalogError::NotFound(a.id())));
/// ```
pub struct BookService<R = InMemoryBookRepository> {
    repository: R,
}

impl BookService<InMemoryBookRepository> {
    /// Creates a service backed by an empty in-memory repository
    pub fn new() -> Self {
        Self::with_repository(InMemoryBookRepository::new())
    }
}

impl Default for BookService<InMemoryBookRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service on top of an existing repository
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }

    /// Creates a new book
    ///
    /// # Arguments
    /// * `title` - Book title, trimmed before storing
    /// * `author` - Book author, trimmed before storing
    ///
    /// # Returns
    /// * `Ok(Book)` - The stored book with its newly assigned id
    /// * `Err(CatalogError::InvalidInput)` - If either field is blank after
    ///   trimming; nothing is stored and no id is consumed
    pub fn create_book(&self, title: &str, author: &str) -> CatalogResult<Book> {
        let (title, author) = match (Title::new(title), Author::new(author)) {
            (Ok(title), Ok(author)) => (title, author),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "Rejected book");
                return Err(e);
            }
        };

        let (book, events) = self.repository.create(title, author)?;
        self.publish(&events);

        tracing::info!(
            book_id = %book.id(),
            title = book.title(),
            author = book.author(),
            "Book created"
        );

        Ok(book)
    }

    /// Retrieves a book by id
    ///
    /// Fails with `CatalogError::NotFound` when no active book has that id.
    pub fn get_book(&self, book_id: BookId) -> CatalogResult<Book> {
        let book = self.repository.find_by_id(book_id)?.ok_or_else(|| {
            tracing::debug!(book_id = %book_id, "Book lookup missed");
            CatalogError::NotFound(book_id)
        })?;

        Ok(book)
    }

    /// Lists books with optional search and sorting
    ///
    /// # Arguments
    /// * `search` - Case-insensitive substring matched against title and
    ///   author. `None` or `""` keeps every book.
    /// * `sort_by` - One of `id`, `title`, `author`. `None` or `""` keeps
    ///   insertion order.
    /// * `ascending` - Direction of the primary sort key. Books with equal
    ///   keys always stay in ascending id order.
    ///
    /// # Errors
    /// `CatalogError::InvalidInput` if `sort_by` names an unknown field.
    pub fn list_books(
        &self,
        search: Option<&str>,
        sort_by: Option<&str>,
        ascending: bool,
    ) -> CatalogResult<Vec<Book>> {
        let mut query = BookQuery::new().ascending(ascending);

        if let Some(term) = search {
            query = query.search(term);
        }

        if let Some(field) = sort_by.filter(|field| !field.is_empty()) {
            let field: SortField = field.parse().map_err(|e| {
                tracing::warn!(sort_by = field, "Rejected sort field");
                e
            })?;
            query = query.sort_by(field);
        }

        self.query(&query)
    }

    /// Lists books matching a typed query
    pub fn query(&self, query: &BookQuery) -> CatalogResult<Vec<Book>> {
        let mut books = self.repository.find_all()?;

        if let Some(term) = query.search_term() {
            let needle = term.to_lowercase();
            books.retain(|book| book.matches(&needle));
        }

        if let Some(field) = query.sort_field() {
            let ascending = query.is_ascending();
            books.sort_by(|a, b| {
                let primary = a.compare_by(b, field);
                let primary = if ascending { primary } else { primary.reverse() };
                primary.then_with(|| a.id().cmp(&b.id()))
            });
        }

        tracing::debug!(
            search = ?query.search_term(),
            sort_by = ?query.sort_field(),
            ascending = query.is_ascending(),
            results = books.len(),
            "Listed books"
        );

        Ok(books)
    }

    /// Deletes a book by id
    ///
    /// # Returns
    /// * `Ok(true)` - The book was removed; its id will not be reused
    /// * `Err(CatalogError::NotFound)` - No active book has that id. Use
    ///   [`contains_book`](Self::contains_book) first for a non-failing check.
    pub fn delete_book(&self, book_id: BookId) -> CatalogResult<bool> {
        let event = self.repository.delete(book_id).map_err(|e| {
            tracing::warn!(book_id = %book_id, error = %e, "Delete failed");
            e
        })?;
        self.publish(std::slice::from_ref(&event));

        tracing::info!(book_id = %book_id, "Book deleted");

        Ok(true)
    }

    /// Checks whether an active book has this id
    pub fn contains_book(&self, book_id: BookId) -> CatalogResult<bool> {
        Ok(self.repository.find_by_id(book_id)?.is_some())
    }

    /// Number of active books
    pub fn count(&self) -> CatalogResult<usize> {
        self.repository.count()
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.count()? == 0)
    }

    fn publish(&self, events: &[BookEvent]) {
        for event in events {
            tracing::debug!(event = event.name(), book_id = %event.book_id(), "Domain event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title()).collect()
    }

    fn ids(books: &[Book]) -> Vec<u64> {
        books.iter().map(|b| b.id().value()).collect()
    }

    fn sample() -> BookService {
        let service = BookService::new();
        service.create_book("C Book", "Author C").unwrap();
        service.create_book("A Book", "Author A").unwrap();
        service.create_book("B Book", "Author B").unwrap();
        service
    }

    #[test]
    fn create_valid_books() {
        let service = BookService::new();
        let first = service
            .create_book("The Great Gatsby", "F. Scott Fitzgerald")
            .unwrap();
        let second = service
            .create_book("To Kill a Mockingbird", "Harper Lee")
            .unwrap();

        assert_eq!(first.id(), BookId::from(1));
        assert_eq!(second.id(), BookId::from(2));
        assert_eq!(first.title(), "The Great Gatsby");
        assert_eq!(first.author(), "F. Scott Fitzgerald");
        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn create_with_blank_fields_fails() {
        let service = BookService::new();
        let cases = [
            ("", "Author"),
            ("Title", ""),
            ("   ", "Author"),
            ("Title", "   "),
            ("", ""),
        ];

        for (title, author) in cases {
            assert!(matches!(
                service.create_book(title, author),
                Err(CatalogError::InvalidInput(_))
            ));
        }

        assert!(service.is_empty().unwrap());
        // No id was consumed by the failures
        let book = service.create_book("Title", "Author").unwrap();
        assert_eq!(book.id(), BookId::from(1));
    }

    #[test]
    fn create_trims_whitespace() {
        let service = BookService::new();
        let book = service
            .create_book("  The Great Gatsby  ", "  F. Scott Fitzgerald  ")
            .unwrap();

        assert_eq!(book.title(), "The Great Gatsby");
        assert_eq!(book.author(), "F. Scott Fitzgerald");
    }

    #[test]
    fn duplicate_books_get_distinct_ids() {
        let service = BookService::new();
        let a = service.create_book("The Book", "Author").unwrap();
        let b = service.create_book("The Book", "Author").unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn get_existing_book() {
        let service = BookService::new();
        let book = service.create_book("Test Book", "Test Author").unwrap();

        assert_eq!(service.get_book(book.id()).unwrap(), book);
    }

    #[test]
    fn get_missing_book_fails() {
        let service = BookService::new();
        service.create_book("Test Book", "Test Author").unwrap();

        for id in [0, 2, 999] {
            assert_eq!(
                service.get_book(BookId::from(id)),
                Err(CatalogError::NotFound(BookId::from(id)))
            );
        }
    }

    #[test]
    fn list_empty_service() {
        let service = BookService::new();
        assert!(service.list_books(None, None, true).unwrap().is_empty());
    }

    #[test]
    fn list_without_arguments_keeps_insertion_order() {
        let service = sample();
        let books = service.list_books(None, None, true).unwrap();
        assert_eq!(titles(&books), vec!["C Book", "A Book", "B Book"]);
    }

    #[test]
    fn descending_without_sort_field_keeps_insertion_order() {
        let service = sample();
        let books = service.list_books(None, None, false).unwrap();
        assert_eq!(ids(&books), vec![1, 2, 3]);
    }

    #[test]
    fn search_counts() {
        let service = BookService::new();
        service.create_book("Book A", "Author A").unwrap();
        service.create_book("Book B", "Author B").unwrap();

        let cases = [
            ("book", 2),
            ("BOOK", 2),
            ("Book A", 1),
            ("Author A", 1),
            ("nonexistent", 0),
            ("", 2),
            ("   ", 0),
        ];

        for (term, expected) in cases {
            let books = service.list_books(Some(term), None, true).unwrap();
            assert_eq!(books.len(), expected, "search term {:?}", term);
        }
    }

    #[test]
    fn sort_by_each_field() {
        let service = sample();

        let by_id = service.list_books(None, Some("id"), true).unwrap();
        assert_eq!(ids(&by_id), vec![1, 2, 3]);

        let by_id_desc = service.list_books(None, Some("id"), false).unwrap();
        assert_eq!(ids(&by_id_desc), vec![3, 2, 1]);

        let by_title = service.list_books(None, Some("title"), true).unwrap();
        assert_eq!(titles(&by_title), vec!["A Book", "B Book", "C Book"]);

        let by_title_desc = service.list_books(None, Some("title"), false).unwrap();
        assert_eq!(titles(&by_title_desc), vec!["C Book", "B Book", "A Book"]);

        let by_author: Vec<_> = service
            .list_books(None, Some("author"), false)
            .unwrap()
            .iter()
            .map(|b| b.author().to_string())
            .collect();
        assert_eq!(by_author, vec!["Author C", "Author B", "Author A"]);
    }

    #[test]
    fn sort_ties_break_by_ascending_id_in_both_directions() {
        let service = BookService::new();
        service.create_book("Same Title", "Author A").unwrap();
        service.create_book("Other", "Author B").unwrap();
        service.create_book("same title", "Author C").unwrap();

        let asc = service.list_books(None, Some("title"), true).unwrap();
        assert_eq!(ids(&asc), vec![2, 1, 3]);

        let desc = service.list_books(None, Some("title"), false).unwrap();
        assert_eq!(ids(&desc), vec![1, 3, 2]);
    }

    #[test]
    fn sort_is_case_insensitive() {
        let service = BookService::new();
        service.create_book("banana", "X").unwrap();
        service.create_book("Apple", "X").unwrap();
        service.create_book("cherry", "X").unwrap();

        let books = service.list_books(None, Some("title"), true).unwrap();
        assert_eq!(titles(&books), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn invalid_sort_field_fails() {
        let service = sample();

        for field in ["invalid_field", "price", "year", "Title"] {
            assert!(matches!(
                service.list_books(None, Some(field), true),
                Err(CatalogError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn empty_sort_field_keeps_insertion_order() {
        let service = sample();

        let books = service.list_books(None, Some(""), false).unwrap();
        assert_eq!(ids(&books), vec![1, 2, 3]);
    }

    #[test]
    fn invalid_sort_field_fails_on_empty_catalog() {
        let service = BookService::new();
        assert!(service.list_books(None, Some("price"), true).is_err());
    }

    #[test]
    fn combined_search_and_sort() {
        let service = BookService::new();
        service.create_book("Book A", "Author A").unwrap();
        service.create_book("Book B", "Author B").unwrap();
        service.create_book("Book C", "Author C").unwrap();
        service.create_book("Other", "Someone").unwrap();

        let books = service.list_books(Some("Book"), Some("title"), false).unwrap();
        assert_eq!(titles(&books), vec!["Book C", "Book B", "Book A"]);
    }

    #[test]
    fn list_returns_copies() {
        let service = sample();
        let mut books = service.list_books(None, None, true).unwrap();
        books.clear();

        assert_eq!(service.count().unwrap(), 3);
    }

    #[test]
    fn query_with_typed_criteria() {
        let service = sample();
        let query = BookQuery::new()
            .search("author")
            .sort_by(SortField::Author)
            .descending();

        let books = service.query(&query).unwrap();
        assert_eq!(ids(&books), vec![1, 3, 2]);
    }

    #[test]
    fn delete_existing_book() {
        let service = BookService::new();
        let book = service.create_book("Test Book", "Test Author").unwrap();

        assert_eq!(service.delete_book(book.id()), Ok(true));
        assert!(service.is_empty().unwrap());
        assert_eq!(
            service.get_book(book.id()),
            Err(CatalogError::NotFound(book.id()))
        );
    }

    #[test]
    fn delete_twice_fails_second_time() {
        let service = BookService::new();
        let book = service.create_book("Test Book", "Test Author").unwrap();

        assert!(service.delete_book(book.id()).unwrap());
        assert_eq!(
            service.delete_book(book.id()),
            Err(CatalogError::NotFound(book.id()))
        );
    }

    #[test]
    fn delete_missing_leaves_catalog_untouched() {
        let service = BookService::new();
        service.create_book("Test Book", "Test Author").unwrap();

        assert!(service.delete_book(BookId::from(999)).is_err());
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn delete_only_affects_target() {
        let service = BookService::new();
        let first = service.create_book("Book 1", "Author 1").unwrap();
        let second = service.create_book("Book 2", "Author 2").unwrap();

        service.delete_book(first.id()).unwrap();

        assert_eq!(service.get_book(second.id()).unwrap(), second);
        assert!(!service.contains_book(first.id()).unwrap());
        assert!(service.contains_book(second.id()).unwrap());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let service = BookService::new();
        service.create_book("Book 1", "Author 1").unwrap();
        let second = service.create_book("Book 2", "Author 2").unwrap();
        service.create_book("Book 3", "Author 3").unwrap();

        service.delete_book(second.id()).unwrap();
        let fourth = service.create_book("Book 4", "Author 4").unwrap();

        assert_eq!(fourth.id(), BookId::from(4));
        assert_eq!(ids(&service.list_books(None, None, true).unwrap()), vec![1, 3, 4]);
    }
}
