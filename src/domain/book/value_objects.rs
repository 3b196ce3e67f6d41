use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::{CatalogError, CatalogResult};

/// Identifier assigned to a book by the catalog
///
/// Ids start at 1 and are never reused within one catalog, even after the
/// book holding them is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// The first id handed out by an empty catalog
    pub const FIRST: BookId = BookId(1);

    /// Returns the id as a plain integer
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id following this one
    pub fn next(&self) -> BookId {
        BookId(self.0 + 1)
    }
}

impl From<u64> for BookId {
    fn from(value: u64) -> Self {
        BookId(value)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn trimmed_non_empty(field: &str, value: &str) -> CatalogResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::invalid_input(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

/// Title value object
///
/// # Invariants
/// - Stored without leading or trailing whitespace
/// - Never empty
///
/// # Example
/// ```
/// use book_catalog::domain::book::value_objects::Title;
///
/// let title = Title::new("  Animal Farm ").expect("valid title");
/// assert_eq!(title.as_str(), "Animal Farm");
/// assert!(Title::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Creates a new Title, trimming surrounding whitespace
    ///
    /// # Returns
    /// * `Ok(Title)` - If the trimmed value is non-empty
    /// * `Err(CatalogError::InvalidInput)` - Otherwise
    pub fn new(title: impl AsRef<str>) -> CatalogResult<Self> {
        trimmed_non_empty("Title", title.as_ref()).map(Title)
    }

    /// Returns the title as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Title::new(value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author value object
///
/// Same invariants as [`Title`]: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Author(String);

impl Author {
    /// Creates a new Author, trimming surrounding whitespace
    pub fn new(author: impl AsRef<str>) -> CatalogResult<Self> {
        trimmed_non_empty("Author", author.as_ref()).map(Author)
    }

    /// Returns the author as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Author {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Author::new(value)
    }
}

impl From<Author> for String {
    fn from(author: Author) -> Self {
        author.0
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field a book listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Numeric id order
    Id,
    /// Case-insensitive title order
    Title,
    /// Case-insensitive author order
    Author,
}

impl FromStr for SortField {
    type Err = CatalogError;

    /// Parses one of `id`, `title` or `author`
    ///
    /// # Example
    /// ```
    /// use book_catalog::domain::book::value_objects::SortField;
    ///
    /// assert_eq!("title".parse::<SortField>().unwrap(), SortField::Title);
    /// assert!("price".parse::<SortField>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "author" => Ok(SortField::Author),
            other => Err(CatalogError::invalid_input(format!(
                "Invalid sort field: '{}' (must be one of id, title, author)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Id => write!(f, "id"),
            SortField::Title => write!(f, "title"),
            SortField::Author => write!(f, "author"),
        }
    }
}

/// Criteria for listing books
///
/// An empty query returns every active book in insertion order.
///
/// # Example
/// ```
/// use book_catalog::domain::book::value_objects::{BookQuery, SortField};
///
/// let query = BookQuery::new()
///     .search("orwell")
///     .sort_by(SortField::Title)
///     .descending();
///
/// assert_eq!(query.search_term(), Some("orwell"));
/// assert!(!query.is_ascending());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    search: Option<String>,
    sort_by: Option<SortField>,
    ascending: bool,
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort_by: None,
            ascending: true,
        }
    }
}

impl BookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only books whose title or author contains `term`, ignoring case
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn sort_by(mut self, field: SortField) -> Self {
        self.sort_by = Some(field);
        self
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    pub fn descending(self) -> Self {
        self.ascending(false)
    }

    /// Returns the search term, treating an empty string as no search
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }

    pub fn sort_field(&self) -> Option<SortField> {
        self.sort_by
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }
}
