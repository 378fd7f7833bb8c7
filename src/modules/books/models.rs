use serde::{Deserialize, Serialize};

use folio_catalog::CatalogRecord;

/// A book, addressed by its unique title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Title of the book; the natural key
    pub title: String,
    /// First name of the author
    pub author_first_name: String,
    /// Last name of the author
    pub author_last_name: String,
    /// Publisher of the book
    pub publisher: String,
    /// Publication date, e.g. "1949-06-08"
    pub publication_date: String,
}

/// Listing projection of a book.
#[derive(Debug, Clone, Serialize)]
pub struct BookDigest {
    pub title: String,
    pub link: String,
}

impl CatalogRecord for Book {
    type Digest = BookDigest;
    const RESOURCE: &'static str = "books";
    const KEY_FIELD: &'static str = "title";
    const KEY_MAX_LEN: usize = 128;

    fn key(&self) -> &str {
        &self.title
    }

    fn digest(&self) -> BookDigest {
        BookDigest {
            title: self.title.clone(),
            link: self.location(),
        }
    }
}
