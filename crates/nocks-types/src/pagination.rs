//! Pagination metadata and list results

use serde::{Deserialize, Deserializer, Serialize};

/// Links to neighbouring pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
}

/// The `meta.pagination` block of a list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of items across all pages
    pub total: u64,
    /// Number of items on this page
    pub count: u64,
    /// Items per page
    pub per_page: u64,
    /// Current page, starting at 1
    pub current_page: u32,
    /// Number of pages
    pub total_pages: u32,
    /// Neighbouring page links
    #[serde(default, deserialize_with = "deserialize_links")]
    pub links: PaginationLinks,
}

/// The API renders an empty link set as `[]` rather than `{}`
fn deserialize_links<'de, D>(deserializer: D) -> Result<PaginationLinks, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LinksOrList {
        Links(PaginationLinks),
        List(Vec<serde::de::IgnoredAny>),
    }

    match Option::<LinksOrList>::deserialize(deserializer)? {
        Some(LinksOrList::Links(links)) => Ok(links),
        Some(LinksOrList::List(_)) | None => Ok(PaginationLinks::default()),
    }
}

impl Pagination {
    /// Check whether a page follows this one
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page number to request next, if any
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }
}

/// Result of a list operation
///
/// Which variant is returned is decided by the caller's pagination flag,
/// never by the response.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    /// The items on the requested page
    Items(Vec<T>),
    /// Pagination metadata for the requested page
    Pagination(Pagination),
}

impl<T> Listing<T> {
    /// Get the items, if this listing holds items
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Self::Items(items) => Some(items),
            Self::Pagination(_) => None,
        }
    }

    /// Get the pagination metadata, if this listing holds it
    pub fn pagination(&self) -> Option<&Pagination> {
        match self {
            Self::Items(_) => None,
            Self::Pagination(p) => Some(p),
        }
    }

    /// Consume the listing, returning the items if present
    pub fn into_items(self) -> Option<Vec<T>> {
        match self {
            Self::Items(items) => Some(items),
            Self::Pagination(_) => None,
        }
    }
}
