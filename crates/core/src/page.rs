//! Paginated response envelope.
//!
//! List endpoints on the remote API return a Spring-style page object.
//! Only `content` and `totalPages` drive client behavior; the rest of
//! the metadata is carried for display purposes and tolerated when
//! absent.

use serde::{Deserialize, Serialize};

/// One page of a list-shaped remote resource.
///
/// `total_pages` is optional on purpose: a malformed response must
/// degrade (the loader treats it as a single page) instead of failing
/// deserialization outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
    /// Items on this page, in server order.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Total number of pages, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    /// Total number of items across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
    /// Zero-based index of this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Requested page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Whether this is the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<bool>,
    /// Whether this is the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<bool>,
    /// Whether the page holds no items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
}

impl<T> PageData<T> {
    /// Build a page from content and a known page count.
    #[must_use]
    pub fn new(content: Vec<T>, total_pages: u32) -> Self {
        Self {
            content,
            total_pages: Some(total_pages),
            total_elements: None,
            number: None,
            size: None,
            first: None,
            last: None,
            empty: None,
        }
    }

    /// An empty single page.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), 1)
    }
}

impl<T> Default for PageData<T> {
    fn default() -> Self {
        Self::empty()
    }
}
