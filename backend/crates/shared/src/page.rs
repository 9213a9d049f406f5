//! Pagination primitives
//!
//! [`PageRequest`] carries a zero-based page index, a non-zero page size and a
//! domain-specific sort key. [`Page`] is the result of one paginated query
//! together with the total number of matching rows.

use serde::Serialize;
use thiserror::Error;

/// Page request validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Page size must be greater than zero")]
    ZeroSize,
}

/// A validated pagination request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<K> {
    page: u32,
    size: u32,
    sort_by: K,
}

impl<K> PageRequest<K> {
    pub fn new(page: u32, size: u32, sort_by: K) -> Result<Self, PageError> {
        if size == 0 {
            return Err(PageError::ZeroSize);
        }
        Ok(Self {
            page,
            size,
            sort_by,
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort_by(&self) -> &K {
        &self.sort_by
    }

    /// Number of rows to skip: `page * size`
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn new<K>(items: Vec<T>, total_elements: u64, request: &PageRequest<K>) -> Self {
        Self {
            items,
            total_elements,
            total_pages: total_pages(total_elements, request.size),
            page: request.page,
            size: request.size,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
        }
    }
}

/// `ceil(total / size)`; a zero size yields zero pages
pub fn total_pages(total_elements: u64, size: u32) -> u64 {
    match u64::from(size) {
        0 => 0,
        size => total_elements.div_ceil(size),
    }
}
