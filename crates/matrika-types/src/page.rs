//! Pagination and sorting vocabulary for the listing queries.
//!
//! A [`PageRequest`] travels from the web layer into the query layer; a
//! [`Page`] travels back. Sort fields are a closed enum so that only known
//! columns can ever reach the generated `ORDER BY` clause.

use serde::{Deserialize, Serialize};

/// Default number of records per page when the request does not say.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound on the page size; larger requests are clamped.
pub const MAX_PAGE_SIZE: u64 = 100;

/// A sortable column of the person listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// Given name.
    FirstName,
    /// Surname.
    LastName,
    /// Date of birth.
    BirthDate,
}

/// Sort direction for one sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending order (the default).
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

/// One element of a sort specification: a field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// The column to sort by.
    pub field: SortField,
    /// The direction to sort in.
    pub direction: SortDirection,
}

impl SortKey {
    /// Ascending sort on `field`.
    pub const fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `field`.
    pub const fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// A validated pagination and ordering request.
///
/// Page index and size are already clamped into their legal ranges
/// (index >= 0, 1 <= size <= [`MAX_PAGE_SIZE`]) by [`PageRequest::new`],
/// so the query layer can trust them blindly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u64,
    /// Number of records per page.
    pub size: u64,
    /// Sort keys in priority order. The query layer appends a primary-key
    /// tie-break so the overall order is always total.
    pub sort: Vec<SortKey>,
}

impl PageRequest {
    /// Build a request, clamping out-of-range values instead of failing.
    ///
    /// A negative page index becomes 0; a size outside `1..=MAX_PAGE_SIZE`
    /// is clamped to the nearest bound.
    pub fn new(page: i64, size: i64, sort: Vec<SortKey>) -> Self {
        Self {
            page: u64::try_from(page).unwrap_or(0),
            size: u64::try_from(size).unwrap_or(1).clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }

    /// First page of [`DEFAULT_PAGE_SIZE`] records with the given sort.
    pub const fn first(sort: Vec<SortKey>) -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort,
        }
    }

    /// The `OFFSET` value for this request, saturated into an `i64`.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.page.saturating_mul(self.size)).unwrap_or(i64::MAX)
    }

    /// The `LIMIT` value for this request.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.size).unwrap_or(i64::MAX)
    }
}

/// A bounded, ordered slice of a larger result set plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// The records on this page, in the requested order.
    pub items: Vec<T>,
    /// Total number of records matching the filter, across all pages.
    pub total_count: u64,
    /// Zero-based index of this page.
    pub page_index: u64,
    /// Requested page size (the item count may be smaller on the last
    /// page and is zero past the end).
    pub page_size: u64,
}

impl<T> Page<T> {
    /// Number of pages needed to hold `total_count` records.
    pub const fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            0
        } else {
            self.total_count.div_ceil(self.page_size)
        }
    }

    /// Whether this is the first page.
    pub const fn is_first(&self) -> bool {
        self.page_index == 0
    }

    /// Index of the previous page, if any.
    pub const fn previous_page(&self) -> Option<u64> {
        self.page_index.checked_sub(1)
    }

    /// Index of the next page, if one exists past this page.
    pub fn next_page(&self) -> Option<u64> {
        let next = self.page_index.checked_add(1)?;
        (next < self.total_pages()).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn page_of(count: usize, total: u64, index: u64, size: u64) -> Page<u32> {
        Page {
            items: vec![0; count],
            total_count: total,
            page_index: index,
            page_size: size,
        }
    }

    #[test]
    fn request_clamps_negative_page_to_zero() {
        let req = PageRequest::new(-3, 10, Vec::new());
        assert_eq!(req.page, 0);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn request_clamps_size_into_bounds() {
        assert_eq!(PageRequest::new(0, 0, Vec::new()).size, 1);
        assert_eq!(PageRequest::new(0, -5, Vec::new()).size, 1);
        assert_eq!(PageRequest::new(0, 10_000, Vec::new()).size, MAX_PAGE_SIZE);
    }

    #[test]
    fn offset_is_page_times_size() {
        let req = PageRequest::new(4, 25, Vec::new());
        assert_eq!(req.offset(), 100);
        assert_eq!(req.limit(), 25);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(page_of(10, 21, 0, 10).total_pages(), 3);
        assert_eq!(page_of(10, 20, 0, 10).total_pages(), 2);
        assert_eq!(page_of(0, 0, 0, 10).total_pages(), 0);
    }

    #[test]
    fn item_count_follows_pagination_contract() {
        // |items| == min(size, total - page * size) while in range, else 0.
        let total: u64 = 23;
        let size: u64 = 10;
        for page in 0..5_u64 {
            let consumed = page.saturating_mul(size);
            let expected = size.min(total.saturating_sub(consumed));
            let expected = usize::try_from(expected).unwrap();
            let p = page_of(expected, total, page, size);
            assert_eq!(p.items.len(), expected, "page {page}");
        }
    }

    #[test]
    fn navigation_on_middle_page() {
        let p = page_of(10, 30, 1, 10);
        assert!(!p.is_first());
        assert_eq!(p.previous_page(), Some(0));
        assert_eq!(p.next_page(), Some(2));
    }

    #[test]
    fn navigation_past_the_end_has_no_next() {
        let p = page_of(0, 15, 7, 10);
        assert_eq!(p.total_pages(), 2);
        assert_eq!(p.next_page(), None);
        assert_eq!(p.previous_page(), Some(6));
    }

    #[test]
    fn single_page_has_no_navigation() {
        let p = page_of(3, 3, 0, 10);
        assert!(p.is_first());
        assert_eq!(p.previous_page(), None);
        assert_eq!(p.next_page(), None);
    }
}
