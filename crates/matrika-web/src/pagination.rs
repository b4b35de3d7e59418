//! Query-parameter parsing for pagination and sorting.
//!
//! Every list route accepts `page`, `size`, and (except the municipality
//! view) `sort`. Sort fields keep the property names of the original
//! interface: `prijmeni` (surname), `jmeno` (given name), and
//! `datumNarozeni` (birth date, also accepted as `datum-narozeni`).
//! Out-of-range paging values are clamped, never rejected; an unknown
//! sort field is a request error.

use matrika_types::{page::DEFAULT_PAGE_SIZE, PageRequest, SortDirection, SortField, SortKey};
use serde::Deserialize;

use crate::error::WebError;

/// Pagination and sort query parameters, all optional.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Zero-based page index; defaults to 0, negatives clamp to 0.
    pub page: Option<i64>,
    /// Records per page; defaults to 10, clamped into `1..=100`.
    pub size: Option<i64>,
    /// Sort specification, `field` or `field,asc|desc`.
    pub sort: Option<String>,
}

impl PageParams {
    /// Build a [`PageRequest`], falling back to `default_sort` when the
    /// request does not specify an order.
    pub fn into_request(self, default_sort: &[SortKey]) -> Result<PageRequest, WebError> {
        let sort = match self.sort.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => vec![parse_sort(raw)?],
            None => default_sort.to_vec(),
        };
        Ok(self.request_with(sort))
    }

    /// Build a [`PageRequest`] ignoring any `sort` parameter.
    ///
    /// Used by the municipality view, which has no caller-selectable
    /// order; the query layer's primary-key tie-break still makes the
    /// listing deterministic.
    pub fn into_request_unsorted(self) -> PageRequest {
        self.request_with(Vec::new())
    }

    fn request_with(&self, sort: Vec<SortKey>) -> PageRequest {
        let default_size = i64::try_from(DEFAULT_PAGE_SIZE).unwrap_or(10);
        PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(default_size),
            sort,
        )
    }
}

/// Parse a `sort` value of the form `field` or `field,asc|desc`.
fn parse_sort(raw: &str) -> Result<SortKey, WebError> {
    let mut parts = raw.splitn(2, ',');
    let field = parse_field(parts.next().unwrap_or(raw).trim())?;
    let direction = match parts.next().map(str::trim) {
        None | Some("") => SortDirection::Ascending,
        Some(d) if d.eq_ignore_ascii_case("asc") => SortDirection::Ascending,
        Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Descending,
        Some(other) => {
            return Err(WebError::InvalidQuery(format!(
                "neplatný směr řazení: {other}"
            )));
        }
    };
    Ok(SortKey { field, direction })
}

/// Map a request-facing field name onto a [`SortField`].
fn parse_field(raw: &str) -> Result<SortField, WebError> {
    match raw {
        "prijmeni" => Ok(SortField::LastName),
        "jmeno" => Ok(SortField::FirstName),
        "datumNarozeni" | "datum-narozeni" => Ok(SortField::BirthDate),
        other => Err(WebError::UnknownSortField(other.to_owned())),
    }
}
