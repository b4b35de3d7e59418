//! Request-URL helpers for template links.
//!
//! The templates rebuild the current URL for two purposes: pagination
//! links (same filter and sort, different `page`) and sort-toggle links
//! (same filter, different `sort`, implicitly back on page one because
//! the paging parameters are stripped).

use axum::http::Uri;

/// The current URL with the named query parameters removed.
///
/// Remaining parameters keep their original encoding and order. The
/// query string is dropped entirely when nothing survives.
pub fn strip_query_params(uri: &Uri, remove: &[&str]) -> String {
    let path = uri.path();
    let query = uri.query().unwrap_or("");
    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or(pair);
            !remove.contains(&key)
        })
        .collect();
    if kept.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{}", kept.join("&"))
    }
}

/// The separator to append another query parameter to `url`.
pub fn query_separator(url: &str) -> &'static str {
    if url.contains('?') {
        "&"
    } else {
        "?"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn strips_paging_and_keeps_the_filter() {
        let url = strip_query_params(
            &uri("/rok-narozeni?rokOd=1980&page=2&size=10&rokDo=1990"),
            &["page", "size"],
        );
        assert_eq!(url, "/rok-narozeni?rokOd=1980&rokDo=1990");
    }

    #[test]
    fn drops_the_query_when_nothing_survives() {
        let url = strip_query_params(&uri("/?page=3&size=20"), &["page", "size"]);
        assert_eq!(url, "/");
    }

    #[test]
    fn keeps_everything_without_a_query() {
        let url = strip_query_params(&uri("/prijmeni"), &["page", "size"]);
        assert_eq!(url, "/prijmeni");
    }

    #[test]
    fn sort_links_strip_the_sort_parameter_too() {
        let url = strip_query_params(
            &uri("/prijmeni?prijmeni=nov&sort=jmeno,desc&page=1"),
            &["page", "size", "sort"],
        );
        assert_eq!(url, "/prijmeni?prijmeni=nov");
    }

    #[test]
    fn separator_depends_on_an_existing_query() {
        assert_eq!(query_separator("/prijmeni?prijmeni=nov"), "&");
        assert_eq!(query_separator("/"), "?");
    }
}
