//! HTML template loading and rendering via `minijinja`.
//!
//! Templates are loaded from the filesystem (default: the crate's
//! `templates/` directory) so the markup can be tuned without
//! recompiling. Three views exist: `osoby` (person listing),
//! `osoby-s-adresou` (person listing with address columns), and `vyber`
//! (the static selection page).

use axum::http::Uri;
use matrika_types::{Page, Person};
use minijinja::Environment;
use serde::Serialize;

use crate::error::WebError;
use crate::urls::{query_separator, strip_query_params};

/// View names, each backed by `<name>.html` in the templates directory.
const TEMPLATE_NAMES: [&str; 3] = ["osoby", "osoby-s-adresou", "vyber"];

/// Manages template loading and rendering.
///
/// Wraps a `minijinja` [`Environment`] with all views pre-loaded.
/// Templates can be edited on disk and will be picked up on the next
/// call to [`Templates::from_dir`].
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Load all views from the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Template`] if a file cannot be read or does
    /// not parse.
    pub fn from_dir(dir: &str) -> Result<Self, WebError> {
        let mut env = Environment::new();
        // View names carry no extension, so opt into HTML escaping
        // explicitly.
        env.set_auto_escape_callback(|_| minijinja::AutoEscape::Html);
        for name in TEMPLATE_NAMES {
            let source = load_template(dir, name)?;
            env.add_template_owned(name, source)
                .map_err(|e| WebError::Template(format!("failed to add {name} template: {e}")))?;
        }
        Ok(Self { env })
    }

    /// Render the named view with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Template`] if the view is missing or the
    /// render fails.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, WebError> {
        self.env
            .get_template(name)
            .map_err(|e| WebError::Template(format!("missing {name} template: {e}")))?
            .render(ctx)
            .map_err(|e| WebError::Template(format!("{name} render failed: {e}")))
    }
}

/// Read a template file from disk.
fn load_template(dir: &str, name: &str) -> Result<String, WebError> {
    let path = format!("{dir}/{name}.html");
    std::fs::read_to_string(&path)
        .map_err(|e| WebError::Template(format!("failed to read {path}: {e}")))
}

/// Render context for the two listing views.
///
/// Carries the page of persons plus everything the templates need to
/// build navigation: pagination metadata and the two link bases derived
/// from the request URL (`current_url` keeps the sort, `sort_url` does
/// not, so a sort toggle lands back on page one).
#[derive(Debug, Serialize)]
pub struct ListContext<'a> {
    /// Page heading.
    pub title: &'a str,
    /// The persons on this page, in order.
    pub persons: &'a [Person],
    /// Zero-based page index.
    pub page: u64,
    /// Page size.
    pub size: u64,
    /// Total matching records.
    pub total_count: u64,
    /// Total page count.
    pub total_pages: u64,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Index of the previous page (0 when there is none).
    pub prev_page: u64,
    /// Index of the next page (0 when there is none).
    pub next_page: u64,
    /// Request URL without `page` and `size`.
    pub current_url: String,
    /// Separator to append a parameter to `current_url`.
    pub current_sep: &'static str,
    /// Request URL without `page`, `size`, and `sort`.
    pub sort_url: String,
    /// Separator to append a parameter to `sort_url`.
    pub sort_sep: &'static str,
}

impl<'a> ListContext<'a> {
    /// Build the context for one rendered listing.
    pub fn new(title: &'a str, page: &'a Page<Person>, uri: &Uri) -> Self {
        let current_url = strip_query_params(uri, &["page", "size"]);
        let sort_url = strip_query_params(uri, &["page", "size", "sort"]);
        let current_sep = query_separator(&current_url);
        let sort_sep = query_separator(&sort_url);
        Self {
            title,
            persons: &page.items,
            page: page.page_index,
            size: page.page_size,
            total_count: page.total_count,
            total_pages: page.total_pages(),
            has_prev: page.previous_page().is_some(),
            has_next: page.next_page().is_some(),
            prev_page: page.previous_page().unwrap_or(0),
            next_page: page.next_page().unwrap_or(0),
            current_url,
            current_sep,
            sort_url,
            sort_sep,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::NaiveDate;
    use matrika_types::Address;

    use super::*;

    fn templates() -> Templates {
        Templates::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/templates")).unwrap()
    }

    fn sample_page() -> Page<Person> {
        Page {
            items: vec![Person {
                id: 1,
                first_name: "Jana".to_owned(),
                last_name: "Nováková".to_owned(),
                birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
                address: Address {
                    id: 2,
                    street: "Dlouhá 12".to_owned(),
                    municipality: "Praha".to_owned(),
                    postal_code: "110 00".to_owned(),
                },
            }],
            total_count: 21,
            page_index: 1,
            page_size: 10,
        }
    }

    #[test]
    fn all_views_load_from_the_crate_directory() {
        let _templates = templates();
    }

    #[test]
    fn listing_renders_persons_and_navigation() {
        let page = sample_page();
        let uri: Uri = "/prijmeni?prijmeni=nov&page=1".parse().unwrap();
        let ctx = ListContext::new("Seznam osob", &page, &uri);
        let html = templates().render("osoby", &ctx).unwrap();

        assert!(html.contains("Nováková"));
        assert!(html.contains("1990-05-01"));
        // Middle page of three: both navigation links present. Separators
        // pass through HTML escaping, so `&` appears as `&amp;`.
        assert!(html.contains("/prijmeni?prijmeni=nov&amp;page=0"));
        assert!(html.contains("/prijmeni?prijmeni=nov&amp;page=2"));
        // Sort links reset paging by omitting the page parameter.
        assert!(html.contains("/prijmeni?prijmeni=nov&amp;sort=prijmeni"));
    }

    #[test]
    fn address_listing_renders_the_municipality() {
        let page = sample_page();
        let uri: Uri = "/obec?obec=Praha".parse().unwrap();
        let ctx = ListContext::new("Osoby dle obce", &page, &uri);
        let html = templates().render("osoby-s-adresou", &ctx).unwrap();

        assert!(html.contains("Praha"));
        assert!(html.contains("Dlouhá 12"));
        assert!(html.contains("110 00"));
    }

    #[test]
    fn selection_page_links_every_listing() {
        let html = templates()
            .render("vyber", minijinja::context! { title => "Výběr seznamu" })
            .unwrap();
        for route in [
            "/",
            "/dle-data-narozeni",
            "/rok-narozeni",
            "/prijmeni",
            "/obec",
            "/minimalni-vek",
        ] {
            assert!(html.contains(route), "missing link to {route}");
        }
    }
}
