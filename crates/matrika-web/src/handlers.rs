//! Endpoint handlers for the list views.
//!
//! Each handler is a thin adapter: it validates the filter parameters,
//! builds a [`matrika_types::PageRequest`] with the endpoint's default
//! sort, calls the matching [`PersonStore`] operation, and renders the
//! result. No business logic lives here.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::Html;
use chrono::Utc;
use matrika_db::PersonStore;
use matrika_types::{Page, Person, SortField, SortKey};
use serde::Deserialize;

use crate::error::WebError;
use crate::pagination::PageParams;
use crate::state::AppState;
use crate::templates::ListContext;

// ---------------------------------------------------------------------------
// Filter parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `/rok-narozeni` route.
#[derive(Debug, Deserialize)]
pub struct BirthYearParams {
    /// First birth year of the range, inclusive.
    #[serde(rename = "rokOd")]
    pub rok_od: Option<i32>,
    /// Last birth year of the range, inclusive.
    #[serde(rename = "rokDo")]
    pub rok_do: Option<i32>,
}

/// Query parameters for the `/prijmeni` route.
#[derive(Debug, Deserialize)]
pub struct SurnameParams {
    /// Surname prefix, matched case-insensitively.
    pub prijmeni: Option<String>,
}

/// Query parameters for the `/obec` route.
#[derive(Debug, Deserialize)]
pub struct MunicipalityParams {
    /// Municipality name, matched exactly.
    pub obec: Option<String>,
}

/// Query parameters for the `/minimalni-vek` route.
#[derive(Debug, Deserialize)]
pub struct MinAgeParams {
    /// Minimum age in whole years.
    pub vek: Option<u32>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /` -- all persons, sorted by surname then given name.
pub async fn list_all(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(paging): Query<PageParams>,
) -> Result<Html<String>, WebError> {
    let req = paging.into_request(&[
        SortKey::asc(SortField::LastName),
        SortKey::asc(SortField::FirstName),
    ])?;
    let page = PersonStore::new(state.pool.pool()).list(&req).await?;
    render_listing(&state, "osoby", "Seznam osob", &uri, &page)
}

/// `GET /dle-data-narozeni` -- all persons, sorted by birth date then
/// surname.
pub async fn list_by_birth_date(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(paging): Query<PageParams>,
) -> Result<Html<String>, WebError> {
    let req = paging.into_request(&[
        SortKey::asc(SortField::BirthDate),
        SortKey::asc(SortField::LastName),
    ])?;
    let page = PersonStore::new(state.pool.pool()).list(&req).await?;
    render_listing(&state, "osoby", "Osoby dle data narození", &uri, &page)
}

/// `GET /rok-narozeni` -- persons born within an inclusive year range.
pub async fn filter_by_birth_year(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(filter): Query<BirthYearParams>,
    Query(paging): Query<PageParams>,
) -> Result<Html<String>, WebError> {
    let rok_od = filter.rok_od.ok_or(WebError::MissingParam("rokOd"))?;
    let rok_do = filter.rok_do.ok_or(WebError::MissingParam("rokDo"))?;
    let req = paging.into_request(&[
        SortKey::asc(SortField::BirthDate),
        SortKey::asc(SortField::LastName),
    ])?;
    let page = PersonStore::new(state.pool.pool())
        .by_birth_year_range(rok_od, rok_do, &req)
        .await?;
    let title = format!("Osoby narozené {rok_od}–{rok_do}");
    render_listing(&state, "osoby", &title, &uri, &page)
}

/// `GET /prijmeni` -- persons whose surname starts with the given
/// prefix.
pub async fn filter_by_surname(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(filter): Query<SurnameParams>,
    Query(paging): Query<PageParams>,
) -> Result<Html<String>, WebError> {
    let prefix = filter.prijmeni.ok_or(WebError::MissingParam("prijmeni"))?;
    let req = paging.into_request(&[SortKey::asc(SortField::LastName)])?;
    let page = PersonStore::new(state.pool.pool())
        .by_surname_prefix(&prefix, &req)
        .await?;
    let title = format!("Osoby s příjmením na „{prefix}“");
    render_listing(&state, "osoby", &title, &uri, &page)
}

/// `GET /obec` -- persons whose address lies in exactly the given
/// municipality, rendered with address columns.
pub async fn filter_by_municipality(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(filter): Query<MunicipalityParams>,
    Query(paging): Query<PageParams>,
) -> Result<Html<String>, WebError> {
    let obec = filter.obec.ok_or(WebError::MissingParam("obec"))?;
    let req = paging.into_request_unsorted();
    let page = PersonStore::new(state.pool.pool())
        .by_municipality(&obec, &req)
        .await?;
    let title = format!("Osoby z obce {obec}");
    render_listing(&state, "osoby-s-adresou", &title, &uri, &page)
}

/// `GET /minimalni-vek` -- persons at least `vek` whole years old today.
pub async fn filter_by_min_age(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(filter): Query<MinAgeParams>,
    Query(paging): Query<PageParams>,
) -> Result<Html<String>, WebError> {
    let vek = filter.vek.ok_or(WebError::MissingParam("vek"))?;
    let req = paging.into_request(&[
        SortKey::asc(SortField::LastName),
        SortKey::asc(SortField::FirstName),
    ])?;
    let today = Utc::now().date_naive();
    let page = PersonStore::new(state.pool.pool())
        .by_min_age(vek, today, &req)
        .await?;
    let title = format!("Osoby starší {vek} let");
    render_listing(&state, "osoby", &title, &uri, &page)
}

/// `GET /vyber` -- static selection page, no data access.
pub async fn selection(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let html = state
        .templates
        .render("vyber", minijinja::context! { title => "Výběr seznamu" })?;
    Ok(Html(html))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Render one listing view with pagination and sort-link context.
fn render_listing(
    state: &AppState,
    view: &str,
    title: &str,
    uri: &Uri,
    page: &Page<Person>,
) -> Result<Html<String>, WebError> {
    let ctx = ListContext::new(title, page, uri);
    let html = state.templates.render(view, &ctx)?;
    Ok(Html(html))
}
