//! Error types for the web layer.
//!
//! [`WebError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//! Parameter problems map to 400; storage, template, and integrity
//! failures map to 500. A failed request never renders a partial list.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use matrika_db::DbError;

/// Errors that can occur while serving a list request.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// A required filter parameter was absent.
    #[error("missing required parameter: {0}")]
    MissingParam(&'static str),

    /// A query parameter had an unusable value.
    #[error("invalid query parameter: {0}")]
    InvalidQuery(String),

    /// The `sort` parameter named an unknown field.
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    /// A template failed to load or render.
    #[error("template error: {0}")]
    Template(String),

    /// The data layer failed.
    #[error("database error: {0}")]
    Db(#[from] DbError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingParam(name) => (
                StatusCode::BAD_REQUEST,
                format!("chybí povinný parametr: {name}"),
            ),
            Self::InvalidQuery(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::UnknownSortField(field) => (
                StatusCode::BAD_REQUEST,
                format!("neznámé pole řazení: {field}"),
            ),
            Self::Template(_) | Self::Db(_) => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "interní chyba serveru".to_owned(),
                )
            }
        };

        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"cs\"><head><meta charset=\"utf-8\">\
             <title>Chyba {code}</title></head>\
             <body><h1>Chyba {code}</h1><p>{message}</p>\
             <p><a href=\"/vyber\">Zpět na výběr seznamu</a></p></body></html>",
            code = status.as_u16(),
        );

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_param_maps_to_400() {
        let response = WebError::MissingParam("rokOd").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_sort_field_maps_to_400() {
        let response = WebError::UnknownSortField("barva".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn integrity_fault_maps_to_500() {
        let response = WebError::Db(DbError::AddressMissing { person_id: 1 }).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
