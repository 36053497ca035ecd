//! HTTP route handlers and request classification.

pub mod health;
pub mod phones;
pub mod search;

use axum::{
    extract::{Query, State},
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;

/// Query parameters consumed by the catalog endpoints.
///
/// `num_items` and `offset` apply only to listing, `search` only to search;
/// the rest of the handlers ignore them.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub num_items: Option<String>,
    pub offset: Option<String>,
    pub search: Option<String>,
}

/// The request kinds the classifier can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// List every phone, optionally paginated.
    List,
    /// Substring search over the catalog.
    Search,
    /// Look up one phone by the digits in the final path segment.
    Lookup(String),
    /// Nothing we serve.
    NotFound,
}

/// Classifies a request path into the operation it names.
///
/// Rules, checked in order:
/// 1. final segment is exactly `phone` (`/phone` and `/phone/` are the
///    same request) -> [`RequestKind::List`]
/// 2. final segment is empty and the one before it is `search` ->
///    [`RequestKind::Search`]
/// 3. final segment is non-empty ASCII digits -> [`RequestKind::Lookup`]
/// 4. anything else -> [`RequestKind::NotFound`]
///
/// Only the tail of the path is inspected; prefixes are irrelevant.
pub fn classify(path: &str) -> RequestKind {
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.last().copied().unwrap_or("");
    let parent = if segments.len() >= 2 {
        segments[segments.len() - 2]
    } else {
        ""
    };

    if last == "phone" {
        return RequestKind::List;
    }
    if last.is_empty() && parent == "search" {
        return RequestKind::Search;
    }
    if last.is_empty() && parent == "phone" {
        return RequestKind::List;
    }
    if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
        return RequestKind::Lookup(last.to_string());
    }
    RequestKind::NotFound
}

/// Fallback handler: classifies the path and dispatches to the matching
/// endpoint. The catalog serves GET only.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(params): Query<CatalogQuery>,
) -> Result<Response, ApiError> {
    if method != Method::GET {
        return Err(ApiError::PathNotRecognized {
            url: uri.to_string(),
        });
    }

    match classify(uri.path()) {
        RequestKind::List => phones::list_phones(&state, &params)
            .await
            .map(IntoResponse::into_response),
        RequestKind::Search => search::search_phones(&state, &params)
            .await
            .map(IntoResponse::into_response),
        RequestKind::Lookup(id) => phones::get_phone(&state, &id)
            .await
            .map(IntoResponse::into_response),
        RequestKind::NotFound => Err(ApiError::PathNotRecognized {
            url: uri.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_phone() {
        assert_eq!(classify("/phone"), RequestKind::List);
    }

    #[test]
    fn test_classify_phone_trailing_slash() {
        assert_eq!(classify("/phone/"), RequestKind::List);
    }

    #[test]
    fn test_classify_phone_under_prefix() {
        // Only the tail matters.
        assert_eq!(classify("/api/phone"), RequestKind::List);
        assert_eq!(classify("/api/phone/"), RequestKind::List);
    }

    #[test]
    fn test_classify_search_requires_trailing_slash() {
        assert_eq!(classify("/search/"), RequestKind::Search);
        assert_eq!(classify("/v2/search/"), RequestKind::Search);
        assert_eq!(classify("/search"), RequestKind::NotFound);
    }

    #[test]
    fn test_classify_lookup_digits() {
        assert_eq!(classify("/phone/7"), RequestKind::Lookup("7".to_string()));
        assert_eq!(
            classify("/phone/0042"),
            RequestKind::Lookup("0042".to_string())
        );
    }

    #[test]
    fn test_classify_lookup_digits_under_any_prefix() {
        // Any all-digit tail is a lookup, even under /search; the
        // literal-segment rules are only checked first.
        assert_eq!(
            classify("/search/55"),
            RequestKind::Lookup("55".to_string())
        );
    }

    #[test]
    fn test_classify_phone_wins_over_digits() {
        // Rule order: a tail of `phone` is a listing even though a digit
        // tail under it would be a lookup.
        assert_eq!(classify("/7/phone"), RequestKind::List);
    }

    #[test]
    fn test_classify_non_numeric_tail_not_found() {
        assert_eq!(classify("/phone/abc"), RequestKind::NotFound);
        assert_eq!(classify("/phone/7a"), RequestKind::NotFound);
        assert_eq!(classify("/phone/7/"), RequestKind::NotFound);
    }

    #[test]
    fn test_classify_rejects_non_ascii_digits() {
        // Eastern Arabic numerals are digits, but not ASCII digits.
        assert_eq!(classify("/phone/١٢٣"), RequestKind::NotFound);
    }

    #[test]
    fn test_classify_root_and_unknown() {
        assert_eq!(classify("/"), RequestKind::NotFound);
        assert_eq!(classify(""), RequestKind::NotFound);
        assert_eq!(classify("/unknown/path"), RequestKind::NotFound);
    }
}
