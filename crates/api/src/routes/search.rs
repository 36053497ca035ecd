//! Catalog search handler.

use axum::Json;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::CatalogQuery;
use domain::models::PhoneSearchHit;
use persistence::repositories::PhoneRepository;

/// Search phones by model, colour, or storage substring.
///
/// A missing `search` parameter searches for the empty substring, which
/// matches every phone up to the repository's row limit. The response is a
/// bare array, unlike listing.
pub async fn search_phones(
    state: &AppState,
    params: &CatalogQuery,
) -> Result<Json<Vec<PhoneSearchHit>>, ApiError> {
    let term = params.search.as_deref().unwrap_or("");

    let repo = PhoneRepository::new(state.pool.clone());
    let hits = repo
        .search_cheapest(term)
        .await?
        .into_iter()
        .map(PhoneSearchHit::from)
        .collect();

    Ok(Json(hits))
}
