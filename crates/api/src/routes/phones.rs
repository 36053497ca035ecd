//! Phone listing and lookup handlers.

use axum::Json;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::CatalogQuery;
use domain::models::{PhoneListResponse, PhoneListing, PhoneOffer};
use persistence::repositories::PhoneRepository;
use shared::pagination;

/// List all phones with their cheapest offer.
///
/// The total count is queried first, then the listing; a failure at either
/// step aborts the sequence. The listing is windowed only when both
/// `num_items` and `offset` are present.
pub async fn list_phones(
    state: &AppState,
    params: &CatalogQuery,
) -> Result<Json<PhoneListResponse>, ApiError> {
    let page = pagination::resolve(params.num_items.as_deref(), params.offset.as_deref())?;

    let repo = PhoneRepository::new(state.pool.clone());
    let tot_num_items = repo.count_phones().await?;
    let data = repo
        .list_cheapest(page)
        .await?
        .into_iter()
        .map(PhoneListing::from)
        .collect();

    Ok(Json(PhoneListResponse {
        tot_num_items,
        data,
    }))
}

/// All selling-website offers for one phone.
///
/// `id` is the all-digit final path segment, already vetted by the
/// classifier. An id no phone has yields an empty array, not a 404.
pub async fn get_phone(state: &AppState, id: &str) -> Result<Json<Vec<PhoneOffer>>, ApiError> {
    let phone_id: i64 = id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Phone id out of range: {id}")))?;

    let repo = PhoneRepository::new(state.pool.clone());
    let offers = repo
        .find_offers_by_phone_id(phone_id)
        .await?
        .into_iter()
        .map(PhoneOffer::from)
        .collect();

    Ok(Json(offers))
}
