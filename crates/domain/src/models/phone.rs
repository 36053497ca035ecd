//! Phone catalog models.
//!
//! Listing and search rows carry the cheapest price per phone together with
//! the selling website that offers it. Lookup rows carry one offer per
//! selling website.

use serde::{Deserialize, Serialize};

/// A phone together with its cheapest offer, as returned by listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneListing {
    pub id: i64,
    pub image: Option<String>,
    pub colour: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub website: Option<String>,
    pub phone_id: i64,
    #[serde(rename = "minimumPrice")]
    pub minimum_price: f64,
    #[serde(rename = "websiteUrl")]
    pub website_url: Option<String>,
    pub storage: Option<String>,
}

/// A search result row. Same shape as [`PhoneListing`] plus the id of the
/// cheapest price row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneSearchHit {
    pub id: i64,
    pub price_id: i64,
    pub brand: Option<String>,
    pub image: Option<String>,
    pub colour: Option<String>,
    pub model: Option<String>,
    pub website: Option<String>,
    pub phone_id: i64,
    #[serde(rename = "minimumPrice")]
    pub minimum_price: f64,
    #[serde(rename = "websiteUrl")]
    pub website_url: Option<String>,
    pub storage: Option<String>,
}

/// One selling-website offer for a single phone, as returned by lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneOffer {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub website: Option<String>,
    pub price: f64,
    pub colour: Option<String>,
    #[serde(rename = "websiteUrl")]
    pub website_url: Option<String>,
    pub storage: Option<String>,
}

/// Response envelope for phone listing.
#[derive(Debug, Clone, Serialize)]
pub struct PhoneListResponse {
    #[serde(rename = "totNumItems")]
    pub tot_num_items: i64,
    pub data: Vec<PhoneListing>,
}
