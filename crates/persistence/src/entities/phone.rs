//! Phone catalog entities (database row mappings).

use sqlx::FromRow;

/// Row mapping for the per-phone cheapest-offer listing query.
#[derive(Debug, Clone, FromRow)]
pub struct PhoneListingEntity {
    pub id: i64,
    pub image: Option<String>,
    pub colour: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub website: Option<String>,
    pub phone_id: i64,
    pub minimum_price: f64,
    pub website_url: Option<String>,
    pub storage: Option<String>,
}

impl From<PhoneListingEntity> for domain::models::PhoneListing {
    fn from(entity: PhoneListingEntity) -> Self {
        Self {
            id: entity.id,
            image: entity.image,
            colour: entity.colour,
            brand: entity.brand,
            model: entity.model,
            website: entity.website,
            phone_id: entity.phone_id,
            minimum_price: entity.minimum_price,
            website_url: entity.website_url,
            storage: entity.storage,
        }
    }
}

/// Row mapping for the search query. Identical to the listing row plus the
/// id of the cheapest price row.
#[derive(Debug, Clone, FromRow)]
pub struct PhoneSearchHitEntity {
    pub id: i64,
    pub price_id: i64,
    pub brand: Option<String>,
    pub image: Option<String>,
    pub colour: Option<String>,
    pub model: Option<String>,
    pub website: Option<String>,
    pub phone_id: i64,
    pub minimum_price: f64,
    pub website_url: Option<String>,
    pub storage: Option<String>,
}

impl From<PhoneSearchHitEntity> for domain::models::PhoneSearchHit {
    fn from(entity: PhoneSearchHitEntity) -> Self {
        Self {
            id: entity.id,
            price_id: entity.price_id,
            brand: entity.brand,
            image: entity.image,
            colour: entity.colour,
            model: entity.model,
            website: entity.website,
            phone_id: entity.phone_id,
            minimum_price: entity.minimum_price,
            website_url: entity.website_url,
            storage: entity.storage,
        }
    }
}

/// Row mapping for the single-phone offer lookup.
#[derive(Debug, Clone, FromRow)]
pub struct PhoneOfferEntity {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub website: Option<String>,
    pub price: f64,
    pub colour: Option<String>,
    pub website_url: Option<String>,
    pub storage: Option<String>,
}

impl From<PhoneOfferEntity> for domain::models::PhoneOffer {
    fn from(entity: PhoneOfferEntity) -> Self {
        Self {
            brand: entity.brand,
            model: entity.model,
            website: entity.website,
            price: entity.price,
            colour: entity.colour,
            website_url: entity.website_url,
            storage: entity.storage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_listing_entity() -> PhoneListingEntity {
        PhoneListingEntity {
            id: 1,
            image: Some("images/galaxy.png".to_string()),
            colour: Some("Phantom Black".to_string()),
            brand: Some("Samsung".to_string()),
            model: Some("Galaxy S24".to_string()),
            website: Some("samsung.com".to_string()),
            phone_id: 1,
            minimum_price: 799.99,
            website_url: Some("https://samsung.com/s24".to_string()),
            storage: Some("256GB".to_string()),
        }
    }

    #[test]
    fn test_listing_entity_to_domain() {
        let entity = sample_listing_entity();
        let listing: domain::models::PhoneListing = entity.clone().into();

        assert_eq!(listing.id, entity.id);
        assert_eq!(listing.phone_id, entity.phone_id);
        assert_eq!(listing.minimum_price, entity.minimum_price);
        assert_eq!(listing.website_url, entity.website_url);
        assert_eq!(listing.storage, entity.storage);
    }

    #[test]
    fn test_offer_entity_to_domain_with_nulls() {
        let entity = PhoneOfferEntity {
            brand: Some("Nokia".to_string()),
            model: Some("3310".to_string()),
            website: None,
            price: 49.0,
            colour: None,
            website_url: None,
            storage: None,
        };
        let offer: domain::models::PhoneOffer = entity.into();
        assert_eq!(offer.price, 49.0);
        assert!(offer.website.is_none());
        assert!(offer.website_url.is_none());
    }

    #[test]
    fn test_search_hit_entity_to_domain() {
        let entity = PhoneSearchHitEntity {
            id: 5,
            price_id: 17,
            brand: Some("Apple".to_string()),
            image: None,
            colour: Some("Red".to_string()),
            model: Some("iPhone 15".to_string()),
            website: None,
            phone_id: 5,
            minimum_price: 899.0,
            website_url: Some("https://apple.com".to_string()),
            storage: Some("512GB".to_string()),
        };
        let hit: domain::models::PhoneSearchHit = entity.into();
        assert_eq!(hit.price_id, 17);
        assert_eq!(hit.minimum_price, 899.0);
    }
}
