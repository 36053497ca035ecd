//! Database row mappings.

pub mod phone;

pub use phone::{PhoneListingEntity, PhoneOfferEntity, PhoneSearchHitEntity};
