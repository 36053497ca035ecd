//! Domain models.

pub mod phone;

pub use phone::{PhoneListResponse, PhoneListing, PhoneOffer, PhoneSearchHit};
