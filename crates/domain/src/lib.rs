//! Domain layer for the Phone Catalog backend.
//!
//! This crate contains the serializable catalog models returned to API
//! clients. Field renames on these types are part of the wire contract.

pub mod models;
