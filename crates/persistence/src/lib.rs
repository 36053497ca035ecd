//! Persistence layer for the Phone Catalog backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - The catalog repository

pub mod db;
pub mod entities;
pub mod repositories;
