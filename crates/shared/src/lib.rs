//! Shared utilities for the Phone Catalog backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Pagination parameter handling

pub mod pagination;
