//! Repository implementations.

pub mod phone;

pub use phone::PhoneRepository;
