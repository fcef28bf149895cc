//! Error handling for the ships backend.

pub mod domain;

pub use domain::DomainError;
