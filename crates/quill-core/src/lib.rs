//! # Quill Core
//!
//! The domain layer of the Quill blog service.
//! This crate contains pure post-collection logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;

pub use error::DomainError;
