//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the durable JSON file store and the in-memory
//! fallback used when no data path is wanted (tests, ephemeral runs).

pub mod storage;

pub use storage::{InMemoryStore, JsonFileStore};
