//! Shared API types for ShinobiDex services

pub mod types;

pub use types::{Envelope, HealthResponse};
