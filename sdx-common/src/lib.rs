//! # ShinobiDex Common Library
//!
//! Shared code for the ShinobiDex services:
//! - Canonical character model
//! - Record normalization (legacy shape → canonical shape)
//! - Static default-jutsu lookup table
//! - API envelope types
//! - Configuration loading
//! - Common error type

pub mod api;
pub mod config;
pub mod error;
pub mod jutsu;
pub mod model;
pub mod normalize;

pub use error::{Error, Result};
pub use model::Character;
pub use normalize::normalize;
