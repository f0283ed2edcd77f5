//! HTTP API handlers for sdx-api

pub mod characters;
pub mod error;
pub mod health;

pub use characters::{
    create_character, get_character, get_character_by_name, get_characters_by_rank,
    get_characters_by_village, list_characters,
};
pub use error::ApiError;
pub use health::health_routes;
