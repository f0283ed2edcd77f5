//! sdx-cli library - client data access and squad assembly
//!
//! Fetches characters from the retrieval API, degrading to a bundled
//! dataset when the API is unreachable, and builds squads from a fixed
//! set of roles with client-side uniqueness and stat aggregation.

pub mod client;
pub mod fallback;
pub mod squad;

pub use client::CharacterClient;
pub use squad::{Role, Squad};
