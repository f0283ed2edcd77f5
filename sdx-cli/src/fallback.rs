//! Bundled fallback dataset
//!
//! A fixed set of canonical character records embedded at compile time,
//! used whenever the retrieval API is unreachable or unhealthy. Parsed
//! once on first use.

use sdx_common::Character;
use std::sync::OnceLock;

const FALLBACK_JSON: &str = include_str!("../data/fallback.json");

static FALLBACK: OnceLock<Vec<Character>> = OnceLock::new();

/// The bundled character set
pub fn bundled_characters() -> &'static [Character] {
    FALLBACK.get_or_init(|| {
        // Compile-time asset; a parse failure is a packaging bug
        serde_json::from_str(FALLBACK_JSON).expect("bundled fallback.json is valid")
    })
}
