//! Canonical character model
//!
//! This is the client-facing shape every record has after passing through
//! the normalization layer. Deserialization is deliberately tolerant:
//! every field except `id` and `name` falls back to a default so a
//! partially-populated document still decodes.

use serde::{Deserialize, Serialize};

/// A character record in canonical shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Stable identifier, synthesized from the name when the store has none
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub basic_info: BasicInfo,
    #[serde(default)]
    pub databook_stats: DatabookStats,
    #[serde(default)]
    pub abilities: Abilities,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub affiliations: Vec<String>,
    #[serde(default)]
    pub rank: String,
}

impl BasicInfo {
    /// Rank for display; an absent rank shows as "Unknown"
    pub fn display_rank(&self) -> &str {
        if self.rank.is_empty() {
            "Unknown"
        } else {
            &self.rank
        }
    }
}

/// The eight databook stats
///
/// Ranges differ between legacy shapes (1-100 flat vs 0-5 nested) and are
/// preserved as stored; callers must not assume a single scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabookStats {
    #[serde(default)]
    pub ninjutsu: f64,
    #[serde(default)]
    pub taijutsu: f64,
    #[serde(default)]
    pub genjutsu: f64,
    #[serde(default)]
    pub intelligence: f64,
    #[serde(default)]
    pub strength: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub stamina: f64,
    #[serde(default)]
    pub hand_seals: f64,
}

/// Stat dimensions, for aggregation and display ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Ninjutsu,
    Taijutsu,
    Genjutsu,
    Intelligence,
    Strength,
    Speed,
    Stamina,
    HandSeals,
}

impl Stat {
    pub const ALL: [Stat; 8] = [
        Stat::Ninjutsu,
        Stat::Taijutsu,
        Stat::Genjutsu,
        Stat::Intelligence,
        Stat::Strength,
        Stat::Speed,
        Stat::Stamina,
        Stat::HandSeals,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stat::Ninjutsu => "ninjutsu",
            Stat::Taijutsu => "taijutsu",
            Stat::Genjutsu => "genjutsu",
            Stat::Intelligence => "intelligence",
            Stat::Strength => "strength",
            Stat::Speed => "speed",
            Stat::Stamina => "stamina",
            Stat::HandSeals => "hand_seals",
        }
    }
}

impl DatabookStats {
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Ninjutsu => self.ninjutsu,
            Stat::Taijutsu => self.taijutsu,
            Stat::Genjutsu => self.genjutsu,
            Stat::Intelligence => self.intelligence,
            Stat::Strength => self.strength,
            Stat::Speed => self.speed,
            Stat::Stamina => self.stamina,
            Stat::HandSeals => self.hand_seals,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Abilities {
    #[serde(default)]
    pub kekkei_genkai: Option<String>,
    #[serde(default)]
    pub nature_transformations: Vec<String>,
    #[serde(default)]
    pub unique_jutsu: Vec<String>,
    #[serde(default)]
    pub special_abilities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_document() {
        let json = r#"{"id": "tenten", "name": "Tenten"}"#;
        let character: Character = serde_json::from_str(json).unwrap();

        assert_eq!(character.id, "tenten");
        assert_eq!(character.name, "Tenten");
        assert!(character.strengths.is_empty());
        assert!(character.abilities.unique_jutsu.is_empty());
        assert_eq!(character.basic_info.display_rank(), "Unknown");
    }

    #[test]
    fn stat_accessor_matches_fields() {
        let stats = DatabookStats {
            ninjutsu: 5.0,
            hand_seals: 2.0,
            ..Default::default()
        };
        assert_eq!(stats.get(Stat::Ninjutsu), 5.0);
        assert_eq!(stats.get(Stat::HandSeals), 2.0);
        assert_eq!(stats.get(Stat::Genjutsu), 0.0);
    }
}
