//! Static default-jutsu lookup table
//!
//! Curated per-character jutsu lists used to back-fill `unique_jutsu` when
//! a legacy document carries no structured abilities. Built once on first
//! use, never recomputed per call.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Generic fallback for names not in the table
pub const GENERIC_JUTSU: [&str; 2] = ["Basic Techniques", "Substitution Jutsu"];

static JUTSU_TABLE: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, &'static [&'static str]> {
    JUTSU_TABLE.get_or_init(|| {
        let entries: [(&str, &[&str]); 26] = [
            ("Naruto Uzumaki", &["Rasengan", "Shadow Clone Jutsu", "Sage Mode"]),
            ("Sasuke Uchiha", &["Chidori", "Sharingan", "Amaterasu"]),
            ("Sakura Haruno", &["Medical Ninjutsu", "Chakra Enhanced Strength"]),
            ("Kakashi Hatake", &["Chidori", "Kamui", "Lightning Blade"]),
            ("Sai Yamanaka", &["Super Beast Scroll", "Ink Clone Technique"]),
            ("Yamato", &["Wood Release", "Earth Style Wall"]),
            ("Gaara", &["Sand Manipulation", "Sand Shield", "Sand Coffin"]),
            ("Itachi Uchiha", &["Tsukuyomi", "Amaterasu", "Susanoo"]),
            ("Pain", &["Almighty Push", "Universal Pull", "Planetary Devastation"]),
            ("Jiraiya", &["Sage Mode", "Summoning Technique", "Fire Style"]),
            ("Tsunade", &["Medical Ninjutsu", "Strength of a Hundred Seal"]),
            ("Orochimaru", &["Summoning Technique", "Body Replacement"]),
            ("Minato Namikaze", &["Flying Thunder God", "Rasengan"]),
            ("Hashirama Senju", &["Wood Release", "Sage Mode"]),
            ("Tobirama Senju", &["Flying Thunder God", "Water Dragon Jutsu"]),
            ("Hiruzen Sarutobi", &["Summoning Technique", "Shadow Clone Jutsu"]),
            ("Might Guy", &["Eight Gates", "Dynamic Entry"]),
            ("Rock Lee", &["Eight Gates", "Primary Lotus"]),
            ("Neji Hyuga", &["Byakugan", "Gentle Fist"]),
            ("Shikamaru Nara", &["Shadow Possession", "Shadow Bind"]),
            ("Choji Akimichi", &["Multi-Size Technique", "Human Bullet Tank"]),
            ("Ino Yamanaka", &["Mind Transfer", "Mind Body Switch"]),
            ("Kiba Inuzuka", &["Fang Over Fang", "Beast Human Clone"]),
            ("Shino Aburame", &["Insect Clone", "Secret Technique"]),
            ("Hinata Hyuga", &["Byakugan", "Gentle Fist"]),
            ("Tenten", &["Weapon Summoning", "Twin Rising Dragons"]),
        ];
        entries.into_iter().collect()
    })
}

/// Default jutsu list for a character name
///
/// Returns the curated list for known names, the generic two-item default
/// otherwise.
pub fn default_jutsu_for(name: &str) -> Vec<String> {
    match table().get(name) {
        Some(list) => list.iter().map(|s| s.to_string()).collect(),
        None => GENERIC_JUTSU.iter().map(|s| s.to_string()).collect(),
    }
}
