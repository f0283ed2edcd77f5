//! Squad assembly
//!
//! A squad maps a fixed set of six roles to optionally-assigned characters.
//! Uniqueness is enforced client-side: a character holding one role cannot
//! be assigned to another (selectors show it disabled, not removed).
//! Derived aggregates are display-only; nothing is persisted.

use sdx_common::model::Stat;
use sdx_common::{Character, Error, Result};
use std::collections::HashMap;

/// Multiplier scaling a 0-5 stat mean into the displayed power rating
const POWER_SCALE: f64 = 20.0;

/// The six squad roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Igl,
    EntryFragger,
    Sniper,
    Medic,
    Scout,
    Support,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Igl,
        Role::EntryFragger,
        Role::Sniper,
        Role::Medic,
        Role::Scout,
        Role::Support,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Role::Igl => "igl",
            Role::EntryFragger => "entry_fragger",
            Role::Sniper => "sniper",
            Role::Medic => "medic",
            Role::Scout => "scout",
            Role::Support => "support",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Igl => "IGL (In-Game Leader)",
            Role::EntryFragger => "Entry Fragger",
            Role::Sniper => "Sniper",
            Role::Medic => "Medic",
            Role::Scout => "Scout",
            Role::Support => "Support",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Igl => "Strategic mastermind and team coordinator",
            Role::EntryFragger => "First to engage enemies, aggressive playstyle",
            Role::Sniper => "Long-range specialist and precision eliminator",
            Role::Medic => "Team support and healing specialist",
            Role::Scout => "Information gatherer and reconnaissance",
            Role::Support => "Utility provider and team backup",
        }
    }

    /// Parse a role from its identifier
    pub fn from_id(id: &str) -> Option<Role> {
        Role::ALL.iter().copied().find(|r| r.id() == id)
    }
}

/// A squad: role → optionally-assigned character
#[derive(Debug, Default)]
pub struct Squad {
    slots: HashMap<Role, Character>,
}

impl Squad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a character to a role.
    ///
    /// Rejects a character already holding a different role; re-assigning
    /// the same role replaces its previous occupant.
    pub fn assign(&mut self, role: Role, character: Character) -> Result<()> {
        let taken_elsewhere = self
            .slots
            .iter()
            .any(|(r, c)| *r != role && c.id == character.id);
        if taken_elsewhere {
            return Err(Error::InvalidInput(format!(
                "{} is already assigned to another role",
                character.name
            )));
        }

        self.slots.insert(role, character);
        Ok(())
    }

    /// Remove a role's assignment, returning the character if one was set
    pub fn clear(&mut self, role: Role) -> Option<Character> {
        self.slots.remove(&role)
    }

    pub fn get(&self, role: Role) -> Option<&Character> {
        self.slots.get(&role)
    }

    /// True when a character must be shown disabled in the selector for
    /// `role` (assigned to some other role)
    pub fn is_disabled_for(&self, role: Role, character_id: &str) -> bool {
        self.slots
            .iter()
            .any(|(r, c)| *r != role && c.id == character_id)
    }

    /// Characters from the roster still selectable for a role
    pub fn available_for<'a>(&self, role: Role, roster: &'a [Character]) -> Vec<&'a Character> {
        roster
            .iter()
            .filter(|c| !self.is_disabled_for(role, &c.id))
            .collect()
    }

    /// All assigned characters, in role order
    pub fn assigned(&self) -> Vec<&Character> {
        Role::ALL
            .iter()
            .filter_map(|role| self.slots.get(role))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when every role is filled
    pub fn is_complete(&self) -> bool {
        self.slots.len() == Role::ALL.len()
    }

    /// Arithmetic mean of a stat over the assigned characters; `None` for
    /// an empty squad
    pub fn average_stat(&self, stat: Stat) -> Option<f64> {
        if self.slots.is_empty() {
            return None;
        }
        let sum: f64 = self.slots.values().map(|c| c.databook_stats.get(stat)).sum();
        Some(sum / self.slots.len() as f64)
    }
}

/// Display power rating for one character:
/// round(mean(ninjutsu, taijutsu, strength) * 20)
pub fn power_level(character: &Character) -> i64 {
    let stats = &character.databook_stats;
    let mean = (stats.ninjutsu + stats.taijutsu + stats.strength) / 3.0;
    (mean * POWER_SCALE).round() as i64
}
