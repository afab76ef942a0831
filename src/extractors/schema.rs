use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ability designator on a champion page.
///
/// Serialized as the single-letter wiki tag; the passive is always `"P"`
/// whether the page spelled it `P` or `Passive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilitySlot {
    #[serde(rename = "P")]
    Passive,
    Q,
    W,
    E,
    R,
    /// Card layout whose slot label could not be read
    #[serde(rename = "?")]
    Unknown,
}

impl AbilitySlot {
    /// Parse a slot token (`P`, `Passive`, `q`, ...) case-insensitively.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "P" | "PASSIVE" => Some(Self::Passive),
            "Q" => Some(Self::Q),
            "W" => Some(Self::W),
            "E" => Some(Self::E),
            "R" => Some(Self::R),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Passive => "P",
            Self::Q => "Q",
            Self::W => "W",
            Self::E => "E",
            Self::R => "R",
            Self::Unknown => "?",
        }
    }
}

impl fmt::Display for AbilitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A markup fragment together with its flattened text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub html: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRecord {
    pub slot: AbilitySlot,
    /// Empty when no name could be determined
    pub name: String,
    pub cooldown: Option<String>,
    pub cost: Option<String>,
    pub range: Option<String>,
    pub description: Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionRecord {
    pub name: String,
    pub url: String,
    /// Normalized stat key (`attack_damage`) to the value as displayed
    pub base_stats: BTreeMap<String, String>,
    /// At most one entry per slot, in page order
    pub spells: Vec<AbilityRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub url: String,
    pub rarity: Option<String>,
    /// Keyed by the stat line itself; later lines with the same key win
    pub stats: BTreeMap<String, String>,
    pub passives: Vec<String>,
    pub actives: Vec<String>,
    pub description: Description,
}

/// Outcome of expanding one index row into a full item record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemEntry {
    Full(ItemRecord),
    Failed { summary: ItemSummary, error: String },
}

impl ItemEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Full(record) => &record.name,
            Self::Failed { summary, .. } => &summary.name,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub fn record(&self) -> Option<&ItemRecord> {
        match self {
            Self::Full(record) => Some(record),
            Self::Failed { .. } => None,
        }
    }
}
