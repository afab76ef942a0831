//! Fixed vocabularies the extractors match against.
//!
//! Kept apart from the extraction logic so a new stat name or banned index
//! category is a one-line change here.

/// Substrings that mark a base-stat table key (matched on lowercase text)
pub const BASE_STAT_KEYWORDS: &[&str] = &[
    "health", "mana", "armor", "magic", "ad", "as", "ms", "range", "hp5", "mp5", "crit", "resist",
];

/// Longest base-stat key accepted, in characters
pub const MAX_STAT_KEY_CHARS: usize = 40;

/// Longest index link text treated as an item name, in characters
pub const MAX_ITEM_NAME_CHARS: usize = 100;

/// Longest bold text accepted as an ability name, in characters
pub const MAX_ABILITY_NAME_CHARS: usize = 80;

/// Link-text substrings that exclude an index link (matched on lowercase text)
pub const BANNED_INDEX_CATEGORIES: &[&str] = &[
    "rune",
    "warding",
    "trinket",
    "jungle item list",
    "mythic removed",
];

/// Href fragments that mark a link as not pointing at an item article
pub const NON_ARTICLE_HREF_MARKERS: &[&str] = &[":", "#", "redlink"];

pub const COOLDOWN_LABELS: &[&str] = &["Cooldown", "CD"];
pub const COST_LABELS: &[&str] = &["Cost"];
pub const RANGE_LABELS: &[&str] = &["Range"];

/// Leading words that disqualify a node as an ability description
pub const DESCRIPTION_REJECT_PREFIXES: &[&str] = &["cooldown", "cd", "cost", "range"];

/// Stat nouns that make an item list entry a stat line
pub const ITEM_STAT_NOUNS: &[&str] = &[
    "Ability Haste",
    "Armor",
    "Magic Resist",
    "Attack Damage",
    "Ability Power",
    "Health",
    "Mana",
    "Lethality",
    "Omnivamp",
    "Lifesteal",
    "Move Speed",
];

/// Abbreviations that make an item table row a stat line
pub const ITEM_STAT_ABBREVIATIONS: &[&str] = &[
    "Armor", "MR", "AD", "AP", "Haste", "Health", "Mana", "Speed", "Lethality", "Crit",
];

/// Category suffix that marks an item tier label
pub const RARITY_CATEGORY_SUFFIX: &str = "items";

/// Leading characters stripped from an item stat line to form its key
pub const STAT_KEY_TRIM_CHARS: &[char] = &['+', '•', '-'];
