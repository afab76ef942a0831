//! Heuristic HTML-to-record extraction for wiki pages.
//!
//! Every extractor is a pure function over a parsed `scraper::Html`:
//! missing structure yields empty maps, empty vectors or `None`, never an
//! error, and the document is never mutated, so extracting twice gives the
//! same record.

pub mod abilities;
pub mod base_stats;
pub mod dom;
pub mod item_index;
pub mod item_page;
pub mod schema;
pub mod selectors;
pub mod vocab;

use scraper::Html;
use std::sync::LazyLock;
use url::Url;

pub use abilities::{extract_abilities, parse_ability_heading};
pub use base_stats::{extract_base_stats, normalize_stat_key};
pub use item_index::index_entries;
pub use item_page::extract_item_page;
pub use schema::{
    AbilityRecord, AbilitySlot, ChampionRecord, Description, ItemEntry, ItemRecord, ItemSummary,
};

use crate::utils::WIKI_BASE;

static DEFAULT_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse(WIKI_BASE).expect("BUG: WIKI_BASE constant is a valid URL"));

/// Build a champion record from raw page markup.
#[must_use]
pub fn extract_champion(name: &str, url: &str, html: &str) -> ChampionRecord {
    let document = Html::parse_document(html);
    extract_champion_document(name, url, &document)
}

/// Build a champion record from an already parsed page.
#[must_use]
pub fn extract_champion_document(name: &str, url: &str, document: &Html) -> ChampionRecord {
    ChampionRecord {
        name: name.to_string(),
        url: url.to_string(),
        base_stats: extract_base_stats(document),
        spells: extract_abilities(document),
    }
}

/// Build an item record from raw page markup.
#[must_use]
pub fn extract_item(name: &str, url: &str, html: &str) -> ItemRecord {
    let document = Html::parse_document(html);
    extract_item_page(name, url, &document)
}

/// List the items on an index page, resolving links against the default
/// wiki root.
#[must_use]
pub fn extract_item_index(html: &str) -> Vec<ItemSummary> {
    extract_item_index_with_base(html, &DEFAULT_BASE)
}

/// List the items on an index page, resolving links against `base`.
#[must_use]
pub fn extract_item_index_with_base(html: &str, base: &Url) -> Vec<ItemSummary> {
    let document = Html::parse_document(html);
    index_entries(&document, base)
}
