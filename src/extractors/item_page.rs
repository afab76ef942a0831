//! Single item page extraction: rarity, stat lines, passive/active effects
//! and a short description.

use regex::Regex;
use scraper::{ElementRef, Html};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::dom::element_text;
use super::schema::{Description, ItemRecord};
use super::selectors::{
    ANCHOR, CATEGORY_LINKS, CONTENT_TEXT, EFFECT_LINE, INFOBOX, ITEM_DESCRIPTION, LIST_ITEM,
    TABLE_ROW, UNORDERED_LIST,
};
use super::vocab::{
    ITEM_STAT_ABBREVIATIONS, ITEM_STAT_NOUNS, RARITY_CATEGORY_SUFFIX, STAT_KEY_TRIM_CHARS,
};
use crate::utils::string_utils::strip_suffix_ci;

static NUMERIC_STAT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d").expect("BUG: hardcoded numeric stat regex is valid"));

static STAT_NOUN: LazyLock<Regex> = LazyLock::new(|| alternation(ITEM_STAT_NOUNS));

static STAT_ABBREVIATION: LazyLock<Regex> = LazyLock::new(|| alternation(ITEM_STAT_ABBREVIATIONS));

static PASSIVE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Passive\s*[:：\-]").expect("BUG: hardcoded passive regex is valid")
});

static ACTIVE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Active\s*[:：\-]").expect("BUG: hardcoded active regex is valid")
});

/// Case-insensitive unanchored match of any literal in `words`
fn alternation(words: &[&str]) -> Regex {
    let alternatives = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)({alternatives})"))
        .expect("BUG: vocabulary regexes are built from escaped literals")
}

/// Extract the full record for one item page.
#[must_use]
pub fn extract_item_page(name: &str, url: &str, document: &Html) -> ItemRecord {
    let (passives, actives) = effect_lines(document);
    let record = ItemRecord {
        name: name.to_string(),
        url: url.to_string(),
        rarity: rarity(document),
        stats: item_stats(document),
        passives,
        actives,
        description: description(document),
    };

    tracing::debug!(
        item = %record.name,
        rarity = ?record.rarity,
        stats = record.stats.len(),
        passives = record.passives.len(),
        actives = record.actives.len(),
        "extracted item page"
    );
    record
}

/// `"Legendary items"` in the category bar becomes `"Legendary"`. A bare
/// `"Items"` category carries no tier and is skipped.
#[must_use]
pub fn rarity(document: &Html) -> Option<String> {
    let categories = document.select(&CATEGORY_LINKS).next()?;
    categories
        .select(&ANCHOR)
        .map(element_text)
        .find_map(|label| {
            let tier = strip_suffix_ci(&label, RARITY_CATEGORY_SUFFIX)?.trim();
            (!tier.is_empty()).then(|| tier.to_string())
        })
}

/// Stat lines from the info-box and from every list in the article body.
///
/// Lines sharing a key overwrite each other; the last one seen is kept.
#[must_use]
pub fn item_stats(document: &Html) -> BTreeMap<String, String> {
    let mut stats = BTreeMap::new();

    if let Some(infobox) = document.select(&INFOBOX).next() {
        harvest_stats(infobox, &mut stats);
    }

    if let Some(content) = document.select(&CONTENT_TEXT).next() {
        for list in content.select(&UNORDERED_LIST) {
            harvest_stats(list, &mut stats);
        }
    }

    stats
}

fn harvest_stats(node: ElementRef<'_>, stats: &mut BTreeMap<String, String>) {
    for item in node.select(&LIST_ITEM) {
        let text = element_text(item);
        if NUMERIC_STAT_LINE.is_match(&text) || STAT_NOUN.is_match(&text) {
            let key = text
                .trim_start_matches(|c: char| STAT_KEY_TRIM_CHARS.contains(&c) || c.is_whitespace())
                .to_string();
            stats.insert(key, text);
        }
    }

    for row in node.select(&TABLE_ROW) {
        let text = element_text(row);
        if STAT_ABBREVIATION.is_match(&text) {
            let key = text.split(':').next().unwrap_or_default().trim().to_string();
            stats.insert(key, text);
        }
    }
}

/// `Passive:` and `Active:` lines in document order, duplicates kept.
fn effect_lines(document: &Html) -> (Vec<String>, Vec<String>) {
    let lines: Vec<ElementRef<'_>> = match document.select(&CONTENT_TEXT).next() {
        Some(content) => content.select(&EFFECT_LINE).collect(),
        None => document.select(&EFFECT_LINE).collect(),
    };

    let mut passives = Vec::new();
    let mut actives = Vec::new();
    for line in lines {
        let text = element_text(line);
        if PASSIVE_LINE.is_match(&text) {
            passives.push(text);
        } else if ACTIVE_LINE.is_match(&text) {
            actives.push(text);
        }
    }
    (passives, actives)
}

fn description(document: &Html) -> Description {
    ITEM_DESCRIPTION
        .iter()
        .find_map(|selector| document.select(selector).next())
        .map(|node| Description {
            html: node.html(),
            text: element_text(node),
        })
        .unwrap_or_default()
}
