//! Base-statistics table extraction for champion pages.
//!
//! The table is looked up next to a "Base stats" heading first; every large
//! table on the page is scanned afterwards so pages without that heading
//! still yield their stats.

use regex::Regex;
use scraper::{ElementRef, Html};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::dom::{element_text, following_elements};
use super::selectors::{STAT_HEADING, TABLE, TABLE_CELL, TABLE_ROW};
use super::vocab::{BASE_STAT_KEYWORDS, MAX_STAT_KEY_CHARS};
use crate::utils::string_utils::char_len;

/// Tables with fewer rows are not scanned unless they follow the heading
const MIN_FALLBACK_TABLE_ROWS: usize = 5;

static BASE_STATS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bBase\b.*\bstat").expect("BUG: hardcoded base stats regex is valid")
});

static PAREN_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(.*?\)\s*").expect("BUG: hardcoded qualifier regex is valid")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("BUG: hardcoded whitespace regex is valid"));

/// Extract base stats keyed by normalized stat name.
///
/// Returns an empty map when the page has no usable table.
#[must_use]
pub fn extract_base_stats(document: &Html) -> BTreeMap<String, String> {
    let mut stats = BTreeMap::new();

    for table in candidate_tables(document) {
        for row in table.select(&TABLE_ROW) {
            if let Some((key, value)) = stat_row(row) {
                stats.insert(normalize_stat_key(&key), value);
            }
        }
    }

    tracing::debug!(count = stats.len(), "extracted base stats");
    stats
}

/// The table after the "Base stats" heading (if any), then every table with
/// at least `MIN_FALLBACK_TABLE_ROWS` rows.
fn candidate_tables(document: &Html) -> Vec<ElementRef<'_>> {
    let mut candidates: Vec<ElementRef<'_>> = heading_table(document).into_iter().collect();
    candidates.extend(
        document
            .select(&TABLE)
            .filter(|table| table.select(&TABLE_ROW).count() >= MIN_FALLBACK_TABLE_ROWS),
    );
    candidates
}

fn heading_table(document: &Html) -> Option<ElementRef<'_>> {
    let heading = document
        .select(&STAT_HEADING)
        .find(|heading| BASE_STATS_HEADING.is_match(&element_text(*heading)))?;

    let next = following_elements(heading)
        .find(|element| matches!(element.value().name(), "table" | "div"))?;

    if next.value().name() == "table" {
        Some(next)
    } else {
        next.select(&TABLE).next()
    }
}

/// A `(key, value)` pair from a two-cell row whose key names a known stat.
fn stat_row(row: ElementRef<'_>) -> Option<(String, String)> {
    let cells: Vec<_> = row.select(&TABLE_CELL).collect();
    let [key_cell, value_cell] = cells.as_slice() else {
        return None;
    };

    let key = element_text(*key_cell);
    let value = element_text(*value_cell);
    if key.is_empty() || value.is_empty() || char_len(&key) > MAX_STAT_KEY_CHARS {
        return None;
    }

    let lowered = key.to_lowercase();
    BASE_STAT_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
        .then_some((key, value))
}

/// `"Attack damage (AD)"` becomes `"attack_damage"`.
#[must_use]
pub fn normalize_stat_key(raw: &str) -> String {
    let unqualified = PAREN_QUALIFIER.replace_all(raw, "");
    let lowered = unqualified.trim().to_lowercase();
    WHITESPACE_RUN.replace_all(&lowered, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_qualifiers() {
        assert_eq!(normalize_stat_key("Attack damage (AD)"), "attack_damage");
        assert_eq!(normalize_stat_key("  Health  regen (per 5s)"), "health_regen");
        assert_eq!(normalize_stat_key("Mana"), "mana");
    }

    #[test]
    fn rows_with_wrong_cell_count_are_skipped() {
        let document = Html::parse_document(
            "<table><tr><th>Health</th><td>500</td><td>+90</td></tr>\
             <tr><th>Armor</th><td>30</td></tr></table>",
        );
        let row_selector = &*TABLE_ROW;
        let rows: Vec<_> = document.select(row_selector).collect();
        assert!(stat_row(rows[0]).is_none());
        assert_eq!(
            stat_row(rows[1]),
            Some(("Armor".to_string(), "30".to_string()))
        );
    }
}
