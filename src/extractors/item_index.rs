//! Item index extraction.
//!
//! The index page is a loose grid of links. Any site-relative article link
//! with a short label is taken as an item; tag chips placed after a link are
//! attached to that link's item.

use scraper::{ElementRef, Html};
use std::collections::HashMap;
use url::Url;

use super::dom::{DocumentOrder, element_text};
use super::schema::ItemSummary;
use super::selectors::{LINK, TAG_CHIP};
use super::vocab::{BANNED_INDEX_CATEGORIES, MAX_ITEM_NAME_CHARS, NON_ARTICLE_HREF_MARKERS};
use crate::utils::resolve_site_path;
use crate::utils::string_utils::char_len;

/// Extract item summaries, sorted case-insensitively by name.
///
/// Each name appears once; the first link carrying it decides the URL.
#[must_use]
pub fn index_entries(document: &Html, base: &Url) -> Vec<ItemSummary> {
    let mut items: Vec<ItemSummary> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for link in document.select(&LINK) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let name = element_text(link);
        if !is_item_link(href, &name) || by_name.contains_key(&name) {
            continue;
        }
        let Some(url) = resolve_site_path(base, href) else {
            continue;
        };
        by_name.insert(name.clone(), items.len());
        items.push(ItemSummary {
            name,
            url,
            tags: Vec::new(),
        });
    }

    attach_tags(document, &by_name, &mut items);

    items.sort_by_cached_key(|item| item.name.to_lowercase());
    tracing::debug!(count = items.len(), "extracted item index");
    items
}

/// Site-relative article link whose label looks like an item name.
#[must_use]
pub fn is_item_link(href: &str, name: &str) -> bool {
    if name.is_empty() || char_len(name) > MAX_ITEM_NAME_CHARS {
        return false;
    }
    if !href.starts_with('/')
        || NON_ARTICLE_HREF_MARKERS
            .iter()
            .any(|marker| href.contains(marker))
    {
        return false;
    }
    !is_banned_category(name)
}

/// Runes, wards, trinkets and list/meta pages share the index with items.
#[must_use]
pub fn is_banned_category(name: &str) -> bool {
    let lowered = name.to_lowercase();
    BANNED_INDEX_CATEGORIES
        .iter()
        .any(|banned| lowered.contains(banned))
}

/// Give every tag chip to the item named by the nearest link before it.
fn attach_tags(document: &Html, by_name: &HashMap<String, usize>, items: &mut [ItemSummary]) {
    let order = DocumentOrder::new(document);

    // Links in document order, paired with their positions, for binary search.
    let links: Vec<(usize, ElementRef<'_>)> = document
        .select(&LINK)
        .filter_map(|link| Some((order.position(link)?, link)))
        .collect();

    for chip in document.select(&TAG_CHIP) {
        let tag = element_text(chip);
        if tag.is_empty() {
            continue;
        }
        let Some(chip_position) = order.position(chip) else {
            continue;
        };

        let preceding = links.partition_point(|(position, _)| *position < chip_position);
        let Some((_, link)) = preceding.checked_sub(1).map(|index| links[index]) else {
            continue;
        };

        if let Some(&index) = by_name.get(&element_text(link)) {
            items[index].tags.push(tag);
        }
    }
}
