//! CSS selectors shared by the extractors.
//!
//! These are parsed once at first access and cached forever.
//! Hardcoded selectors should NEVER fail to parse - if they do, it's a compile-time bug.

use scraper::Selector;
use std::sync::LazyLock;

fn compile(css: &str) -> Selector {
    match Selector::parse(css) {
        Ok(selector) => selector,
        Err(e) => panic!("BUG: hardcoded CSS selector '{css}' is invalid: {e}"),
    }
}

// ============================================================================
// Champion pages
// ============================================================================

pub(crate) static STAT_HEADING: LazyLock<Selector> = LazyLock::new(|| compile("h2, h3"));

pub(crate) static TABLE: LazyLock<Selector> = LazyLock::new(|| compile("table"));

pub(crate) static TABLE_ROW: LazyLock<Selector> = LazyLock::new(|| compile("tr"));

pub(crate) static TABLE_CELL: LazyLock<Selector> = LazyLock::new(|| compile("th, td"));

pub(crate) static ABILITY_HEADING: LazyLock<Selector> = LazyLock::new(|| compile("h2, h3, h4"));

pub(crate) static ABILITY_CARD: LazyLock<Selector> =
    LazyLock::new(|| compile(".ability, .skill, .pi-ability, .character-ability"));

pub(crate) static LABELED_LINE: LazyLock<Selector> = LazyLock::new(|| compile("li, p, tr"));

pub(crate) static DEFINITION_TERM: LazyLock<Selector> = LazyLock::new(|| compile("dt"));

pub(crate) static BOLD: LazyLock<Selector> = LazyLock::new(|| compile("b, strong"));

pub(crate) static MINOR_HEADING: LazyLock<Selector> = LazyLock::new(|| compile("h5, h6"));

/// Description candidates, in priority order (not document order)
pub(crate) static ABILITY_DESCRIPTION: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    ["p", "div", "section", ".ability-text", ".skill-text"]
        .into_iter()
        .map(compile)
        .collect()
});

// ============================================================================
// Item pages
// ============================================================================

pub(crate) static LINK: LazyLock<Selector> = LazyLock::new(|| compile("a[href]"));

pub(crate) static ANCHOR: LazyLock<Selector> = LazyLock::new(|| compile("a"));

pub(crate) static TAG_CHIP: LazyLock<Selector> =
    LazyLock::new(|| compile(".category, .tag, .label, .mw-tag-marker"));

pub(crate) static CATEGORY_LINKS: LazyLock<Selector> =
    LazyLock::new(|| compile(".mw-normal-catlinks"));

pub(crate) static INFOBOX: LazyLock<Selector> = LazyLock::new(|| {
    compile(".infobox, .item-infobox, .portable-infobox, .pi-theme-item, .pi-box")
});

pub(crate) static CONTENT_TEXT: LazyLock<Selector> = LazyLock::new(|| compile("#mw-content-text"));

pub(crate) static UNORDERED_LIST: LazyLock<Selector> = LazyLock::new(|| compile("ul"));

pub(crate) static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| compile("li"));

pub(crate) static EFFECT_LINE: LazyLock<Selector> = LazyLock::new(|| compile("p, li"));

/// Item description candidates, in priority order
pub(crate) static ITEM_DESCRIPTION: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        ".pi-data-value",
        ".infobox-desc",
        ".item-desc",
        ".pi-item-spacing",
        "p",
    ]
    .into_iter()
    .map(compile)
    .collect()
});
