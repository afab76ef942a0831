//! Ability extraction for champion pages.
//!
//! Champion pages lay abilities out in two ways:
//! 1. A heading per ability (`Q: Orb of Deception`) followed by loose siblings
//! 2. Card containers (`.ability`, `.skill`, ...) with a nested slot label
//!
//! Headings are preferred; cards are only read when no heading matched. Each
//! field is resolved through an ordered list of strategies, first hit wins.

use regex::Regex;
use scraper::{ElementRef, Html};
use std::collections::HashSet;
use std::sync::LazyLock;

use super::dom::{Region, element_text, following_element_siblings, heading_level};
use super::schema::{AbilityRecord, AbilitySlot, Description};
use super::selectors::{
    ABILITY_CARD, ABILITY_DESCRIPTION, ABILITY_HEADING, BOLD, DEFINITION_TERM, LABELED_LINE,
    MINOR_HEADING,
};
use super::vocab::{
    COOLDOWN_LABELS, COST_LABELS, DESCRIPTION_REJECT_PREFIXES, MAX_ABILITY_NAME_CHARS,
    RANGE_LABELS,
};
use crate::utils::string_utils::char_len;

static ABILITY_HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(Passive|P|Q|W|E|R)\s*[:\-]?\s*(.*)?$")
        .expect("BUG: hardcoded ability heading regex is valid")
});

static SLOT_LABEL_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ability-slot|skill-key|slot").expect("BUG: hardcoded slot class regex is valid")
});

static COOLDOWN_LINE: LazyLock<Regex> = LazyLock::new(|| label_pattern(COOLDOWN_LABELS));
static COST_LINE: LazyLock<Regex> = LazyLock::new(|| label_pattern(COST_LABELS));
static RANGE_LINE: LazyLock<Regex> = LazyLock::new(|| label_pattern(RANGE_LABELS));

static LABEL_PREFIXED: LazyLock<Regex> = LazyLock::new(|| {
    let words = DESCRIPTION_REJECT_PREFIXES.join("|");
    Regex::new(&format!(r"(?i)^({words})\b")).expect("BUG: label prefix regex is valid")
});

/// `^(Label|Other)\s*[:：]`, case-insensitive
fn label_pattern(labels: &[&str]) -> Regex {
    let alternatives = labels
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^({alternatives})\s*[:：]"))
        .expect("BUG: label regexes are built from escaped literals")
}

/// One ability's slice of the page before field extraction
struct AbilityBlock<'a> {
    slot: AbilitySlot,
    /// Text after the slot token in the heading (`Q: Orb of Deception`)
    heading_name: Option<String>,
    region: Region<'a>,
}

type FieldStrategy = for<'a, 'b> fn(&'b AbilityBlock<'a>) -> Option<String>;

/// Extract one record per ability slot, in page order.
#[must_use]
pub fn extract_abilities(document: &Html) -> Vec<AbilityRecord> {
    let mut blocks = heading_blocks(document);
    if blocks.is_empty() {
        blocks = card_blocks(document);
    }

    let mut seen = HashSet::new();
    let spells: Vec<AbilityRecord> = blocks
        .iter()
        .filter(|block| seen.insert(block.slot))
        .map(ability_record)
        .collect();

    tracing::debug!(
        blocks = blocks.len(),
        spells = spells.len(),
        "extracted abilities"
    );
    spells
}

/// Parse `"Q: Orb of Deception"` into a slot and optional trailing name.
#[must_use]
pub fn parse_ability_heading(text: &str) -> Option<(AbilitySlot, Option<String>)> {
    let caps = ABILITY_HEADING_PATTERN.captures(text)?;
    let slot = AbilitySlot::from_token(caps.get(1)?.as_str())?;
    let name = caps
        .get(2)
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty());
    Some((slot, name))
}

fn is_ability_heading(element: ElementRef<'_>) -> bool {
    matches!(heading_level(element), Some(2..=4))
        && parse_ability_heading(&element_text(element)).is_some()
}

fn heading_blocks(document: &Html) -> Vec<AbilityBlock<'_>> {
    document
        .select(&ABILITY_HEADING)
        .filter_map(|heading| {
            let (slot, heading_name) = parse_ability_heading(&element_text(heading))?;
            let level = heading_level(heading)?;
            let region = Region::siblings_until(heading, |sibling| {
                heading_level(sibling).is_some_and(|other| other <= level)
                    || is_ability_heading(sibling)
            });
            Some(AbilityBlock {
                slot,
                heading_name,
                region,
            })
        })
        .collect()
}

fn card_blocks(document: &Html) -> Vec<AbilityBlock<'_>> {
    document
        .select(&ABILITY_CARD)
        .map(|card| {
            let slot = card_slot_label(card)
                .and_then(|label| AbilitySlot::from_token(&label))
                .unwrap_or(AbilitySlot::Unknown);
            AbilityBlock {
                slot,
                heading_name: None,
                region: Region::within(card),
            }
        })
        .collect()
}

fn card_slot_label(card: ElementRef<'_>) -> Option<String> {
    card.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| {
            element
                .value()
                .classes()
                .any(|class| SLOT_LABEL_CLASS.is_match(class))
        })
        .map(element_text)
}

fn ability_record(block: &AbilityBlock<'_>) -> AbilityRecord {
    AbilityRecord {
        slot: block.slot,
        name: first_present(block, NAME_STRATEGIES).unwrap_or_default(),
        cooldown: first_present(block, COOLDOWN_STRATEGIES),
        cost: first_present(block, COST_STRATEGIES),
        range: first_present(block, RANGE_STRATEGIES),
        description: description(&block.region),
    }
}

fn first_present(block: &AbilityBlock<'_>, strategies: &[FieldStrategy]) -> Option<String> {
    strategies.iter().find_map(|strategy| strategy(block))
}

// ============================================================================
// Name
// ============================================================================

const NAME_STRATEGIES: &[FieldStrategy] = &[bold_name, minor_heading_name, heading_fragment_name];

fn bold_name(block: &AbilityBlock<'_>) -> Option<String> {
    let bold = block.region.select_first(&BOLD)?;
    let text = element_text(bold);
    (char_len(&text) <= MAX_ABILITY_NAME_CHARS).then_some(text)
}

fn minor_heading_name(block: &AbilityBlock<'_>) -> Option<String> {
    block.region.select_first(&MINOR_HEADING).map(element_text)
}

/// Text after the slot token in the block's own heading. Card blocks have none.
fn heading_fragment_name(block: &AbilityBlock<'_>) -> Option<String> {
    block.heading_name.clone()
}

// ============================================================================
// Labeled values
// ============================================================================

const COOLDOWN_STRATEGIES: &[FieldStrategy] = &[cooldown_line, cooldown_definition];
const COST_STRATEGIES: &[FieldStrategy] = &[cost_line, cost_definition];
const RANGE_STRATEGIES: &[FieldStrategy] = &[range_line, range_definition];

fn cooldown_line(block: &AbilityBlock<'_>) -> Option<String> {
    prefixed_line(&block.region, &COOLDOWN_LINE)
}

fn cooldown_definition(block: &AbilityBlock<'_>) -> Option<String> {
    definition_pair(&block.region, COOLDOWN_LABELS)
}

fn cost_line(block: &AbilityBlock<'_>) -> Option<String> {
    prefixed_line(&block.region, &COST_LINE)
}

fn cost_definition(block: &AbilityBlock<'_>) -> Option<String> {
    definition_pair(&block.region, COST_LABELS)
}

fn range_line(block: &AbilityBlock<'_>) -> Option<String> {
    prefixed_line(&block.region, &RANGE_LINE)
}

fn range_definition(block: &AbilityBlock<'_>) -> Option<String> {
    definition_pair(&block.region, RANGE_LABELS)
}

/// `li`/`p`/`tr` text starting with `Label:`; the remainder after the label.
fn prefixed_line(region: &Region<'_>, pattern: &Regex) -> Option<String> {
    region.select(&LABELED_LINE).into_iter().find_map(|line| {
        let text = element_text(line);
        let value = pattern.find(&text)?;
        let rest = text[value.end()..].trim();
        (!rest.is_empty()).then(|| rest.to_string())
    })
}

/// `<dt>Label</dt><dd>value</dd>`
fn definition_pair(region: &Region<'_>, labels: &[&str]) -> Option<String> {
    region.select(&DEFINITION_TERM).into_iter().find_map(|term| {
        let term_text = element_text(term).to_lowercase();
        if !labels
            .iter()
            .any(|label| term_text.contains(&label.to_lowercase()))
        {
            return None;
        }
        following_element_siblings(term)
            .find(|sibling| sibling.value().name() == "dd")
            .map(element_text)
            .filter(|value| !value.is_empty())
    })
}

// ============================================================================
// Description
// ============================================================================

/// First candidate that is not a `Cooldown:`/`Cost:`/`Range:` line, in
/// selector priority order; the whole region when none qualifies.
fn description(region: &Region<'_>) -> Description {
    let chosen = ABILITY_DESCRIPTION
        .iter()
        .flat_map(|selector| region.select(selector))
        .find(|candidate| !LABEL_PREFIXED.is_match(&element_text(*candidate)));

    match chosen {
        Some(node) => Description {
            html: node.html(),
            text: element_text(node),
        },
        None => Description {
            html: region.html(),
            text: region.text(),
        },
    }
}
