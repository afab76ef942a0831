//! DOM traversal helpers shared by the extractors.
//!
//! Everything here reads the parsed tree; nothing detaches or mutates nodes,
//! so one `Html` can be extracted any number of times.

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashMap;

/// Trim every text fragment, drop empty ones and join with single spaces.
fn join_fragments<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    fragments
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn text_fragments<'a>(node: NodeRef<'a, Node>) -> impl Iterator<Item = &'a str> {
    node.descendants()
        .filter_map(|n| n.value().as_text().map(|text| &**text))
}

/// Flattened text of an element: fragments trimmed and space-joined.
#[must_use]
pub fn element_text(element: ElementRef<'_>) -> String {
    join_fragments(element.text())
}

/// Serialize a node back to markup. Comments and doctypes are dropped.
#[must_use]
pub fn node_html(node: NodeRef<'_, Node>) -> String {
    match node.value() {
        Node::Element(_) => ElementRef::wrap(node)
            .map(|element| element.html())
            .unwrap_or_default(),
        Node::Text(text) => html_escape::encode_text(&**text).into_owned(),
        _ => String::new(),
    }
}

/// Heading level for `h1`..`h6`, `None` for anything else.
#[must_use]
pub fn heading_level(element: ElementRef<'_>) -> Option<u8> {
    let name = element.value().name();
    let digit = name.strip_prefix('h')?;
    match digit.parse::<u8>() {
        Ok(level @ 1..=6) if digit.len() == 1 => Some(level),
        _ => None,
    }
}

/// Every element after `element` in document order, skipping its own subtree.
pub fn following_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    std::iter::once(*element)
        .chain(element.ancestors())
        .flat_map(|node| node.next_siblings())
        .flat_map(|sibling| sibling.descendants())
        .filter_map(ElementRef::wrap)
}

/// Element siblings that follow `element`, in order.
pub fn following_element_siblings<'a>(
    element: ElementRef<'a>,
) -> impl Iterator<Item = ElementRef<'a>> {
    element.next_siblings().filter_map(ElementRef::wrap)
}

/// Preorder position of every node in a document.
///
/// Used to answer "nearest preceding X" questions without walking the tree
/// backwards for each query.
pub struct DocumentOrder {
    positions: HashMap<NodeId, usize>,
}

impl DocumentOrder {
    #[must_use]
    pub fn new(document: &Html) -> Self {
        let positions = document
            .tree
            .root()
            .descendants()
            .enumerate()
            .map(|(index, node)| (node.id(), index))
            .collect();
        Self { positions }
    }

    #[must_use]
    pub fn position(&self, element: ElementRef<'_>) -> Option<usize> {
        self.positions.get(&element.id()).copied()
    }
}

/// A read-only view over a run of sibling nodes, or over one container's
/// children.
///
/// Searching a region behaves like searching a detached wrapper element that
/// holds those nodes, without ever moving them out of the document.
#[derive(Debug, Clone)]
pub struct Region<'a> {
    nodes: Vec<NodeRef<'a, Node>>,
    container: Option<ElementRef<'a>>,
}

impl<'a> Region<'a> {
    /// Siblings after `start` up to, not including, the first element for
    /// which `is_boundary` returns true.
    pub fn siblings_until(
        start: ElementRef<'a>,
        mut is_boundary: impl FnMut(ElementRef<'a>) -> bool,
    ) -> Self {
        let nodes = start
            .next_siblings()
            .take_while(|node| ElementRef::wrap(*node).is_none_or(|el| !is_boundary(el)))
            .collect();
        Self {
            nodes,
            container: None,
        }
    }

    /// The contents of `container`; the container itself is not searched.
    #[must_use]
    pub fn within(container: ElementRef<'a>) -> Self {
        Self {
            nodes: container.children().collect(),
            container: Some(container),
        }
    }

    /// All elements in the region matching `selector`, in document order.
    #[must_use]
    pub fn select(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        let mut found = Vec::new();
        for element in self.nodes.iter().copied().filter_map(ElementRef::wrap) {
            if selector.matches(&element) {
                found.push(element);
            }
            found.extend(element.select(selector));
        }
        found
    }

    /// First element in the region matching `selector`.
    #[must_use]
    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.nodes
            .iter()
            .copied()
            .filter_map(ElementRef::wrap)
            .find_map(|element| {
                if selector.matches(&element) {
                    Some(element)
                } else {
                    element.select(selector).next()
                }
            })
    }

    /// Markup of the region: the container's own markup, or the captured
    /// siblings wrapped in a `<div>`.
    #[must_use]
    pub fn html(&self) -> String {
        match self.container {
            Some(container) => container.html(),
            None => {
                let inner: String = self.nodes.iter().copied().map(node_html).collect();
                format!("<div>{inner}</div>")
            }
        }
    }

    /// Flattened text of every node in the region.
    #[must_use]
    pub fn text(&self) -> String {
        join_fragments(self.nodes.iter().copied().flat_map(text_fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn element_text_joins_trimmed_fragments() {
        let document = Html::parse_fragment("<p>  Deals <b>60</b>\n magic damage </p>");
        assert_eq!(element_text(first(&document, "p")), "Deals 60 magic damage");
    }

    #[test]
    fn heading_level_only_accepts_h1_to_h6() {
        let document = Html::parse_fragment("<h3>a</h3><hr><h7>b</h7>");
        assert_eq!(heading_level(first(&document, "h3")), Some(3));
        assert_eq!(heading_level(first(&document, "hr")), None);
    }

    #[test]
    fn following_elements_skip_own_subtree() {
        let document =
            Html::parse_fragment("<section><h2><span>x</span></h2></section><div id='next'></div>");
        let heading = first(&document, "h2");
        let names: Vec<_> = following_elements(heading)
            .map(|el| el.value().name().to_string())
            .collect();
        assert_eq!(names, vec!["div"]);
    }

    #[test]
    fn region_stops_at_boundary_and_leaves_document_intact() {
        let html = "<div><h3>Q</h3><p>one</p>text<p>two</p><h3>W</h3><p>three</p></div>";
        let document = Html::parse_fragment(html);
        let heading = first(&document, "h3");
        let region = Region::siblings_until(heading, |el| heading_level(el).is_some());

        assert_eq!(region.text(), "one text two");
        assert_eq!(region.html(), "<div><p>one</p>text<p>two</p></div>");

        let paragraph = Selector::parse("p").unwrap();
        assert_eq!(region.select(&paragraph).len(), 2);
        // The document still holds every paragraph.
        assert_eq!(document.select(&paragraph).count(), 3);
    }

    #[test]
    fn document_order_ranks_preorder() {
        let document = Html::parse_fragment("<a href='/x'>x</a><span>tag</span>");
        let order = DocumentOrder::new(&document);
        let link = order.position(first(&document, "a")).unwrap();
        let span = order.position(first(&document, "span")).unwrap();
        assert!(link < span);
    }
}
