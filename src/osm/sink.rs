//! The consumer side of the decoder.

use crate::osm::element::{Element, Node, Relation, Way};
use crate::osm::header::HeaderRecord;

/// Receives decoded entities in file order.
///
/// Blocks are decoded in full before delivery begins, so a sink never
/// observes part of a block that later failed.
pub trait EntitySink {
    fn header(&mut self, header: HeaderRecord);

    fn node(&mut self, node: Node);

    fn way(&mut self, way: Way);

    fn relation(&mut self, relation: Relation);

    /// Called for every block whose type label was not recognised.
    fn skipped_block(&mut self, _label: &str) {}
}

/// A sink which keeps everything it is given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collector {
    pub headers: Vec<HeaderRecord>,
    pub elements: Vec<Element>,
    pub skipped: Vec<String>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.elements.iter().filter_map(|element| match element {
            Element::Node(node) => Some(node),
            _ => None,
        })
    }

    pub fn ways(&self) -> impl Iterator<Item = &Way> {
        self.elements.iter().filter_map(|element| match element {
            Element::Way(way) => Some(way),
            _ => None,
        })
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.elements.iter().filter_map(|element| match element {
            Element::Relation(relation) => Some(relation),
            _ => None,
        })
    }
}

impl EntitySink for Collector {
    fn header(&mut self, header: HeaderRecord) {
        self.headers.push(header);
    }

    fn node(&mut self, node: Node) {
        self.elements.push(Element::Node(node));
    }

    fn way(&mut self, way: Way) {
        self.elements.push(Element::Way(way));
    }

    fn relation(&mut self, relation: Relation) {
        self.elements.push(Element::Relation(relation));
    }

    fn skipped_block(&mut self, label: &str) {
        self.skipped.push(label.to_string());
    }
}
