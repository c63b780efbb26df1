//! The `Element` item, and the routing of a `PrimitiveGroup` to the
//! decoder of each encoding it carries.

use log::trace;

use crate::error::FormatError;
use crate::osm::element::variants::{Node, Relation, Way};
use crate::osm::model;
use crate::osm::primitive::PrimitiveScope;
use crate::osm::sink::EntitySink;

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Node(Node),
    Way(Way),
    Relation(Relation),
}

impl Element {
    /// Decodes every encoding present in the group, in the order plain
    /// nodes, ways, relations, dense nodes.
    ///
    /// Well-formed files populate a single encoding per group, but nothing
    /// enforces that, so all of them are checked.
    pub fn from_group(
        group: &model::PrimitiveGroup,
        scope: &PrimitiveScope,
    ) -> Result<Vec<Element>, FormatError> {
        let mut elements: Vec<Element> = Vec::with_capacity(
            group.nodes.len()
                + group.ways.len()
                + group.relations.len()
                + group.dense.as_ref().map_or(0, |dense| dense.id.len()),
        );

        for node in &group.nodes {
            elements.push(Element::Node(Node::from_raw(node, scope)?));
        }

        for way in &group.ways {
            elements.push(Element::Way(Way::from_raw(way, scope)?));
        }

        for relation in &group.relations {
            elements.push(Element::Relation(Relation::from_raw(relation, scope)?));
        }

        if let Some(dense) = &group.dense {
            elements.extend(Node::from_dense(dense, scope)?.into_iter().map(Element::Node));
        }

        if !group.changesets.is_empty() {
            trace!("Ignoring {} changeset entries", group.changesets.len());
        }

        Ok(elements)
    }

    pub fn id(&self) -> i64 {
        match self {
            Element::Node(node) => node.id,
            Element::Way(way) => way.id,
            Element::Relation(relation) => relation.id,
        }
    }

    pub fn str_type(&self) -> &str {
        match self {
            Element::Node(_) => "node",
            Element::Way(_) => "way",
            Element::Relation(_) => "relation",
        }
    }

    #[inline]
    pub fn deliver<S: EntitySink + ?Sized>(self, sink: &mut S) {
        match self {
            Element::Node(node) => sink.node(node),
            Element::Way(way) => sink.way(way),
            Element::Relation(relation) => sink.relation(relation),
        }
    }
}
