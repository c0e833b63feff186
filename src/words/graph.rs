//! Turning a root verb into a hub-and-spoke graph.

use super::model::{RootWord, Word};

/// Rest length and stroke of a link, decided by separability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkClass {
	/// Inseparable prefix: short, thick, solid.
	#[default]
	Fused,
	/// Separable prefix: long, thin, dashed.
	Separable,
}

impl LinkClass {
	/// Class for a link whose endpoints have the given separability.
	pub fn for_link(separable: bool) -> Self {
		if separable {
			Self::Separable
		} else {
			Self::Fused
		}
	}

	/// Target distance between the two endpoints.
	pub fn rest_length(self) -> f64 {
		match self {
			Self::Fused => 150.0,
			Self::Separable => 300.0,
		}
	}

	/// Line width in canvas pixels.
	pub fn stroke_width(self) -> f64 {
		match self {
			Self::Fused => 6.0,
			Self::Separable => 2.0,
		}
	}

	/// Dash length, if the line is dashed.
	pub fn dash(self) -> Option<f64> {
		match self {
			Self::Fused => None,
			Self::Separable => Some(10.0),
		}
	}
}

/// A word as placed in the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Full German word.
	pub label: String,
	/// Text drawn on the node: the whole root, or a child's prefix.
	pub short_label: String,
	/// English translation shown on reveal.
	pub translation: String,
	/// True only for the root.
	pub is_hub: bool,
	/// Copied from the word.
	pub separable: bool,
	/// Sequential id from 1, used for colour.
	pub group: u32,
	position: (f64, f64),
}

impl GraphNode {
	fn new(word: &Word, root: &str, group: u32) -> Self {
		let is_hub = word.is_root();
		let short_label = if is_hub {
			word.german.clone()
		} else {
			prefix_of(&word.german, root).to_owned()
		};
		Self {
			label: word.german.clone(),
			short_label,
			translation: word.english.clone(),
			is_hub,
			separable: word.separable,
			group,
			position: (0.0, 0.0),
		}
	}

	/// Current position. Only [`GraphSession`] moves nodes, always clamped.
	///
	/// [`GraphSession`]: super::session::GraphSession
	pub fn position(&self) -> (f64, f64) {
		self.position
	}

	pub(crate) fn set_position(&mut self, position: (f64, f64)) {
		self.position = position;
	}
}

/// `abfahren` under `fahren` reads `ab`; anything else keeps its full spelling.
fn prefix_of<'a>(child: &'a str, root: &str) -> &'a str {
	match child.strip_suffix(root) {
		Some(prefix) if !prefix.is_empty() => prefix,
		_ => child,
	}
}

/// An edge from the hub to one spoke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphLink {
	/// Index of the hub node.
	pub hub: usize,
	/// Index of the spoke node.
	pub spoke: usize,
	/// Either endpoint is separable.
	pub separable: bool,
	/// Distance and stroke class.
	pub class: LinkClass,
}

/// Nodes and links derived from one root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerbGraph {
	nodes: Vec<GraphNode>,
	links: Vec<GraphLink>,
}

impl VerbGraph {
	/// Hub first, then children in input order.
	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	/// One link per child.
	pub fn links(&self) -> &[GraphLink] {
		&self.links
	}

	pub(crate) fn nodes_mut(&mut self) -> &mut [GraphNode] {
		&mut self.nodes
	}

	/// The hub node, absent only for a default-constructed graph.
	pub fn hub(&self) -> Option<&GraphNode> {
		self.nodes.first().filter(|n| n.is_hub)
	}

	/// Splits into `(nodes, links)`.
	pub fn into_parts(self) -> (Vec<GraphNode>, Vec<GraphLink>) {
		(self.nodes, self.links)
	}
}

/// Builds the star graph for `root`.
pub fn build_graph(root: &RootWord) -> VerbGraph {
	let mut nodes = Vec::with_capacity(root.children().len() + 1);
	nodes.push(GraphNode::new(root.word(), root.german(), 1));
	nodes.extend(
		root.children()
			.iter()
			.zip(2..)
			.map(|(child, group)| GraphNode::new(child, root.german(), group)),
	);

	let hub = 0;
	let links = nodes
		.iter()
		.enumerate()
		.filter(|(_, node)| !node.is_hub)
		.map(|(spoke, node)| {
			let separable = nodes[hub].separable || node.separable;
			GraphLink {
				hub,
				spoke,
				separable,
				class: LinkClass::for_link(separable),
			}
		})
		.collect();

	VerbGraph { nodes, links }
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn fahren() -> RootWord {
		RootWord::new("fahren", "drive")
			.with_child("abfahren", "depart", true)
			.with_child("verfahren", "proceed", false)
	}

	#[test]
	fn hub_comes_first_then_children_in_order() {
		let graph = build_graph(&fahren());
		let nodes: Vec<_> = graph
			.nodes
			.iter()
			.map(|n| (n.label.as_str(), n.is_hub, n.separable, n.group))
			.collect();
		assert_eq!(
			nodes,
			[
				("fahren", true, false, 1),
				("abfahren", false, true, 2),
				("verfahren", false, false, 3),
			]
		);
	}

	#[test]
	fn links_follow_separability() {
		let graph = build_graph(&fahren());
		assert_eq!(
			graph.links,
			[
				GraphLink {
					hub: 0,
					spoke: 1,
					separable: true,
					class: LinkClass::Separable,
				},
				GraphLink {
					hub: 0,
					spoke: 2,
					separable: false,
					class: LinkClass::Fused,
				},
			]
		);
		assert!(LinkClass::Separable.rest_length() > LinkClass::Fused.rest_length());
		assert!(LinkClass::Separable.stroke_width() < LinkClass::Fused.stroke_width());
		assert_eq!(LinkClass::Fused.dash(), None);
	}

	#[test]
	fn childless_root_is_a_single_node() {
		let graph = build_graph(&RootWord::new("sein", "be"));
		assert_eq!(graph.hub().map(|n| n.label.as_str()), Some("sein"));
		let (nodes, links) = graph.into_parts();
		assert_eq!(nodes.len(), 1);
		assert!(links.is_empty());
	}

	#[test]
	fn short_labels_strip_the_root() {
		let root = RootWord::new("fahren", "drive")
			.with_child("abfahren", "depart", true)
			.with_child("fahren", "drive", false)
			.with_child("erfahrung", "experience", false);
		let labels: Vec<_> = build_graph(&root)
			.nodes
			.into_iter()
			.map(|n| n.short_label)
			.collect();
		assert_eq!(labels, ["fahren", "ab", "fahren", "erfahrung"]);
	}

	#[test]
	fn default_graph_has_no_hub() {
		assert!(VerbGraph::default().hub().is_none());
		assert_eq!(build_graph(&fahren()).hub().map(|n| n.group), Some(1));
	}

	#[test]
	fn rebuilding_yields_an_equal_graph() {
		let root = fahren();
		assert_eq!(build_graph(&root), build_graph(&root));
	}
}
