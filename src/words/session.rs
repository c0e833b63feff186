//! The currently displayed root and its graph.

use log::{info, warn};

use super::dictionary::Dictionary;
use super::error::Result;
use super::graph::{VerbGraph, build_graph};
use super::layout::{LayoutConfig, clamp_position};
use super::model::RootWord;

/// Graph state for one selected root. Replaced wholesale on the next
/// selection.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphSession {
	root_index: usize,
	root: String,
	graph: VerbGraph,
}

impl GraphSession {
	/// Builds the graph for `root`, found at `root_index` in its dictionary.
	pub fn new(root_index: usize, root: &RootWord) -> Self {
		Self {
			root_index,
			root: root.german().to_owned(),
			graph: build_graph(root),
		}
	}

	/// Index of the root in the dictionary.
	pub fn root_index(&self) -> usize {
		self.root_index
	}

	/// German spelling of the root.
	pub fn root(&self) -> &str {
		&self.root
	}

	/// Nodes and links.
	pub fn graph(&self) -> &VerbGraph {
		&self.graph
	}

	/// Clamps the proposed position of node `index` and stores it.
	pub fn apply_position(
		&mut self,
		index: usize,
		proposed: (f64, f64),
		config: &LayoutConfig,
	) -> Option<(f64, f64)> {
		let bounds = config.bounds();
		let node = self.graph.nodes_mut().get_mut(index)?;
		node.set_position(clamp_position(proposed, config.node_radius(node.is_hub), bounds));
		Some(node.position())
	}

	/// Clamps one tick's worth of proposed positions, in node order, and
	/// returns what was stored.
	pub fn apply_positions(
		&mut self,
		proposed: &[(f64, f64)],
		config: &LayoutConfig,
	) -> Vec<(f64, f64)> {
		let bounds = config.bounds();
		self.graph
			.nodes_mut()
			.iter_mut()
			.zip(proposed)
			.map(|(node, &p)| {
				node.set_position(clamp_position(p, config.node_radius(node.is_hub), bounds));
				node.position()
			})
			.collect()
	}
}

/// The loaded dictionary plus whichever root is on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewer {
	dictionary: Dictionary,
	session: Option<GraphSession>,
}

impl Viewer {
	/// Shows the first root, if any.
	pub fn new(dictionary: Dictionary) -> Self {
		let session = dictionary.select_root(0).ok();
		Self {
			dictionary,
			session,
		}
	}

	/// The loaded dictionary.
	pub fn dictionary(&self) -> &Dictionary {
		&self.dictionary
	}

	/// The graph on screen.
	pub fn session(&self) -> Option<&GraphSession> {
		self.session.as_ref()
	}

	/// Mutable access for the layout adapter.
	pub fn session_mut(&mut self) -> Option<&mut GraphSession> {
		self.session.as_mut()
	}

	/// Replaces the current graph with the one for `index`. On error the
	/// current graph stays.
	pub fn select_root(&mut self, index: usize) -> Result<()> {
		match self.dictionary.select_root(index) {
			Ok(session) => {
				info!("Showing root {}", session.root());
				self.session = Some(session);
				Ok(())
			}
			Err(e) => {
				warn!("Ignoring root selection: {e}");
				Err(e)
			}
		}
	}
}
