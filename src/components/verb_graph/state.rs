use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::reveal::{Reveal, RevealFrame};
use crate::words::{GraphNode, GraphSession, LayoutConfig, LinkClass};

/// d3's category20 palette.
const COLORS: &[&str] = &[
	"#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
	"#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
	"#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// Pointer travel below which a press counts as a click.
const CLICK_SLOP: f64 = 3.0;

/// Radius of the ring spokes start on.
const SEED_RING: f64 = 100.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub slot: usize,
	pub radius: f64,
	pub color: &'static str,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub slot: Option<usize>,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start: (f64, f64),
}

/// Layout adapter for one graph session: runs the simulation and routes every
/// position it proposes through the session's clamp.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, LinkClass>,
	pub session: GraphSession,
	pub config: LayoutConfig,
	pub drag: DragState,
	pub hover: Option<usize>,
	tooltip_synced: bool,
	reveals: Vec<Reveal>,
}

pub fn color_for(group: u32) -> &'static str {
	COLORS[(group.saturating_sub(1) as usize) % COLORS.len()]
}

impl ForceGraphState {
	pub fn new(mut session: GraphSession, config: LayoutConfig) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: config.charge,
			force_spring: config.spring,
			force_max: config.force_max,
			node_speed: config.node_speed,
			damping_factor: config.damping,
		});

		let (cx, cy) = (config.width / 2.0, config.height / 2.0);
		let spokes = session.graph().nodes().len().saturating_sub(1).max(1);
		let seeds: Vec<(f64, f64)> = session
			.graph()
			.nodes()
			.iter()
			.enumerate()
			.map(|(i, node)| {
				if node.is_hub {
					return (cx, cy);
				}
				let angle = (i as f64) * 2.0 * PI / spokes as f64;
				(cx + SEED_RING * angle.cos(), cy + SEED_RING * angle.sin())
			})
			.collect();
		let seeds = session.apply_positions(&seeds, &config);

		let mut idx = Vec::with_capacity(seeds.len());
		for (slot, (node, &(x, y))) in session.graph().nodes().iter().zip(&seeds).enumerate() {
			idx.push(graph.add_node(NodeData {
				x: x as f32,
				y: y as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					slot,
					radius: config.node_radius(node.is_hub),
					color: color_for(node.group),
				},
			}));
		}

		for link in session.graph().links() {
			if let (Some(&hub), Some(&spoke)) = (idx.get(link.hub), idx.get(link.spoke)) {
				graph.add_edge(hub, spoke, EdgeData {
					user_data: link.class,
				});
			}
		}

		Self {
			graph,
			session,
			config,
			drag: DragState::default(),
			hover: None,
			tooltip_synced: false,
			reveals: Vec::new(),
		}
	}

	pub fn node(&self, slot: usize) -> Option<&GraphNode> {
		self.session.graph().nodes().get(slot)
	}

	/// Topmost node under the pointer, by drawn radius.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - x, node.y() as f64 - y);
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius {
				found = Some(node.data.user_data.slot);
			}
		});
		found
	}

	/// Returns whether the canvas tooltip needs rewriting: the hovered node
	/// changed, or this is the first hover since the state was built.
	pub fn set_hover(&mut self, slot: Option<usize>) -> bool {
		let fresh = !std::mem::replace(&mut self.tooltip_synced, true);
		if self.hover == slot && !fresh {
			return false;
		}
		self.hover = slot;
		true
	}

	/// Native tooltip text for the hovered node.
	pub fn tooltip(&self) -> Option<String> {
		let node = self.node(self.hover?)?;
		Some(format!("{}\n{}", node.label, node.translation))
	}

	pub fn begin_drag(&mut self, slot: usize, x: f64, y: f64) {
		let Some(start) = self.node(slot).map(|n| n.position()) else {
			return;
		};
		self.drag = DragState {
			slot: Some(slot),
			moved: false,
			start_x: x,
			start_y: y,
			node_start: start,
		};
		self.set_anchor(slot, true);
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		let Some(slot) = self.drag.slot else {
			return;
		};
		let (dx, dy) = (x - self.drag.start_x, y - self.drag.start_y);
		if !self.drag.moved && (dx * dx + dy * dy).sqrt() < CLICK_SLOP {
			return;
		}
		self.drag.moved = true;
		let proposed = (self.drag.node_start.0 + dx, self.drag.node_start.1 + dy);
		if let Some((nx, ny)) = self.session.apply_position(slot, proposed, &self.config) {
			self.graph.visit_nodes_mut(|node| {
				if node.data.user_data.slot == slot {
					node.data.x = nx as f32;
					node.data.y = ny as f32;
				}
			});
		}
	}

	/// Ends a drag; a press that never moved reveals the node.
	pub fn end_drag(&mut self) {
		let drag = std::mem::take(&mut self.drag);
		if let Some(slot) = drag.slot {
			self.set_anchor(slot, false);
			if !drag.moved {
				self.reveal(slot);
			}
		}
	}

	pub fn cancel_drag(&mut self) {
		if let Some(slot) = std::mem::take(&mut self.drag).slot {
			self.set_anchor(slot, false);
		}
	}

	/// Starts a reveal unless the node is already showing one.
	pub fn reveal(&mut self, slot: usize) {
		let known = slot < self.session.graph().nodes().len();
		if known && !self.reveals.iter().any(|r| r.slot == slot) {
			self.reveals.push(Reveal::new(slot));
		}
	}

	pub fn reveal_frame(&self, slot: usize) -> Option<RevealFrame> {
		self.reveals
			.iter()
			.find(|r| r.slot == slot)
			.and_then(|r| r.frame(&self.config))
	}

	fn set_anchor(&mut self, slot: usize, anchored: bool) {
		self.graph.visit_nodes_mut(|node| {
			if node.data.user_data.slot == slot {
				node.data.is_anchor = anchored;
			}
		});
	}

	/// Pulls each spoke along its link towards the link's rest length.
	fn pull_links(&self, positions: &mut [(f64, f64)], dt: f64) {
		let rate = (self.config.link_strength * dt).min(1.0);
		for link in self.session.graph().links() {
			if self.drag.slot == Some(link.spoke) {
				continue;
			}
			let (Some(&(hx, hy)), Some(&(sx, sy))) =
				(positions.get(link.hub), positions.get(link.spoke))
			else {
				continue;
			};
			let (dx, dy) = (sx - hx, sy - hy);
			let dist = (dx * dx + dy * dy).sqrt();
			let (ux, uy) = if dist < 0.001 {
				(1.0, 0.0)
			} else {
				(dx / dist, dy / dist)
			};
			let shift = (link.class.rest_length() - dist) * rate;
			positions[link.spoke] = (sx + ux * shift, sy + uy * shift);
		}
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);

		let mut proposed: Vec<_> = self
			.session
			.graph()
			.nodes()
			.iter()
			.map(|n| n.position())
			.collect();
		self.graph.visit_nodes(|node| {
			let (x, y) = (node.x() as f64, node.y() as f64);
			// coincident nodes can blow up the simulation; keep the last good spot
			if !(x.is_finite() && y.is_finite()) {
				return;
			}
			if let Some(p) = proposed.get_mut(node.data.user_data.slot) {
				*p = (x, y);
			}
		});
		self.pull_links(&mut proposed, dt as f64);

		let clamped = self.session.apply_positions(&proposed, &self.config);
		self.graph.visit_nodes_mut(|node| {
			if let Some(&(x, y)) = clamped.get(node.data.user_data.slot) {
				node.data.x = x as f32;
				node.data.y = y as f32;
			}
		});

		let config = &self.config;
		for r in &mut self.reveals {
			r.elapsed += dt as f64;
		}
		self.reveals.retain(|r| r.frame(config).is_some());
	}
}
