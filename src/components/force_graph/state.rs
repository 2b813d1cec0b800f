//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node metadata, the
//! rolled-up link records needed for badges and tooltips, view transforms for
//! pan/zoom, and highlight state for hover effects with smooth intensity
//! transitions.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::{ScaleConfig, ScaledValues};
use super::theme::Theme;
use crate::graph::GraphData;

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: String,
	pub color: String,
}

/// Render data for one rolled-up link between two simulation nodes.
///
/// Endpoint labels are resolved once at build time so the tooltip never has
/// to search the simulation for node data.
#[derive(Clone, Debug)]
pub struct LinkInfo {
	pub from_idx: DefaultNodeIdx,
	pub to_idx: DefaultNodeIdx,
	pub from_text: String,
	pub to_text: String,
	/// Relationship labels for this pair, in generation order.
	pub relationships: Vec<String>,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Manages smooth highlight transitions with per-node intensity tracking.
///
/// Each node has an intensity value (0.0 to 1.0) that eases towards whether
/// it belongs to the active highlight set, using exponential smoothing so the
/// animation slows as it approaches its target.
///
/// A minimum hold time prevents flashing when the mouse briefly skirts the
/// edge of a node's hover zone.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	/// Currently hovered node (if any)
	pub hovered_node: Option<DefaultNodeIdx>,
	/// Set of nodes that should be highlighted (hovered + neighbors)
	target_set: HashSet<DefaultNodeIdx>,
	/// Per-node highlight intensity. Nodes not in this map have intensity 0.
	node_intensity: HashMap<DefaultNodeIdx, f64>,
	/// Per-node hold timer - time remaining before fade-out can begin
	hold_timer: HashMap<DefaultNodeIdx, f64>,
	/// Cached max intensity (updated each tick)
	cached_max: f64,
}

/// Minimum time (seconds) a highlight must be held before it can fade out.
const MIN_HOLD_TIME: f64 = 0.12;

impl HighlightState {
	/// Update the hovered node and recompute the target highlight set.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>, links: &[LinkInfo]) {
		if self.hovered_node == node {
			return;
		}

		self.hovered_node = node;
		self.target_set.clear();

		if let Some(idx) = node {
			self.target_set.insert(idx);
			for link in links {
				if link.from_idx == idx {
					self.target_set.insert(link.to_idx);
				} else if link.to_idx == idx {
					self.target_set.insert(link.from_idx);
				}
			}

			// Reset hold timers for newly highlighted nodes
			for &idx in &self.target_set {
				self.hold_timer.insert(idx, MIN_HOLD_TIME);
			}
		}
	}

	/// Animate all node intensities towards their targets.
	pub fn tick(&mut self, dt: f64) {
		// Smoothing factors - higher = faster response
		const FADE_IN_SPEED: f64 = 6.0; // ~150ms to 95%
		const FADE_OUT_SPEED: f64 = 4.0; // ~250ms to 95%

		let fade_in_factor = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let fade_out_decay = (-FADE_OUT_SPEED * dt).exp();

		for &idx in &self.target_set {
			let intensity = self.node_intensity.entry(idx).or_insert(0.0);
			*intensity += (1.0 - *intensity) * fade_in_factor;
		}

		// Count down hold timers for nodes that left the target set
		self.hold_timer.retain(|idx, timer| {
			if self.target_set.contains(idx) {
				true
			} else {
				*timer -= dt;
				*timer > 0.0
			}
		});

		// Fade out departed nodes once their hold expires, drop when invisible
		let mut new_max: f64 = 0.0;
		self.node_intensity.retain(|idx, intensity| {
			if self.target_set.contains(idx) {
				new_max = new_max.max(*intensity);
				true
			} else {
				if self.hold_timer.get(idx).copied().unwrap_or(0.0) <= 0.0 {
					*intensity *= fade_out_decay;
				}
				new_max = new_max.max(*intensity);
				*intensity > 0.005
			}
		});

		self.cached_max = new_max;
	}

	/// Get the highlight intensity for a specific node (already smoothed).
	pub fn node_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.node_intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Get the highlight intensity for an edge.
	/// Uses geometric mean so edge transitions don't lag behind nodes.
	pub fn edge_intensity(&self, idx1: DefaultNodeIdx, idx2: DefaultNodeIdx) -> f64 {
		let i1 = self.node_intensity(idx1);
		let i2 = self.node_intensity(idx2);
		(i1 * i2).sqrt()
	}

	/// Get the maximum intensity of any node (used to dim everything else).
	pub fn max_intensity(&self) -> f64 {
		self.cached_max
	}
}

/// Core graph state combining physics simulation with interaction and
/// highlight tracking.
///
/// Created when the component mounts and replaced wholesale when the graph
/// data signal changes. The `tick` method advances the physics simulation and
/// animates highlight intensities.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	/// Rolled-up links in data order, used for edge drawing, badges, and the
	/// tooltip. Simulation edges mirror this list.
	pub links: Vec<LinkInfo>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub highlight: HighlightState,
	/// Index into `links` of the badge under the cursor, if any.
	pub hovered_link: Option<usize>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64, theme: &Theme) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut keyed: HashMap<u32, (DefaultNodeIdx, String)> = HashMap::new();
		let mut links = Vec::with_capacity(data.links.len());

		for (i, node) in data.nodes.iter().enumerate() {
			let color = theme.palette.get(i).to_css_rgb();
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.text.clone(),
					color,
				},
			});
			keyed.insert(node.key, (idx, node.text.clone()));
		}

		for link in &data.links {
			if let (Some((src, from_text)), Some((tgt, to_text))) =
				(keyed.get(&link.from), keyed.get(&link.to))
			{
				graph.add_edge(*src, *tgt, EdgeData::default());
				links.push(LinkInfo {
					from_idx: *src,
					to_idx: *tgt,
					from_text: from_text.clone(),
					to_text: to_text.clone(),
					relationships: link.relationships.clone(),
				});
			}
		}

		Self {
			graph,
			links,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			hovered_link: None,
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
		}
	}

	/// Snapshot current node positions, keyed by simulation index.
	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		positions
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < scale.hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Hit-test the relationship badges. Only multi-relationship badges are
	/// interactive; single-relationship links show their label inline.
	pub fn badge_at_position(&self, sx: f64, sy: f64, config: &ScaleConfig) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let positions = self.positions();
		let mut found = None;
		for (i, link) in self.links.iter().enumerate() {
			if link.relationships.len() < 2 {
				continue;
			}
			let (Some(&(x1, y1)), Some(&(x2, y2))) =
				(positions.get(&link.from_idx), positions.get(&link.to_idx))
			else {
				continue;
			};
			let (dx, dy) = ((x1 + x2) / 2.0 - gx, (y1 + y2) / 2.0 - gy);
			if (dx * dx + dy * dy).sqrt() < scale.badge_radius {
				found = Some(i);
			}
		}
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.highlight.set_hover(node, &self.links);
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;
		self.highlight.tick(dt as f64);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
