//! Graph data passed from the generator to the viewer.
//!
//! These types are the whole contract between the two halves of the crate:
//! the generator fills them in, the canvas component consumes them. They are
//! serde-derived so downstream consumers can take the same shape as JSON.

use serde::{Deserialize, Serialize};

/// A node in the graph.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	/// Unique positive key. Links reference nodes by this value.
	pub key: u32,
	/// Display label, derived from the key at generation time.
	pub text: String,
}

/// An aggregated edge between two node keys.
///
/// All relationship labels between a pair of nodes are rolled up into one
/// link record; parallel edges are never emitted for the same pair.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
	/// Unique link key, disjoint from node keys. Rendering layers can use it
	/// as a stable element key for the lifetime of one generation.
	pub key: String,
	/// Smaller endpoint of the pair.
	pub from: u32,
	/// Larger endpoint of the pair.
	pub to: u32,
	/// Relationship labels carried by this link, in generation order.
	pub relationships: Vec<String>,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
