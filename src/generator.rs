//! Random relationship-graph synthesis.
//!
//! Produces a fresh node set and a rolled-up link set on every call: every
//! unordered pair of distinct nodes gets exactly one link carrying 1..=5
//! relationship labels. The generator has no notion of a canvas and keeps no
//! state between calls; layout and rendering live in [`crate::components`].

use std::collections::BTreeMap;

use rand::Rng;
use thiserror::Error;

use crate::graph::{GraphData, GraphLink, GraphNode};

/// Upper bound on relationships per node pair.
pub const MAX_RELATIONSHIPS: usize = 5;

/// Returned when the requested node-count range is inverted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("invalid node count bounds: min {min} exceeds max {max}")]
pub struct BoundsError {
	/// Requested lower bound.
	pub min: u32,
	/// Requested upper bound.
	pub max: u32,
}

/// Generate a random graph using thread-local entropy.
///
/// See [`generate_with`] for the full contract.
pub fn generate(min_nodes: u32, max_nodes: u32) -> Result<GraphData, BoundsError> {
	generate_with(min_nodes, max_nodes, &mut rand::thread_rng())
}

/// Generate between `min_nodes` and `max_nodes` nodes (inclusive, chosen
/// uniformly), keyed `1..=N` and labeled `"Node {key}"`.
///
/// Every unordered pair of distinct nodes receives a single link with 1..=5
/// relationship labels. Only the label *count* is random: the labels are
/// always the first `r` letters of the alphabet in order. Links are keyed
/// `"link-{idx}"` and returned in lexicographic `(from, to)` order.
///
/// Fails fast with [`BoundsError`] if `min_nodes > max_nodes`.
pub fn generate_with<R: Rng + ?Sized>(
	min_nodes: u32,
	max_nodes: u32,
	rng: &mut R,
) -> Result<GraphData, BoundsError> {
	if min_nodes > max_nodes {
		return Err(BoundsError {
			min: min_nodes,
			max: max_nodes,
		});
	}

	let node_count = rng.gen_range(min_nodes..=max_nodes);

	let nodes: Vec<GraphNode> = (1..=node_count)
		.map(|key| GraphNode {
			key,
			text: format!("Node {key}"),
		})
		.collect();

	// Accumulate labels per ordered pair, then flatten. Keying the map by
	// (from, to) keeps exactly one entry per pair and yields links in
	// lexicographic order without sorting.
	let mut pairs: BTreeMap<(u32, u32), Vec<String>> = BTreeMap::new();
	for from in 1..=node_count {
		for to in (from + 1)..=node_count {
			let labels = pairs.entry((from, to)).or_default();
			let count = rng.gen_range(1..=MAX_RELATIONSHIPS);
			for slot in 0..count {
				labels.push(relationship_label(slot));
			}
		}
	}

	let links = pairs
		.into_iter()
		.enumerate()
		.map(|(idx, ((from, to), relationships))| GraphLink {
			key: format!("link-{idx}"),
			from,
			to,
			relationships,
		})
		.collect();

	Ok(GraphData { nodes, links })
}

/// The relationship label for a slot: "A", "B", "C", ...
fn relationship_label(slot: usize) -> String {
	debug_assert!(slot < 26);
	char::from(b'A' + slot as u8).to_string()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn labels_follow_the_alphabet() {
		assert_eq!(relationship_label(0), "A");
		assert_eq!(relationship_label(4), "E");
	}

	#[test]
	fn zero_nodes_yields_an_empty_graph() {
		let mut rng = SmallRng::seed_from_u64(0);
		let data = generate_with(0, 0, &mut rng).expect("bounds are valid");
		assert!(data.nodes.is_empty());
		assert!(data.links.is_empty());
	}

	#[test]
	fn inverted_bounds_fail_fast() {
		let mut rng = SmallRng::seed_from_u64(0);
		let err = generate_with(5, 2, &mut rng).expect_err("inverted bounds must be rejected");
		assert_eq!(err, BoundsError { min: 5, max: 2 });
	}
}
