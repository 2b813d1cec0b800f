//! Structural invariants of the random graph generator.
//!
//! The generator is non-deterministic by design, so these tests drive it with
//! seeded rngs and assert invariants that must hold for every output rather
//! than exact values.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use relation_graph::generator::{self, BoundsError};
use relation_graph::graph::GraphData;
use rstest::rstest;

const ALPHABET: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Assert every structural invariant a generated graph must satisfy.
fn assert_well_formed(data: &GraphData, min_nodes: u32, max_nodes: u32) {
	let n = data.nodes.len() as u32;
	assert!(
		(min_nodes..=max_nodes).contains(&n),
		"node count {n} outside [{min_nodes}, {max_nodes}]"
	);

	for (i, node) in data.nodes.iter().enumerate() {
		let key = i as u32 + 1;
		assert_eq!(node.key, key, "keys must be 1..=N in order");
		assert_eq!(node.text, format!("Node {key}"));
	}

	// Exactly one link per unordered pair
	assert_eq!(data.links.len() as u32, n * n.saturating_sub(1) / 2);

	let mut seen_pairs = HashSet::new();
	let mut seen_keys = HashSet::new();
	for link in &data.links {
		assert!(link.from < link.to, "links must be oriented small-to-large");
		assert!(link.from >= 1 && link.to <= n, "endpoints must be node keys");
		assert!(
			seen_pairs.insert((link.from, link.to)),
			"pair ({}, {}) appears twice",
			link.from,
			link.to
		);
		assert!(
			seen_keys.insert(link.key.clone()),
			"link key {:?} appears twice",
			link.key
		);

		assert!(
			(1..=ALPHABET.len()).contains(&link.relationships.len()),
			"relationship count {} outside 1..=5",
			link.relationships.len()
		);
		// Labels are always the alphabet prefix of their count
		for (slot, label) in link.relationships.iter().enumerate() {
			assert_eq!(label, ALPHABET[slot]);
		}
	}

	// Links arrive in lexicographic pair order
	let pairs: Vec<_> = data.links.iter().map(|l| (l.from, l.to)).collect();
	let mut sorted = pairs.clone();
	sorted.sort_unstable();
	assert_eq!(pairs, sorted);
}

#[rstest]
#[case::pinned(2, 2)]
#[case::app_bounds(2, 4)]
#[case::degenerate(1, 1)]
#[case::wide(0, 12)]
fn generated_graphs_are_well_formed(#[case] min_nodes: u32, #[case] max_nodes: u32) {
	let mut rng = SmallRng::seed_from_u64(7);
	for _ in 0..64 {
		let data =
			generator::generate_with(min_nodes, max_nodes, &mut rng).expect("bounds are valid");
		assert_well_formed(&data, min_nodes, max_nodes);
	}
}

#[rstest]
fn two_node_graph_has_exactly_one_link() {
	let mut rng = SmallRng::seed_from_u64(11);
	let data = generator::generate_with(2, 2, &mut rng).expect("bounds are valid");

	assert_eq!(data.nodes.len(), 2);
	assert_eq!(data.nodes[0].text, "Node 1");
	assert_eq!(data.nodes[1].text, "Node 2");

	assert_eq!(data.links.len(), 1);
	let link = &data.links[0];
	assert_eq!((link.from, link.to), (1, 2));
	assert!((1..=5).contains(&link.relationships.len()));
}

#[rstest]
fn four_node_graph_covers_every_pair() {
	let mut rng = SmallRng::seed_from_u64(13);
	let data = generator::generate_with(4, 4, &mut rng).expect("bounds are valid");

	assert_eq!(data.nodes.len(), 4);
	let pairs: Vec<_> = data.links.iter().map(|l| (l.from, l.to)).collect();
	assert_eq!(pairs, vec![(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
}

#[rstest]
fn node_count_spans_the_requested_range() {
	let mut rng = SmallRng::seed_from_u64(3);
	let mut seen = HashSet::new();
	for _ in 0..256 {
		let data = generator::generate_with(2, 4, &mut rng).expect("bounds are valid");
		seen.insert(data.nodes.len());
	}
	// 256 draws over three outcomes: all of them show up
	assert_eq!(seen, HashSet::from([2, 3, 4]));
}

#[rstest]
fn relationship_counts_span_the_full_range() {
	let mut rng = SmallRng::seed_from_u64(17);
	let mut seen = HashSet::new();
	for _ in 0..128 {
		let data = generator::generate_with(4, 4, &mut rng).expect("bounds are valid");
		for link in &data.links {
			seen.insert(link.relationships.len());
		}
	}
	assert_eq!(seen, HashSet::from([1, 2, 3, 4, 5]));
}

#[rstest]
fn inverted_bounds_fail_fast() {
	let err = generator::generate(5, 2).expect_err("inverted bounds must be rejected");
	assert_eq!(err, BoundsError { min: 5, max: 2 });
	assert_eq!(
		err.to_string(),
		"invalid node count bounds: min 5 exceeds max 2"
	);
}

/// Pins the JSON shape consumed by rendering surfaces:
/// `{ key, text }` per node, `{ key, from, to, relationships }` per link.
#[rstest]
fn serialized_shape_matches_the_rendering_contract() {
	let mut rng = SmallRng::seed_from_u64(5);
	let data = generator::generate_with(2, 2, &mut rng).expect("bounds are valid");
	let value = serde_json::to_value(&data).expect("graph data serializes");

	assert_eq!(value["nodes"][0]["key"], 1);
	assert_eq!(value["nodes"][0]["text"], "Node 1");

	let link = &value["links"][0];
	assert_eq!(link["key"], "link-0");
	assert_eq!(link["from"], 1);
	assert_eq!(link["to"], 2);
	assert!(link["relationships"].is_array());
}

proptest! {
	#[test]
	fn arbitrary_valid_bounds_hold_invariants(
		min_nodes in 0u32..16,
		span in 0u32..6,
		seed: u64,
	) {
		let max_nodes = min_nodes + span;
		let mut rng = SmallRng::seed_from_u64(seed);
		let data = generator::generate_with(min_nodes, max_nodes, &mut rng)
			.expect("bounds are valid");
		assert_well_formed(&data, min_nodes, max_nodes);
	}

	#[test]
	fn inverted_bounds_always_error(max_nodes in 0u32..100, bump in 1u32..50, seed: u64) {
		let min_nodes = max_nodes + bump;
		let mut rng = SmallRng::seed_from_u64(seed);
		let err = generator::generate_with(min_nodes, max_nodes, &mut rng);
		prop_assert_eq!(err, Err(BoundsError { min: min_nodes, max: max_nodes }));
	}
}
