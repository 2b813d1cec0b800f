//! relation-graph: interactive visualization of randomly generated
//! relationship graphs.
//!
//! The crate splits into a pure data-generation core ([`generator`]) and a
//! WASM canvas viewer ([`components`]). The generator owns all graph
//! semantics; the viewer only draws what it is handed and never reaches back
//! into generation.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

// Direct dependency solely to enable its "js" feature on wasm32 builds.
use getrandom as _;

pub mod components;
pub mod generator;
pub mod graph;

pub use components::force_graph::ForceGraphCanvas;
pub use graph::{GraphData, GraphLink, GraphNode};

// Node count bounds for a displayed graph, inclusive.
const MIN_NODES: u32 = 2;
const MAX_NODES: u32 = 4;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("relation-graph: logging initialized");
}

/// Produce a fresh random graph for display.
fn fresh_graph() -> GraphData {
	match generator::generate(MIN_NODES, MAX_NODES) {
		Ok(data) => {
			info!(
				"relation-graph: generated {} nodes, {} links",
				data.nodes.len(),
				data.links.len()
			);
			data
		}
		Err(e) => {
			warn!("relation-graph: {e}");
			GraphData::default()
		}
	}
}

/// Main application component.
/// Renders the force-directed view plus the regenerate control.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let graph = RwSignal::new(fresh_graph());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Relationship Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<ForceGraphCanvas data=graph fullscreen=true />
			<div class="graph-overlay">
				<h1>"Relationship Graph"</h1>
				<p class="subtitle">
					"Hover a numbered badge to see that pair's relationships. Drag nodes to reposition. Scroll to zoom. Drag background to pan."
				</p>
				<button class="regenerate" on:click=move |_| graph.set(fresh_graph())>
					"Regenerate"
				</button>
			</div>
		</div>
	}
}
