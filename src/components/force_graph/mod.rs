//! Force-directed relationship-graph viewer.
//!
//! Renders an interactive graph on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan, zoom, and node dragging interactions
//! - Smooth highlight transitions on hover
//! - Per-link relationship badges with an on-canvas tooltip
//!
//! The component consumes [`GraphData`](crate::graph::GraphData) as a signal
//! and rebuilds the simulation whenever the caller swaps in a new graph.
//!
//! # Example
//!
//! ```ignore
//! use relation_graph::{ForceGraphCanvas, GraphData};
//!
//! let data = RwSignal::new(GraphData::default());
//! view! { <ForceGraphCanvas data=data fullscreen=true /> }
//! ```

mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;

pub use component::ForceGraphCanvas;
pub use theme::Theme;
