//! Canvas rendering for the force graph.
//!
//! Handles all drawing operations: background, links, badges, nodes, and the
//! tooltip. Rendering uses multiple passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Link lines and arrowheads, then relationship badges (world space)
//! 3. Non-highlighted nodes, then highlighted nodes on top
//! 4. Vignette and the link tooltip (screen space)

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::DefaultNodeIdx;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ForceGraphState, LinkInfo, NodeInfo};
use super::theme::{Color, Theme};

/// Attempt to smooth values that would otherwise cause abrupt visual changes.
fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);
	let positions = state.positions();

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_links(state, ctx, config, &scale, theme, &positions);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();

	if theme.background.vignette > 0.0 {
		draw_vignette(state, ctx, theme);
	}

	draw_tooltip(state, ctx, &scale, theme, &positions);
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				(state.width.max(state.height)) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_vignette(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = ctx
		.create_radial_gradient(
			state.width / 2.0,
			state.height / 2.0,
			state.width.min(state.height) * 0.3,
			state.width / 2.0,
			state.height / 2.0,
			state.width.max(state.height) * 0.7,
		)
		.unwrap();

	gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)").unwrap();
	gradient
		.add_color_stop(
			1.0,
			&format!("rgba(0, 0, 0, {})", theme.background.vignette),
		)
		.unwrap();

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_links(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	scale: &ScaledValues,
	theme: &Theme,
	positions: &HashMap<DefaultNodeIdx, (f64, f64)>,
) {
	let dash_offset = scale.dash_offset(state.flow_time, config.edge.flow_speed);

	for link in &state.links {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&link.from_idx), positions.get(&link.to_idx))
		else {
			continue;
		};
		draw_link_line(state, ctx, scale, theme, link, (x1, y1), (x2, y2), dash_offset);
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	// Badges sit on top of every line, so they get their own pass.
	for (i, link) in state.links.iter().enumerate() {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&link.from_idx), positions.get(&link.to_idx))
		else {
			continue;
		};
		let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
		draw_badge(ctx, scale, theme, link, state.hovered_link == Some(i), mx, my);
	}
}

#[allow(clippy::too_many_arguments)]
fn draw_link_line(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	link: &LinkInfo,
	(x1, y1): (f64, f64),
	(x2, y2): (f64, f64),
	dash_offset: f64,
) {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}

	let edge_t = smooth_step(state.highlight.edge_intensity(link.from_idx, link.to_idx));
	let max_t = smooth_step(state.highlight.max_intensity());

	let (edge_alpha, base_arrow_alpha, base_width) = if edge_t > 0.01 {
		(
			0.7 + 0.3 * edge_t,
			0.9 + 0.1 * edge_t,
			scale.edge_line_width * (1.0 + 0.4 * edge_t),
		)
	} else if max_t > 0.01 {
		(
			0.7 - 0.5 * max_t,
			0.9 - 0.6 * max_t,
			scale.edge_line_width * (1.0 - 0.3 * max_t),
		)
	} else {
		(0.7, 0.9, scale.edge_line_width)
	};

	// Compensate for dash pattern fading to solid
	let width = base_width * (1.0 + 0.3 * (1.0 - scale.dash_alpha));
	let arrow_alpha = base_arrow_alpha * scale.arrow_alpha;

	let edge_color = &theme.edge.color;
	ctx.set_stroke_style_str(&format!(
		"rgba({}, {}, {}, {})",
		edge_color.r,
		edge_color.g,
		edge_color.b,
		edge_alpha * edge_color.a
	));
	ctx.set_line_width(width);

	// Fade dash pattern to solid when zoomed out
	let effective_gap = scale.dash_pattern.1 * scale.dash_alpha;
	if effective_gap > 0.1 {
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(scale.dash_pattern.0),
			&JsValue::from_f64(effective_gap),
		));
		ctx.set_line_dash_offset(dash_offset);
	} else {
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}

	let (ux, uy) = (dx / dist, dy / dist);

	ctx.begin_path();
	ctx.move_to(x1 + ux * scale.node_radius, y1 + uy * scale.node_radius);
	ctx.line_to(
		x2 - ux * (scale.node_radius + scale.arrow_size),
		y2 - uy * (scale.node_radius + scale.arrow_size),
	);
	ctx.stroke();

	if !scale.cull_arrows && arrow_alpha > 0.0 {
		let _ = ctx.set_line_dash(&js_sys::Array::new());
		ctx.set_fill_style_str(&format!(
			"rgba({}, {}, {}, {})",
			edge_color.r,
			edge_color.g,
			edge_color.b,
			arrow_alpha * edge_color.a
		));

		let (tip_x, tip_y) = (x2 - ux * scale.node_radius, y2 - uy * scale.node_radius);
		let (back_x, back_y) = (tip_x - ux * scale.arrow_size, tip_y - uy * scale.arrow_size);
		let (px, py) = (-uy * scale.arrow_size * 0.5, ux * scale.arrow_size * 0.5);

		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

/// Draw the relationship indicator at a link's midpoint: a label pill for a
/// single relationship, a count disc for several.
fn draw_badge(
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	link: &LinkInfo,
	hovered: bool,
	mx: f64,
	my: f64,
) {
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	if let [label] = link.relationships.as_slice() {
		ctx.set_font(&scale.badge_font);
		let text_w = ctx.measure_text(label).map(|m| m.width()).unwrap_or(0.0);
		let w = text_w + scale.badge_pad * 2.0;
		let h = scale.badge_font_px + scale.badge_pad * 1.5;

		trace_round_rect(ctx, mx - w / 2.0, my - h / 2.0, w, h, h / 2.0);
		ctx.set_fill_style_str(&theme.badge.single_fill.to_css());
		ctx.fill();
		ctx.set_fill_style_str(&theme.badge.single_text.to_css());
		let _ = ctx.fill_text(label, mx, my);
	} else {
		let fill = if hovered {
			theme.badge.multi_fill.lighten(0.2)
		} else {
			theme.badge.multi_fill
		};
		ctx.begin_path();
		let _ = ctx.arc(mx, my, scale.badge_radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&fill.to_css());
		ctx.fill();

		ctx.set_font(&scale.badge_bold_font);
		ctx.set_fill_style_str(&theme.badge.multi_text.to_css());
		let _ = ctx.fill_text(&link.relationships.len().to_string(), mx, my);
	}

	ctx.set_text_align("start");
	ctx.set_text_baseline("alphabetic");
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let has_highlight = max_t > 0.01;

	// Pass 1: non-highlighted nodes, dimmed while any highlight is active
	state.graph.visit_nodes(|node| {
		let node_t = state.highlight.node_intensity(node.index());
		if node_t > 0.001 {
			return;
		}
		let (alpha, radius_mult) = if has_highlight {
			(1.0 - 0.7 * max_t, 1.0 - 0.15 * max_t)
		} else {
			(1.0, 1.0)
		};
		draw_node(ctx, node, scale, theme, alpha, radius_mult);
	});

	// Pass 2: highlighted/transitioning nodes on top
	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let node_t = state.highlight.node_intensity(idx);
		if node_t <= 0.001 {
			return;
		}

		let eased_t = smooth_step(node_t);
		let (x, y) = (node.x() as f64, node.y() as f64);

		let dim_alpha = if has_highlight {
			1.0 - 0.7 * max_t
		} else {
			1.0
		};
		let dim_radius = if has_highlight {
			1.0 - 0.15 * max_t
		} else {
			1.0
		};

		let alpha = dim_alpha + (1.0 - dim_alpha) * eased_t;
		let radius_mult = dim_radius + ((1.0 + 0.3 * eased_t) - dim_radius) * eased_t;

		draw_node(ctx, node, scale, theme, alpha, radius_mult);

		// White ring marks the node directly under the cursor
		if state.highlight.hovered_node == Some(idx) && eased_t > 0.01 {
			let radius = scale.node_radius * radius_mult;
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + scale.ring_offset, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.8 * eased_t));
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();

			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + scale.ring_offset * 2.5, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.3 * eased_t));
			ctx.set_line_width(scale.ring_width * 0.5);
			ctx.stroke();
		}
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &force_graph::Node<NodeInfo>,
	scale: &ScaledValues,
	theme: &Theme,
	alpha: f64,
	radius_mult: f64,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let radius = scale.node_radius * radius_mult;
	let color = &node.data.user_data.color;

	ctx.set_global_alpha(alpha);

	if theme.node.use_gradient {
		let gradient = ctx
			.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
			.unwrap();

		let base_color = parse_color(color);
		let highlight = base_color.lighten(0.4);
		let shadow = base_color.darken(0.2);

		gradient.add_color_stop(0.0, &highlight.to_css()).unwrap();
		gradient.add_color_stop(0.7, &base_color.to_css()).unwrap();
		gradient.add_color_stop(1.0, &shadow.to_css()).unwrap();

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	} else {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(color);
		ctx.fill();
	}

	if theme.node.border_width > 0.0 {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width / scale.k);
		ctx.stroke();
	}

	ctx.set_global_alpha(1.0);

	if alpha > 0.5 {
		ctx.set_global_alpha(alpha * 0.8);
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
		ctx.set_font(&scale.label_font);
		let _ = ctx.fill_text(&node.data.user_data.label, x + radius + 4.0, y + 3.0);
		ctx.set_global_alpha(1.0);
	}
}

/// Tooltip fonts and layout are screen-space constants, drawn after the
/// world transform has been restored.
const TOOLTIP_HEADING_FONT: &str = "bold 12px sans-serif";
const TOOLTIP_BODY_FONT: &str = "12px sans-serif";
const TOOLTIP_LINE_HEIGHT: f64 = 18.0;
const TOOLTIP_PADDING: f64 = 10.0;

fn draw_tooltip(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	positions: &HashMap<DefaultNodeIdx, (f64, f64)>,
) {
	let Some(link) = state.hovered_link.and_then(|i| state.links.get(i)) else {
		return;
	};
	let (Some(&(x1, y1)), Some(&(x2, y2))) =
		(positions.get(&link.from_idx), positions.get(&link.to_idx))
	else {
		return;
	};

	// Anchor above the badge, in screen coordinates
	let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
	let sx = mx * state.transform.k + state.transform.x;
	let sy = my * state.transform.k + state.transform.y;
	let badge_screen = scale.badge_radius * state.transform.k;

	let body = link.relationships.join(", ");

	let measure = |font: &str, text: &str| -> f64 {
		ctx.set_font(font);
		ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
	};
	let text_w = measure(TOOLTIP_HEADING_FONT, &link.from_text)
		.max(measure(TOOLTIP_HEADING_FONT, &link.to_text))
		.max(measure(TOOLTIP_BODY_FONT, &body));
	let width = text_w + TOOLTIP_PADDING * 2.0;
	let height = TOOLTIP_LINE_HEIGHT * 3.0 + TOOLTIP_PADDING * 2.0;

	let bx = (sx - width / 2.0).clamp(4.0, (state.width - width - 4.0).max(4.0));
	let mut by = sy - badge_screen - height - 8.0;
	if by < 4.0 {
		by = sy + badge_screen + 8.0;
	}

	trace_round_rect(ctx, bx, by, width, height, 6.0);
	ctx.set_fill_style_str(&theme.tooltip.background.to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&theme.tooltip.border.to_css());
	ctx.set_line_width(1.0);
	ctx.stroke();

	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	let cx = bx + width / 2.0;
	let mut cy = by + TOOLTIP_PADDING + TOOLTIP_LINE_HEIGHT / 2.0;
	ctx.set_font(TOOLTIP_HEADING_FONT);
	ctx.set_fill_style_str(&theme.tooltip.heading.to_css());
	let _ = ctx.fill_text(&link.from_text, cx, cy);

	cy += TOOLTIP_LINE_HEIGHT;
	ctx.set_font(TOOLTIP_BODY_FONT);
	ctx.set_fill_style_str(&theme.tooltip.text.to_css());
	let _ = ctx.fill_text(&body, cx, cy);

	cy += TOOLTIP_LINE_HEIGHT;
	ctx.set_font(TOOLTIP_HEADING_FONT);
	ctx.set_fill_style_str(&theme.tooltip.heading.to_css());
	let _ = ctx.fill_text(&link.to_text, cx, cy);

	ctx.set_text_align("start");
	ctx.set_text_baseline("alphabetic");
}

/// Trace a rounded rectangle path; the caller fills and/or strokes it.
fn trace_round_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	ctx.line_to(x + w - r, y);
	let _ = ctx.quadratic_curve_to(x + w, y, x + w, y + r);
	ctx.line_to(x + w, y + h - r);
	let _ = ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
	ctx.line_to(x + r, y + h);
	let _ = ctx.quadratic_curve_to(x, y + h, x, y + h - r);
	ctx.line_to(x, y + r);
	let _ = ctx.quadratic_curve_to(x, y, x + r, y);
	ctx.close_path();
}

/// Parses a CSS color string into a [`Color`].
/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
fn parse_color(color_str: &str) -> Color {
	if color_str.starts_with('#') && color_str.len() == 7 {
		let r = u8::from_str_radix(&color_str[1..3], 16).unwrap_or(128);
		let g = u8::from_str_radix(&color_str[3..5], 16).unwrap_or(128);
		let b = u8::from_str_radix(&color_str[5..7], 16).unwrap_or(128);
		Color::rgb(r, g, b)
	} else if color_str.starts_with("rgb") {
		let nums: Vec<&str> = color_str
			.trim_start_matches("rgba(")
			.trim_start_matches("rgb(")
			.trim_end_matches(')')
			.split(',')
			.collect();
		let r = nums
			.first()
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let g = nums
			.get(1)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let b = nums
			.get(2)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let a = nums
			.get(3)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(1.0);
		Color::rgba(r, g, b, a)
	} else {
		Color::rgb(128, 128, 128)
	}
}
