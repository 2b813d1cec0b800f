//! Visual theming for the force graph.
//!
//! Provides color palettes, badge and tooltip styles, and background
//! configuration.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// A curated color palette for nodes.
#[derive(Clone, Debug)]
pub struct NodePalette {
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Muted, harmonious palette - slate blues and teals (default)
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),  // Steel blue
				Color::rgb(129, 161, 193), // Light steel
				Color::rgb(100, 148, 160), // Teal gray
				Color::rgb(136, 160, 175), // Cadet blue
				Color::rgb(108, 142, 173), // Air force blue
				Color::rgb(119, 158, 165), // Desaturated cyan
				Color::rgb(143, 163, 180), // Cool gray
				Color::rgb(122, 153, 168), // Dusty blue
			],
		}
	}

	/// Warm earth tones - muted oranges and browns
	pub fn earth() -> Self {
		Self {
			colors: vec![
				Color::rgb(180, 136, 100), // Tan
				Color::rgb(160, 125, 100), // Taupe
				Color::rgb(170, 145, 115), // Khaki
				Color::rgb(145, 120, 95),  // Umber
				Color::rgb(175, 150, 120), // Sand
				Color::rgb(155, 130, 105), // Bronze
				Color::rgb(165, 140, 110), // Camel
				Color::rgb(150, 125, 100), // Mocha
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
	/// Vignette intensity (0.0 = none, 1.0 = strong)
	pub vignette: f64,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Base edge and arrowhead color
	pub color: Color,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	/// Border color
	pub border_color: Color,
}

/// Relationship badge style.
///
/// A link with one relationship shows that label in a pill; a link with
/// several shows a disc with the count, hoverable for the tooltip.
#[derive(Clone, Debug)]
pub struct BadgeStyle {
	/// Pill fill for single-relationship links
	pub single_fill: Color,
	/// Pill label color
	pub single_text: Color,
	/// Disc fill for multi-relationship links
	pub multi_fill: Color,
	/// Count text color on the disc
	pub multi_text: Color,
}

/// Link tooltip style.
#[derive(Clone, Debug)]
pub struct TooltipStyle {
	pub background: Color,
	pub border: Color,
	/// Endpoint node names
	pub heading: Color,
	/// Relationship list
	pub text: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
	pub badge: BadgeStyle,
	pub tooltip: TooltipStyle,
	pub palette: NodePalette,
}

impl Theme {
	/// Clean modern theme with subtle effects (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				use_gradient: true,
				vignette: 0.15,
			},
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.5),
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
			},
			badge: BadgeStyle {
				single_fill: Color::rgb(222, 227, 231),
				single_text: Color::rgb(40, 46, 52),
				multi_fill: Color::rgb(72, 118, 186),
				multi_text: Color::rgb(255, 255, 255),
			},
			tooltip: TooltipStyle {
				background: Color::rgba(239, 244, 248, 0.96),
				border: Color::rgba(120, 135, 150, 0.8),
				heading: Color::rgb(51, 51, 51),
				text: Color::rgb(51, 51, 51),
			},
			palette: NodePalette::slate(),
		}
	}

	/// Warm earth tones theme
	pub fn ember() -> Self {
		Self {
			name: "ember",
			background: BackgroundStyle {
				color: Color::rgb(28, 24, 22),
				color_secondary: Color::rgb(35, 30, 28),
				use_gradient: true,
				vignette: 0.18,
			},
			edge: EdgeStyle {
				color: Color::rgba(160, 130, 110, 0.45),
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
			},
			badge: BadgeStyle {
				single_fill: Color::rgb(228, 221, 212),
				single_text: Color::rgb(52, 44, 38),
				multi_fill: Color::rgb(172, 112, 80),
				multi_text: Color::rgb(255, 255, 255),
			},
			tooltip: TooltipStyle {
				background: Color::rgba(244, 238, 230, 0.96),
				border: Color::rgba(150, 130, 115, 0.8),
				heading: Color::rgb(56, 48, 42),
				text: Color::rgb(56, 48, 42),
			},
			palette: NodePalette::earth(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
