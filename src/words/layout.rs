//! Canvas sizing, simulation tuning and boundary containment.

/// Canvas extent that nodes must stay inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
}

/// Layout and animation settings for one canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Radius of a spoke node.
	pub node_radius: f64,
	/// Hub radius multiplier; also how far a revealed node grows.
	pub hub_scale_factor: f64,
	/// Repulsion between nodes.
	pub charge: f32,
	/// Spring constant of the simulation's own edges.
	pub spring: f32,
	/// Upper bound on any single force.
	pub force_max: f32,
	/// Velocity scale.
	pub node_speed: f32,
	/// Velocity decay per step.
	pub damping: f32,
	/// How strongly a link is pulled towards its rest length each second.
	pub link_strength: f64,
	/// Duration of the grow/shrink part of a reveal.
	pub transition_secs: f64,
	/// How long a revealed translation stays up.
	pub pause_secs: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			width: 700.0,
			height: 700.0,
			node_radius: 30.0,
			hub_scale_factor: 2.0,
			charge: 150.0,
			spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping: 0.9,
			link_strength: 2.0,
			transition_secs: 1.0,
			pause_secs: 3.0,
		}
	}
}

impl LayoutConfig {
	/// Drawn radius of a node.
	pub fn node_radius(&self, is_hub: bool) -> f64 {
		if is_hub {
			self.node_radius * self.hub_scale_factor
		} else {
			self.node_radius
		}
	}

	/// Canvas bounds.
	pub fn bounds(&self) -> Bounds {
		Bounds {
			width: self.width,
			height: self.height,
		}
	}
}

/// Keeps `[value - radius, value + radius]` inside `[0, extent]`.
///
/// A node wider than the extent cannot fit, so it is centred, which leaves the
/// least of it outside.
pub fn clamp_axis(value: f64, radius: f64, extent: f64) -> f64 {
	if 2.0 * radius > extent {
		extent / 2.0
	} else if value - radius < 0.0 {
		radius
	} else if value + radius > extent {
		extent - radius
	} else {
		value
	}
}

/// Clamps each axis of `(x, y)` independently.
pub fn clamp_position((x, y): (f64, f64), radius: f64, bounds: Bounds) -> (f64, f64) {
	(
		clamp_axis(x, radius, bounds.width),
		clamp_axis(y, radius, bounds.height),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	const BOUNDS: Bounds = Bounds {
		width: 700.0,
		height: 500.0,
	};

	#[test]
	fn hub_radius_is_scaled() {
		let config = LayoutConfig::default();
		assert_eq!(config.node_radius(false), 30.0);
		assert_eq!(config.node_radius(true), 60.0);
	}

	#[test]
	fn clamps_each_axis_independently() {
		assert_eq!(clamp_position((-40.0, 250.0), 30.0, BOUNDS), (30.0, 250.0));
		assert_eq!(clamp_position((350.0, 480.0), 30.0, BOUNDS), (350.0, 470.0));
		assert_eq!(clamp_position((10.0, 900.0), 60.0, BOUNDS), (60.0, 440.0));
	}

	#[test]
	fn in_bounds_positions_are_untouched() {
		for p in [(30.0, 30.0), (670.0, 470.0), (123.5, 321.25)] {
			assert_eq!(clamp_position(p, 30.0, BOUNDS), p);
			let once = clamp_position(p, 30.0, BOUNDS);
			assert_eq!(clamp_position(once, 30.0, BOUNDS), once);
		}
	}

	#[test]
	fn oversized_node_is_centred() {
		assert_eq!(clamp_axis(-50.0, 30.0, 40.0), 20.0);
		assert_eq!(clamp_axis(500.0, 30.0, 40.0), 20.0);
		let narrow = Bounds {
			width: 100.0,
			height: 500.0,
		};
		assert_eq!(clamp_position((0.0, 0.0), 60.0, narrow), (50.0, 60.0));
	}
}
