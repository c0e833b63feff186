use crate::words::LayoutConfig;

/// How a node looks at one point of its reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
	pub scale: f64,
	pub opacity: f64,
	pub show_translation: bool,
}

const FADED_OPACITY: f64 = 0.3;

/// A clicked node showing its translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
	pub slot: usize,
	pub elapsed: f64,
}

impl Reveal {
	pub fn new(slot: usize) -> Self {
		Self { slot, elapsed: 0.0 }
	}

	/// Grow and fade, hold with the translation up, then shrink back.
	/// `None` once the reveal has finished.
	pub fn frame(&self, config: &LayoutConfig) -> Option<RevealFrame> {
		let (trans, pause) = (config.transition_secs, config.pause_secs);
		let t = self.elapsed;
		let grown = |p: f64| RevealFrame {
			scale: 1.0 + (config.hub_scale_factor - 1.0) * p,
			opacity: 1.0 - (1.0 - FADED_OPACITY) * p,
			show_translation: t >= trans && t < trans + pause,
		};

		if t < trans {
			Some(grown(t / trans))
		} else if t < trans + pause {
			Some(grown(1.0))
		} else if t < 2.0 * trans + pause {
			Some(grown(1.0 - (t - trans - pause) / trans))
		} else {
			None
		}
	}
}
