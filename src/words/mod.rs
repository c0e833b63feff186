//! Verb dictionary and graph derivation, independent of the canvas.

pub mod collate;
mod dictionary;
mod error;
mod graph;
mod layout;
mod model;
mod session;

pub use dictionary::{Dictionary, RawChild, RawRoot};
pub use error::{Result, WordError};
pub use graph::{GraphLink, GraphNode, LinkClass, VerbGraph, build_graph};
pub use layout::{Bounds, LayoutConfig, clamp_axis, clamp_position};
pub use model::{RootWord, Word, WordKind};
pub use session::{GraphSession, Viewer};
