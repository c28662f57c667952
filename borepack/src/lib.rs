//!
//! Sizes a circular bore (conduit) that holds a set of circular cable cross-sections
//! without overlap, and reports where every cable sits inside it.
//!
//! The pipeline: cable selections are expanded into [`CircleSpec`](entities::CircleSpec)s by the
//! [`extract`] module, the [`search`] module steps through candidate bore radii and drives the
//! front-chain [`placement`] heuristic, and finally the [`color`] module tags every distinct cable
//! type with a stable visualization color.
//!

/// Geometric primitives and the smallest enclosing circle
pub mod geometry;

/// Cables, circles, bores and packing results
pub mod entities;

/// Expansion of cable selections into circle specs
pub mod extract;

/// Front-chain placement of circles for a fixed trial bore radius
pub mod placement;

/// Stepped search over candidate bore radii
pub mod search;

/// Visualization colors for placed circles
pub mod color;

/// Typed failure outcomes of the engine
pub mod error;

/// Importing and exporting from/to the library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Tolerance used throughout the engine to treat near-tangency as non-overlap and near-boundary as
/// contained.
pub const EPSILON: f64 = 1e-9;

#[doc(inline)]
pub use error::PackError;
#[doc(inline)]
pub use search::{pack, pack_cables};
