//! Geometry primitives, re-exported from `thicket-geom`.
pub use thicket_geom::*;
