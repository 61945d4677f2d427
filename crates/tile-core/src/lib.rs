//! Geometry primitives and tile shapes.
//!
//! ## Coordinates
//! Tiles are unit cells addressed by their centre. A tile's edges sit `0.5`
//! away from the centre along each axis, so neighbouring cells on an integer
//! grid share exact edge endpoints.
//!
//! ## Exact comparison
//! [`Point`] and [`Edge`] compare and hash by exact value with no tolerance.
//! [`Edge`] equality is order-sensitive; every tile shape emits shared
//! segments with the same endpoint order so neighbours match.

mod error;
mod geom;
mod tile;

pub use error::{Error, TopologyDefect};
pub use geom::{Edge, Point, Vec2};
pub use tile::{Tile, TileKind, tile_edges};
