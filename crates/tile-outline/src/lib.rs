//! Umbrella crate for the `tile-outline` workspace.
//!
//! Re-exports the geometry primitives, the outlining pipeline and the JSON
//! boundary under one name.

pub use tile_contour::*;
pub use tile_core::*;

pub mod io {
    pub use tile_io::*;
}
