//! JSON boundary of the tile outliner.
//!
//! Input is an array of `{"pos": {"x": f64, "y": f64}, "type": int}` records.
//! Type codes are kept raw here; rejecting unsupported codes is left to
//! [`tile_core::Tile::from_code`] so the whole batch fails before outlining.
//!
//! Output is an array of contours, each an array of `{"x": f64, "y": f64}`.

mod error;
mod json;

pub use error::Error;
pub use json::{PointDto, TileRecord, contours_to_json, load_tiles, parse_tiles, write_contours};
