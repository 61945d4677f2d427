//! Outline extraction for tile layouts.
//!
//! The pipeline runs in four stages over one batch of tiles:
//! - [`group_tiles`] partitions tiles into maximal groups whose members share
//!   at least one boundary edge value. Touching only at a corner does not
//!   connect two tiles.
//! - [`cancel_interior_edges`] drops every edge that appears more than once in
//!   a group, leaving the group's outer boundary.
//! - [`trace_group`] walks that boundary into a closed polygon keeping only
//!   the vertices where the direction changes.
//! - [`build_contours`] chains the stages and collects one [`Contour`] per
//!   group, or a [`GroupDefect`] for groups that are not a single simple loop
//!   (regions with holes, pinched boundaries).
//!
//! Tile ordering ([`TileOrder`]) only affects the order of the output.

mod build;
mod cancel;
mod contour;
mod group;
mod trace;

pub use build::{DegeneratePolicy, OutlineConfig, build_contours, build_contours_from_codes};
pub use cancel::cancel_interior_edges;
pub use contour::{Contour, ContourSet, GroupDefect};
pub use group::{GroupId, TileGroup, TileOrder, group_tiles};
pub use trace::trace_group;
