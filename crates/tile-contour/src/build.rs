use tile_core::{Error, Point, Tile};

use crate::cancel::cancel_interior_edges;
use crate::contour::{Contour, ContourSet, GroupDefect};
use crate::group::{TileOrder, group_tiles};
use crate::trace::trace_group;

/// What to do with a group whose boundary is not a single simple loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Record the group in [`ContourSet::defects`] and keep going.
    #[default]
    Report,
    /// Fail the whole build with [`Error::DegenerateTopology`].
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutlineConfig {
    pub order: TileOrder,
    pub degenerate: DegeneratePolicy,
}

/// Builds tiles from `(position, type code)` records and outlines them.
///
/// Every record is validated before any grouping starts, so an unsupported
/// type code fails the build without partial output.
pub fn build_contours_from_codes(
    records: &[(Point, i64)],
    cfg: &OutlineConfig,
) -> Result<ContourSet, Error> {
    let tiles = records
        .iter()
        .map(|&(pos, code)| Tile::from_code(pos, code))
        .collect::<Result<Vec<_>, _>>()?;

    build_contours(&tiles, cfg)
}

pub fn build_contours(tiles: &[Tile], cfg: &OutlineConfig) -> Result<ContourSet, Error> {
    let groups = group_tiles(tiles, cfg.order);

    let mut out = ContourSet::default();
    let mut cancelled = 0_usize;
    for (gid, mut group) in groups.into_iter().enumerate() {
        cancelled += cancel_interior_edges(&mut group);

        match trace_group(&group.edges) {
            Ok(points) => out.contours.push(Contour {
                group: gid,
                tiles: group.tiles,
                points,
            }),
            Err(defect) => {
                if cfg.degenerate == DegeneratePolicy::Abort {
                    return Err(Error::DegenerateTopology { group: gid, defect });
                }

                tracing::warn!(
                    group = gid,
                    tiles = group.tiles.len(),
                    %defect,
                    "skipping group with degenerate boundary"
                );
                out.defects.push(GroupDefect {
                    group: gid,
                    tiles: group.tiles,
                    defect,
                });
            }
        }
    }

    tracing::debug!(
        tiles = tiles.len(),
        cancelled,
        contours = out.contours.len(),
        defects = out.defects.len(),
        "built contours"
    );

    Ok(out)
}
