use std::collections::HashMap;

use tile_core::{Edge, Tile};

pub type GroupId = usize;

/// Order in which tiles are offered to the grouper.
///
/// The order decides group discovery order, and with it the order of the
/// resulting contours. It never changes which tiles share a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileOrder {
    /// Sorted by exact `x`, then `y`. Ties keep input order.
    #[default]
    ReadingOrder,
    Input,
}

/// One connected component of tiles.
///
/// `edges` is a multiset: interior edges appear once per tile that emits them
/// until [`cancel_interior_edges`](crate::cancel_interior_edges) strips them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileGroup {
    /// Input indices of the member tiles, in visiting order.
    pub tiles: Vec<usize>,
    pub edges: Vec<Edge>,
}

/// Partitions `tiles` into maximal groups linked by shared edge values.
///
/// Groups live in an arena. A tile touching several groups rebuilds them as a
/// single new entry at the end of the arena (its own edges first, then the
/// absorbed groups in arena order) and retires the old slots. An edge index
/// keeps adjacency lookups proportional to the tile's own edge count.
pub fn group_tiles(tiles: &[Tile], order: TileOrder) -> Vec<TileGroup> {
    let mut arena: Vec<Option<TileGroup>> = Vec::new();
    let mut owner: HashMap<Edge, GroupId> = HashMap::new();
    let mut matched: Vec<GroupId> = Vec::new();

    for idx in visit_order(tiles, order) {
        let tile = &tiles[idx];

        matched.clear();
        for edge in tile.edges() {
            if let Some(&gid) = owner.get(edge)
                && !matched.contains(&gid)
            {
                matched.push(gid);
            }
        }
        matched.sort_unstable();

        let mut group = TileGroup {
            tiles: vec![idx],
            edges: tile.edges().to_vec(),
        };
        for &gid in &matched {
            let Some(old) = arena[gid].take() else {
                continue;
            };
            group.tiles.extend(old.tiles);
            group.edges.extend(old.edges);
        }

        let gid = arena.len();
        // Re-point every edge, the tile's own included.
        for edge in &group.edges {
            owner.insert(*edge, gid);
        }
        arena.push(Some(group));
    }

    let groups: Vec<TileGroup> = arena.into_iter().flatten().collect();
    tracing::debug!(tiles = tiles.len(), groups = groups.len(), "grouped tiles");
    groups
}

fn visit_order(tiles: &[Tile], order: TileOrder) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..tiles.len()).collect();
    if order == TileOrder::ReadingOrder {
        idx.sort_by(|&i, &j| {
            let (p, q) = (tiles[i].position(), tiles[j].position());
            p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y))
        });
    }
    idx
}
