use std::collections::HashMap;

use tile_core::Edge;

use crate::TileGroup;

/// Strips every edge value that occurs more than once in `group`.
///
/// All copies go, not all but one: an edge emitted by two tiles lies inside
/// the group. Survivors keep their relative order. Returns the number of edge
/// occurrences removed.
pub fn cancel_interior_edges(group: &mut TileGroup) -> usize {
    let before = group.edges.len();
    retain_boundary(&mut group.edges);
    before - group.edges.len()
}

fn retain_boundary(edges: &mut Vec<Edge>) {
    let mut count: HashMap<Edge, usize> = HashMap::with_capacity(edges.len());
    for e in edges.iter() {
        *count.entry(*e).or_insert(0) += 1;
    }
    edges.retain(|e| count[e] == 1);
}
