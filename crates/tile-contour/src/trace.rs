use std::collections::HashMap;

use tile_core::{Edge, Point, TopologyDefect, Vec2};

/// Walks a group's boundary edges into one closed polygon.
///
/// `edges` must hold each boundary segment exactly once. Edge orientation is
/// ignored: an edge may be walked from `b` to `a`. Only vertices where the
/// walking direction changes are kept, and the first vertex is not repeated at
/// the end.
///
/// The walk starts on `edges[0]`, so the output is deterministic for a given
/// edge order. Anything other than a single simple loop is reported as a
/// [`TopologyDefect`] instead of being traced.
pub fn trace_group(edges: &[Edge]) -> Result<Vec<Point>, TopologyDefect> {
    let Some(&first) = edges.first() else {
        return Err(TopologyDefect::NoBoundary);
    };

    let mut incident: HashMap<Point, Vec<usize>> = HashMap::with_capacity(edges.len());
    for (i, e) in edges.iter().enumerate() {
        incident.entry(e.a).or_default().push(i);
        incident.entry(e.b).or_default().push(i);
    }

    let mut alive = vec![true; edges.len()];
    let mut remaining = edges.len();

    let start = first.a;
    let initial_dir = first.direction();
    let mut dir = initial_dir;
    let mut cur = first.b;
    let mut cur_edge = 0_usize;

    // Provisional: dropped below if the loop closes without turning here.
    let mut vertices = vec![start];

    loop {
        alive[cur_edge] = false;
        remaining -= 1;
        if remaining == 0 {
            break;
        }

        let next = next_incident(&incident, &alive, cur, remaining)?;
        let (next_dir, far) = walk_from(edges[next], cur);

        if next_dir != dir {
            vertices.push(cur);
        }

        dir = next_dir;
        cur = far;
        cur_edge = next;
    }

    if cur != start {
        return Err(TopologyDefect::OpenChain { at: cur, remaining: 0 });
    }

    if dir == initial_dir {
        vertices.remove(0);
    }

    Ok(vertices)
}

fn next_incident(
    incident: &HashMap<Point, Vec<usize>>,
    alive: &[bool],
    at: Point,
    remaining: usize,
) -> Result<usize, TopologyDefect> {
    let mut found = None;
    for &i in incident.get(&at).map(Vec::as_slice).unwrap_or_default() {
        if !alive[i] {
            continue;
        }
        if found.is_some() {
            return Err(TopologyDefect::Branch { at });
        }
        found = Some(i);
    }

    found.ok_or(TopologyDefect::OpenChain { at, remaining })
}

/// Direction of travel and far endpoint when entering `e` at `from`.
#[inline]
fn walk_from(e: Edge, from: Point) -> (Vec2, Point) {
    if e.a == from {
        (e.b - e.a, e.b)
    } else {
        (e.a - e.b, e.a)
    }
}
