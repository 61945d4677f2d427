use crate::{Edge, Error, Point, Vec2};

const H: f64 = 0.5;

/// Shape of a unit tile. Triangles are named by the corner holding the right
/// angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// ■, code 0.
    Square,
    /// ◣, code 1.
    LowerLeft,
    /// ◤, code 2.
    UpperLeft,
    /// ◥, code 3.
    UpperRight,
    /// ◢, code 4.
    LowerRight,
}

impl TileKind {
    pub const ALL: [TileKind; 5] = [
        Self::Square,
        Self::LowerLeft,
        Self::UpperLeft,
        Self::UpperRight,
        Self::LowerRight,
    ];

    pub fn code(self) -> i64 {
        match self {
            Self::Square => 0,
            Self::LowerLeft => 1,
            Self::UpperLeft => 2,
            Self::UpperRight => 3,
            Self::LowerRight => 4,
        }
    }

    pub fn edge_count(self) -> usize {
        match self {
            Self::Square => 4,
            _ => 3,
        }
    }
}

impl TryFrom<i64> for TileKind {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Square),
            1 => Ok(Self::LowerLeft),
            2 => Ok(Self::UpperLeft),
            3 => Ok(Self::UpperRight),
            4 => Ok(Self::LowerRight),
            _ => Err(Error::UnsupportedTileType { code }),
        }
    }
}

// Edge vocabulary shared by every tile kind.
//
// Any segment two neighbouring cells can share is emitted with the same
// endpoint order by both cells: horizontal edges run left to right, vertical
// edges top to bottom, and each diagonal has a single fixed orientation. A
// new shape must reuse these constructors, otherwise adjacency detection
// silently stops matching its edges.
fn top(c: Point) -> Edge {
    Edge::new(c + Vec2::new(-H, H), c + Vec2::new(H, H))
}

fn right(c: Point) -> Edge {
    Edge::new(c + Vec2::new(H, H), c + Vec2::new(H, -H))
}

fn bottom(c: Point) -> Edge {
    Edge::new(c + Vec2::new(-H, -H), c + Vec2::new(H, -H))
}

fn left(c: Point) -> Edge {
    Edge::new(c + Vec2::new(-H, H), c + Vec2::new(-H, -H))
}

fn slash(c: Point) -> Edge {
    Edge::new(c + Vec2::new(-H, -H), c + Vec2::new(H, H))
}

fn backslash(c: Point) -> Edge {
    Edge::new(c + Vec2::new(-H, H), c + Vec2::new(H, -H))
}

/// Boundary edges of a tile of `kind` centred on `center`.
pub fn tile_edges(center: Point, kind: TileKind) -> Vec<Edge> {
    match kind {
        TileKind::Square => vec![top(center), right(center), bottom(center), left(center)],
        TileKind::LowerLeft => vec![bottom(center), left(center), backslash(center)],
        TileKind::UpperLeft => vec![top(center), left(center), slash(center)],
        TileKind::UpperRight => vec![top(center), right(center), backslash(center)],
        TileKind::LowerRight => vec![right(center), bottom(center), slash(center)],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    position: Point,
    kind: TileKind,
    edges: Vec<Edge>,
}

impl Tile {
    pub fn new(position: Point, kind: TileKind) -> Result<Self, Error> {
        if !position.is_finite() {
            return Err(Error::NonFinitePosition {
                x: position.x,
                y: position.y,
            });
        }

        Ok(Self {
            position,
            kind,
            edges: tile_edges(position, kind),
        })
    }

    /// Builds a tile from a raw type code, rejecting codes outside `0..=4`.
    pub fn from_code(position: Point, code: i64) -> Result<Self, Error> {
        Self::new(position, TileKind::try_from(code)?)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Tile, TileKind, tile_edges};
    use crate::{Edge, Error, Point};

    fn on_unit_square_boundary(p: Point, c: Point) -> bool {
        let dx = (p.x - c.x).abs();
        let dy = (p.y - c.y).abs();
        (dx == 0.5 && dy <= 0.5) || (dy == 0.5 && dx <= 0.5)
    }

    #[test]
    fn edge_counts_and_endpoints_per_kind() {
        let c = Point::new(3.0, -2.0);
        for kind in TileKind::ALL {
            let edges = tile_edges(c, kind);
            assert_eq!(edges.len(), kind.edge_count(), "{kind:?}");
            for e in &edges {
                assert!(on_unit_square_boundary(e.a, c), "{kind:?} {e:?}");
                assert!(on_unit_square_boundary(e.b, c), "{kind:?} {e:?}");
            }

            let distinct: HashSet<Edge> = edges.iter().copied().collect();
            assert_eq!(distinct.len(), edges.len());
        }
    }

    #[test]
    fn codes_round_trip_through_kind() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::try_from(kind.code()), Ok(kind));
        }
    }

    #[test]
    fn unsupported_code_is_rejected() {
        let err = Tile::from_code(Point::new(0.0, 0.0), 7).unwrap_err();
        assert_eq!(err, Error::UnsupportedTileType { code: 7 });

        assert!(Tile::from_code(Point::new(0.0, 0.0), -1).is_err());
    }

    #[test]
    fn non_finite_position_is_rejected() {
        let err = Tile::new(Point::new(f64::NAN, 0.0), TileKind::Square).unwrap_err();
        assert!(matches!(err, Error::NonFinitePosition { .. }));
    }

    #[test]
    fn horizontal_neighbours_share_one_edge() {
        let a = Tile::new(Point::new(0.0, 0.0), TileKind::Square).unwrap();
        let b = Tile::new(Point::new(1.0, 0.0), TileKind::Square).unwrap();

        let shared: Vec<_> = a.edges().iter().filter(|e| b.edges().contains(e)).collect();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].a, Point::new(0.5, 0.5));
        assert_eq!(shared[0].b, Point::new(0.5, -0.5));
    }

    #[test]
    fn vertical_neighbours_share_one_edge() {
        let a = Tile::new(Point::new(0.0, 0.0), TileKind::Square).unwrap();
        let b = Tile::new(Point::new(0.0, 1.0), TileKind::LowerRight).unwrap();

        let shared = a.edges().iter().filter(|e| b.edges().contains(e)).count();
        assert_eq!(shared, 1);
    }

    #[test]
    fn complementary_triangles_share_their_diagonal() {
        let c = Point::new(0.0, 0.0);
        let pairs = [
            (TileKind::LowerLeft, TileKind::UpperRight),
            (TileKind::UpperLeft, TileKind::LowerRight),
        ];
        for (k1, k2) in pairs {
            let a = Tile::new(c, k1).unwrap();
            let b = Tile::new(c, k2).unwrap();
            let shared = a.edges().iter().filter(|e| b.edges().contains(e)).count();
            assert_eq!(shared, 1, "{k1:?} / {k2:?}");
        }
    }

    #[test]
    fn diagonal_neighbours_share_nothing() {
        let a = Tile::new(Point::new(0.0, 0.0), TileKind::Square).unwrap();
        let b = Tile::new(Point::new(1.0, 1.0), TileKind::Square).unwrap();

        assert!(!a.edges().iter().any(|e| b.edges().contains(e)));
    }
}
