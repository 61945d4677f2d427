use tile_core::{Point, TopologyDefect};

use crate::GroupId;

/// Closed outline of one tile group. The first vertex is not repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub group: GroupId,
    /// Input indices of the tiles this contour encloses.
    pub tiles: Vec<usize>,
    pub points: Vec<Point>,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }

        let n = self.points.len();
        (0..n)
            .map(|i| {
                let d = self.points[(i + 1) % n] - self.points[i];
                (d.x * d.x + d.y * d.y).sqrt()
            })
            .sum()
    }
}

/// A group whose boundary could not be traced.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDefect {
    pub group: GroupId,
    pub tiles: Vec<usize>,
    pub defect: TopologyDefect,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContourSet {
    /// One contour per traceable group, in group order.
    pub contours: Vec<Contour>,
    pub defects: Vec<GroupDefect>,
}

impl ContourSet {
    pub fn num_groups(&self) -> usize {
        self.contours.len() + self.defects.len()
    }

    pub fn iter_contours(&self) -> impl Iterator<Item = &Contour> {
        self.contours.iter()
    }

    pub fn is_complete(&self) -> bool {
        self.defects.is_empty()
    }
}
