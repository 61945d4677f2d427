use core::fmt;

use crate::Point;

/// Why a group's boundary could not be traced as one simple closed loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TopologyDefect {
    /// Every edge of the group cancelled out.
    NoBoundary,
    /// The walk stalled at `at` with `remaining` edges left untraced, or ended
    /// away from its starting vertex (`remaining == 0`).
    OpenChain { at: Point, remaining: usize },
    /// More than one untraced edge meets at `at`.
    Branch { at: Point },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    UnsupportedTileType { code: i64 },
    NonFinitePosition { x: f64, y: f64 },
    DegenerateTopology { group: usize, defect: TopologyDefect },
}

impl fmt::Display for TopologyDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBoundary => write!(f, "no boundary edges survive cancellation"),
            Self::OpenChain { at, remaining: 0 } => {
                write!(f, "boundary ends at ({}, {}) without closing", at.x, at.y)
            }
            Self::OpenChain { at, remaining } => write!(
                f,
                "boundary breaks at ({}, {}) with {remaining} edges untraced",
                at.x, at.y
            ),
            Self::Branch { at } => {
                write!(f, "boundary branches at ({}, {})", at.x, at.y)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedTileType { code } => {
                write!(f, "unsupported tile type {code}: expected 0..=4")
            }
            Self::NonFinitePosition { x, y } => {
                write!(f, "non-finite tile position ({x}, {y})")
            }
            Self::DegenerateTopology { group, defect } => {
                write!(f, "degenerate topology in group {group}: {defect}")
            }
        }
    }
}

impl std::error::Error for Error {}
