use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tile_contour::Contour;
use tile_core::{Point, Tile};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointDto {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for PointDto {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PointDto> for Point {
    fn from(p: PointDto) -> Self {
        Point::new(p.x, p.y)
    }
}

/// One entry of the tile layout: `{"pos": {"x": .., "y": ..}, "type": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    pub pos: PointDto,
    #[serde(rename = "type")]
    pub code: i64,
}

impl TileRecord {
    pub fn position(&self) -> Point {
        self.pos.into()
    }

    pub fn to_tile(&self) -> Result<Tile, tile_core::Error> {
        Tile::from_code(self.position(), self.code)
    }
}

/// Parses a JSON array of tile records.
///
/// A document that is not an array is reported as
/// [`Error::SourceUnavailable`]; a bad element as [`Error::MalformedRecord`]
/// carrying its index.
pub fn parse_tiles(json: &str) -> Result<Vec<TileRecord>, Error> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| Error::SourceUnavailable {
            path: None,
            reason: e.to_string(),
        })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, v)| {
            serde_json::from_value(v).map_err(|e| Error::MalformedRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

pub fn load_tiles(path: &Path) -> Result<Vec<TileRecord>, Error> {
    let json = fs::read_to_string(path).map_err(|e| Error::SourceUnavailable {
        path: Some(path.to_path_buf()),
        reason: e.to_string(),
    })?;

    let records = parse_tiles(&json).map_err(|e| match e {
        Error::SourceUnavailable { path: None, reason } => Error::SourceUnavailable {
            path: Some(path.to_path_buf()),
            reason,
        },
        other => other,
    })?;

    tracing::debug!(path = %path.display(), records = records.len(), "loaded tiles");
    Ok(records)
}

/// Serializes contours as a JSON array of `{x, y}` arrays, in contour order.
pub fn contours_to_json(contours: &[Contour]) -> Result<String, Error> {
    let dto: Vec<Vec<PointDto>> = contours
        .iter()
        .map(|c| c.points.iter().copied().map(PointDto::from).collect())
        .collect();

    serde_json::to_string(&dto).map_err(|e| Error::Serialize {
        reason: e.to_string(),
    })
}

/// Writes contours to `path`. Serialization completes before the file is
/// touched, so a failure never leaves a partial file behind.
pub fn write_contours(path: &Path, contours: &[Contour]) -> Result<(), Error> {
    let json = contours_to_json(contours)?;
    fs::write(path, json).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), contours = contours.len(), "wrote contours");
    Ok(())
}
