//! The bounded area robots move in.

use derive_more::{Display, Error};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Error returned when a [`Grid`] is built from unusable dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Width or height was zero or negative.
    #[display("grid dimensions must be positive, got {width}x{height}")]
    NonPositiveDimension { width: i32, height: i32 },
}

/// Raw dimensions as they arrive from a serialized source, before validation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct GridDimensions {
    width: i32,
    height: i32,
}

/// Rectangular movement boundary.
///
/// Both upper bounds are *inclusive*: a robot may stand on `x == width` or `y == height`,
/// one unit past the conventional index range. Lower bounds are `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridDimensions", into = "GridDimensions")]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Builds a grid, rejecting non-positive dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::NonPositiveDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// X-extent.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Y-extent.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns `true` when `pos` lies inside the inclusive boundary
    /// `0 <= x <= width`, `0 <= y <= height`.
    pub fn contains(&self, pos: IVec2) -> bool {
        (0..=self.width).contains(&pos.x) && (0..=self.height).contains(&pos.y)
    }
}

impl TryFrom<GridDimensions> for Grid {
    type Error = GridError;

    fn try_from(dims: GridDimensions) -> Result<Self, Self::Error> {
        Grid::new(dims.width, dims.height)
    }
}

impl From<Grid> for GridDimensions {
    fn from(grid: Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
        }
    }
}
