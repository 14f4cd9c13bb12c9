//! Grid construction parameters

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_LEAF_SIZE;
use crate::error::{GridError, Result};

fn default_leaf_size() -> f64 {
    DEFAULT_LEAF_SIZE
}

/// Description of a grid, e.g. read from a solver configuration file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub dim_sizes: Vec<usize>,
    #[serde(default = "default_leaf_size")]
    pub leaf_size: f64,
}

impl GridConfig {
    pub fn new(dim_sizes: Vec<usize>, leaf_size: f64) -> Self {
        GridConfig {
            dim_sizes,
            leaf_size,
        }
    }

    /// Validated dimension sizes for a `D`-dimensional grid.
    pub fn dim_sizes<const D: usize>(&self) -> Result<[usize; D]> {
        let dim_sizes = <[usize; D]>::try_from(self.dim_sizes.as_slice()).map_err(|_| {
            GridError::InvalidArgument(format!(
                "expected {} dimension sizes, got {}",
                D,
                self.dim_sizes.len()
            ))
        })?;

        if dim_sizes.contains(&0) {
            return Err(GridError::InvalidArgument(format!(
                "dimension sizes must be positive: {:?}",
                dim_sizes
            )));
        }
        if !(self.leaf_size.is_finite() && self.leaf_size > 0.0) {
            return Err(GridError::InvalidArgument(format!(
                "leaf size must be positive: {}",
                self.leaf_size
            )));
        }

        Ok(dim_sizes)
    }
}
