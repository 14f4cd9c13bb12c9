//! Regular n-dimensional grids for wavefront propagation and level-set solvers.
//!
//! A [`Grid`] stores its cells in a single flat vector. The number of
//! dimensions is a const parameter, cells are addressed by flat index and
//! neighbours are looked up with 4-connectivity.
//!
//! ```
//! use ndgrid::{BasicCell, Grid};
//!
//! let grid = Grid::<BasicCell, 2>::new([3, 3], 0.1);
//! assert_eq!(grid.index_to_coords(4), [1, 1]);
//! assert_eq!(grid.neighbors(0), vec![1, 3]);
//! ```

pub mod cell;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;

pub use cell::{BasicCell, Cell, FmCell, FmState, MutableCell, OccupancyCell};
pub use config::GridConfig;
pub use domain::{Grid, Layout, NeighborSearch};
pub use error::{GridError, Result};
pub use math::LinearView;
