//! Cell payloads stored in a grid.

pub mod basic;
pub mod marching;
#[cfg(test)]
pub(crate) mod testing;

pub use self::basic::BasicCell;
pub use self::marching::{FmCell, FmState};

/// Occupancy below this threshold marks a cell as an obstacle.
pub(crate) const OCCUPANCY_EPS: f64 = f64::EPSILON * 1.0e3;

/// Capabilities required from every cell type stored in a [`Grid`](crate::Grid).
pub trait Cell: Clone + Default {
    /// Primary scalar of the cell.
    fn value(&self) -> f64;

    /// Select one of the scalars exposed by a multi-valued cell.
    ///
    /// `what == 0` is the primary value. The grid passes the selector through
    /// unchanged when saving.
    fn value_of(&self, what: usize) -> f64 {
        let _ = what;
        self.value()
    }

    /// Called by the grid with the cell's own flat index.
    fn set_index(&mut self, index: usize);

    /// Diagnostic name, written as the header of saved grids.
    fn type_name(&self) -> &'static str;
}

/// Cells whose primary value can be written back, e.g. when loading a saved grid.
pub trait MutableCell: Cell {
    fn set_value(&mut self, value: f64);

    /// Restore the solver-facing state, keeping the index and occupancy.
    fn set_default(&mut self);
}

/// Cells carrying an occupancy (1 = clear, 0 = obstacle).
pub trait OccupancyCell: Cell {
    fn occupancy(&self) -> f64;
    fn set_occupancy(&mut self, occupancy: f64);

    fn is_occupied(&self) -> bool {
        self.occupancy() < OCCUPANCY_EPS
    }
}
