//! N-dimensional regular grid

use std::ops::{Index, IndexMut};
use std::slice;

use tracing::debug;

use crate::cell::{Cell, MutableCell};
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use super::layout::Layout;

/// Edge length used when none is given.
pub const DEFAULT_LEAF_SIZE: f64 = 0.05;

/// Regular `D`-dimensional grid of cells stored in a single flat vector.
///
/// Cells are addressed by a flat index in `0..size()`; see [`Layout`] for the
/// index <-> coordinate mapping. Neighbour queries use 4-connectivity, i.e. the
/// predecessor and successor along each axis.
#[derive(Clone, Debug)]
pub struct Grid<C, const D: usize> {
    layout: Layout<D>,
    leaf_size: f64,
    cells: Vec<C>,
    occupied: Vec<usize>,
    clean: bool,
}

impl<C: Cell, const D: usize> Default for Grid<C, D> {
    /// Degenerate grid without cells, to be followed by [`Grid::resize`].
    fn default() -> Self {
        Grid {
            layout: Layout::empty(),
            leaf_size: DEFAULT_LEAF_SIZE,
            cells: Vec::new(),
            occupied: Vec::new(),
            clean: true,
        }
    }
}

impl<C: Cell, const D: usize> Grid<C, D> {
    pub fn new(dim_sizes: [usize; D], leaf_size: f64) -> Self {
        let mut grid = Grid {
            leaf_size,
            ..Default::default()
        };
        grid.resize(dim_sizes);
        grid
    }

    pub fn with_dims(dim_sizes: [usize; D]) -> Self {
        Self::new(dim_sizes, DEFAULT_LEAF_SIZE)
    }

    pub fn from_config(config: &GridConfig) -> Result<Self> {
        let dim_sizes = config.dim_sizes::<D>()?;
        Ok(Self::new(dim_sizes, config.leaf_size))
    }

    /// Redefine the dimension sizes.
    ///
    /// Previous cell contents are discarded: all cells are default constructed and
    /// receive their new flat index. Every size must be non-zero.
    pub fn resize(&mut self, dim_sizes: [usize; D]) {
        self.layout = Layout::new(dim_sizes);

        let num_cells = self.layout.num_cells();
        self.cells.clear();
        self.cells.resize(num_cells, C::default());
        for (i, cell) in self.cells.iter_mut().enumerate() {
            cell.set_index(i);
        }

        self.occupied.clear();
        self.clean = true;

        debug!(?dim_sizes, num_cells, "resized grid");
    }

    pub fn layout(&self) -> &Layout<D> {
        &self.layout
    }

    /// Number of cells.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn dim_count(&self) -> usize {
        D
    }

    pub fn dim_sizes(&self) -> [usize; D] {
        self.layout.dim_sizes()
    }

    /// Dimension sizes separated by tabs.
    pub fn dim_sizes_str(&self) -> String {
        self.dim_sizes()
            .iter()
            .map(|size| size.to_string())
            .collect::<Vec<_>>()
            .join("\t")
    }

    pub fn strides(&self) -> [usize; D] {
        self.layout.strides()
    }

    pub fn leaf_size(&self) -> f64 {
        self.leaf_size
    }

    pub fn set_leaf_size(&mut self, leaf_size: f64) {
        self.leaf_size = leaf_size;
    }

    /// Diagnostic name of the stored cell type.
    pub fn cell_type_name(&self) -> &'static str {
        match self.cells.first() {
            Some(cell) => cell.type_name(),
            None => C::default().type_name(),
        }
    }

    /// Panics if `idx` is out of range.
    #[inline]
    pub fn at(&self, idx: usize) -> &C {
        &self.cells[idx]
    }

    /// Panics if `idx` is out of range.
    #[inline]
    pub fn at_mut(&mut self, idx: usize) -> &mut C {
        &mut self.cells[idx]
    }

    pub fn get(&self, idx: usize) -> Option<&C> {
        self.cells.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut C> {
        self.cells.get_mut(idx)
    }

    pub fn try_at(&self, idx: usize) -> Result<&C> {
        self.cells.get(idx).ok_or(GridError::OutOfRange {
            index: idx,
            size: self.cells.len(),
        })
    }

    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [C] {
        &mut self.cells
    }

    pub fn iter(&self) -> slice::Iter<'_, C> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, C> {
        self.cells.iter_mut()
    }

    pub fn index_to_coords(&self, idx: usize) -> [usize; D] {
        self.layout.index_to_coords(idx)
    }

    /// Fails with `InvalidArgument` unless `coords.len() == D`.
    pub fn index_to_coords_into(&self, idx: usize, coords: &mut [usize]) -> Result<()> {
        self.layout.index_to_coords_into(idx, coords)
    }

    /// Fails with `InvalidArgument` unless `coords.len() == D`.
    pub fn coords_to_index(&self, coords: &[usize]) -> Result<usize> {
        self.layout.coords_to_index(coords)
    }

    pub fn coords_to_index_array(&self, coords: &[usize; D]) -> usize {
        self.layout.coords_to_index_array(coords)
    }

    /// Append the neighbours of `idx` along `dim` to `neighbors`, predecessor first.
    ///
    /// Returns the number of appended indices.
    pub fn neighbors_in_dim(&self, idx: usize, dim: usize, neighbors: &mut Vec<usize>) -> usize {
        let before = neighbors.len();
        neighbors.extend(self.layout.neighbors_in_dim(idx, dim).iter().flatten());
        neighbors.len() - before
    }

    /// Neighbours of `idx` in all dimensions, ordered by dimension.
    pub fn neighbors(&self, idx: usize) -> Vec<usize> {
        let mut neighbors = Vec::with_capacity(2 * D);
        self.neighbors_into(idx, &mut neighbors);
        neighbors
    }

    /// Like [`Grid::neighbors`] but reuses `neighbors`, which is cleared first.
    pub fn neighbors_into(&self, idx: usize, neighbors: &mut Vec<usize>) -> usize {
        neighbors.clear();
        for dim in 0..D {
            self.neighbors_in_dim(idx, dim, neighbors);
        }
        neighbors.len()
    }

    /// Smallest value among the neighbours of `idx` along `dim`.
    ///
    /// `None` if the dimension has a single slice and hence no neighbours.
    pub fn min_neighbor_value_in_dim(&self, idx: usize, dim: usize) -> Option<f64> {
        match self.layout.neighbors_in_dim(idx, dim) {
            [Some(a), Some(b)] => Some(self.cells[a].value().min(self.cells[b].value())),
            [Some(n), None] | [None, Some(n)] => Some(self.cells[n].value()),
            [None, None] => None,
        }
    }

    /// Largest finite cell value, `None` if there is none.
    pub fn max_value(&self) -> Option<f64> {
        self.cells
            .iter()
            .map(Cell::value)
            .filter(|v| v.is_finite())
            .fold(None, |max, v| match max {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }

    pub fn occupied_cells(&self) -> &[usize] {
        &self.occupied
    }

    pub fn set_occupied_cells(&mut self, occupied: Vec<usize>) {
        self.occupied = occupied;
    }

    pub fn is_clean(&self) -> bool {
        self.clean
    }

    pub fn set_clean(&mut self, clean: bool) {
        self.clean = clean;
    }
}

impl<C: MutableCell, const D: usize> Grid<C, D> {
    /// Reset the state of all cells, keeping dimensions and occupancy.
    pub fn clean(&mut self) {
        for cell in &mut self.cells {
            cell.set_default();
        }
        self.clean = true;

        debug!(num_cells = self.cells.len(), "cleaned grid");
    }
}

impl<C, const D: usize> Index<usize> for Grid<C, D> {
    type Output = C;
    fn index(&self, idx: usize) -> &C {
        &self.cells[idx]
    }
}

impl<C, const D: usize> IndexMut<usize> for Grid<C, D> {
    fn index_mut(&mut self, idx: usize) -> &mut C {
        &mut self.cells[idx]
    }
}

impl<'a, C, const D: usize> IntoIterator for &'a Grid<C, D> {
    type Item = &'a C;
    type IntoIter = slice::Iter<'a, C>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::testing::ValueCell;
    use crate::cell::{BasicCell, FmCell, OccupancyCell};
    use proptest::prelude::*;

    fn grid_with_values<const D: usize>(dims: [usize; D], values: &[f64]) -> Grid<ValueCell, D> {
        let mut grid = Grid::<ValueCell, D>::with_dims(dims);
        for (cell, &v) in grid.iter_mut().zip(values) {
            cell.value = v;
        }
        grid
    }

    #[test]
    fn construction_indexes_cells() {
        let grid = Grid::<BasicCell, 3>::new([2, 3, 4], 0.1);
        assert_eq!(grid.size(), 24);
        assert_eq!(grid.dim_count(), 3);
        assert_eq!(grid.dim_sizes(), [2, 3, 4]);
        assert_eq!(grid.strides(), [2, 6, 24]);
        assert_eq!(grid.leaf_size(), 0.1);
        for (i, cell) in grid.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }

    #[test]
    fn default_grid_is_placeholder() {
        let grid = Grid::<ValueCell, 2>::default();
        assert!(grid.is_empty());
        assert_eq!(grid.leaf_size(), DEFAULT_LEAF_SIZE);
        assert_eq!(grid.cell_type_name(), "Cell");
    }

    #[test]
    fn resize_resets_storage() {
        let mut grid = grid_with_values([2, 2], &[1.0, 2.0, 3.0, 4.0]);
        grid.set_occupied_cells(vec![1]);
        grid.set_clean(false);

        grid.resize([3, 2]);

        assert_eq!(grid.size(), 6);
        assert!(grid.occupied_cells().is_empty());
        assert!(grid.is_clean());
        for (i, cell) in grid.iter().enumerate() {
            assert_eq!(*cell, ValueCell { value: 0.0, index: i });
        }
    }

    #[test]
    fn indexed_access() {
        let mut grid = Grid::<ValueCell, 2>::with_dims([2, 2]);
        grid[3].value = 7.0;
        grid.at_mut(0).value = 1.5;

        assert_eq!(grid.at(3).value(), 7.0);
        assert_eq!(grid[0].value(), 1.5);
        assert!(grid.get(4).is_none());
        assert!(matches!(
            grid.try_at(4),
            Err(GridError::OutOfRange { index: 4, size: 4 })
        ));
    }

    #[test]
    #[should_panic]
    fn unchecked_access_out_of_range_panics() {
        let grid = Grid::<ValueCell, 1>::with_dims([3]);
        grid.at(3);
    }

    #[test]
    fn neighbors_3x3() {
        let grid = Grid::<ValueCell, 2>::with_dims([3, 3]);
        let mut center = grid.neighbors(4);
        assert_eq!(center, vec![3, 5, 1, 7]);
        center.sort();
        assert_eq!(center, vec![1, 3, 5, 7]);
        assert_eq!(grid.neighbors(0), vec![1, 3]);
        assert_eq!(grid.neighbors(8), vec![7, 5]);
    }

    #[test]
    fn neighbors_in_dim_appends() {
        let grid = Grid::<ValueCell, 2>::with_dims([3, 3]);
        let mut neighbors = vec![42];
        assert_eq!(grid.neighbors_in_dim(4, 1, &mut neighbors), 2);
        assert_eq!(grid.neighbors_in_dim(3, 0, &mut neighbors), 1);
        assert_eq!(neighbors, vec![42, 1, 7, 4]);

        assert_eq!(grid.neighbors_into(0, &mut neighbors), 2);
        assert_eq!(neighbors, vec![1, 3]);
    }

    #[test]
    fn one_dimensional_neighbor_counts() {
        let grid = Grid::<ValueCell, 1>::with_dims([6]);
        for idx in 0..6 {
            let expected = if idx == 0 || idx == 5 { 1 } else { 2 };
            assert_eq!(grid.neighbors(idx).len(), expected);
        }
    }

    #[test]
    fn min_neighbor_value() {
        let grid = grid_with_values([2], &[5.0, 2.0]);
        assert_eq!(grid.min_neighbor_value_in_dim(0, 0), Some(2.0));

        // the cell's own value does not take part
        let grid = grid_with_values([3], &[5.0, 2.0, 9.0]);
        assert_eq!(grid.min_neighbor_value_in_dim(1, 0), Some(5.0));

        let grid = grid_with_values([3, 1], &[5.0, 2.0, 9.0]);
        assert_eq!(grid.min_neighbor_value_in_dim(1, 1), None);
    }

    #[test]
    fn max_value_skips_infinity() {
        let grid = grid_with_values([2, 2], &[1.0, f64::INFINITY, 3.5, -2.0]);
        assert_eq!(grid.max_value(), Some(3.5));
    }

    // Historically the maximum started at zero, reporting 0 for these grids.
    #[test]
    fn max_value_of_negative_grid_is_negative() {
        let grid = grid_with_values([3], &[-4.0, -1.5, -3.0]);
        assert_eq!(grid.max_value(), Some(-1.5));
    }

    #[test]
    fn max_value_without_finite_cells() {
        let grid = Grid::<FmCell, 2>::with_dims([2, 2]);
        assert_eq!(grid.max_value(), None);
        assert_eq!(Grid::<ValueCell, 2>::default().max_value(), None);
    }

    #[test]
    fn clean_resets_cells_and_keeps_occupancy() {
        let mut grid = Grid::<FmCell, 2>::with_dims([2, 2]);
        grid[1].set_occupancy(0.0);
        grid[2].set_value(3.0);
        grid.set_clean(false);

        grid.clean();

        assert!(grid.is_clean());
        assert!(grid[2].value().is_infinite());
        assert!(grid[1].is_obstacle());
        assert_eq!(grid[1].velocity(), 0.0);
        assert_eq!(grid[2].index(), 2);
    }

    #[test]
    fn from_config() {
        let config = GridConfig::new(vec![4, 5], 0.25);
        let grid = Grid::<BasicCell, 2>::from_config(&config).unwrap();
        assert_eq!(grid.dim_sizes(), [4, 5]);
        assert_eq!(grid.leaf_size(), 0.25);

        assert!(matches!(
            Grid::<BasicCell, 3>::from_config(&config),
            Err(GridError::InvalidArgument(_))
        ));
    }

    #[test]
    fn dim_sizes_str() {
        let grid = Grid::<ValueCell, 3>::with_dims([4, 1, 2]);
        assert_eq!(grid.dim_sizes_str(), "4\t1\t2");
    }

    proptest! {
        #[test]
        fn neighbor_count_bounds(dims in prop::array::uniform3(2usize..7)) {
            let grid = Grid::<ValueCell, 3>::with_dims(dims);
            for idx in 0..grid.size() {
                let count = grid.neighbors(idx).len();
                prop_assert!(count >= 3 && count <= 6);
                prop_assert_eq!(count == 6, !grid.layout().is_boundary(idx));
            }
        }

        #[test]
        fn grid_round_trip(dims in prop::array::uniform3(1usize..8)) {
            let grid = Grid::<ValueCell, 3>::with_dims(dims);
            let mut coords = [0; 3];
            for idx in 0..grid.size() {
                grid.index_to_coords_into(idx, &mut coords).unwrap();
                prop_assert_eq!(grid.coords_to_index(&coords).unwrap(), idx);
            }
        }
    }
}
