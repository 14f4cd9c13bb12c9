use crate::cell::Cell;
use super::grid::Grid;
use super::layout::Layout;

/// Traversal of the axis-aligned neighbours of a cell.
pub trait NeighborSearch {
    fn num_dims(&self) -> usize;

    /// Apply function to the predecessor and successor of `idx` along `dim`, if present.
    fn for_each_neighbor_in_dim<F>(&self, idx: usize, dim: usize, fnc: F)
    where
        F: FnMut(usize);

    /// Apply function to each neighbour of `idx`, dimension by dimension.
    fn for_each_neighbor<F>(&self, idx: usize, mut fnc: F)
    where
        F: FnMut(usize),
    {
        for dim in 0..self.num_dims() {
            self.for_each_neighbor_in_dim(idx, dim, &mut fnc);
        }
    }
}

impl<const D: usize> NeighborSearch for Layout<D> {
    fn num_dims(&self) -> usize {
        D
    }

    fn for_each_neighbor_in_dim<F>(&self, idx: usize, dim: usize, mut fnc: F)
    where
        F: FnMut(usize),
    {
        for n in self.neighbors_in_dim(idx, dim).iter().flatten() {
            fnc(*n);
        }
    }
}

impl<C: Cell, const D: usize> NeighborSearch for Grid<C, D> {
    fn num_dims(&self) -> usize {
        D
    }

    fn for_each_neighbor_in_dim<F>(&self, idx: usize, dim: usize, fnc: F)
    where
        F: FnMut(usize),
    {
        self.layout().for_each_neighbor_in_dim(idx, dim, fnc)
    }
}
