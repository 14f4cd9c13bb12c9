//! Flat index layout of a regular grid.
//!
//! Cells are linearized in mixed radix with dimension 0 varying fastest:
//!
//! ```text
//! idx = x0 + x1 * d[0] + x2 * d[1] + ... + x(D-1) * d[D-2]
//! ```
//!
//! where `d[i]` is the number of cells spanned by dimensions `0..=i`.

use crate::error::{GridError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout<const D: usize> {
    dim_sizes: [usize; D],
    /// Inclusive running product of `dim_sizes`, `strides[D-1]` is the cell count.
    strides: [usize; D],
    num_cells: usize,
}

impl<const D: usize> Layout<D> {
    const HAS_DIMS: () = assert!(D > 0, "a grid needs at least one dimension");

    pub fn new(dim_sizes: [usize; D]) -> Self {
        let () = Self::HAS_DIMS;

        let mut strides = [0; D];
        let mut num_cells = 1;
        for i in 0..D {
            num_cells *= dim_sizes[i];
            strides[i] = num_cells;
        }

        Layout {
            dim_sizes,
            strides,
            num_cells,
        }
    }

    /// Placeholder layout without any cells.
    pub fn empty() -> Self {
        let () = Self::HAS_DIMS;

        Layout {
            dim_sizes: [0; D],
            strides: [0; D],
            num_cells: 0,
        }
    }

    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    pub fn dim_sizes(&self) -> [usize; D] {
        self.dim_sizes
    }

    pub fn strides(&self) -> [usize; D] {
        self.strides
    }

    /// Index offset between two adjacent cells along `dim`.
    #[inline]
    pub fn step(&self, dim: usize) -> usize {
        if dim == 0 {
            1
        } else {
            self.strides[dim - 1]
        }
    }

    pub fn index_to_coords(&self, idx: usize) -> [usize; D] {
        let mut coords = [0; D];
        let mut rem = idx;
        for i in (1..D).rev() {
            let stride = self.strides[i - 1];
            coords[i] = rem / stride;
            rem -= coords[i] * stride;
        }
        coords[0] = rem;
        coords
    }

    /// Writes the coordinates of `idx` into `coords`, which must hold exactly `D` entries.
    pub fn index_to_coords_into(&self, idx: usize, coords: &mut [usize]) -> Result<()> {
        check_len::<D>(coords.len())?;
        coords.copy_from_slice(&self.index_to_coords(idx));
        Ok(())
    }

    pub fn coords_to_index_array(&self, coords: &[usize; D]) -> usize {
        debug_assert!(
            (0..D).all(|i| coords[i] < self.dim_sizes[i]),
            "coordinates {:?} outside of grid {:?}",
            coords,
            self.dim_sizes
        );

        let mut idx = coords[0];
        for i in 1..D {
            idx += coords[i] * self.strides[i - 1];
        }
        idx
    }

    pub fn coords_to_index(&self, coords: &[usize]) -> Result<usize> {
        check_len::<D>(coords.len())?;
        let mut fixed = [0; D];
        fixed.copy_from_slice(coords);
        Ok(self.coords_to_index_array(&fixed))
    }

    /// Predecessor and successor of `idx` along `dim`, if they stay inside the grid.
    ///
    /// A candidate is only accepted if it lies in the same hyper-row as `idx`,
    /// which rules out wrapping around into the next row.
    #[inline]
    pub fn neighbors_in_dim(&self, idx: usize, dim: usize) -> [Option<usize>; 2] {
        debug_assert!(idx < self.num_cells, "index {} out of range", idx);

        let step = self.step(dim);
        let row_size = self.strides[dim];
        let row = idx / row_size;

        let prev = idx.checked_sub(step).filter(|c| c / row_size == row);
        let next = Some(idx + step).filter(|c| c / row_size == row);

        // Same row implies `next < (row + 1) * row_size <= num_cells`.
        debug_assert!(next.map_or(true, |c| c < self.num_cells));

        [prev, next]
    }

    /// `true` if `idx` lies on the first or last slice of any dimension.
    pub fn is_boundary(&self, idx: usize) -> bool {
        let coords = self.index_to_coords(idx);
        (0..D).any(|i| coords[i] == 0 || coords[i] + 1 == self.dim_sizes[i])
    }
}

fn check_len<const D: usize>(len: usize) -> Result<()> {
    if len == D {
        Ok(())
    } else {
        Err(GridError::InvalidArgument(format!(
            "expected {} coordinates, got {}",
            D, len
        )))
    }
}
