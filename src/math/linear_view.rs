use ndarray::{aview1, aview_mut1, Array, ArrayD, ArrayView, ArrayViewD, ArrayViewMut, ArrayViewMutD, Ix1, IxDyn, ShapeBuilder};

use crate::cell::Cell;
use crate::domain::Grid;
use crate::error::Result;

/// Flat view over the storage of a container.
pub trait LinearView {
    type Elem;
    fn view_linear(&self) -> ArrayView<'_, Self::Elem, Ix1>;
    fn view_linear_mut(&mut self) -> ArrayViewMut<'_, Self::Elem, Ix1>;
}

impl<C, const D: usize> LinearView for Grid<C, D>
where
    C: Cell,
{
    type Elem = C;
    fn view_linear(&self) -> ArrayView<'_, C, Ix1> {
        aview1(self.cells())
    }

    fn view_linear_mut(&mut self) -> ArrayViewMut<'_, C, Ix1> {
        aview_mut1(self.cells_mut())
    }
}

impl<C: Cell, const D: usize> Grid<C, D> {
    // Dimension 0 varies fastest, which is column-major (Fortran) order.
    fn shape(&self) -> ndarray::Shape<IxDyn> {
        IxDyn(&self.dim_sizes()).f()
    }

    /// Cells indexed by coordinates, `view[[x0, x1, ..]]`.
    pub fn view(&self) -> Result<ArrayViewD<'_, C>> {
        Ok(ArrayView::from_shape(self.shape(), self.cells())?)
    }

    pub fn view_mut(&mut self) -> Result<ArrayViewMutD<'_, C>> {
        let shape = self.shape();
        Ok(ArrayViewMut::from_shape(shape, self.cells_mut())?)
    }

    /// Selected scalar of every cell (see [`Cell::value_of`]), indexed by coordinates.
    pub fn values(&self, what: usize) -> Result<ArrayD<f64>> {
        let values = self.iter().map(|cell| cell.value_of(what)).collect();
        Ok(Array::from_shape_vec(self.shape(), values)?)
    }
}
