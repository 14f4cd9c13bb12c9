use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::cell::Cell;
use crate::domain::Grid;
use crate::error::{GridError, Result};

impl<C: Cell, const D: usize> Grid<C, D> {
    /// Save the grid to `path`, truncating any existing file.
    ///
    /// `what` selects the scalar of multi-valued cells, see [`Cell::value_of`].
    /// A placeholder grid without cells cannot be saved.
    pub fn save<P: AsRef<Path>>(&self, path: P, what: usize) -> Result<()> {
        self.check_saveable()?;
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer, what)?;
        writer.flush()?;

        info!(path = %path.display(), num_cells = self.size(), "saved grid");
        Ok(())
    }

    pub fn write_to<W: Write>(&self, mut writer: W, what: usize) -> Result<()> {
        self.check_saveable()?;
        writeln!(writer, "{}", self.cell_type_name())?;
        writeln!(writer, "{}", self.leaf_size())?;
        writeln!(writer, "{}", D)?;
        write!(writer, "{}", self.dim_sizes_str())?;
        for cell in self.iter() {
            write!(writer, "\n{}", cell.value_of(what))?;
        }
        Ok(())
    }

    fn check_saveable(&self) -> Result<()> {
        if self.is_empty() {
            return Err(GridError::InvalidArgument(
                "grid has no cells, resize it before saving".into(),
            ));
        }
        Ok(())
    }
}

/// Human readable summary of a grid for logging.
pub fn describe<C: Cell, const D: usize>(grid: &Grid<C, D>) -> String {
    let mut desc = format!(
        "Grid cell information\n\t{}\n\t{} cells.\n\t{} leafsize (m).\n\t{} dimensions:",
        grid.cell_type_name(),
        grid.size(),
        grid.leaf_size(),
        D,
    );
    for (i, size) in grid.dim_sizes().iter().enumerate() {
        desc.push_str(&format!("\n\t\td{}\tsize: {}", i, size));
    }
    desc
}
