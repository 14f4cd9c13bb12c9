use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{info, warn};

use crate::cell::{Cell, MutableCell, OccupancyCell};
use crate::domain::Grid;
use crate::error::{GridError, Result};

/// Line oriented cursor keeping track of the current line number.
struct Records<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Records<R> {
    fn new(reader: R) -> Self {
        Records {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> Result<String> {
        match self.lines.next() {
            Some(line) => {
                self.line += 1;
                Ok(line?)
            }
            None => Err(GridError::parse(self.line + 1, format!("missing {}", what))),
        }
    }

    fn next_value<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let line = self.next_line(what)?;
        parse_token(line.trim(), self.line, what)
    }

    /// Only blank lines may follow the last record.
    fn finish(mut self) -> Result<()> {
        while let Some(line) = self.lines.next() {
            self.line += 1;
            if !line?.trim().is_empty() {
                return Err(GridError::parse(self.line, "unexpected trailing data"));
            }
        }
        Ok(())
    }
}

fn parse_token<T>(token: &str, line: usize, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    token
        .parse()
        .map_err(|err| GridError::parse(line, format!("invalid {} `{}`: {}", what, token, err)))
}

/// Read a saved grid, handing each cell its stored value via `apply`.
fn read_grid<C, R, F, const D: usize>(reader: R, mut apply: F) -> Result<Grid<C, D>>
where
    C: Cell,
    R: BufRead,
    F: FnMut(&mut C, f64),
{
    let mut records = Records::new(reader);

    let type_name = records.next_line("cell type")?;
    let type_name = type_name.trim_end();
    let leaf_size: f64 = records.next_value("leaf size")?;
    if !(leaf_size.is_finite() && leaf_size > 0.0) {
        return Err(GridError::parse(records.line, "leaf size must be positive"));
    }

    let num_dims: usize = records.next_value("dimension count")?;
    if num_dims != D {
        return Err(GridError::InvalidArgument(format!(
            "stored grid has {} dimensions, expected {}",
            num_dims, D
        )));
    }

    let sizes_line = records.next_line("dimension sizes")?;
    let mut dim_sizes = [0; D];
    let mut tokens = sizes_line.split_whitespace();
    for size in dim_sizes.iter_mut() {
        let token = tokens
            .next()
            .ok_or_else(|| GridError::parse(records.line, format!("expected {} dimension sizes", D)))?;
        *size = parse_token(token, records.line, "dimension size")?;
        if *size == 0 {
            return Err(GridError::parse(records.line, "dimension sizes must be positive"));
        }
    }
    if tokens.next().is_some() {
        return Err(GridError::parse(records.line, format!("expected {} dimension sizes", D)));
    }

    let mut grid = Grid::<C, D>::new(dim_sizes, leaf_size);
    if type_name != grid.cell_type_name() {
        warn!(
            stored = type_name,
            expected = grid.cell_type_name(),
            "cell type of saved grid differs"
        );
    }

    for cell in grid.iter_mut() {
        let value = records.next_value("cell value")?;
        apply(cell, value);
    }
    records.finish()?;

    Ok(grid)
}

impl<C: MutableCell, const D: usize> Grid<C, D> {
    /// Load a grid written by [`Grid::save`]; stored values become cell values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let grid = Self::read_from(BufReader::new(File::open(path)?))?;

        info!(path = %path.display(), num_cells = grid.size(), "loaded grid");
        Ok(grid)
    }

    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        read_grid(reader, |cell: &mut C, value| cell.set_value(value))
    }
}

impl<C: OccupancyCell, const D: usize> Grid<C, D> {
    /// Load an occupancy map: stored values are occupancies (0 = obstacle).
    ///
    /// Obstacle indices are recorded in [`Grid::occupied_cells`].
    pub fn load_occupancy<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let grid = Self::read_occupancy_from(BufReader::new(File::open(path)?))?;

        info!(
            path = %path.display(),
            num_cells = grid.size(),
            num_occupied = grid.occupied_cells().len(),
            "loaded occupancy map"
        );
        Ok(grid)
    }

    pub fn read_occupancy_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut grid: Self = read_grid(reader, |cell: &mut C, occupancy| cell.set_occupancy(occupancy))?;

        let occupied = grid
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_occupied())
            .map(|(i, _)| i)
            .collect();
        grid.set_occupied_cells(occupied);
        Ok(grid)
    }
}
