use ndgrid::io::describe;
use ndgrid::{FmCell, FmState, Grid, GridConfig, MutableCell};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> ndgrid::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = GridConfig::new(vec![50, 40], 0.1);
    let mut grid = Grid::<FmCell, 2>::from_config(&config)?;
    tracing::info!("{}", describe(&grid));

    // distance to the center along the grid axes
    let center = grid.coords_to_index_array(&[25, 20]);
    let [cx, cy] = grid.index_to_coords(center);
    for idx in 0..grid.size() {
        let [x, y] = grid.index_to_coords(idx);
        let dist = (x as f64 - cx as f64).abs() + (y as f64 - cy as f64).abs();
        let cell = &mut grid[idx];
        cell.set_value(dist * config.leaf_size);
        cell.set_state(FmState::Frozen);
    }
    grid.set_clean(false);

    tracing::info!(
        max = ?grid.max_value(),
        neighbors = ?grid.neighbors(center),
        "filled grid"
    );

    grid.save("save_grid.txt", 0)?;
    Ok(())
}
