//! Regular grid domain

pub mod grid;
pub mod layout;
pub mod neighbor;

pub use self::grid::{Grid, DEFAULT_LEAF_SIZE};
pub use self::layout::Layout;
pub use self::neighbor::NeighborSearch;
