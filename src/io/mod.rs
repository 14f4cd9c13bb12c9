//! Text serialization of grids.
//!
//! Saved grids have the following layout, one item per line:
//!
//! ```text
//! <cell type name>
//! <leaf size>
//! <number of dimensions>
//! <size 0>\t<size 1>\t...\t<size D-1>
//! <value of cell 0>
//! ...
//! <value of cell n-1>
//! ```

mod reader;
mod writer;

pub use self::writer::describe;
