//! Layout calculation modules for tiling
//!
//! This module handles all the geometric calculations for logo tiling:
//! - Tile sizing (requested size, host-page correction)
//! - Grid packing (tiles per row, placement, auto height)
//! - Affine transforms used to place and rotate content

mod grid;
mod matrix;
mod sizing;
mod types;

pub use grid::*;
pub use matrix::*;
pub use sizing::*;
pub use types::*;
