//! Isometric coordinate transforms
//!
//! Converts between the tile grid, continuous world space, and the
//! source map file's pixel space.

mod transform;

pub use transform::{
    GridCoord, MapMetrics, NOMINAL_TILE_FOOTPRINT, iso_to_world, pixel_to_world, world_to_iso,
};
