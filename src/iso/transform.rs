//! Grid / world / pixel coordinate transforms
//!
//! Three coordinate systems meet here: the isometric tile lattice
//! (column, row), continuous world space (X right, Y up), and the map
//! file's pixel space (top-left origin, Y down, axes along the grid).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Nominal pixel footprint of one tile diamond (width, height).
///
/// The vertical diamond dimension used by every transform is derived from
/// this aspect ratio scaled to the map's tile width, not from the tile
/// height in the map metadata. This keeps the diamond angle identical
/// across maps whose metadata disagrees; changing it shifts where world
/// geometry aligns with rendered tiles.
pub const NOMINAL_TILE_FOOTPRINT: (f32, f32) = (256.0, 128.0);

/// A (column, row) location on the tile lattice.
///
/// Fractional values address points inside a cell; values outside the
/// nominal map bounds are accepted (callers do their own bounds checks).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column, increasing toward the lower-right of the rendered diamond
    pub col: f32,
    /// Row, increasing toward the lower-left of the rendered diamond
    pub row: f32,
}

impl GridCoord {
    /// Create a grid coordinate
    #[must_use]
    pub fn new(col: f32, row: f32) -> Self {
        Self { col, row }
    }
}

/// Map metadata consumed by the coordinate transforms
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MapMetrics {
    /// Map width in tiles
    pub width: u32,
    /// Map height in tiles
    pub height: u32,
    /// Tile width in world units
    pub tile_width: f32,
    /// Tile height from the map metadata, in world units.
    /// Kept for callers that need the authored value; the transforms use
    /// [`MapMetrics::diamond_height`] instead.
    pub tile_height: f32,
    /// Pixels per world unit in the source map file
    pub pixels_per_unit: f32,
}

impl MapMetrics {
    /// Vertical diamond dimension in world units, derived from
    /// [`NOMINAL_TILE_FOOTPRINT`] scaled to the tile width
    #[must_use]
    pub fn diamond_height(&self) -> f32 {
        self.tile_width * (NOMINAL_TILE_FOOTPRINT.1 / NOMINAL_TILE_FOOTPRINT.0)
    }

    /// Horizontal offset that centers the grid origin on the map's
    /// tile-width span
    fn offset_x(&self) -> f32 {
        self.width as f32 * self.tile_width * 0.5
    }

    /// Vertical offset applied when converting Y-down pixel coordinates
    fn offset_y(&self) -> f32 {
        self.height as f32 * self.diamond_height() * 0.5
    }
}

/// Convert a grid coordinate to the world-space position of that cell's
/// anchor (bottom-center of the diamond).
///
/// Standard diamond projection; accepts any real inputs, including
/// fractional and out-of-bounds coordinates.
#[must_use]
pub fn iso_to_world(coord: GridCoord, map: &MapMetrics) -> Vec2 {
    let half_w = map.tile_width * 0.5;
    let half_h = map.diamond_height() * 0.5;
    Vec2::new(
        (coord.col - coord.row) * half_w + map.offset_x(),
        -(coord.col + coord.row) * half_h,
    )
}

/// Convert a world-space position back to a grid coordinate.
///
/// Exact algebraic inverse of [`iso_to_world`] for the same metrics:
/// `world_to_iso(iso_to_world(c), map) == c` to within floating-point
/// tolerance.
#[must_use]
pub fn world_to_iso(pos: Vec2, map: &MapMetrics) -> GridCoord {
    let half_w = map.tile_width * 0.5;
    let half_h = map.diamond_height() * 0.5;
    let diff = (pos.x - map.offset_x()) / half_w; // col - row
    let sum = -pos.y / half_h; // col + row
    GridCoord::new((sum + diff) * 0.5, (sum - diff) * 0.5)
}

/// Convert a source-file pixel coordinate into world space.
///
/// Pixel coordinates run along the grid axes with a top-left origin and
/// Y down. Dividing by `pixels_per_unit` yields tile-fractional units,
/// which then go through the same diamond projection as [`iso_to_world`],
/// plus a vertical centering offset so the map's pixel origin lands at
/// the top of the rendered diamond.
#[must_use]
pub fn pixel_to_world(pixel: Vec2, map: &MapMetrics) -> Vec2 {
    let units = pixel / map.pixels_per_unit;
    let half_w = map.tile_width * 0.5;
    let half_h = map.diamond_height() * 0.5;
    Vec2::new(
        (units.x - units.y) * half_w + map.offset_x(),
        -(units.x + units.y) * half_h + map.offset_y(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(width: u32, height: u32, tile_width: f32) -> MapMetrics {
        MapMetrics {
            width,
            height,
            tile_width,
            tile_height: tile_width * 0.5,
            pixels_per_unit: 100.0,
        }
    }

    #[test]
    fn test_round_trip() {
        let maps = [metrics(16, 16, 2.0), metrics(30, 12, 1.0), metrics(8, 40, 2.56)];
        let coords = [
            GridCoord::new(0.0, 0.0),
            GridCoord::new(5.0, 3.0),
            GridCoord::new(2.75, 9.5),
            GridCoord::new(-1.5, 20.0), // outside nominal bounds
        ];

        for map in &maps {
            for &coord in &coords {
                let back = world_to_iso(iso_to_world(coord, map), map);
                assert!(
                    (back.col - coord.col).abs() < 1e-6,
                    "col {} -> {}",
                    coord.col,
                    back.col
                );
                assert!(
                    (back.row - coord.row).abs() < 1e-6,
                    "row {} -> {}",
                    coord.row,
                    back.row
                );
            }
        }
    }

    #[test]
    fn test_origin_lands_on_horizontal_center() {
        let map = metrics(10, 10, 2.0);
        let world = iso_to_world(GridCoord::new(0.0, 0.0), &map);

        assert!((world.x - 10.0).abs() < 1e-6); // width * tile_width / 2
        assert!(world.y.abs() < 1e-6);
    }

    #[test]
    fn test_rows_and_columns_diverge() {
        let map = metrics(10, 10, 2.0);
        let origin = iso_to_world(GridCoord::new(0.0, 0.0), &map);
        let col = iso_to_world(GridCoord::new(1.0, 0.0), &map);
        let row = iso_to_world(GridCoord::new(0.0, 1.0), &map);

        // One column right and down, one row left and down.
        assert!(col.x > origin.x && col.y < origin.y);
        assert!(row.x < origin.x && row.y < origin.y);
        // Same vertical drop either way.
        assert!((col.y - row.y).abs() < 1e-6);
    }

    #[test]
    fn test_diamond_height_follows_reference_ratio() {
        // Metadata tile height is ignored by the projection.
        let mut map = metrics(10, 10, 2.0);
        map.tile_height = 123.0;

        assert!((map.diamond_height() - 1.0).abs() < 1e-6);
        let back = world_to_iso(iso_to_world(GridCoord::new(3.0, 4.0), &map), &map);
        assert!((back.col - 3.0).abs() < 1e-6);
        assert!((back.row - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_pixel_matches_grid_projection() {
        let map = metrics(12, 9, 2.0);
        let coord = GridCoord::new(4.0, 2.5);
        let from_grid = iso_to_world(coord, &map);
        let from_pixel = pixel_to_world(
            Vec2::new(coord.col, coord.row) * map.pixels_per_unit,
            &map,
        );

        // Same projection, shifted by the vertical centering offset.
        assert!((from_pixel.x - from_grid.x).abs() < 1e-5);
        assert!((from_pixel.y - (from_grid.y + 9.0 * map.diamond_height() * 0.5)).abs() < 1e-5);
    }

    #[test]
    fn test_pixel_origin_is_map_top() {
        let map = metrics(10, 10, 2.0);
        let world = pixel_to_world(Vec2::ZERO, &map);

        assert!((world.x - 10.0).abs() < 1e-6);
        assert!((world.y - 5.0).abs() < 1e-6); // height * diamond_height / 2
    }
}
