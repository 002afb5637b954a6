use std::f64::consts::PI;

use crate::models::{BoundingBox, Center, Region};

/// Geometric summary of one region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionFeatures {
    pub bbox: BoundingBox,
    pub center: Center,
    /// width x height of the bounding box
    pub area: u64,
    /// Bounding-box perimeter, used in place of the true boundary length
    pub perimeter: u64,
    pub pixel_count: usize,
    pub circularity: f64,
}

/// Compute bounding box, center, area and circularity for a region.
///
/// Returns `None` for an empty region.
pub fn extract(region: &Region) -> Option<RegionFeatures> {
    let first = region.points.first()?;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in &region.points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let width = max_x - min_x;
    let height = max_y - min_y;
    let perimeter = 2 * (width as u64 + height as u64);
    let pixel_count = region.pixel_count();

    Some(RegionFeatures {
        bbox: BoundingBox { x: min_x, y: min_y, width, height },
        center: Center {
            x: min_x as f64 + width as f64 / 2.0,
            y: min_y as f64 + height as f64 / 2.0,
        },
        area: width as u64 * height as u64,
        perimeter,
        pixel_count,
        circularity: circularity(pixel_count, perimeter),
    })
}

/// Isoperimetric ratio 4πA / P², zero for a degenerate perimeter
pub fn circularity(pixel_count: usize, perimeter: u64) -> f64 {
    if perimeter == 0 {
        return 0.0;
    }
    let p = perimeter as f64;
    (4.0 * PI * pixel_count as f64) / (p * p)
}
