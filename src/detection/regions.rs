use crate::detection::preprocessing::FOREGROUND;
use crate::models::{PixelBuffer, Point, Region};

/// Minimum pixel count for a region to be reported
pub const NOISE_FLOOR: usize = 80;

/// Find 4-connected foreground regions in a binary image.
///
/// Regions come back in the row-major order of their first discovered pixel.
/// Regions smaller than `min_pixels` are dropped; their pixels still count as
/// visited so they are never rescanned.
pub fn find_regions(binary: &PixelBuffer, min_pixels: usize) -> Vec<Region> {
    if binary.is_empty() {
        return Vec::new();
    }

    let width = binary.width() as usize;
    let height = binary.height() as usize;
    let stride = binary.channels().count();
    let data = binary.data();
    let is_foreground = |idx: usize| data[idx * stride] == FOREGROUND;

    let mut visited = vec![false; width * height];
    let mut stack: Vec<usize> = Vec::new();
    let mut regions = Vec::new();
    let mut dropped = 0usize;

    for seed in 0..width * height {
        if visited[seed] || !is_foreground(seed) {
            continue;
        }

        let mut region = Region::default();
        visited[seed] = true;
        stack.push(seed);

        while let Some(idx) = stack.pop() {
            let x = idx % width;
            let y = idx / width;
            region.points.push(Point::new(x as u32, y as u32));

            let mut visit = |n: usize| {
                if !visited[n] && is_foreground(n) {
                    visited[n] = true;
                    stack.push(n);
                }
            };

            if x > 0 {
                visit(idx - 1);
            }
            if x + 1 < width {
                visit(idx + 1);
            }
            if y > 0 {
                visit(idx - width);
            }
            if y + 1 < height {
                visit(idx + width);
            }
        }

        if region.pixel_count() < min_pixels {
            dropped += 1;
            continue;
        }
        regions.push(region);
    }

    tracing::debug!(kept = regions.len(), dropped, "connected regions extracted");
    regions
}
