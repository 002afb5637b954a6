#![allow(dead_code)]

use image::{ImageBuffer, Rgba, RgbaImage};
use shapescan::PixelBuffer;
use tempfile::NamedTempFile;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// White RGBA canvas
pub fn canvas(width: u32, height: u32) -> RgbaImage {
    ImageBuffer::from_pixel(width, height, WHITE)
}

/// Paint a filled axis-aligned block of black pixels
pub fn fill_block(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32) {
    for py in y..y + h {
        for px in x..x + w {
            img.put_pixel(px, py, BLACK);
        }
    }
}

/// Paint a filled disk of black pixels (pixel centers within `radius`)
pub fn fill_disk(img: &mut RgbaImage, cx: i64, cy: i64, radius: i64) {
    for py in cy - radius..=cy + radius {
        for px in cx - radius..=cx + radius {
            let (dx, dy) = (px - cx, py - cy);
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(px as u32, py as u32, BLACK);
            }
        }
    }
}

pub fn buffer(img: &RgbaImage) -> PixelBuffer {
    PixelBuffer::from_rgba_image(img)
}

/// Saves the image as a PNG temp file.
/// The file will be automatically cleaned up when dropped.
pub fn save_png(img: &RgbaImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}
