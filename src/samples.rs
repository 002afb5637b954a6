//! Synthetic test images: dark shapes on a white canvas.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_polygon_mut,
};
use imageproc::point::Point as PolyPoint;
use imageproc::rect::Rect;

use crate::models::PixelBuffer;

pub const INK: Rgba<u8> = Rgba([20, 20, 20, 255]);
pub const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SampleKind {
    Disk,
    SolidSquare,
    SquareOutline,
    Rectangle,
    Triangle,
    TwoBlobs,
}

impl SampleKind {
    pub const ALL: [SampleKind; 6] = [
        SampleKind::Disk,
        SampleKind::SolidSquare,
        SampleKind::SquareOutline,
        SampleKind::Rectangle,
        SampleKind::Triangle,
        SampleKind::TwoBlobs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SampleKind::Disk => "disk",
            SampleKind::SolidSquare => "solid-square",
            SampleKind::SquareOutline => "square-outline",
            SampleKind::Rectangle => "rectangle",
            SampleKind::Triangle => "triangle",
            SampleKind::TwoBlobs => "two-blobs",
        }
    }
}

pub fn blank(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, PAPER)
}

/// Render one gallery image, shapes centered on the canvas.
/// A zero-sized canvas comes back blank.
pub fn render(kind: SampleKind, width: u32, height: u32) -> RgbaImage {
    let mut img = blank(width, height);
    if width == 0 || height == 0 {
        return img;
    }
    let cx = (width / 2) as i32;
    let cy = (height / 2) as i32;
    let unit = (width.min(height) / 5).max(8) as i32;

    match kind {
        SampleKind::Disk => draw_filled_circle_mut(&mut img, (cx, cy), unit, INK),
        SampleKind::SolidSquare => {
            draw_filled_rect_mut(&mut img, square(cx, cy, unit), INK);
        }
        SampleKind::SquareOutline => {
            draw_hollow_rect_mut(&mut img, square(cx, cy, unit), INK);
        }
        SampleKind::Rectangle => {
            let rect = Rect::at(cx - 3 * unit / 2, cy - unit / 4)
                .of_size(3 * unit as u32, (unit / 2) as u32);
            draw_filled_rect_mut(&mut img, rect, INK);
        }
        SampleKind::Triangle => {
            // Base:height of 100:88 keeps the bounding box inside the triangle branch
            let half_base = 2 * unit;
            let rise = 88 * unit / 25;
            let base_y = cy + rise / 2;
            let poly = [
                PolyPoint::new(cx - half_base, base_y),
                PolyPoint::new(cx + half_base, base_y),
                PolyPoint::new(cx, base_y - rise),
            ];
            draw_polygon_mut(&mut img, &poly, INK);
        }
        SampleKind::TwoBlobs => {
            let r = (unit / 2).max(6);
            draw_filled_circle_mut(&mut img, (cx + unit, cy - unit), r, INK);
            draw_filled_circle_mut(&mut img, (cx - unit, cy + unit), r, INK);
        }
    }

    img
}

pub fn render_buffer(kind: SampleKind, width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_rgba_image(&render(kind, width, height))
}

fn square(cx: i32, cy: i32, half: i32) -> Rect {
    Rect::at(cx - half, cy - half).of_size(2 * half as u32, 2 * half as u32)
}
