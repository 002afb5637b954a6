use crate::models::PixelBuffer;

/// Fixed foreground/background cut-off
pub const DEFAULT_THRESHOLD: u8 = 128;

pub const FOREGROUND: u8 = 0;
pub const BACKGROUND: u8 = 255;

/// Convert image to grayscale using the unweighted mean of R, G and B.
/// Alpha is ignored; single-channel input is returned unchanged.
pub fn to_grayscale(buf: &PixelBuffer) -> PixelBuffer {
    let stride = buf.channels().count();
    if stride == 1 {
        return buf.clone();
    }

    let gray = buf
        .data()
        .chunks_exact(stride)
        .map(|px| ((px[0] as u16 + px[1] as u16 + px[2] as u16) / 3) as u8)
        .collect();

    PixelBuffer::gray_from_raw(buf.width(), buf.height(), gray)
}

/// Apply a fixed threshold: values at or below `threshold` become foreground (0),
/// everything else background (255)
pub fn binarize(gray: &PixelBuffer, threshold: u8) -> PixelBuffer {
    let stride = gray.channels().count();
    let binary = gray
        .data()
        .iter()
        .step_by(stride)
        .map(|&v| if v <= threshold { FOREGROUND } else { BACKGROUND })
        .collect();

    PixelBuffer::gray_from_raw(gray.width(), gray.height(), binary)
}
