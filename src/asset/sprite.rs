//! Image loading and sprite-sheet operations
//!
//! CPU-side only: everything here works on `image` buffers so it can be
//! used (and tested) without a window. Uploading to the GPU happens in
//! [`super::library`].

use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::path::Path;

/// Error type for asset loading
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    /// File I/O error
    Io(String),
    /// File was read but isn't a supported image
    Decode(String),
    /// Requested region is not inside the source image
    SliceOutOfBounds {
        rect: SliceRect,
        width: u32,
        height: u32,
    },
    /// Image is bigger than a texture can be
    TooLarge { width: u32, height: u32 },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Io(msg) => write!(f, "I/O error: {}", msg),
            AssetError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AssetError::SliceOutOfBounds { rect, width, height } => write!(
                f,
                "slice {}x{}+{}+{} outside {}x{} image",
                rect.w, rect.h, rect.x, rect.y, width, height
            ),
            AssetError::TooLarge { width, height } => write!(
                f,
                "{}x{} image exceeds the {}x{} texture limit",
                width,
                height,
                u16::MAX,
                u16::MAX
            ),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<image::ImageError> for AssetError {
    fn from(e: image::ImageError) -> Self {
        AssetError::Decode(e.to_string())
    }
}

/// Pixel rectangle inside an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl SliceRect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    fn fits(&self, width: u32, height: u32) -> bool {
        self.w > 0
            && self.h > 0
            && self.x.checked_add(self.w).is_some_and(|r| r <= width)
            && self.y.checked_add(self.h).is_some_and(|b| b <= height)
    }
}

/// Decode an image from memory into RGBA8
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, AssetError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Read and decode an image file
pub fn load_image(path: &Path) -> Result<RgbaImage, AssetError> {
    let bytes = std::fs::read(path)
        .map_err(|e| AssetError::Io(format!("{}: {}", path.display(), e)))?;
    decode(&bytes)
}

/// Copy a sub-rectangle out of `source`
pub fn slice(source: &RgbaImage, rect: SliceRect) -> Result<RgbaImage, AssetError> {
    if !rect.fits(source.width(), source.height()) {
        return Err(AssetError::SliceOutOfBounds {
            rect,
            width: source.width(),
            height: source.height(),
        });
    }
    Ok(imageops::crop_imm(source, rect.x, rect.y, rect.w, rect.h).to_image())
}

/// Resize to exactly `width` x `height` (nearest neighbour, keeps pixel art sharp)
pub fn scale(source: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if source.dimensions() == (width, height) {
        return source.clone();
    }
    imageops::resize(source, width, height, FilterType::Nearest)
}

/// Left edge of frame `index` in a strip, or None if it doesn't fit in u32
fn frame_offset(index: usize, frame_size: u32) -> Option<u32> {
    u32::try_from(index).ok()?.checked_mul(frame_size)
}

/// Cut `count` square frames of `frame_size` from the top row of a sheet,
/// left to right.
pub fn slice_strip(
    sheet: &RgbaImage,
    frame_size: u32,
    count: usize,
) -> Result<Vec<RgbaImage>, AssetError> {
    (0..count)
        .map(|i| match frame_offset(i, frame_size) {
            Some(x) => slice(sheet, SliceRect::new(x, 0, frame_size, frame_size)),
            None => Err(AssetError::SliceOutOfBounds {
                rect: SliceRect::new(u32::MAX, 0, frame_size, frame_size),
                width: sheet.width(),
                height: sheet.height(),
            }),
        })
        .collect()
}

/// Texture dimensions for an image, rejecting sides over `u16::MAX`
pub fn texture_size(image: &RgbaImage) -> Result<(u16, u16), AssetError> {
    let (width, height) = image.dimensions();
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(AssetError::TooLarge { width, height }),
    }
}
