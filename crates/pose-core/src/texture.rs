use crate::constants::{PLACEHOLDER_BACKGROUND, PLACEHOLDER_DISC};

pub const PLACEHOLDER_SIZE: u32 = 256;

/// Tightly packed RGBA8 pixels, rows top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    /// Wrap decoded pixels; `None` when the buffer size does not match.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * 4;
        (width > 0 && height > 0 && rgba.len() == expected).then_some(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        ])
    }
}

/// Stand-in surface for the subject plane while no image is loaded: a dark
/// square with a lighter disc covering the middle.
pub fn placeholder_texture(size: u32) -> TextureData {
    let size = size.max(1);
    let bg = hex_rgba(PLACEHOLDER_BACKGROUND);
    let disc = hex_rgba(PLACEHOLDER_DISC);
    let c = size as f32 * 0.5;
    let r = size as f32 * (80.0 / 256.0);
    let mut rgba = Vec::with_capacity(size as usize * size as usize * 4);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - c;
            let dy = y as f32 + 0.5 - c;
            let px = if dx * dx + dy * dy <= r * r { disc } else { bg };
            rgba.extend_from_slice(&px);
        }
    }
    TextureData {
        width: size,
        height: size,
        rgba,
    }
}

#[inline]
fn hex_rgba(hex: u32) -> [u8; 4] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 0xff]
}
