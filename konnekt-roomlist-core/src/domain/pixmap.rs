use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bytes per RGBA8 pixel
const CHANNELS: usize = 4;

/// Errors that can occur when building a pixmap from raw data
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PixmapError {
    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Pixmap of {width}x{height} does not fit in memory")]
    TooLarge { width: u32, height: u32 },
}

/// Byte length of a `width`×`height` RGBA8 buffer, `None` on overflow
fn buffer_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

/// RGBA8 image, row-major
///
/// A pixmap with zero width or height is "null" and is never shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Pixmap {
    /// Create a pixmap from raw RGBA8 data
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, PixmapError> {
        let expected = buffer_len(width, height).ok_or(PixmapError::TooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(PixmapError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a pixmap filled with a single color
    ///
    /// Sizes whose buffer would overflow yield a null pixmap.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let len = buffer_len(width, height).unwrap_or(0);
        let pixels = rgba.iter().copied().cycle().take(len).collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// A null pixmap has no area, or a buffer that does not match its size
    /// (possible after deserializing untrusted snapshots)
    pub fn is_null(&self) -> bool {
        self.width == 0
            || self.height == 0
            || buffer_len(self.width, self.height) != Some(self.pixels.len())
    }

    /// Get the RGBA value at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if self.is_null() || x >= self.width || y >= self.height {
            return None;
        }

        let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + CHANNELS]);
        Some(rgba)
    }

    /// Scale into a `side`×`side` box, keeping the aspect ratio
    ///
    /// Uses bilinear sampling. The longer edge becomes `side`, the shorter
    /// edge is rounded and never drops below one pixel.
    pub fn scaled_to_fit(&self, side: u32) -> Pixmap {
        if self.is_null() || side == 0 {
            return Pixmap::default();
        }

        let ratio = f64::min(
            side as f64 / self.width as f64,
            side as f64 / self.height as f64,
        );
        let width = ((self.width as f64 * ratio).round() as u32).clamp(1, side);
        let height = ((self.height as f64 * ratio).round() as u32).clamp(1, side);

        if width == self.width && height == self.height {
            return self.clone();
        }

        let mut pixels = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            let (y0, y1, fy) = source_span(y, height, self.height);
            for x in 0..width {
                let (x0, x1, fx) = source_span(x, width, self.width);
                for channel in 0..CHANNELS {
                    let sample = |sx: u32, sy: u32| {
                        let offset = (sy as usize * self.width as usize + sx as usize) * CHANNELS;
                        self.pixels[offset + channel] as f64
                    };
                    let top = sample(x0, y0) * (1.0 - fx) + sample(x1, y0) * fx;
                    let bottom = sample(x0, y1) * (1.0 - fx) + sample(x1, y1) * fx;
                    let value = top * (1.0 - fy) + bottom * fy;
                    pixels.push(value.round().clamp(0.0, 255.0) as u8);
                }
            }
        }

        Pixmap {
            width,
            height,
            pixels,
        }
    }
}

/// Map a destination coordinate to the two neighbouring source coordinates
/// and the weight of the second one
fn source_span(dst: u32, dst_len: u32, src_len: u32) -> (u32, u32, f64) {
    let max = (src_len - 1) as f64;
    let center = ((dst as f64 + 0.5) * src_len as f64 / dst_len as f64 - 0.5).clamp(0.0, max);
    let low = center.floor();
    let high = (low + 1.0).min(max);
    (low as u32, high as u32, center - low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_buffer_size() {
        let result = Pixmap::new(2, 2, vec![0; 15]);

        assert_eq!(
            result,
            Err(PixmapError::BufferSizeMismatch {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_new_rejects_overflowing_size() {
        let result = Pixmap::new(u32::MAX, u32::MAX, Vec::new());

        assert_eq!(
            result,
            Err(PixmapError::TooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn test_filled() {
        let pixmap = Pixmap::filled(3, 2, [10, 20, 30, 255]);

        assert_eq!(pixmap.pixels().len(), 24);
        assert_eq!(pixmap.pixel(2, 1), Some([10, 20, 30, 255]));
        assert_eq!(pixmap.pixel(3, 0), None);
        assert!(!pixmap.is_null());
    }

    #[test]
    fn test_null_pixmaps() {
        assert!(Pixmap::default().is_null());
        assert!(Pixmap::filled(0, 5, [0, 0, 0, 255]).is_null());

        let corrupt: Pixmap =
            serde_json::from_str(r#"{"width":2,"height":2,"pixels":[0,0,0]}"#).unwrap();
        assert!(corrupt.is_null());
    }

    #[test]
    fn test_overflowing_size_is_null() {
        let huge: Pixmap =
            serde_json::from_str(r#"{"width":2147483648,"height":2147483648,"pixels":[]}"#)
                .unwrap();

        assert!(huge.is_null());
        assert_eq!(huge.pixel(0, 0), None);
        assert_eq!(huge.scaled_to_fit(32), Pixmap::default());
    }

    #[test]
    fn test_scale_keeps_aspect_ratio() {
        let wide = Pixmap::filled(64, 16, [1, 2, 3, 255]);
        let scaled = wide.scaled_to_fit(32);

        assert_eq!((scaled.width(), scaled.height()), (32, 8));
        assert_eq!(scaled.pixel(31, 7), Some([1, 2, 3, 255]));
    }

    #[test]
    fn test_scale_up_small_icon() {
        let tall = Pixmap::filled(8, 16, [200, 100, 50, 255]);
        let scaled = tall.scaled_to_fit(32);

        assert_eq!((scaled.width(), scaled.height()), (16, 32));
        assert_eq!(scaled.pixel(0, 0), Some([200, 100, 50, 255]));
    }

    #[test]
    fn test_scale_same_size_is_identity() {
        let square = Pixmap::filled(32, 32, [9, 9, 9, 9]);

        assert_eq!(square.scaled_to_fit(32), square);
    }

    #[test]
    fn test_scale_extreme_ratio_keeps_one_pixel() {
        let strip = Pixmap::filled(256, 1, [0, 0, 0, 255]);
        let scaled = strip.scaled_to_fit(32);

        assert_eq!((scaled.width(), scaled.height()), (32, 1));
    }
}
