//! Single-channel intensity grid
//!
//! The common currency of the enhancement kernel: a height x width,
//! row-major array of 8-bit brightness samples. Kernel operations never
//! mutate a grid in place; they always allocate a fresh output of the
//! same shape.


use crate::decoders::DecodedImage;

/// Rec.709 luminance weights used when projecting RGB input down to a
/// single channel.
pub const LUMA_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// A 2-D grid of 8-bit intensity samples, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl IntensityGrid {
    /// Create a zero-filled grid with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        IntensityGrid {
            width,
            height,
            data: vec![0u8; width * height],
        }
    }

    /// Create a grid from an existing sample vector.
    ///
    /// `data` must contain exactly `width * height` samples.
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self, String> {
        if data.len() != width * height {
            return Err(format!(
                "Grid data length mismatch: expected {} samples for {}x{}, got {}",
                width * height,
                width,
                height,
                data.len()
            ));
        }
        Ok(IntensityGrid {
            width,
            height,
            data,
        })
    }

    /// Internal constructor for callers that have already sized the buffer.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        IntensityGrid {
            width,
            height,
            data,
        }
    }

    /// Project a decoded RGB image down to 8-bit luminance.
    ///
    /// Uses Rec.709 weights. The kernel itself never performs this
    /// conversion; it always receives single-channel data.
    pub fn from_decoded(decoded: &DecodedImage) -> Result<Self, String> {
        if decoded.channels != 3 {
            return Err(format!(
                "Luminance projection expects 3-channel RGB input, got {} channels",
                decoded.channels
            ));
        }
        let width = decoded.width as usize;
        let height = decoded.height as usize;
        let expected = width * height * 3;
        if decoded.data.len() != expected {
            return Err(format!(
                "Decoded data length mismatch: expected {} values for {}x{} RGB, got {}",
                expected,
                width,
                height,
                decoded.data.len()
            ));
        }

        let data: Vec<u8> = decoded
            .data
            .chunks_exact(3)
            .map(|rgb| {
                let luma = LUMA_WEIGHTS[0] * rgb[0]
                    + LUMA_WEIGHTS[1] * rgb[1]
                    + LUMA_WEIGHTS[2] * rgb[2];
                (luma.clamp(0.0, 1.0) * 255.0).round() as u8
            })
            .collect();

        Ok(IntensityGrid {
            width,
            height,
            data,
        })
    }

    /// Grid width in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in samples.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the grid holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at column `x`, row `y`.
    ///
    /// Panics when the position is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Write the sample at column `x`, row `y`.
    ///
    /// Panics when the position is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.width + x] = value;
    }

    /// Borrow a single row as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// All samples, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the grid and return its sample vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}
