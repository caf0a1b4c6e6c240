//! Grid specifications for synthetic scalar fields.

use serde::{Deserialize, Serialize};

/// Number of samples along each axis of the sombrero grid.
pub const SOMBRERO_SIZE: usize = 1000;

/// Half-width of the sombrero domain; both axes span `[-EXTENT, EXTENT]`.
pub const SOMBRERO_EXTENT: f64 = 10.0;

/// Bytes per encoded sample (IEEE-754 binary32).
pub const BYTES_PER_SAMPLE: usize = std::mem::size_of::<f32>();

/// Evenly spaced samples over a closed interval.
///
/// Sample `i` is `start + i * step` evaluated in f64, except that the last
/// sample is pinned to `stop` so rounding never moves the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Linspace {
    pub start: f64,
    pub stop: f64,
    pub num: usize,
}

impl Linspace {
    pub fn new(start: f64, stop: f64, num: usize) -> Self {
        Self { start, stop, num }
    }

    /// Distance between consecutive samples (0 for fewer than two samples).
    pub fn step(&self) -> f64 {
        if self.num < 2 {
            return 0.0;
        }
        (self.stop - self.start) / (self.num - 1) as f64
    }

    /// Sample `i` narrowed to f32, or `None` when out of range.
    pub fn value(&self, i: usize) -> Option<f32> {
        if i >= self.num {
            return None;
        }
        if self.num > 1 && i == self.num - 1 {
            return Some(self.stop as f32);
        }
        Some((i as f64 * self.step() + self.start) as f32)
    }

    /// All samples as a contiguous f32 vector.
    pub fn to_vec_f32(&self) -> Vec<f32> {
        (0..self.num).filter_map(|i| self.value(i)).collect()
    }

    pub fn len(&self) -> usize {
        self.num
    }

    pub fn is_empty(&self) -> bool {
        self.num == 0
    }
}

/// Specification of a regular 2-D grid built by meshing two axes.
///
/// `x` varies along columns and `y` along rows, so cell `(row, col)` sits at
/// `(x[col], y[row])`. Storage is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub x: Linspace,
    pub y: Linspace,
}

impl GridSpec {
    pub fn new(x: Linspace, y: Linspace) -> Self {
        Self { x, y }
    }

    /// The fixed 1000×1000 grid over `[-10, 10]²` served to clients.
    pub fn sombrero() -> Self {
        let axis = Linspace::new(-SOMBRERO_EXTENT, SOMBRERO_EXTENT, SOMBRERO_SIZE);
        Self::new(axis, axis)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.x.len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.y.len()
    }

    /// Convert a grid index to coordinates.
    pub fn coord(&self, row: usize, col: usize) -> Option<GridPoint> {
        Some(GridPoint {
            x: self.x.value(col)?,
            y: self.y.value(row)?,
            row,
            col,
        })
    }

    /// Get the 1D array index for a 2D grid position (row-major).
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.width() + col
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.width() * self.height()
    }

    /// Check if grid is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    /// Size of the grid once encoded at one f32 per cell.
    pub fn byte_len(&self) -> usize {
        self.len() * BYTES_PER_SAMPLE
    }
}

/// A point on the grid with both indices and coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub x: f32,
    pub y: f32,
    pub row: usize,
    pub col: usize,
}

/// Byte order of encoded samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Wire format for the browser client (`Float32Array` on x86/ARM).
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    pub fn encode_f32(self, value: f32) -> [u8; BYTES_PER_SAMPLE] {
        match self {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }

    pub fn decode_f32(self, bytes: [u8; BYTES_PER_SAMPLE]) -> f32 {
        match self {
            ByteOrder::Little => f32::from_le_bytes(bytes),
            ByteOrder::Big => f32::from_be_bytes(bytes),
        }
    }
}
