//! Slow reference evaluation of the sombrero field.
//!
//! Used as an oracle for the optimized generator: every step is done in f64
//! straight from the definition, one cell at a time.

/// Reference value at `(row, col)` of an `n`×`n` grid over `[-extent, extent]²`.
pub fn reference_value(row: usize, col: usize, n: usize, extent: f64) -> f64 {
    let x = axis_value(col, n, extent);
    let y = axis_value(row, n, extent);
    let r = (x * x + y * y).sqrt();
    r.sin() / (r + 0.1)
}

fn axis_value(i: usize, n: usize, extent: f64) -> f64 {
    if n < 2 {
        return -extent;
    }
    -extent + i as f64 * (2.0 * extent) / (n - 1) as f64
}

/// Read the little-endian f32 at sample `index` of an encoded buffer.
pub fn read_f32_le(buf: &[u8], index: usize) -> Option<f32> {
    let start = index.checked_mul(4)?;
    let bytes = buf.get(start..start + 4)?;
    Some(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_corner() {
        let v = reference_value(0, 0, 1000, 10.0);
        assert!((v - 0.070_213_322).abs() < 1e-6);
    }

    #[test]
    fn test_reference_is_symmetric() {
        assert_eq!(
            reference_value(10, 900, 1000, 10.0),
            reference_value(900, 10, 1000, 10.0)
        );
    }

    #[test]
    fn test_read_f32_le() {
        let buf = [0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x00, 0x40];
        assert_eq!(read_f32_le(&buf, 0), Some(1.0));
        assert_eq!(read_f32_le(&buf, 1), Some(2.0));
        assert_eq!(read_f32_le(&buf, 2), None);
    }
}
