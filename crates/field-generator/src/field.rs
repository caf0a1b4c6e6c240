//! Sombrero field evaluation over a meshed grid.

use field_common::{FieldError, FieldResult, GridSpec};
use rayon::prelude::*;

/// Offset added to the radius in the denominator; keeps `r = 0` finite.
pub const DENOMINATOR_OFFSET: f32 = 0.1;

/// The sombrero function `sin(r) / (r + 0.1)`.
#[inline]
pub fn sombrero(r: f32) -> f32 {
    r.sin() / (r + DENOMINATOR_OFFSET)
}

/// A scalar field sampled on a grid, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SombreroField {
    grid: GridSpec,
    values: Vec<f32>,
}

impl SombreroField {
    /// Evaluate the sombrero function at every cell of `grid`.
    ///
    /// Cell `(row, col)` uses `x[col]` and `y[row]`. All arithmetic is f32.
    /// Rows are filled in parallel; each row depends only on its own `y`, so
    /// the result is the same as a sequential pass.
    pub fn generate(grid: &GridSpec) -> Self {
        let xs = grid.x.to_vec_f32();
        let ys = grid.y.to_vec_f32();
        let width = xs.len();

        let mut values = vec![0.0f32; grid.len()];
        if width > 0 {
            values
                .par_chunks_mut(width)
                .zip(ys.par_iter())
                .for_each(|(row, &y)| {
                    let y2 = y * y;
                    for (cell, &x) in row.iter_mut().zip(&xs) {
                        let r = (x * x + y2).sqrt();
                        *cell = sombrero(r);
                    }
                });
        }

        Self {
            grid: *grid,
            values,
        }
    }

    /// Wrap already computed values, e.g. a decoded buffer.
    pub fn from_values(grid: GridSpec, values: Vec<f32>) -> FieldResult<Self> {
        if values.len() != grid.len() {
            return Err(FieldError::InvalidGrid(format!(
                "{} values for a {}x{} grid",
                values.len(),
                grid.width(),
                grid.height()
            )));
        }
        Ok(Self { grid, values })
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Row-major samples.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.grid.height() || col >= self.grid.width() {
            return None;
        }
        self.values.get(self.grid.flat_index(row, col)).copied()
    }

    /// Summary statistics over the finite samples.
    pub fn stats(&self) -> FieldStats {
        let mut stats = FieldStats {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
            mean: 0.0,
            non_finite: 0,
        };
        let mut sum = 0.0f64;
        let mut count = 0usize;

        for &v in &self.values {
            if !v.is_finite() {
                stats.non_finite += 1;
                continue;
            }
            stats.min = stats.min.min(v);
            stats.max = stats.max.max(v);
            sum += v as f64;
            count += 1;
        }

        if count > 0 {
            stats.mean = sum / count as f64;
        } else {
            stats.min = f32::NAN;
            stats.max = f32::NAN;
            stats.mean = f64::NAN;
        }
        stats
    }
}

/// Min/max/mean of a field plus the number of NaN or infinite samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub min: f32,
    pub max: f32,
    pub mean: f64,
    pub non_finite: usize,
}

impl FieldStats {
    pub fn is_finite(&self) -> bool {
        self.non_finite == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_common::Linspace;

    fn small_grid() -> GridSpec {
        GridSpec::new(Linspace::new(-1.0, 1.0, 3), Linspace::new(-2.0, 2.0, 5))
    }

    #[test]
    fn test_sombrero_at_origin_is_zero() {
        assert_eq!(sombrero(0.0), 0.0);
    }

    #[test]
    fn test_sombrero_known_value() {
        let expected = (1.0f32).sin() / 1.1;
        assert!((sombrero(1.0) - expected).abs() < 1e-7);
    }

    #[test]
    fn test_generate_uses_row_for_y_and_col_for_x() {
        let grid = small_grid();
        let field = SombreroField::generate(&grid);
        assert_eq!(field.values().len(), 15);

        // row 0 is y = -2, col 2 is x = 1
        let r = (1.0f32 + 4.0).sqrt();
        assert_eq!(field.get(0, 2), Some(sombrero(r)));

        // row 2 is y = 0, col 1 is x = 0
        assert_eq!(field.get(2, 1), Some(0.0));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let field = SombreroField::generate(&small_grid());
        assert_eq!(field.get(5, 0), None);
        assert_eq!(field.get(0, 3), None);
    }

    #[test]
    fn test_generate_empty_grid() {
        let grid = GridSpec::new(Linspace::new(0.0, 1.0, 0), Linspace::new(0.0, 1.0, 4));
        let field = SombreroField::generate(&grid);
        assert!(field.values().is_empty());
    }

    #[test]
    fn test_from_values_rejects_wrong_length() {
        let err = SombreroField::from_values(small_grid(), vec![0.0; 14]).unwrap_err();
        assert!(matches!(err, FieldError::InvalidGrid(_)));
    }

    #[test]
    fn test_stats_counts_non_finite() {
        let grid = GridSpec::new(Linspace::new(0.0, 1.0, 2), Linspace::new(0.0, 1.0, 2));
        let field =
            SombreroField::from_values(grid, vec![1.0, f32::NAN, -3.0, f32::INFINITY]).unwrap();
        let stats = field.stats();

        assert_eq!(stats.non_finite, 2);
        assert!(!stats.is_finite());
        assert_eq!(stats.min, -3.0);
        assert_eq!(stats.max, 1.0);
        assert_eq!(stats.mean, -1.0);
    }
}
