//! Self-description of the encoded buffer, served next to the raw bytes.

use field_common::{ByteOrder, GridSpec, Linspace};
use serde::{Deserialize, Serialize};

use crate::field::FieldStats;

/// Describes how to interpret an encoded field buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    pub width: usize,
    pub height: usize,
    /// Always `float32`.
    pub dtype: String,
    pub byte_order: ByteOrder,
    /// Always `row-major`.
    pub order: String,
    pub byte_length: usize,
    /// Column axis.
    pub x: Linspace,
    /// Row axis.
    pub y: Linspace,
    pub function: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_range: Option<ValueRange>,
}

/// Observed value range of the encoded samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl FieldLayout {
    pub fn for_grid(grid: &GridSpec) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            dtype: "float32".to_string(),
            byte_order: ByteOrder::Little,
            order: "row-major".to_string(),
            byte_length: grid.byte_len(),
            x: grid.x,
            y: grid.y,
            function: "sin(r) / (r + 0.1)".to_string(),
            value_range: None,
        }
    }

    /// Attach the min/max of a generated field. Skipped when the field has no
    /// finite samples.
    pub fn with_stats(mut self, stats: &FieldStats) -> Self {
        if stats.min.is_finite() && stats.max.is_finite() {
            self.value_range = Some(ValueRange {
                min: stats.min,
                max: stats.max,
            });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sombrero_layout() {
        let layout = FieldLayout::for_grid(&GridSpec::sombrero());
        assert_eq!(layout.width, 1000);
        assert_eq!(layout.height, 1000);
        assert_eq!(layout.byte_length, 4_000_000);
        assert_eq!(layout.byte_order, ByteOrder::Little);
        assert!(layout.value_range.is_none());
    }

    #[test]
    fn test_layout_json_shape() {
        let layout = FieldLayout::for_grid(&GridSpec::sombrero());
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["dtype"], "float32");
        assert_eq!(json["byte_order"], "little");
        assert_eq!(json["order"], "row-major");
        assert_eq!(json["x"]["num"], 1000);
        assert_eq!(json["y"]["start"], -10.0);
        assert!(json.get("value_range").is_none());
    }

    #[test]
    fn test_with_stats_skips_non_finite_range() {
        let stats = FieldStats {
            min: f32::NAN,
            max: f32::NAN,
            mean: f64::NAN,
            non_finite: 4,
        };
        let layout = FieldLayout::for_grid(&GridSpec::sombrero()).with_stats(&stats);
        assert!(layout.value_range.is_none());
    }
}
