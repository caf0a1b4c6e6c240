//! Sombrero field generation and wire encoding.
//!
//! The field served to clients is `sin(r) / (r + 0.1)` sampled on a
//! 1000×1000 grid over `[-10, 10]²`, flattened row-major into
//! little-endian float32 samples.

pub mod encoding;
pub mod field;
pub mod layout;

pub use encoding::{decode_field, encode_field, produce_field_bytes};
pub use field::{sombrero, FieldStats, SombreroField};
pub use layout::FieldLayout;
