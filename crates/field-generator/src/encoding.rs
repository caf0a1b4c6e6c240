//! Flat float32 wire encoding of a field.
//!
//! A field is serialized as `width * height` consecutive 4-byte IEEE-754
//! samples in row-major order, with no header. The served buffer is always
//! little-endian so browsers can view it directly as a `Float32Array`.

use bytes::{BufMut, Bytes, BytesMut};
use field_common::grid::BYTES_PER_SAMPLE;
use field_common::{ByteOrder, FieldError, FieldResult, GridSpec};
use tracing::debug;

use crate::field::SombreroField;

/// Generate the sombrero grid and return its little-endian encoding.
///
/// Always exactly 4,000,000 bytes and identical on every call.
pub fn produce_field_bytes() -> Bytes {
    let grid = GridSpec::sombrero();
    let field = SombreroField::generate(&grid);
    let bytes = encode_field(&field, ByteOrder::Little);

    debug!(
        width = grid.width(),
        height = grid.height(),
        bytes = bytes.len(),
        "Encoded sombrero field"
    );

    bytes
}

/// Serialize a field row-major, one f32 per cell.
pub fn encode_field(field: &SombreroField, order: ByteOrder) -> Bytes {
    let mut buf = BytesMut::with_capacity(field.grid().byte_len());
    for &value in field.values() {
        buf.put_slice(&order.encode_f32(value));
    }
    buf.freeze()
}

/// Decode a buffer produced by [`encode_field`] back into row-major samples.
pub fn decode_field(data: &[u8], grid: &GridSpec, order: ByteOrder) -> FieldResult<Vec<f32>> {
    let expected = grid.byte_len();
    if data.len() != expected {
        return Err(FieldError::BufferSize {
            expected,
            actual: data.len(),
        });
    }

    Ok(data
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|c| order.decode_f32([c[0], c[1], c[2], c[3]]))
        .collect())
}
