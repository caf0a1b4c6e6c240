//! Common types shared by the sombrero field crates and services.

pub mod error;
pub mod grid;

pub use error::{FieldError, FieldResult};
pub use grid::{ByteOrder, GridPoint, GridSpec, Linspace};
