//! HTTP handlers for the field service.

pub mod field;
pub mod health;
