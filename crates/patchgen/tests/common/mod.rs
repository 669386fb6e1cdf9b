//! Shared helpers for integration tests.

pub mod apply;
pub mod assertions;
