//! Small shared helpers.

pub mod color;
