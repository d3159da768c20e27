//! Polynomial evaluation and the `[0, 1]` root cascade.

pub mod poly;
pub mod roots;
