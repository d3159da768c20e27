//! Per-pixel coverage: crossing parity, outline distance and compositing.

pub mod compositor;
pub mod crossing;
pub mod distance;
pub mod segment;
