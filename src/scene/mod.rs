pub mod buffer;
pub mod document;
pub mod encode;
pub mod svg;
