//! Buffer and position primitives shared by every scanner

pub mod buffer;
pub mod position;

pub use buffer::{Buffer, EOF_CHAR};
pub use position::{intern, LineCursor, Location, Span};
