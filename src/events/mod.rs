pub mod cursor;
pub mod pointer;

pub use cursor::wire_pen_cursor;
pub use pointer::{wire_input_handlers, InkWiring};
