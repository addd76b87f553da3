//! Input handling: reading and parsing block lists.

mod reader;

pub use reader::{parse_lines, read_blocks, read_source, strip_comment, LineError};
