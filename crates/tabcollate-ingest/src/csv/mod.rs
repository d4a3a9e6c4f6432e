//! CSV reading and writing.

mod reader;
mod writer;

pub use reader::{read_table, read_table_from_reader};
pub use writer::{write_collection, write_table};
