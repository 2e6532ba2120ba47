//! Excel reading: naming-key extraction from workbook bytes.
//!
//! Only one cell is ever read (C2 of the first worksheet); everything else
//! in the workbook is ignored.

mod reader;

pub use reader::naming_key;
