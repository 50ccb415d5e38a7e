//! Parsing for the family CSV export.

pub mod parse;
pub mod row;

pub use parse::{parse_date, parse_line};
pub use row::RawRecord;
