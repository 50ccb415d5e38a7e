use chrono::NaiveDate;

/// A single data line from the family CSV, parsed but not yet linked.
///
/// `parent_names` keeps the raw references in field order; they are resolved
/// against the full person index only after every line has been read.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub name: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
    pub parent_names: Vec<String>,
}
