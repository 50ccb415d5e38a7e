use crate::record::row::RawRecord;
use anyhow::{Context, bail};
use chrono::NaiveDate;

/// Expected columns (comma-separated):
/// name, birth_date, death_date, parent1_name, parent2_name
///
/// Example:
/// Alice Smith,01.01.1990,,Jan Smith,Eva Smith
const FIELD_COUNT: usize = 5;

/// Dates in the export use day.month.year.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse one data line into a [`RawRecord`].
///
/// Trailing empty fields are significant: a person with no death date and no
/// parents still occupies all five columns. An empty death date means the
/// person is living. A malformed date or a wrong column count is an error
/// carrying the offending text; the caller decides how far it propagates.
pub fn parse_line(line: &str) -> anyhow::Result<RawRecord> {
    // str::split keeps trailing empty fields, matching the export format.
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        bail!(
            "expected {} comma-separated fields, got {}: {:?}",
            FIELD_COUNT,
            fields.len(),
            line
        );
    }

    let name = fields[0].trim();
    if name.is_empty() {
        bail!("empty name field: {:?}", line);
    }

    let birth_date =
        parse_date(fields[1]).with_context(|| format!("bad birth date for {:?}", name))?;

    let death_date = if fields[2].trim().is_empty() {
        None
    } else {
        Some(parse_date(fields[2]).with_context(|| format!("bad death date for {:?}", name))?)
    };

    let parent_names = fields[3..FIELD_COUNT]
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();

    Ok(RawRecord {
        name: name.to_string(),
        birth_date,
        death_date,
        parent_names,
    })
}

/// Parse "01.01.1990" into a [`NaiveDate`].
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .with_context(|| format!("invalid date {:?}, expected dd.mm.yyyy", s))
}
