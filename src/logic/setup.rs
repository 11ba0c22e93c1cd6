//! Setup phase: read districts and people from the game input.
//!
//! Layout (space separated, one record per line):
//!
//! ```text
//! <district count>
//! <district id>            (repeated)
//! <person count>
//! <first> <last> <birth month> <age> <district id> <effectiveness>   (repeated)
//! ```

use crate::models::{District, DistrictId, Person};
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use serde::Deserialize;
use std::io;
use std::str::FromStr;

/// Errors that can occur while reading the game input.
#[derive(Debug)]
pub enum SetupError {
    /// The underlying reader failed.
    Csv(csv::Error),
    /// Input ended before a required record.
    UnexpectedEnd { expected: &'static str },
    /// A count or district id could not be parsed.
    InvalidValue {
        line: u64,
        expected: &'static str,
        value: String,
    },
    /// A person row has the wrong shape or a field of the wrong type.
    InvalidPerson { line: u64, reason: String },
    /// Birth month outside 1..=12.
    InvalidBirthMonth { line: u64, month: u8 },
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::Csv(e) => write!(f, "Could not read input: {}", e),
            SetupError::UnexpectedEnd { expected } => {
                write!(f, "Input ended early, expected {}", expected)
            }
            SetupError::InvalidValue {
                line,
                expected,
                value,
            } => write!(f, "Line {}: expected {}, found {:?}", line, expected, value),
            SetupError::InvalidPerson { line, reason } => {
                write!(f, "Line {}: invalid person record ({})", line, reason)
            }
            SetupError::InvalidBirthMonth { line, month } => {
                write!(f, "Line {}: birth month {} is not in 1..=12", line, month)
            }
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for SetupError {
    fn from(e: csv::Error) -> Self {
        SetupError::Csv(e)
    }
}

/// One person row, in column order.
#[derive(Debug, Deserialize)]
struct PersonRecord {
    first_name: String,
    last_name: String,
    birth_month: u8,
    age: u32,
    district_id: DistrictId,
    effectiveness: i32,
}

/// Non-empty records with the empty fields left by repeated spaces dropped.
struct Rows<R> {
    records: StringRecordsIntoIter<R>,
}

impl<R: io::Read> Rows<R> {
    fn new(reader: R) -> Self {
        let records = ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(reader)
            .into_records();
        Self { records }
    }

    fn next_row(&mut self, expected: &'static str) -> Result<(u64, StringRecord), SetupError> {
        for result in self.records.by_ref() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            let fields: StringRecord = record.iter().filter(|f| !f.is_empty()).collect();
            if !fields.is_empty() {
                return Ok((line, fields));
            }
        }
        Err(SetupError::UnexpectedEnd { expected })
    }

    /// The first field of the next row, parsed.
    fn next_value<T: FromStr>(&mut self, expected: &'static str) -> Result<(u64, T), SetupError> {
        let (line, row) = self.next_row(expected)?;
        let raw = row.get(0).unwrap_or_default();
        let value = raw.parse().map_err(|_| SetupError::InvalidValue {
            line,
            expected,
            value: raw.to_string(),
        })?;
        Ok((line, value))
    }
}

/// Read the districts (in order of appearance) with their people routed into the odd or
/// even population by birth month.
///
/// A repeated district id is registered once. A person whose district was never registered
/// is skipped.
pub fn read_panem<R: io::Read>(reader: R) -> Result<Vec<District>, SetupError> {
    let mut rows = Rows::new(reader);

    let (_, district_count): (_, usize) = rows.next_value("district count")?;
    let mut districts: Vec<District> = Vec::with_capacity(district_count);
    for _ in 0..district_count {
        let (line, id): (_, DistrictId) = rows.next_value("district id")?;
        if districts.iter().any(|d| d.id == id) {
            log::warn!("line {}: district {} listed twice, keeping the first", line, id);
            continue;
        }
        districts.push(District::new(id));
    }

    let (_, person_count): (_, usize) = rows.next_value("person count")?;
    for _ in 0..person_count {
        let (line, row) = rows.next_row("person record")?;
        let record: PersonRecord =
            row.deserialize(None)
                .map_err(|e| SetupError::InvalidPerson {
                    line,
                    reason: e.to_string(),
                })?;
        if !(1..=12).contains(&record.birth_month) {
            return Err(SetupError::InvalidBirthMonth {
                line,
                month: record.birth_month,
            });
        }
        let Some(district) = districts.iter_mut().find(|d| d.id == record.district_id) else {
            log::warn!(
                "line {}: {} {} belongs to unknown district {}, skipped",
                line,
                record.first_name,
                record.last_name,
                record.district_id
            );
            continue;
        };
        district.add_person(Person::new(
            record.first_name,
            record.last_name,
            record.birth_month,
            record.age,
            record.district_id,
            record.effectiveness,
        ))
        .map_err(|e| SetupError::InvalidPerson {
            line,
            reason: e.to_string(),
        })?;
    }

    log::debug!(
        "read {} districts and {} people",
        districts.len(),
        districts.iter().map(District::len).sum::<usize>()
    );
    Ok(districts)
}

/// [`read_panem`] over an in-memory string.
pub fn parse_panem(input: &str) -> Result<Vec<District>, SetupError> {
    read_panem(input.as_bytes())
}
