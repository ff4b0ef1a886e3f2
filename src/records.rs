use csv::StringRecord;
use rust_decimal::Decimal;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::error::{Result, SalaryError};

/// Zero-based index of the salary field within a row.
pub const SALARY_COLUMN: usize = 1;
const ID_COLUMN: usize = 0;

const DECIMAL_TYPE: &str = "Decimal";

#[derive(Debug, PartialEq, Clone)]
pub struct SalaryRecord {
    /// 1-based line the row was read from.
    pub line: u64,
    pub id: String,
    pub salary: Decimal,
}

impl SalaryRecord {
    fn from_row(row: &StringRecord, line: u64) -> Result<Self> {
        let (Some(id), Some(salary)) = (row.get(ID_COLUMN), row.get(SALARY_COLUMN)) else {
            return Err(SalaryError::MalformedRow {
                line,
                row: row.iter().collect::<Vec<_>>().join(","),
            });
        };

        Ok(SalaryRecord {
            line,
            id: id.to_owned(),
            salary: trim_and_parse_decimal(salary, line)?,
        })
    }
}

/// Streams salary records out of headerless comma-separated input, one
/// physical line at a time.
///
/// A line that opens a quoted field is joined with the following lines until
/// the quote closes. Rows are not required to share a field count, and a
/// blank line is a row with no fields, so both surface as
/// [`SalaryError::MalformedRow`].
pub struct SalaryRecords<R> {
    lines: io::Lines<BufReader<R>>,
    line: u64,
}

impl<R: io::Read> SalaryRecords<R> {
    fn next_line(&mut self) -> Option<Result<String>> {
        let text = self.lines.next()?;
        self.line += 1;
        Some(text.map_err(SalaryError::from))
    }
}

impl<R: io::Read> Iterator for SalaryRecords<R> {
    type Item = Result<SalaryRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut text = match self.next_line()? {
            Ok(text) => text,
            Err(err) => return Some(Err(err)),
        };
        let line = self.line;

        while has_open_quote(&text) {
            match self.next_line() {
                Some(Ok(more)) => {
                    text.push('\n');
                    text.push_str(&more);
                }
                Some(Err(err)) => return Some(Err(err)),
                None => break,
            }
        }

        Some(parse_row(&text).and_then(|row| SalaryRecord::from_row(&row, line)))
    }
}

pub fn salaries_from_reader<R: io::Read>(rdr: R) -> SalaryRecords<R> {
    SalaryRecords {
        lines: BufReader::new(rdr).lines(),
        line: 0,
    }
}

/// Opens `path` for streaming, refusing anything that is not a regular file
/// before touching it.
pub fn open_salaries<P: AsRef<Path>>(path: P) -> Result<SalaryRecords<File>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(SalaryError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    Ok(salaries_from_reader(File::open(path)?))
}

pub fn read_salaries<P: AsRef<Path>>(path: P) -> Result<Vec<SalaryRecord>> {
    open_salaries(path)?.collect()
}

/// Splits one logical row into fields. Empty text yields a row with no
/// fields.
fn parse_row(text: &str) -> Result<StringRecord> {
    let mut row = StringRecord::new();
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
        .read_record(&mut row)?;

    Ok(row)
}

fn has_open_quote(text: &str) -> bool {
    text.bytes().filter(|&b| b == b'"').count() % 2 == 1
}

fn trim_and_parse_decimal(text: &str, line: u64) -> Result<Decimal> {
    let trimmed = text.trim();
    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str_exact(trimmed)
    };

    parsed.map_err(|_| SalaryError::ValueConversion {
        value: text.to_owned(),
        target: DECIMAL_TYPE,
        line,
    })
}
