use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalaryError {
    #[error("The file {} does not exist.", path.display())]
    FileNotFound { path: PathBuf },

    /// A row with fewer than two fields. `line` is 1-based.
    #[error("Row {row} on line {line} does not contain enough columns.")]
    MalformedRow { line: u64, row: String },

    #[error("Cannot convert {value} to a {target} (line {line}).")]
    ValueConversion {
        value: String,
        target: &'static str,
        line: u64,
    },

    #[error("Salary total overflowed the decimal range at line {line}.")]
    Overflow { line: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SalaryError>;
