//! Exact-decimal salary totals over headerless CSV files.
//!
//! Each row carries an identifier in the first column and a salary in the
//! second. [`total_salary`] sums every salary and averages them without ever
//! going through binary floating point.

pub mod error;
pub mod records;
pub mod salary;

pub use error::{Result, SalaryError};
pub use records::{
    open_salaries, read_salaries, salaries_from_reader, SalaryRecord, SalaryRecords,
};
pub use salary::{aggregate, total_salary, SalaryTotals, AVERAGE_SCALE};
