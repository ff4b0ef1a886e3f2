use log::{debug, info};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::path::Path;

use crate::error::{Result, SalaryError};
use crate::records::{open_salaries, SalaryRecord};

/// Fractional digits kept in the average. Longer quotients are rounded
/// half-to-even; shorter ones keep their own scale.
pub const AVERAGE_SCALE: u32 = 10;

#[derive(Debug, Serialize, PartialEq, Default, Clone, Copy)]
pub struct SalaryTotals {
    #[serde(serialize_with = "serialize_decimal")]
    pub total: Decimal,
    #[serde(serialize_with = "serialize_decimal")]
    pub average: Decimal,
    pub count: usize,
}

impl From<SalaryTotals> for (Decimal, Decimal) {
    fn from(totals: SalaryTotals) -> Self {
        (totals.total, totals.average)
    }
}

/// Total and average salary of the file at `path`.
///
/// Any missing file, short row or unparseable salary aborts the whole
/// computation; no partial totals are returned.
pub fn total_salary<P: AsRef<Path>>(path: P) -> Result<SalaryTotals> {
    let path = path.as_ref();
    let totals = aggregate(open_salaries(path)?)?;

    info!(
        "{}: {} salaries, total={}, average={}",
        path.display(),
        totals.count,
        totals.total,
        totals.average
    );

    Ok(totals)
}

pub fn aggregate<I>(records: I) -> Result<SalaryTotals>
where
    I: IntoIterator<Item = Result<SalaryRecord>>,
{
    let mut total = Decimal::ZERO;
    let mut count: usize = 0;
    let mut last_line = 0;

    for record in records {
        let record = record?;
        total = total
            .checked_add(record.salary)
            .ok_or(SalaryError::Overflow { line: record.line })?;
        count += 1;
        last_line = record.line;

        debug!("line {}: {} earns {}", record.line, record.id, record.salary);
    }

    if count == 0 {
        return Ok(SalaryTotals::default());
    }

    let average = total
        .checked_div(Decimal::from(count))
        .ok_or(SalaryError::Overflow { line: last_line })?
        .round_dp_with_strategy(AVERAGE_SCALE, RoundingStrategy::MidpointNearestEven);

    Ok(SalaryTotals {
        total,
        average,
        count,
    })
}

fn serialize_decimal<S>(value: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}
