//! This crate contains helper functions that are used exclusively in defining binaries, that is
//! main functions.
use common::{RtError, RtResult};
use serde::Deserialize;
use std::ops::Range;
use std::path::Path;

/// One raw row of an operation script csv.
/// The columns are `op,start,end,value`; `value` stays empty for sums.
#[derive(Debug, Clone, Deserialize)]
pub struct OpRecord {
    /// Either `assign` or `sum`.
    pub op: String,
    /// Inclusive start position of the range.
    pub start: u64,
    /// Exclusive end position of the range.
    pub end: u64,
    /// The value to assign; ignored for sums.
    pub value: Option<i64>,
}

/// A validated script operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptOp {
    /// Set every position in the range to the value.
    Assign(Range<u64>, i64),
    /// Query the sum over the range.
    Sum(Range<u64>),
}

impl ScriptOp {
    /// Validates a raw csv row.
    /// # Returns
    /// - An `Err` if the operation is unknown, the range is inverted or an
    ///   assignment comes without a value.
    pub fn from_record(record: &OpRecord) -> RtResult<Self> {
        if record.start > record.end {
            return Err(format!(
                "Script row has inverted range {}..{}",
                record.start, record.end
            )
            .into());
        }
        match record.op.as_str() {
            "assign" => {
                let value = record.value.ok_or_else::<RtError, _>(|| {
                    format!(
                        "Script row assigns {}..{} but has no value",
                        record.start, record.end
                    )
                    .into()
                })?;
                Ok(ScriptOp::Assign(record.start..record.end, value))
            }
            "sum" => Ok(ScriptOp::Sum(record.start..record.end)),
            other => Err(format!("Script row has unknown operation {:?}", other).into()),
        }
    }
}

/// Read an operation script from a csv file.
/// # Returns
/// - An `Err` if the file could not be read or a row is not a valid operation.
pub fn script_from_path<P>(path: P) -> RtResult<Vec<ScriptOp>>
where
    P: AsRef<Path>,
{
    let mut rdr = csv::ReaderBuilder::new().from_path(path)?;
    let mut script = Vec::new();
    for record in rdr.deserialize() {
        let record: OpRecord = record?;
        script.push(ScriptOp::from_record(&record)?);
    }
    Ok(script)
}
