use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::errors::SparseBenchError;

/// One timing measurement: a method run against a matrix for one kernel.
/// Result files name the kernel field either `operation` or `kernel`
/// depending on which harness produced them; both spellings parse.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimingRecord {
    pub matrix: String,
    pub method: String,
    #[serde(alias = "kernel")]
    pub operation: String,
    pub time: f64,
}

/// Read a results file holding a JSON array of timing records.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<TimingRecord>, SparseBenchError> {
    let path = path.as_ref();
    let data =
        fs::read(path).map_err(|e| SparseBenchError::read(format!("{}: {e}", path.display())))?;
    serde_json::from_slice(&data)
        .map_err(|e| SparseBenchError::parse(format!("{}: {e}", path.display())))
}
