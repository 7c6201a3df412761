// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-switch active flow counts over time.
//!
//! Input files hold one row per time step with one column per switch:
//!
//! ```text
//! 1200,3400,560,
//! 1310,3388,602,17
//! ```
//!
//! The last column is optional and an empty or missing value counts as zero.

use crate::Error;

use csv::{ReaderBuilder, StringRecord, Trim};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The number of switches recorded in each row.
pub const SWITCHES: usize = 4;

/// Four equal-length sequences of flow counts, indexed by time step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwitchSeries {
    switches: [Vec<u64>; SWITCHES],
}

impl SwitchSeries {
    pub fn new() -> Self {
        Default::default()
    }

    /// Append one time step.
    pub fn push(&mut self, row: [u64; SWITCHES]) {
        for (switch, value) in self.switches.iter_mut().zip(row.iter()) {
            switch.push(*value);
        }
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.switches[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn switch(&self, index: usize) -> &[u64] {
        &self.switches[index]
    }

    pub fn switches(&self) -> impl Iterator<Item = (usize, &[u64])> {
        self.switches.iter().map(|s| s.as_slice()).enumerate()
    }

    /// The largest count seen on any switch, zero when empty.
    pub fn peak(&self) -> u64 {
        self.switches
            .iter()
            .flat_map(|s| s.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Read and parse the series stored at `path`.
pub fn extract<P: AsRef<Path>>(path: P) -> Result<SwitchSeries, Error> {
    let path = path.as_ref();
    let name = path.display().to_string();
    info!("extracting {}", name);

    let file = File::open(path).map_err(|source| Error::Io {
        path: name.clone(),
        source,
    })?;
    let series = from_reader(file, &name)?;

    debug!("{}: {} time steps, peak {}", name, series.len(), series.peak());
    Ok(series)
}

/// Parse a series from any reader. `name` is only used in diagnostics.
pub fn from_reader<R: Read>(reader: R, name: &str) -> Result<SwitchSeries, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut series = SwitchSeries::new();
    let mut record = StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(source) => {
                return Err(Error::Csv {
                    name: name.to_owned(),
                    source,
                })
            }
        }

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row = parse_record(&record).map_err(|reason| Error::Record {
            name: name.to_owned(),
            line,
            reason,
        })?;

        if record.get(SWITCHES - 1).map_or(false, |f| !f.is_empty()) {
            debug!("{}:{}: {:?}", name, line, row);
        }

        series.push(row);
    }

    Ok(series)
}

/// Parse one row. The first three fields are required; the last one defaults
/// to zero. Extra trailing fields are ignored.
pub fn parse_record(record: &StringRecord) -> Result<[u64; SWITCHES], String> {
    let mut row = [0; SWITCHES];

    for (index, value) in row.iter_mut().enumerate() {
        match record.get(index) {
            Some(field) if !field.is_empty() => {
                *value = field
                    .parse()
                    .map_err(|e| format!("field {} ({:?}): {}", index, field, e))?;
            }
            _ if index == SWITCHES - 1 => {}
            _ => return Err(format!("missing field {}", index)),
        }
    }

    Ok(row)
}
