//! Output formatting for computed AQI values.
//!
//! Rounding to a whole reported index happens here, on the presentation
//! side; the engine itself always returns the continuous value.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::breakpoints::Breakpoint;

/// A single computed result: the raw reading, the continuous index, the
/// index rounded for display, and the segment that produced it.
#[derive(Debug, Serialize)]
pub struct AqiRecord {
    pub concentration: f64,
    pub aqi: f64,
    pub aqi_rounded: i64,
    pub segment: Breakpoint,
}

impl AqiRecord {
    pub fn new(concentration: f64, aqi: f64, segment: &Breakpoint) -> Self {
        AqiRecord {
            concentration,
            aqi,
            aqi_rounded: aqi.round() as i64,
            segment: *segment,
        }
    }

    /// Plain one-line rendering: `<concentration> -> <index>`.
    pub fn to_line(&self, rounded: bool) -> String {
        if rounded {
            format!("{} -> {}", self.concentration, self.aqi_rounded)
        } else {
            format!("{} -> {:.2}", self.concentration, self.aqi)
        }
    }
}

/// Logs a record using Rust's debug pretty-print format.
pub fn print_pretty(record: &AqiRecord) {
    debug!("{:#?}", record);
}

/// Writes a record to stdout as pretty-printed JSON.
pub fn print_json(record: &AqiRecord) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}
