//! US EPA breakpoint table for PM2.5.
//!
//! Reference data, not derived data: the values reproduce the published EPA
//! table and must not be recomputed or "corrected".

use serde::Serialize;

/// One segment of the piecewise-linear AQI scale.
///
/// Maps the concentration range `[concentration_low, concentration_high]`
/// (µg/m³) onto the index range `[index_low, index_high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakpoint {
    pub index_low: f64,
    pub index_high: f64,
    pub concentration_low: f64,
    pub concentration_high: f64,
}

/// The seven PM2.5 segments, in ascending concentration order.
///
/// | Segment | Index     | Concentration (µg/m³) |
/// |---------|-----------|-----------------------|
/// | 1       | 0 - 50    | 0 - 12.0              |
/// | 2       | 51 - 100  | 12.1 - 35.4           |
/// | 3       | 101 - 150 | 35.5 - 55.4           |
/// | 4       | 151 - 200 | 55.5 - 150.4          |
/// | 5       | 201 - 300 | 150.5 - 250.4         |
/// | 6       | 301 - 400 | 250.5 - 350.4         |
/// | 7       | 401 - 500 | 350.5 - 500           |
///
/// Segments are contiguous up to the table's 0.1 µg/m³ reporting step
/// (12.0 → 12.1, 35.4 → 35.5, ...).
pub static PM25_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint {
        index_low: 0.0,
        index_high: 50.0,
        concentration_low: 0.0,
        concentration_high: 12.0,
    },
    Breakpoint {
        index_low: 51.0,
        index_high: 100.0,
        concentration_low: 12.1,
        concentration_high: 35.4,
    },
    Breakpoint {
        index_low: 101.0,
        index_high: 150.0,
        concentration_low: 35.5,
        concentration_high: 55.4,
    },
    Breakpoint {
        index_low: 151.0,
        index_high: 200.0,
        concentration_low: 55.5,
        concentration_high: 150.4,
    },
    Breakpoint {
        index_low: 201.0,
        index_high: 300.0,
        concentration_low: 150.5,
        concentration_high: 250.4,
    },
    Breakpoint {
        index_low: 301.0,
        index_high: 400.0,
        concentration_low: 250.5,
        concentration_high: 350.4,
    },
    Breakpoint {
        index_low: 401.0,
        index_high: 500.0,
        concentration_low: 350.5,
        concentration_high: 500.0,
    },
];
