//! Conversions from a completed [`Measurement`] to the figures written in a row.
//!
//! A megabyte here is 1024 * 1024 bytes. Rates over a zero duration follow IEEE
//! division and come out infinite; callers that print them check
//! [`seconds`] first.

use crate::measurement::Measurement;

pub const BYTES_PER_MEGABYTE: f64 = 1_048_576.0;
pub const BITS_PER_BYTE: f64 = 8.0;

pub fn seconds(measurement: &Measurement) -> f64 {
    measurement.raw_milliseconds() as f64 / 1000.0
}

pub fn megabytes(measurement: &Measurement) -> f64 {
    measurement.raw_bytes() as f64 / BYTES_PER_MEGABYTE
}

pub fn megabits(measurement: &Measurement) -> f64 {
    megabytes(measurement) * BITS_PER_BYTE
}

pub fn megabits_per_second(measurement: &Measurement) -> f64 {
    megabits(measurement) / seconds(measurement)
}

pub fn megabytes_per_second(measurement: &Measurement) -> f64 {
    megabytes(measurement) / seconds(measurement)
}
