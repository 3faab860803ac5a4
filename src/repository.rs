use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{error::PersistenceError, measurement::Measurement, units};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only CSV file of completed measurements.
///
/// Columns: timestamp, bytes, megabytes, milliseconds, seconds, mbps, MBps.
/// No header row is written.
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, measurement: &Measurement) -> Result<(), PersistenceError> {
        let row = format_row(measurement)?;
        let mut file = self.open()?;
        file.write_all(row.as_bytes())
            .map_err(|source| PersistenceError::Write {
                path: self.path.clone(),
                source,
            })?;
        info!(path = %self.path.display(), row = row.trim_end(), "row appended");
        Ok(())
    }

    fn open(&self) -> Result<File, PersistenceError> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        options
            .open(&self.path)
            .map_err(|source| PersistenceError::Open {
                path: self.path.clone(),
                source,
            })
    }
}

pub fn append(path: impl AsRef<Path>, measurement: &Measurement) -> Result<(), PersistenceError> {
    Repository::new(path.as_ref()).append(measurement)
}

/// Renders one newline-terminated row.
pub fn format_row(measurement: &Measurement) -> Result<String, PersistenceError> {
    let (Some(bytes), Some(milliseconds)) = (measurement.bytes(), measurement.milliseconds())
    else {
        return Err(PersistenceError::Incomplete(measurement.url().to_string()));
    };
    if milliseconds == 0 {
        return Err(PersistenceError::ZeroDuration(measurement.url().to_string()));
    }
    Ok(format!(
        "{},{},{:.2},{},{:.2},{:.2},{:.2}\n",
        measurement.started_at().format(TIMESTAMP_FORMAT),
        bytes,
        units::megabytes(measurement),
        milliseconds,
        units::seconds(measurement),
        units::megabits_per_second(measurement),
        units::megabytes_per_second(measurement),
    ))
}
