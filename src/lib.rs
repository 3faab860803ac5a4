use std::time::Duration;

pub mod config;
pub mod deadline;
pub mod error;
pub mod measurement;
pub mod prober;
pub mod repository;
pub mod timer;
pub mod units;

// Download files of several sizes are listed at https://www.thinkbroadband.com/download
pub const DEFAULT_URL: &str = "http://ipv4.download.thinkbroadband.com/100MB.zip";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
pub const DEFAULT_OUTPUT: &str = "speedtest.csv";
