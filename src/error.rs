use std::{path::PathBuf, time::Duration};

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while fetching the probe resource.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("reading response body failed: {0}")]
    Body(#[source] reqwest::Error),

    #[error("deadline of {}s exceeded", .budget.as_secs_f64())]
    DeadlineExceeded { budget: Duration },

    #[error("server answered with status {0}")]
    Status(StatusCode),
}

/// Failure while appending a row to the results file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("measurement for {0} never completed")]
    Incomplete(String),

    #[error("measurement for {0} has zero duration, throughput is undefined")]
    ZeroDuration(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    Url {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} must use http or https, got {scheme}")]
    Scheme { var: &'static str, scheme: String },

    #[error("{var} must be a positive number of seconds, got {value:?}")]
    Timeout { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    Flag { var: &'static str, value: String },
}
