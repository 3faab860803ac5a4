use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    config::Config, deadline::Deadline, error::NetworkError, measurement::Measurement,
    timer::Timer, units,
};

/// Times a single full download of one resource.
pub struct Prober {
    client: Client,
    url: Url,
    require_success_status: bool,
}

impl Prober {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            url: config.url.clone(),
            require_success_status: config.require_success_status,
        }
    }

    /// Downloads the whole body into memory before `deadline` expires.
    ///
    /// The deadline bounds the request and the body read together. When it
    /// fires the in-flight transfer is dropped and nothing of it is kept.
    pub async fn probe(&self, deadline: Deadline) -> Result<Measurement, NetworkError> {
        let pending = Measurement::begin(self.url.as_str());
        if deadline.is_expired() {
            return Err(NetworkError::DeadlineExceeded {
                budget: deadline.budget(),
            });
        }
        info!(url = %self.url, budget_secs = deadline.budget().as_secs_f64(), "probe started");
        let timer = Timer::new();
        let byte_count = tokio::time::timeout_at(deadline.instant(), self.fetch())
            .await
            .map_err(|_| NetworkError::DeadlineExceeded {
                budget: deadline.budget(),
            })??;
        let measurement = pending.complete(byte_count, timer.elapsed());
        info!(
            bytes = byte_count as u64,
            milliseconds = measurement.raw_milliseconds(),
            mbps = units::megabits_per_second(&measurement),
            "probe finished"
        );
        Ok(measurement)
    }

    async fn fetch(&self) -> Result<usize, NetworkError> {
        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| NetworkError::Request {
                url: self.url.to_string(),
                source,
            })?;
        let status = resp.status();
        debug!(%status, "response headers received");
        if !status.is_success() {
            if self.require_success_status {
                return Err(NetworkError::Status(status));
            }
            warn!(%status, "non-success status, measuring the body anyway");
        }
        let body = resp.bytes().await.map_err(NetworkError::Body)?;
        Ok(body.len())
    }
}

/// One probe of `url` with a fresh deadline of `timeout`, status codes ignored.
pub async fn probe(url: &Url, timeout: Duration) -> Result<Measurement, NetworkError> {
    let config = Config {
        url: url.clone(),
        timeout,
        ..Config::default()
    };
    Prober::new(&config).probe(Deadline::after(timeout)).await
}
