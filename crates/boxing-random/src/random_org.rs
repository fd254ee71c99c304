//! random.org source
//!
//! Fetches a single decimal fraction in plain text from random.org. Every
//! call is one blocking HTTP request; there are no retries, callers decide
//! what to do with a failure.

use crate::{check_sample, RandomError};
use boxing_domain::traits::RandomSource;
use std::time::Duration;

/// Default random.org endpoint: one fraction, two decimals, plain text
pub const DEFAULT_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

/// Default timeout for random.org requests (5 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Random source backed by random.org
#[derive(Debug)]
pub struct RandomOrgSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl RandomOrgSource {
    /// Create a source for `url` with the default timeout
    pub fn new(url: impl Into<String>) -> Result<Self, RandomError> {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a source for `url` with a request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, RandomError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RandomError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Create a source for the public random.org endpoint
    pub fn default_endpoint() -> Result<Self, RandomError> {
        Self::new(DEFAULT_URL)
    }

    /// Endpoint this source reads from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch one sample
    ///
    /// # Errors
    ///
    /// - `Unavailable` on timeout, connection failure or a non-success status
    /// - `InvalidSample` if the body is not a number in [0, 1)
    pub fn fetch(&self) -> Result<f64, RandomError> {
        tracing::info!("Attempting to get a random number.");

        let response = self.client.get(&self.url).send().map_err(|e| {
            if e.is_timeout() {
                tracing::error!("Request to random.org timed out.");
                RandomError::Unavailable("Request to random.org timed out.".to_string())
            } else {
                tracing::error!("Request to random.org failed: {}", e);
                RandomError::Unavailable(format!("Request to random.org failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("random.org answered with HTTP {}", status);
            return Err(RandomError::Unavailable(format!(
                "Request to random.org failed: HTTP {}",
                status
            )));
        }

        let body = response
            .text()
            .map_err(|e| RandomError::Unavailable(format!("Failed to read random.org response: {}", e)))?;

        let sample = parse_sample(&body)?;
        tracing::info!("Successfully received a random number: {}", sample);
        Ok(sample)
    }
}

impl RandomSource for RandomOrgSource {
    type Error = RandomError;

    fn next(&mut self) -> Result<f64, Self::Error> {
        self.fetch()
    }
}

/// Parse a plain-text random.org answer
pub fn parse_sample(body: &str) -> Result<f64, RandomError> {
    let trimmed = body.trim();
    let sample: f64 = trimmed.parse().map_err(|_| {
        tracing::error!("Invalid response from random.org: {}", trimmed);
        RandomError::InvalidSample(format!("Invalid response from random.org: {}", trimmed))
    })?;
    check_sample(sample)
}
