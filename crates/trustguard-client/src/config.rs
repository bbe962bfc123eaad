//! Client configuration types.

use std::num::NonZeroU32;
use std::time::Duration;

/// Default trust-score backend
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Default review-analysis service
pub const DEFAULT_ANALYSIS_URL: &str = "http://localhost:8000";

/// Default bound on a single request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Which service a request goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Trust-score backend (scores, review submission)
    Backend,
    /// Review-analysis service
    Analysis,
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend => write!(f, "backend"),
            Self::Analysis => write!(f, "analysis"),
        }
    }
}

/// Throttle for review-analysis requests.
///
/// Batch analysis fans out one request per review; the limiter keeps that
/// from flooding the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained requests per second
    pub requests_per_second: NonZeroU32,

    /// Requests allowed in a burst
    pub burst_size: NonZeroU32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimitConfig {
    /// 20 requests per second with bursts of 10
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requests_per_second: at_least_one(20),
            burst_size: at_least_one(10),
        }
    }

    /// Set the sustained rate (zero is treated as one)
    #[must_use]
    pub const fn requests_per_second(mut self, rps: u32) -> Self {
        self.requests_per_second = at_least_one(rps);
        self
    }

    /// Set the burst size (zero is treated as one)
    #[must_use]
    pub const fn burst_size(mut self, burst: u32) -> Self {
        self.burst_size = at_least_one(burst);
        self
    }
}

const fn at_least_one(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => NonZeroU32::MIN,
    }
}
