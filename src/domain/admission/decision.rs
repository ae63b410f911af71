use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-client rate limiting policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitPolicy {
    /// Maximum admitted requests per window
    pub max_requests: u32,
    /// Window length in seconds
    pub window_seconds: u64,
}

impl RateLimitPolicy {
    /// Create a new policy
    pub fn new(max_requests: u32, window_seconds: u64) -> Self {
        Self {
            max_requests,
            window_seconds,
        }
    }

    /// Window length as a duration
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        // 3 requests per hour
        Self::new(3, 3600)
    }
}

/// Rejection metadata for a rate-limited request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitRejection {
    /// Whole seconds until the oldest counted request leaves the window
    pub retry_after_seconds: u64,
    /// Configured maximum per window
    pub limit: u32,
    /// Slots left in the window (always zero on rejection)
    pub remaining: u32,
    /// When the window next frees a slot
    pub resets_at: DateTime<Utc>,
}

/// Rejection metadata for a budget-exceeded request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRejection {
    /// Month whose ceiling was hit, e.g. "2026-02"
    pub month: String,
    /// Cumulative estimated spend in USD
    pub spent_usd: f64,
    /// Configured monthly cost ceiling in USD
    pub limit_usd: f64,
    /// Cumulative tokens for the month
    pub total_tokens: u64,
    /// Configured monthly token ceiling
    pub max_monthly_tokens: u64,
    /// First instant of the next calendar month
    pub resets_at: DateTime<Utc>,
}

/// Outcome of the admission checks
#[derive(Debug, Clone)]
pub enum AdmissionDecision {
    /// Both checks passed; the rate slot has been consumed
    Allowed,
    /// The client's sliding window is full
    RateLimited(RateLimitRejection),
    /// The monthly cost or token ceiling has been reached
    BudgetExceeded(BudgetRejection),
}

impl AdmissionDecision {
    /// Whether the request may proceed
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Point-in-time view of one client's window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitInfo {
    /// Requests currently counted in the window
    pub request_count: u32,
    /// Slots left before rejection
    pub remaining: u32,
    /// Seconds until the oldest counted request expires, if any are counted
    pub oldest_expires_in_seconds: Option<u64>,
}
