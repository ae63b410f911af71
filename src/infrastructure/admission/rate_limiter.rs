//! Sliding-window rate limiter
//!
//! Per-client request windows over a single coarse lock. The check and the
//! timestamp append for one client happen under the same write guard, so two
//! concurrent requests can never both take the last slot.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::admission::{ClientId, RateLimitInfo, RateLimitPolicy, RateLimitRejection};

/// Result of a combined check-and-record
#[derive(Debug, Clone)]
pub enum RateCheck {
    /// Admitted; the current timestamp has been appended
    Allowed { remaining: u32 },
    /// Window full; nothing was recorded
    Limited(RateLimitRejection),
}

impl RateCheck {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

/// Sliding-window limiter keyed by client ID
///
/// Window state is intentionally ephemeral and resets on process restart.
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    policy: RateLimitPolicy,
    windows: RwLock<HashMap<ClientId, Vec<Instant>>>,
}

impl SlidingWindowLimiter {
    /// Create a limiter with the given policy
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            windows: RwLock::new(HashMap::new()),
        }
    }

    /// The configured policy
    pub fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// Check the client's window and, if a slot is free, consume it
    ///
    /// Admission is consumed on attempt: the timestamp is recorded even when
    /// the request later fails for other reasons downstream.
    pub async fn check_and_record(&self, client: &ClientId) -> RateCheck {
        let window = self.policy.window();
        let now = Instant::now();

        let mut windows = self.windows.write().await;
        let timestamps = windows.entry(client.clone()).or_default();

        // Drop timestamps that have aged out of the window
        timestamps.retain(|t| now.duration_since(*t) < window);

        if timestamps.len() as u32 >= self.policy.max_requests {
            // Sequence is append-only and monotonic, so the front is oldest
            let remaining_time = timestamps
                .first()
                .map(|oldest| window.saturating_sub(now.duration_since(*oldest)))
                .unwrap_or(window);
            let retry_after_seconds = (remaining_time.as_secs_f64().ceil() as u64).max(1);

            return RateCheck::Limited(RateLimitRejection {
                retry_after_seconds,
                limit: self.policy.max_requests,
                remaining: 0,
                resets_at: Utc::now() + chrono::Duration::seconds(retry_after_seconds as i64),
            });
        }

        timestamps.push(now);

        RateCheck::Allowed {
            remaining: self.policy.max_requests - timestamps.len() as u32,
        }
    }

    /// Snapshot one client's window without mutating it
    pub async fn info(&self, client: &ClientId) -> RateLimitInfo {
        let window = self.policy.window();
        let now = Instant::now();

        let windows = self.windows.read().await;
        let counted: Vec<Instant> = windows
            .get(client)
            .map(|timestamps| {
                timestamps
                    .iter()
                    .copied()
                    .filter(|t| now.duration_since(*t) < window)
                    .collect()
            })
            .unwrap_or_default();

        let request_count = counted.len() as u32;

        RateLimitInfo {
            request_count,
            remaining: self.policy.max_requests.saturating_sub(request_count),
            oldest_expires_in_seconds: counted.first().map(|oldest| {
                window
                    .saturating_sub(now.duration_since(*oldest))
                    .as_secs_f64()
                    .ceil() as u64
            }),
        }
    }

    /// Drop expired timestamps everywhere and remove empty entries
    ///
    /// Returns the number of client entries removed.
    pub async fn cleanup(&self) -> usize {
        let window = self.policy.window();
        let now = Instant::now();

        let mut windows = self.windows.write().await;
        let before = windows.len();

        for timestamps in windows.values_mut() {
            timestamps.retain(|t| now.duration_since(*t) < window);
        }
        windows.retain(|_, timestamps| !timestamps.is_empty());

        before - windows.len()
    }

    /// Forget a client's window entirely
    pub async fn reset(&self, client: &ClientId) {
        self.windows.write().await.remove(client);
    }
}
