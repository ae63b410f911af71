//! Admission guard service

use std::sync::Arc;

use tracing::{debug, info};

use super::rate_limiter::{RateCheck, SlidingWindowLimiter};
use crate::domain::admission::{AdmissionDecision, BudgetRejection, ClientId, RateLimitPolicy};
use crate::infrastructure::usage::UsageLedger;

/// Decides whether a request may proceed before any generation cost
///
/// Runs the per-client rate check first, then the budget check. The rate
/// slot is consumed even when the budget check (or anything downstream)
/// rejects the request afterwards.
#[derive(Debug)]
pub struct AdmissionGuard {
    limiter: SlidingWindowLimiter,
    ledger: Arc<UsageLedger>,
}

impl AdmissionGuard {
    /// Create a guard with the given rate policy over the shared ledger
    pub fn new(policy: RateLimitPolicy, ledger: Arc<UsageLedger>) -> Self {
        Self {
            limiter: SlidingWindowLimiter::new(policy),
            ledger,
        }
    }

    /// The underlying limiter, for inspection and sweeps
    pub fn limiter(&self) -> &SlidingWindowLimiter {
        &self.limiter
    }

    /// Run both admission checks for the client
    pub async fn admit(&self, client: &ClientId) -> AdmissionDecision {
        match self.limiter.check_and_record(client).await {
            RateCheck::Limited(rejection) => {
                info!(
                    client = %client,
                    retry_after = rejection.retry_after_seconds,
                    "Request rate limited"
                );
                return AdmissionDecision::RateLimited(rejection);
            }
            RateCheck::Allowed { remaining } => {
                debug!(client = %client, remaining, "Rate check passed");
            }
        }

        let status = self.ledger.budget_status().await;
        if status.is_exceeded {
            info!(
                month = %status.month,
                spent_usd = status.estimated_cost_usd,
                total_tokens = status.total_tokens,
                "Request rejected, monthly budget exceeded"
            );
            return AdmissionDecision::BudgetExceeded(BudgetRejection {
                month: status.month,
                spent_usd: status.estimated_cost_usd,
                limit_usd: status.budget_limit_usd,
                total_tokens: status.total_tokens,
                max_monthly_tokens: status.max_monthly_tokens,
                resets_at: status.resets_at,
            });
        }

        AdmissionDecision::Allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::usage::mock::MemoryUsageStore;
    use crate::domain::usage::{BudgetLimits, ModelPricing};

    fn ledger(max_tokens: u64) -> Arc<UsageLedger> {
        Arc::new(UsageLedger::new(
            Arc::new(MemoryUsageStore::new()),
            ModelPricing::new("gpt-4o-mini", 0.15, 0.60),
            BudgetLimits::new(10.0, max_tokens),
        ))
    }

    #[tokio::test]
    async fn test_fresh_client_allowed() {
        let guard = AdmissionGuard::new(RateLimitPolicy::new(3, 3600), ledger(3_000_000));
        let decision = guard.admit(&ClientId::new("203.0.113.1")).await;
        assert!(decision.is_allowed());
    }

    #[tokio::test]
    async fn test_rate_rejection_carries_metadata() {
        let guard = AdmissionGuard::new(RateLimitPolicy::new(3, 3600), ledger(3_000_000));
        let client = ClientId::new("203.0.113.1");

        for _ in 0..3 {
            assert!(guard.admit(&client).await.is_allowed());
        }

        match guard.admit(&client).await {
            AdmissionDecision::RateLimited(rejection) => {
                assert!(rejection.retry_after_seconds > 0);
                assert!(rejection.retry_after_seconds <= 3600);
                assert_eq!(rejection.limit, 3);
            }
            other => panic!("expected rate limit, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_budget_rejection_after_ceiling() {
        let ledger = ledger(1_000);
        ledger.record_usage(800, 200, 1_000).await;

        let guard = AdmissionGuard::new(RateLimitPolicy::new(3, 3600), ledger);
        match guard.admit(&ClientId::new("203.0.113.1")).await {
            AdmissionDecision::BudgetExceeded(rejection) => {
                assert_eq!(rejection.total_tokens, 1_000);
                assert_eq!(rejection.max_monthly_tokens, 1_000);
            }
            other => panic!("expected budget rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_budget_rejection_still_consumes_rate_slot() {
        let ledger = ledger(1);
        ledger.record_usage(1, 1, 2).await;

        let guard = AdmissionGuard::new(RateLimitPolicy::new(3, 3600), ledger);
        let client = ClientId::new("203.0.113.1");

        // Three budget-rejected attempts use up the rate window
        for _ in 0..3 {
            assert!(matches!(
                guard.admit(&client).await,
                AdmissionDecision::BudgetExceeded(_)
            ));
        }
        assert!(matches!(
            guard.admit(&client).await,
            AdmissionDecision::RateLimited(_)
        ));
    }

    #[tokio::test]
    async fn test_rate_check_runs_before_budget_check() {
        let ledger = ledger(1);
        ledger.record_usage(1, 1, 2).await;

        let guard = AdmissionGuard::new(RateLimitPolicy::new(1, 3600), ledger);
        let client = ClientId::new("203.0.113.1");

        assert!(matches!(
            guard.admit(&client).await,
            AdmissionDecision::BudgetExceeded(_)
        ));
        // Window is now full, so the rate rejection wins from here on
        assert!(matches!(
            guard.admit(&client).await,
            AdmissionDecision::RateLimited(_)
        ));
    }
}
