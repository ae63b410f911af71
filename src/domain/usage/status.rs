//! Budget limits and status snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MonthlyUsage;

/// Monthly spending ceilings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLimits {
    /// Monthly cost ceiling in micro-dollars
    pub monthly_cost_limit_micros: i64,
    /// Monthly token ceiling
    pub max_monthly_tokens: u64,
}

impl BudgetLimits {
    /// Create limits from a USD cost ceiling and a token ceiling
    pub fn new(monthly_cost_limit_usd: f64, max_monthly_tokens: u64) -> Self {
        Self {
            monthly_cost_limit_micros: (monthly_cost_limit_usd * 1_000_000.0) as i64,
            max_monthly_tokens,
        }
    }

    /// Get the cost ceiling in USD
    pub fn monthly_cost_limit_usd(&self) -> f64 {
        self.monthly_cost_limit_micros as f64 / 1_000_000.0
    }

    /// Whether the given month's usage is at or past either ceiling
    pub fn is_exceeded(&self, usage: &MonthlyUsage) -> bool {
        usage.cost_micros >= self.monthly_cost_limit_micros
            || usage.total_tokens >= self.max_monthly_tokens
    }
}

impl Default for BudgetLimits {
    fn default() -> Self {
        Self::new(10.0, 3_000_000)
    }
}

/// Point-in-time budget snapshot for the current month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub month: String,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
    pub estimated_cost_usd: f64,
    pub request_count: u64,
    pub budget_limit_usd: f64,
    pub budget_remaining_usd: f64,
    pub max_monthly_tokens: u64,
    pub tokens_remaining: u64,
    pub is_exceeded: bool,
    /// First instant of the next calendar month
    pub resets_at: DateTime<Utc>,
}

impl BudgetStatus {
    /// Build a snapshot from a month's usage and the configured limits
    pub fn new(usage: &MonthlyUsage, limits: &BudgetLimits, resets_at: DateTime<Utc>) -> Self {
        let remaining_micros = (limits.monthly_cost_limit_micros - usage.cost_micros).max(0);

        Self {
            month: usage.month.clone(),
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
            estimated_cost_usd: usage.cost_usd(),
            request_count: usage.request_count,
            budget_limit_usd: limits.monthly_cost_limit_usd(),
            budget_remaining_usd: remaining_micros as f64 / 1_000_000.0,
            max_monthly_tokens: limits.max_monthly_tokens,
            tokens_remaining: limits.max_monthly_tokens.saturating_sub(usage.total_tokens),
            is_exceeded: limits.is_exceeded(usage),
            resets_at,
        }
    }
}
