//! Usage ledger service

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::usage::{
    BudgetLimits, BudgetStatus, ModelPricing, MonthlyUsage, UsageEntry, UsageMap, UsageStore,
    month_key, next_month_start,
};

/// Durable monthly usage accounting
///
/// Every operation runs a read-modify-persist cycle against the store under
/// one coarse async mutex, so concurrent completions cannot lose updates.
/// Reads fail open: an unreadable or corrupt store is treated as an empty
/// map, because the budget is a safety ceiling rather than a ledger of
/// financial record.
#[derive(Debug)]
pub struct UsageLedger {
    store: Arc<dyn UsageStore>,
    pricing: ModelPricing,
    limits: BudgetLimits,
    lock: Mutex<()>,
}

impl UsageLedger {
    /// Create a ledger over the given store
    pub fn new(store: Arc<dyn UsageStore>, pricing: ModelPricing, limits: BudgetLimits) -> Self {
        Self {
            store,
            pricing,
            limits,
            lock: Mutex::new(()),
        }
    }

    /// The configured ceilings
    pub fn limits(&self) -> &BudgetLimits {
        &self.limits
    }

    /// Record one completed generation against the current month
    ///
    /// Computes the cost from the price table, appends an audit entry,
    /// updates the cumulative fields, and rewrites the whole persisted map.
    pub async fn record_usage(&self, prompt_tokens: u32, completion_tokens: u32, total_tokens: u32) {
        let _guard = self.lock.lock().await;

        let now = Utc::now();
        let month = month_key(now);
        let mut data = self.load_or_empty().await;

        let record = data
            .entry(month.clone())
            .or_insert_with(|| MonthlyUsage::empty(month.as_str()));

        let cost_micros = self
            .pricing
            .calculate_cost_micros(prompt_tokens, completion_tokens);
        record.add_entry(UsageEntry::new(
            now,
            prompt_tokens,
            completion_tokens,
            total_tokens,
            cost_micros,
        ));

        debug!(
            month = %month,
            request_tokens = total_tokens,
            cost_micros,
            total_used = record.total_tokens,
            "Recorded generation usage"
        );

        self.persist(&data).await;
    }

    /// Snapshot the current month against the configured limits
    pub async fn budget_status(&self) -> BudgetStatus {
        let _guard = self.lock.lock().await;

        let now = Utc::now();
        let month = month_key(now);
        let data = self.load_or_empty().await;

        let usage = data
            .get(&month)
            .cloned()
            .unwrap_or_else(|| MonthlyUsage::empty(month.as_str()));

        BudgetStatus::new(&usage, &self.limits, next_month_start(now))
    }

    /// Replace a month's record with an empty one, discarding its entries
    ///
    /// Administrative operation; defaults to the current month.
    pub async fn reset_monthly_usage(&self, month: Option<String>) -> BudgetStatus {
        let _guard = self.lock.lock().await;

        let now = Utc::now();
        let target = month.unwrap_or_else(|| month_key(now));
        let mut data = self.load_or_empty().await;

        data.insert(target.clone(), MonthlyUsage::empty(target.as_str()));
        self.persist(&data).await;

        let usage = data
            .get(&target)
            .cloned()
            .unwrap_or_else(|| MonthlyUsage::empty(target.as_str()));
        BudgetStatus::new(&usage, &self.limits, next_month_start(now))
    }

    async fn load_or_empty(&self) -> UsageMap {
        match self.store.load().await {
            Ok(data) => data,
            Err(error) => {
                warn!(%error, "Usage store unreadable, treating month as empty");
                UsageMap::new()
            }
        }
    }

    async fn persist(&self, data: &UsageMap) {
        if let Err(error) = self.store.persist(data).await {
            warn!(%error, "Failed to persist usage ledger");
        }
    }
}
