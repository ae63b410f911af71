//! Durable store trait for the usage ledger

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;

use super::MonthlyUsage;
use crate::domain::DomainError;

/// The full persisted state: month key ("YYYY-MM") to that month's record
pub type UsageMap = HashMap<String, MonthlyUsage>;

/// Durable key-value store for monthly usage records
///
/// Read as a whole map and rewritten as a whole map on every update; the
/// ledger serializes access, so implementations need no internal locking
/// beyond what their medium requires.
#[async_trait]
pub trait UsageStore: Send + Sync + Debug {
    /// Load the persisted map
    async fn load(&self) -> Result<UsageMap, DomainError>;

    /// Persist the full map, replacing previous contents
    async fn persist(&self, usage: &UsageMap) -> Result<(), DomainError>;
}


#[cfg(test)]
mod tests {
    use super::mock::MemoryUsageStore;
    use super::*;
    use crate::domain::usage::MonthlyUsage;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryUsageStore::new();

        let mut map = UsageMap::new();
        map.insert("2026-02".to_string(), MonthlyUsage::empty("2026-02"));
        store.persist(&map).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert!(loaded.contains_key("2026-02"));
    }
}
