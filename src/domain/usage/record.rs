//! Usage record entities

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single completed generation, as recorded in the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageEntry {
    /// When the generation completed
    pub timestamp: DateTime<Utc>,
    /// Number of prompt tokens
    pub prompt_tokens: u32,
    /// Number of completion tokens
    pub completion_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
    /// Cost in micro-dollars
    pub cost_micros: i64,
}

impl UsageEntry {
    /// Create a new entry for a completed generation
    pub fn new(
        timestamp: DateTime<Utc>,
        prompt_tokens: u32,
        completion_tokens: u32,
        total_tokens: u32,
        cost_micros: i64,
    ) -> Self {
        Self {
            timestamp,
            prompt_tokens,
            completion_tokens,
            total_tokens,
            cost_micros,
        }
    }

    /// Get cost in USD
    pub fn cost_usd(&self) -> f64 {
        self.cost_micros as f64 / 1_000_000.0
    }
}

/// Accumulated usage for one calendar month
///
/// Invariant: the cumulative fields always equal the sum over `entries`,
/// and `cost_micros` never decreases within a month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyUsage {
    /// Month key, e.g. "2026-02"
    pub month: String,
    /// Cumulative prompt tokens
    pub prompt_tokens: u64,
    /// Cumulative completion tokens
    pub completion_tokens: u64,
    /// Cumulative total tokens
    pub total_tokens: u64,
    /// Cumulative estimated cost in micro-dollars
    pub cost_micros: i64,
    /// Number of recorded generations
    pub request_count: u64,
    /// Per-generation audit trail
    pub entries: Vec<UsageEntry>,
}

impl MonthlyUsage {
    /// Create an empty record for the given month
    pub fn empty(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            prompt_tokens: 0,
            completion_tokens: 0,
            total_tokens: 0,
            cost_micros: 0,
            request_count: 0,
            entries: Vec::new(),
        }
    }

    /// Append an entry and update the cumulative fields
    pub fn add_entry(&mut self, entry: UsageEntry) {
        self.prompt_tokens += entry.prompt_tokens as u64;
        self.completion_tokens += entry.completion_tokens as u64;
        self.total_tokens += entry.total_tokens as u64;
        self.cost_micros += entry.cost_micros;
        self.request_count += 1;
        self.entries.push(entry);
    }

    /// Get cumulative cost in USD
    pub fn cost_usd(&self) -> f64 {
        self.cost_micros as f64 / 1_000_000.0
    }
}

/// Month key ("YYYY-MM") for a point in time
pub fn month_key(at: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", at.year(), at.month())
}

/// First instant of the calendar month after `at` (the budget reset boundary)
pub fn next_month_start(at: DateTime<Utc>) -> DateTime<Utc> {
    let (year, month) = if at.month() == 12 {
        (at.year() + 1, 1)
    } else {
        (at.year(), at.month() + 1)
    };

    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .unwrap_or(at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_usage_accumulates() {
        let mut usage = MonthlyUsage::empty("2026-02");

        usage.add_entry(UsageEntry::new(Utc::now(), 100, 50, 150, 250));
        usage.add_entry(UsageEntry::new(Utc::now(), 200, 100, 300, 500));

        assert_eq!(usage.prompt_tokens, 300);
        assert_eq!(usage.completion_tokens, 150);
        assert_eq!(usage.total_tokens, 450);
        assert_eq!(usage.cost_micros, 750);
        assert_eq!(usage.request_count, 2);
        assert_eq!(usage.entries.len(), 2);
    }

    #[test]
    fn test_cumulative_fields_equal_entry_sums() {
        let mut usage = MonthlyUsage::empty("2026-02");

        for i in 0..10u32 {
            usage.add_entry(UsageEntry::new(Utc::now(), i * 10, i * 5, i * 15, i as i64));
        }

        let total: u64 = usage.entries.iter().map(|e| e.total_tokens as u64).sum();
        let cost: i64 = usage.entries.iter().map(|e| e.cost_micros).sum();

        assert_eq!(usage.total_tokens, total);
        assert_eq!(usage.cost_micros, cost);
        assert_eq!(usage.request_count, usage.entries.len() as u64);
    }

    #[test]
    fn test_month_key() {
        let at = Utc.with_ymd_and_hms(2026, 2, 15, 12, 30, 0).unwrap();
        assert_eq!(month_key(at), "2026-02");
    }

    #[test]
    fn test_next_month_start() {
        let at = Utc.with_ymd_and_hms(2026, 2, 15, 12, 30, 0).unwrap();
        let reset = next_month_start(at);
        assert_eq!(reset, Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_next_month_start_december_rollover() {
        let at = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        let reset = next_month_start(at);
        assert_eq!(reset, Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_entry_cost_usd() {
        let entry = UsageEntry::new(Utc::now(), 0, 0, 0, 52_500);
        assert!((entry.cost_usd() - 0.0525).abs() < 1e-9);
    }
}
