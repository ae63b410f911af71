//! Model pricing configuration

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Pricing configuration for a model
///
/// Prices are held in micro-dollars per million tokens so that a cost is
/// always an exact fixed-point value with six decimal places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPricing {
    /// Model ID this pricing applies to
    pub model_id: String,
    /// Price per 1M input tokens in micro-dollars
    pub input_price_per_1m_micros: i64,
    /// Price per 1M output tokens in micro-dollars
    pub output_price_per_1m_micros: i64,
}

impl ModelPricing {
    /// Create new model pricing from USD-per-million-token prices
    pub fn new(model_id: impl Into<String>, input_per_1m: f64, output_per_1m: f64) -> Self {
        Self {
            model_id: model_id.into(),
            input_price_per_1m_micros: (input_per_1m * 1_000_000.0) as i64,
            output_price_per_1m_micros: (output_per_1m * 1_000_000.0) as i64,
        }
    }

    /// Get input price per 1M tokens in USD
    pub fn input_price_per_1m(&self) -> f64 {
        self.input_price_per_1m_micros as f64 / 1_000_000.0
    }

    /// Get output price per 1M tokens in USD
    pub fn output_price_per_1m(&self) -> f64 {
        self.output_price_per_1m_micros as f64 / 1_000_000.0
    }

    /// Calculate cost in micro-dollars for given token counts
    ///
    /// The sum is rounded half-up at the final micro-dollar, matching a
    /// round-to-six-decimals of the USD amount.
    pub fn calculate_cost_micros(&self, prompt_tokens: u32, completion_tokens: u32) -> i64 {
        let numerator = prompt_tokens as i64 * self.input_price_per_1m_micros
            + completion_tokens as i64 * self.output_price_per_1m_micros;

        (numerator + 500_000) / 1_000_000
    }

    /// Calculate cost in USD
    pub fn calculate_cost_usd(&self, prompt_tokens: u32, completion_tokens: u32) -> f64 {
        self.calculate_cost_micros(prompt_tokens, completion_tokens) as f64 / 1_000_000.0
    }
}

/// Default pricing for supported models, USD per 1M tokens
pub fn default_model_pricing() -> HashMap<String, ModelPricing> {
    let mut pricing = HashMap::new();

    pricing.insert(
        "gpt-4o-mini".to_string(),
        ModelPricing::new("gpt-4o-mini", 0.15, 0.60),
    );

    pricing.insert("gpt-4o".to_string(), ModelPricing::new("gpt-4o", 5.0, 15.0));

    pricing.insert(
        "gpt-3.5-turbo".to_string(),
        ModelPricing::new("gpt-3.5-turbo", 0.50, 1.50),
    );

    pricing
}
