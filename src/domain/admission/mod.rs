//! Admission domain - who may proceed, and why not
//!
//! A request passes two independent checks before any generation cost is
//! incurred: the per-client sliding-window rate check and the monthly budget
//! check. Rejections are decisions, not errors; they carry the metadata a
//! client needs to retry sensibly.

mod client;
mod decision;

pub use client::ClientId;
pub use decision::{
    AdmissionDecision, BudgetRejection, RateLimitInfo, RateLimitPolicy, RateLimitRejection,
};
