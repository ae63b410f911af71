//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::admission::AdmissionGuard;
use crate::infrastructure::services::PostService;
use crate::infrastructure::usage::UsageLedger;

/// Shared services, constructed once per process
///
/// The guard and the ledger own the only mutable shared state in the
/// pipeline; handlers never touch raw maps directly.
#[derive(Clone)]
pub struct AppState {
    pub admission: Arc<AdmissionGuard>,
    pub post_service: Arc<PostService>,
    pub ledger: Arc<UsageLedger>,
}

impl AppState {
    pub fn new(
        admission: Arc<AdmissionGuard>,
        post_service: Arc<PostService>,
        ledger: Arc<UsageLedger>,
    ) -> Self {
        Self {
            admission,
            post_service,
            ledger,
        }
    }
}
