use std::sync::Arc;

use tokio::sync::Mutex;

use coverforge_core::models::CoverPageData;

/// One editing session: a single document record, replaced wholesale by each
/// update command. Single-writer — every interaction locks, swaps in the new
/// snapshot, and releases before the next one is processed.
pub struct SessionState {
    pub document: Arc<Mutex<CoverPageData>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            document: Arc::new(Mutex::new(CoverPageData::default())),
        }
    }
}
