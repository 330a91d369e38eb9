pub mod config;
pub mod models;
pub mod pipeline;
pub mod pipeline_config;
pub mod service;
pub mod store;

pub use models::{DiffResult, ExtractResult, Receipt};
pub use pipeline::{analyze, diff, DocumentAnalyzer};
pub use pipeline_config::AnalysisConfig;
pub use service::{DiffRequest, IngestRequest, IngestResponse, ReceiptService, ServiceError};
pub use store::{MemoryReceiptStore, ReceiptStore, StoredReceipt};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RECEIPTOS_LOG`, falling back to
/// [`config::default_log_filter`]. Calling this twice is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(config::LOG_FILTER_ENV)
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
