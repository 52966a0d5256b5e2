use crate::config::Config;
use folio::DocumentConverter;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Shared application state accessible to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Holds only configuration; each request gets its own canvas
    pub converter: Arc<DocumentConverter>,

    /// Limits conversions running on the blocking pool at once
    pub conversion_semaphore: Arc<Semaphore>,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let permits = config.concurrency.max_concurrent_conversions.max(1);
        Self {
            converter: Arc::new(DocumentConverter::new(config.converter.clone())),
            conversion_semaphore: Arc::new(Semaphore::new(permits)),
            config: Arc::new(config),
        }
    }
}
