//! Shared application state for the metrics service.

use std::sync::Arc;

use crate::sampler::HostSampler;

#[derive(Clone)]
pub struct AppState {
    sampler: Arc<dyn HostSampler>,
}

impl AppState {
    pub fn new(sampler: Arc<dyn HostSampler>) -> Self {
        Self { sampler }
    }

    pub fn sampler(&self) -> Arc<dyn HostSampler> {
        Arc::clone(&self.sampler)
    }
}
