pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;

use services::Service2Client;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service2: Arc<Service2Client>,
}

impl AppState {
    pub fn new(service2: Arc<Service2Client>) -> Self {
        Self { service2 }
    }
}
