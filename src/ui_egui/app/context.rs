use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::{Handle, Runtime};

use crate::services::countdown::{Clock, CountdownService, SystemClock};
use crate::services::registration::RegistrationService;

/// Shared access point for services and resources that multiple app modules need.
pub struct AppContext {
    /// Drives the countdown interval. Shut down when the app is dropped.
    runtime: Runtime,
    countdown_service: CountdownService,
    clock: Arc<dyn Clock>,
    registration: RegistrationService,
}

impl AppContext {
    pub fn new(countdown_service: CountdownService, registration: RegistrationService) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("summit-ticker")
            .enable_time()
            .build()
            .context("failed to build the countdown runtime")?;

        Ok(Self {
            runtime,
            countdown_service,
            clock: Arc::new(SystemClock),
            registration,
        })
    }

    pub fn runtime_handle(&self) -> &Handle {
        self.runtime.handle()
    }

    pub fn countdown_service(&self) -> &CountdownService {
        &self.countdown_service
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    pub fn registration(&self) -> &RegistrationService {
        &self.registration
    }
}
