//! Configuration for smcprobe
//!
//! Centralized configuration with sensible defaults. Command selectors and the
//! structured-call method index are wire constants and live in `protocol`.

use crate::error::{Result, SmcError};

/// Main configuration for a controller session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Service Configuration
    // -------------------------------------------------------------------------
    /// IOKit class name matched when opening the controller service
    pub service_name: String,

    // -------------------------------------------------------------------------
    // Polling Configuration
    // -------------------------------------------------------------------------
    /// Delay between passes in watch mode (milliseconds)
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "AppleSMC".to_string(),
            poll_interval_ms: 1000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values the session cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.service_name.trim().is_empty() {
            return Err(SmcError::Config("service name must not be empty".to_string()));
        }
        if self.poll_interval_ms == 0 {
            return Err(SmcError::Config(
                "poll interval must be at least 1 ms".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the IOKit service class name
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.config.service_name = name.into();
        self
    }

    /// Set the watch-mode poll interval (in milliseconds)
    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.config.poll_interval_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
