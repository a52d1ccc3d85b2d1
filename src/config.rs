//! Configuration handling for the TUI

use crate::state::PortfolioContent;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FolioConfig {
    /// Simulated send time of the contact form (ms)
    pub submit_latency_ms: Option<u64>,
    /// How long the success banner stays up (ms)
    pub status_display_ms: Option<u64>,
    /// Fade-out at the end of the success banner's window (ms)
    pub status_fade_ms: Option<u64>,
    /// Debounce before an errored field is re-checked while typing (ms)
    pub revalidate_debounce_ms: Option<u64>,
    /// Delay before focusing the first invalid field (ms)
    pub focus_delay_ms: Option<u64>,
    /// Ring the terminal bell as haptic feedback
    pub haptics: Option<bool>,
    /// Page content replacing the built-in portfolio
    pub content: Option<PortfolioContent>,
}

impl FolioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "folio", "folio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                tracing::info!("Loading config from {}", path.display());
                let content = fs::read_to_string(&path)?;
                let config: FolioConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn haptics_enabled(&self) -> bool {
        self.haptics.unwrap_or(true)
    }

    /// Configured page content, or the built-in one
    pub fn content(&self) -> PortfolioContent {
        self.content.clone().unwrap_or_default()
    }
}
