//! Repository and service traits for settings.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::settings::{Settings, SettingsUpdate};

/// Repository trait for loading and storing ledger settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get all settings. Implementations return `Settings::default()` when nothing is stored.
    fn get_settings(&self) -> Result<Settings>;

    /// Persist the full settings object.
    async fn save_settings(&self, settings: &Settings) -> Result<()>;
}

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings>;

    /// Today's date in the configured timezone.
    fn today(&self) -> Result<NaiveDate>;
}
