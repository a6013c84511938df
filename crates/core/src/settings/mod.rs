//! Settings module - configuration model, repository trait, and service.

mod settings_model;
mod settings_service;
mod settings_traits;

pub use settings_model::{Settings, SettingsUpdate};
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
