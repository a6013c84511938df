use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use std::sync::Arc;

use super::{Settings, SettingsRepositoryTrait, SettingsServiceTrait, SettingsUpdate};
use crate::errors::Result;

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        Self {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        self.settings_repository.get_settings()
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings> {
        let mut settings = self.settings_repository.get_settings()?;

        if let Some(ref timezone) = update.timezone {
            let candidate = Settings {
                timezone: timezone.trim().to_string(),
            };
            if let Err(e) = candidate.timezone() {
                warn!("Rejected settings update: {}", e);
                return Err(e);
            }
            settings.timezone = candidate.timezone;
        }

        debug!("Saving settings: timezone={}", settings.timezone);
        self.settings_repository.save_settings(&settings).await?;
        Ok(settings)
    }

    fn today(&self) -> Result<NaiveDate> {
        self.settings_repository.get_settings()?.today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::sync::Mutex;

    struct MockSettingsRepository {
        settings: Mutex<Settings>,
    }

    #[async_trait]
    impl SettingsRepositoryTrait for MockSettingsRepository {
        fn get_settings(&self) -> Result<Settings> {
            Ok(self.settings.lock().unwrap().clone())
        }

        async fn save_settings(&self, settings: &Settings) -> Result<()> {
            *self.settings.lock().unwrap() = settings.clone();
            Ok(())
        }
    }

    fn service() -> (SettingsService, Arc<MockSettingsRepository>) {
        let repo = Arc::new(MockSettingsRepository {
            settings: Mutex::new(Settings::default()),
        });
        (SettingsService::new(repo.clone()), repo)
    }

    #[test]
    fn test_default_timezone_is_utc() {
        let settings = Settings::default();
        assert_eq!(settings.timezone, "UTC");
        assert_eq!(settings.timezone().unwrap(), chrono_tz::UTC);
    }

    #[tokio::test]
    async fn test_update_timezone() {
        let (service, repo) = service();
        let updated = service
            .update_settings(&SettingsUpdate {
                timezone: Some("Europe/Paris".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.timezone, "Europe/Paris");
        assert_eq!(repo.get_settings().unwrap().timezone, "Europe/Paris");
    }

    #[tokio::test]
    async fn test_unknown_timezone_is_rejected_and_not_saved() {
        let (service, repo) = service();
        let result = service
            .update_settings(&SettingsUpdate {
                timezone: Some("Mars/Olympus_Mons".to_string()),
            })
            .await;

        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
        assert_eq!(repo.get_settings().unwrap().timezone, "UTC");
    }

    #[test]
    fn test_today_fails_on_bad_stored_timezone() {
        let repo = Arc::new(MockSettingsRepository {
            settings: Mutex::new(Settings {
                timezone: "nowhere".to_string(),
            }),
        });
        let service = SettingsService::new(repo);
        assert!(matches!(service.today(), Err(Error::InvalidConfigValue(_))));
    }
}
