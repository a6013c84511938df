//! Settings domain models.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIMEZONE;
use crate::errors::{Error, Result};
use crate::utils::time_utils::ledger_date_today;

/// Ledger-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// IANA timezone name used to decide which calendar day is "today"
    pub timezone: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl Settings {
    /// Parses the configured timezone.
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone.parse::<Tz>().map_err(|_| {
            Error::InvalidConfigValue(format!("Unknown timezone '{}'", self.timezone))
        })
    }

    /// Today's date in the configured timezone.
    pub fn today(&self) -> Result<NaiveDate> {
        Ok(ledger_date_today(self.timezone()?))
    }
}

/// Partial settings update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub timezone: Option<String>,
}
