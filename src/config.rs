//! Support for library configuration options

use std::convert::TryFrom;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{Locale, Weekday};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::calendar::CalendarLocale;
use crate::error::ConfigError;

/// The categories a new [`TaskStore`](crate::TaskStore) starts with.
/// Feel free to override it when initing this library.
pub static DEFAULT_CATEGORIES: Lazy<Arc<Mutex<Vec<String>>>> = Lazy::new(|| Arc::new(Mutex::new(vec![
    "Work".to_string(),
    "Personal".to_string(),
])));

/// The day calendar weeks start with, when not told otherwise.
/// Feel free to override it when initing this library.
pub static DEFAULT_FIRST_WEEKDAY: Lazy<Arc<Mutex<Weekday>>> = Lazy::new(|| Arc::new(Mutex::new(Weekday::Sun)));

const DEFAULT_LOCALE: &str = "en_US";

pub(crate) fn default_categories() -> Vec<String> {
    match DEFAULT_CATEGORIES.lock() {
        Ok(categories) => categories.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub(crate) fn default_first_weekday() -> Weekday {
    match DEFAULT_FIRST_WEEKDAY.lock() {
        Ok(weekday) => *weekday,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}


/// Settings a host application can load at startup.
///
/// Every field is optional in the JSON source, missing ones fall back to the library defaults above.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_categories")]
    pub seed_categories: Vec<String>,
    #[serde(default = "default_first_weekday")]
    pub first_weekday: Weekday,
    /// A POSIX locale name, e.g. `fr_FR`
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_categories: default_categories(),
            first_weekday: default_first_weekday(),
            locale: default_locale(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let settings = serde_json::from_reader(std::io::BufReader::new(file))?;
        log::debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// The locale calendar headers and titles should use
    pub fn calendar_locale(&self) -> Result<CalendarLocale, ConfigError> {
        let locale = Locale::try_from(self.locale.as_str())
            .map_err(|_| ConfigError::UnknownLocale(self.locale.clone()))?;
        Ok(CalendarLocale::new(locale, self.first_weekday))
    }
}
