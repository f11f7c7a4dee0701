use std::{fs, path::Path};

use regimen_domain as domain;

use crate::LoadError;

/// Reads plan settings from a JSON object. Absent fields keep their defaults.
pub fn load_settings(source: &str) -> Result<domain::PlanSettings, LoadError> {
    let settings: Settings = serde_json::from_str(source).map_err(LoadError::Malformed)?;
    Ok(domain::PlanSettings::try_from(settings)?)
}

pub fn load_settings_file(path: impl AsRef<Path>) -> Result<domain::PlanSettings, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_settings(&source)
}

#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub exercises_per_day: Option<u8>,
    #[serde(default)]
    pub preference_bonus: Option<f64>,
}

impl TryFrom<Settings> for domain::PlanSettings {
    type Error = domain::SettingsError;

    fn try_from(value: Settings) -> Result<Self, Self::Error> {
        let mut settings = domain::PlanSettings::default();
        if let Some(exercises_per_day) = value.exercises_per_day {
            settings.exercises_per_day = domain::ExercisesPerDay::new(exercises_per_day)?;
        }
        if let Some(preference_bonus) = value.preference_bonus {
            settings.preference_bonus = domain::PreferenceBonus::new(preference_bonus)?;
        }
        Ok(settings)
    }
}
