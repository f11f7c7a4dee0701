use derive_more::{Display, Into};

/// Tunables of the plan assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanSettings {
    pub exercises_per_day: ExercisesPerDay,
    /// Score multiplier for exercises of a preferred workout type.
    pub preference_bonus: PreferenceBonus,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            exercises_per_day: ExercisesPerDay(5),
            preference_bonus: PreferenceBonus(1.2),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq)]
pub struct ExercisesPerDay(u8);

impl ExercisesPerDay {
    pub fn new(value: u8) -> Result<Self, SettingsError> {
        if !(1..=10).contains(&value) {
            return Err(SettingsError::ExercisesPerDayOutOfRange(value));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct PreferenceBonus(f64);

impl PreferenceBonus {
    pub fn new(value: f64) -> Result<Self, SettingsError> {
        if !(value.is_finite() && value > 1.0 && value <= 3.0) {
            return Err(SettingsError::PreferenceBonusOutOfRange(value));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("Exercises per day must be in the range 1 to 10 ({0})")]
    ExercisesPerDayOutOfRange(u8),
    #[error("Preference bonus must be greater than 1.0 and at most 3.0 ({0})")]
    PreferenceBonusOutOfRange(f64),
}
