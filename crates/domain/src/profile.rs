use std::{collections::BTreeSet, fmt};

use derive_more::{Display, Into};

use crate::{Goal, Level, Name, Tag, WorkoutType};

/// Attributes of the person a plan is generated for.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: Name,
    pub age: u8,
    pub gender: Gender,
    pub goal: Goal,
    pub level: Level,
    pub injuries: BTreeSet<Tag>,
    pub equipment: BTreeSet<Tag>,
    pub preferred_workouts: BTreeSet<WorkoutType>,
    pub training_days: TrainingDays,
}

impl Profile {
    #[must_use]
    pub fn new(name: Name, goal: Goal, level: Level, training_days: TrainingDays) -> Self {
        Self {
            name,
            age: 0,
            gender: Gender::Unspecified,
            goal,
            level,
            injuries: BTreeSet::new(),
            equipment: BTreeSet::new(),
            preferred_workouts: BTreeSet::new(),
            training_days,
        }
    }

    #[must_use]
    pub fn with_injuries(mut self, injuries: impl IntoIterator<Item = Tag>) -> Self {
        self.injuries.extend(injuries);
        self
    }

    #[must_use]
    pub fn with_equipment(mut self, equipment: impl IntoIterator<Item = Tag>) -> Self {
        self.equipment.extend(equipment);
        self
    }

    #[must_use]
    pub fn with_preferred_workouts(
        mut self,
        workouts: impl IntoIterator<Item = WorkoutType>,
    ) -> Self {
        self.preferred_workouts.extend(workouts);
        self
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Other,
    #[default]
    Unspecified,
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "female" | "f" => Gender::Female,
            "male" | "m" => Gender::Male,
            "" => Gender::Unspecified,
            _ => Gender::Other,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Gender::Female => "female",
                Gender::Male => "male",
                Gender::Other => "other",
                Gender::Unspecified => "unspecified",
            }
        )
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrainingDays(u8);

impl TrainingDays {
    pub fn new(value: u8) -> Result<Self, TrainingDaysError> {
        if !(1..=7).contains(&value) {
            return Err(TrainingDaysError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TrainingDaysError {
    #[error("Training days must be in the range 1 to 7 ({0})")]
    OutOfRange(u8),
}
