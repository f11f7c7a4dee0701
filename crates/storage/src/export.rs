use chrono::NaiveDateTime;
use regimen_domain as domain;

/// Serializes `plan` as a pretty-printed JSON document.
///
/// The output depends only on the plan, so equal plans export to identical bytes.
pub fn export_plan(plan: &domain::Plan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Plan::from(plan))
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Plan {
    pub profile: Profile,
    pub days: Vec<Day>,
    pub metadata: Metadata,
}

impl From<&domain::Plan> for Plan {
    fn from(value: &domain::Plan) -> Self {
        Self {
            profile: Profile::from(&value.profile),
            days: value.days.iter().map(Day::from).collect(),
            metadata: Metadata {
                generated_at: value.generated_at,
                version: env!("CARGO_PKG_VERSION").to_string(),
                substitutions: value.substitutions(),
            },
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub goal: String,
    pub fitness_level: String,
    pub injuries: Vec<String>,
    pub available_equipment: Vec<String>,
    pub preferred_workouts: Vec<String>,
    pub training_days: u8,
}

impl From<&domain::Profile> for Profile {
    fn from(value: &domain::Profile) -> Self {
        Self {
            name: value.name.to_string(),
            age: value.age,
            gender: value.gender.to_string(),
            goal: value.goal.to_string(),
            fitness_level: value.level.to_string(),
            injuries: value.injuries.iter().map(ToString::to_string).collect(),
            available_equipment: value.equipment.iter().map(ToString::to_string).collect(),
            preferred_workouts: value
                .preferred_workouts
                .iter()
                .map(ToString::to_string)
                .collect(),
            training_days: value.training_days.get(),
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Day {
    pub day: u8,
    pub weekday: String,
    pub focus: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intended_focus: Option<String>,
    pub rationale: String,
    pub exercises: Vec<Entry>,
}

impl From<&domain::PlanDay> for Day {
    fn from(value: &domain::PlanDay) -> Self {
        Self {
            day: value.index,
            weekday: value.weekday.to_string(),
            focus: value.focus.to_string(),
            intended_focus: value.intended_focus.map(|focus| focus.to_string()),
            rationale: value.rationale.clone(),
            exercises: value.entries.iter().map(Entry::from).collect(),
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub workout_type: String,
    pub muscle_groups: Vec<String>,
    pub equipment: Vec<String>,
    pub difficulty: String,
    pub intensity: String,
    pub score: f64,
    pub rationale: String,
    pub prescription: Prescription,
    pub notes: String,
}

impl From<&domain::PlanEntry> for Entry {
    fn from(value: &domain::PlanEntry) -> Self {
        let exercise = &value.exercise;
        Self {
            name: exercise.name.to_string(),
            workout_type: exercise.workout_type.to_string(),
            muscle_groups: exercise
                .muscle_groups
                .iter()
                .map(ToString::to_string)
                .collect(),
            equipment: exercise.equipment.iter().map(ToString::to_string).collect(),
            difficulty: exercise.difficulty.to_string(),
            intensity: exercise.intensity.to_string(),
            score: value.score,
            rationale: value.rationale.clone(),
            prescription: Prescription::from(&value.prescription),
            notes: value.notes.clone(),
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Prescription {
    Sets {
        sets: String,
        reps: String,
        rest_seconds: String,
    },
    Timed {
        duration_minutes: u32,
    },
}

impl From<&domain::Prescription> for Prescription {
    fn from(value: &domain::Prescription) -> Self {
        match value {
            domain::Prescription::Sets {
                sets,
                reps,
                rest_seconds,
            } => Prescription::Sets {
                sets: domain::RangeDisplay(sets).to_string(),
                reps: domain::RangeDisplay(reps).to_string(),
                rest_seconds: domain::RangeDisplay(rest_seconds).to_string(),
            },
            domain::Prescription::Timed { minutes } => Prescription::Timed {
                duration_minutes: *minutes,
            },
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Metadata {
    pub generated_at: NaiveDateTime,
    pub version: String,
    pub substitutions: usize,
}
