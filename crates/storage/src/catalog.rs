//! Catalog loading
//!
//! Exercise catalogs are JSON documents holding either a list of exercise
//! records or an object with such a list under `workouts` or `exercises`.
//! Structural problems (invalid JSON, missing required fields, wrong types)
//! always abort the load. Records that are well-formed but semantically
//! invalid are handled according to the [`LoadPolicy`].

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    fs,
    path::Path,
};

use log::{info, warn};
use regimen_domain as domain;
use serde_json::Value;

use crate::LoadError;

/// Handling of exercise records that fail validation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Abort the load at the first invalid record.
    #[default]
    FailFast,
    /// Log and skip invalid records.
    SkipInvalid,
}

pub fn load_catalog(source: &str, policy: LoadPolicy) -> Result<domain::Catalog, LoadError> {
    let document: Value = serde_json::from_str(source).map_err(LoadError::Malformed)?;

    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut object) => match object
            .remove("workouts")
            .or_else(|| object.remove("exercises"))
        {
            Some(Value::Array(records)) => records,
            Some(_) => return Err(LoadError::UnexpectedLayout),
            None => vec![Value::Object(object)],
        },
        _ => return Err(LoadError::UnexpectedLayout),
    };

    let mut exercises = Vec::with_capacity(records.len());
    let mut names = HashSet::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let record: Exercise = serde_json::from_value(record)
            .map_err(|source| LoadError::MalformedRecord { index, source })?;
        let name = record.name.clone();

        let result = domain::Exercise::try_from(record).and_then(|exercise| {
            if names.insert(exercise.name.clone()) {
                Ok(exercise)
            } else {
                Err(domain::ValidationError::DuplicateName(exercise.name))
            }
        });

        match result {
            Ok(exercise) => exercises.push(exercise),
            Err(source) => match policy {
                LoadPolicy::FailFast => {
                    return Err(LoadError::InvalidRecord {
                        index,
                        name,
                        source,
                    });
                }
                LoadPolicy::SkipInvalid => {
                    warn!("skipping exercise record #{index} ({name}): {source}");
                }
            },
        }
    }

    if exercises.is_empty() {
        return Err(LoadError::Empty);
    }

    info!("loaded {} exercises", exercises.len());

    Ok(domain::Catalog::new(exercises)?)
}

pub fn load_catalog_file(
    path: impl AsRef<Path>,
    policy: LoadPolicy,
) -> Result<domain::Catalog, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_catalog(&source, policy)
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    #[serde(alias = "exercise_type")]
    pub workout_type: String,
    pub muscle_groups: Vec<String>,
    #[serde(default, alias = "equipment_needed")]
    pub equipment: Vec<String>,
    #[serde(default, alias = "injury_restrictions")]
    pub contraindications: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    pub goal_affinities: BTreeMap<String, f64>,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Difficulty {
    Rank(i64),
    Name(String),
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            name: value.name.to_string(),
            workout_type: value.workout_type.to_string(),
            muscle_groups: value.muscle_groups.iter().map(ToString::to_string).collect(),
            equipment: value.equipment.iter().map(ToString::to_string).collect(),
            contraindications: value
                .contraindications
                .iter()
                .map(ToString::to_string)
                .collect(),
            difficulty: Difficulty::Name(value.difficulty.to_string()),
            intensity: Some(value.intensity.to_string()),
            goal_affinities: value
                .affinities
                .iter()
                .map(|(goal, weight)| (goal.to_string(), weight))
                .collect(),
            alternatives: value.alternatives.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = domain::ValidationError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        let difficulty = match value.difficulty {
            Difficulty::Rank(rank) => domain::Level::from_rank(rank)?,
            Difficulty::Name(name) => name
                .parse::<domain::Level>()
                .map_err(|_| domain::ValidationError::UnknownDifficulty(name))?,
        };
        let muscle_groups = value
            .muscle_groups
            .iter()
            .map(|g| g.parse::<domain::MuscleGroup>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut exercise = domain::Exercise::new(
            &value.name,
            value.workout_type.parse::<domain::WorkoutType>()?,
            &muscle_groups,
            difficulty,
        )?
        .with_equipment(tags("equipment", &value.equipment, domain::Tag::new)?)
        .with_contraindications(tags(
            "contraindication",
            &value.contraindications,
            domain::Tag::injury,
        )?)
        .with_alternatives(
            value
                .alternatives
                .iter()
                .map(|a| domain::Name::new(a))
                .collect::<Result<Vec<_>, _>>()?,
        );

        if let Some(intensity) = value.intensity {
            exercise = exercise.with_intensity(intensity.parse::<domain::Intensity>()?);
        }

        let mut goals = BTreeSet::new();
        for (key, weight) in value.goal_affinities {
            let goal = key
                .parse::<domain::Goal>()
                .map_err(|_| domain::ValidationError::UnknownGoal(key))?;
            if !goals.insert(goal) {
                return Err(domain::ValidationError::DuplicateAffinity(goal));
            }
            exercise = exercise.with_affinity(goal, weight)?;
        }

        Ok(exercise)
    }
}

fn tags(
    field: &'static str,
    values: &[String],
    tag: fn(&str) -> Result<domain::Tag, domain::TagError>,
) -> Result<Vec<domain::Tag>, domain::ValidationError> {
    values
        .iter()
        .map(|v| tag(v).map_err(|source| domain::ValidationError::Tag { field, source }))
        .collect()
}
