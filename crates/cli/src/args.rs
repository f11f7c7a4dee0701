use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use regimen_domain::{
    ExercisesPerDay, Gender, Goal, Level, Name, Profile, Tag, TrainingDays, WorkoutType,
};

/// Generate a personalized weekly workout plan
///
/// Exercises that conflict with an injury or need unavailable equipment are
/// never planned. The remaining exercises are ranked by how well they serve
/// the goal and fitness level and spread over the training days by muscle
/// group. Set RUST_LOG=debug to see why exercises were excluded.
#[derive(Parser, Debug)]
#[command(version, about, name = "regimen")]
pub struct Args {
    /// Training goal, e.g. "weight loss", "muscle-gain", "strength"
    #[arg(long, default_value = "general fitness")]
    pub goal: Goal,

    /// Fitness level: beginner, intermediate or advanced
    #[arg(long, default_value = "beginner")]
    pub level: Level,

    /// Number of training days per week (1 to 7)
    #[arg(long, default_value_t = 3)]
    pub days: u8,

    /// Injury to avoid (repeatable)
    #[arg(long = "injury", value_name = "INJURY")]
    pub injuries: Vec<String>,

    /// Available equipment (repeatable)
    #[arg(long, value_name = "EQUIPMENT")]
    pub equipment: Vec<String>,

    /// Preferred workout type (repeatable)
    #[arg(long = "prefer", value_name = "WORKOUT_TYPE")]
    pub preferred_workouts: Vec<WorkoutType>,

    #[arg(long, default_value = "Athlete")]
    pub name: String,

    #[arg(long, default_value_t = 0)]
    pub age: u8,

    #[arg(long, default_value = "")]
    pub gender: String,

    /// JSON exercise catalog. Defaults to the built-in catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Skip invalid catalog records instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// JSON file with plan settings
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Overrides the number of exercises per day (1 to 10)
    #[arg(long)]
    pub exercises_per_day: Option<u8>,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn profile(&self) -> Result<Profile> {
        let name = Name::new(&self.name).context("Invalid name")?;
        let training_days = TrainingDays::new(self.days).context("Invalid number of days")?;
        let injuries = tags(&self.injuries, Tag::injury).context("Invalid injury")?;
        let equipment = tags(&self.equipment, Tag::new).context("Invalid equipment")?;

        let mut profile = Profile::new(name, self.goal, self.level, training_days)
            .with_injuries(injuries)
            .with_equipment(equipment)
            .with_preferred_workouts(self.preferred_workouts.iter().copied());
        profile.age = self.age;
        profile.gender = Gender::from(self.gender.as_str());

        Ok(profile)
    }

    pub fn exercises_per_day(&self) -> Result<Option<ExercisesPerDay>> {
        self.exercises_per_day
            .map(ExercisesPerDay::new)
            .transpose()
            .context("Invalid number of exercises per day")
    }
}

fn tags(
    values: &[String],
    tag: fn(&str) -> Result<Tag, regimen_domain::TagError>,
) -> Result<Vec<Tag>, regimen_domain::TagError> {
    values.iter().map(|v| tag(v)).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("regimen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let profile = parse(&[]).profile().unwrap();

        assert_eq!(profile.goal, Goal::GeneralFitness);
        assert_eq!(profile.level, Level::Beginner);
        assert_eq!(profile.training_days.get(), 3);
        assert_eq!(profile.gender, Gender::Unspecified);
        assert!(profile.injuries.is_empty());
    }

    #[test]
    fn test_profile() {
        let args = parse(&[
            "--goal",
            "Muscle_Gain",
            "--level",
            "advanced",
            "--days",
            "5",
            "--injury",
            "Lower Back",
            "--injury",
            "knee",
            "--equipment",
            "dumbbells",
            "--prefer",
            "hiit",
            "--name",
            "Alice",
            "--age",
            "34",
            "--gender",
            "F",
        ]);

        let profile = args.profile().unwrap();

        assert_eq!(profile.name.as_str(), "Alice");
        assert_eq!(profile.goal, Goal::MuscleGain);
        assert_eq!(profile.level, Level::Advanced);
        assert_eq!(profile.training_days.get(), 5);
        assert_eq!(
            profile.injuries.iter().map(Tag::as_str).collect::<Vec<_>>(),
            vec!["knee", "lower-back"]
        );
        assert!(profile.preferred_workouts.contains(&WorkoutType::Hiit));
        assert_eq!(profile.age, 34);
        assert_eq!(profile.gender, Gender::Female);
    }

    #[test]
    fn test_injury_descriptions() {
        let profile = parse(&["--injury", "Knee Injury", "--injury", "Back Pain"])
            .profile()
            .unwrap();

        assert_eq!(
            profile.injuries.iter().map(Tag::as_str).collect::<Vec<_>>(),
            vec!["knee", "lower-back"]
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse(&["--days", "8"]).profile().is_err());
        assert!(parse(&["--injury", " "]).profile().is_err());
        assert!(parse(&["--exercises-per-day", "11"]).exercises_per_day().is_err());
        assert!(Args::try_parse_from(["regimen", "--goal", "flexibility"]).is_err());
    }
}
