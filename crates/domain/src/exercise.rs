use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    slice::Iter,
    str::FromStr,
};

use crate::{Name, Tag, ValidationError};

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: Name,
    pub workout_type: WorkoutType,
    pub muscle_groups: Vec<MuscleGroup>,
    pub equipment: BTreeSet<Tag>,
    pub contraindications: BTreeSet<Tag>,
    pub difficulty: Level,
    pub intensity: Intensity,
    pub affinities: GoalAffinities,
    pub alternatives: Vec<Name>,
}

impl Exercise {
    pub fn new(
        name: &str,
        workout_type: WorkoutType,
        muscle_groups: &[MuscleGroup],
        difficulty: Level,
    ) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;

        let mut groups = Vec::with_capacity(muscle_groups.len());
        for group in muscle_groups {
            if !groups.contains(group) {
                groups.push(*group);
            }
        }
        if groups.is_empty() {
            return Err(ValidationError::NoMuscleGroups);
        }

        Ok(Self {
            name,
            workout_type,
            muscle_groups: groups,
            equipment: BTreeSet::new(),
            contraindications: BTreeSet::new(),
            difficulty,
            intensity: Intensity::default(),
            affinities: GoalAffinities::default(),
            alternatives: vec![],
        })
    }

    #[must_use]
    pub fn with_equipment(mut self, equipment: impl IntoIterator<Item = Tag>) -> Self {
        self.equipment.extend(equipment);
        self
    }

    #[must_use]
    pub fn with_contraindications(mut self, injuries: impl IntoIterator<Item = Tag>) -> Self {
        self.contraindications.extend(injuries);
        self
    }

    #[must_use]
    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    #[must_use]
    pub fn with_alternatives(mut self, alternatives: impl IntoIterator<Item = Name>) -> Self {
        self.alternatives.extend(alternatives);
        self
    }

    pub fn with_affinity(mut self, goal: Goal, weight: f64) -> Result<Self, ValidationError> {
        self.affinities.set(goal, weight)?;
        Ok(self)
    }

    /// Injury tags of `injuries` that rule this exercise out.
    #[must_use]
    pub fn conflicting_injuries<'a>(&'a self, injuries: &BTreeSet<Tag>) -> Vec<&'a Tag> {
        self.contraindications
            .iter()
            .filter(|tag| injuries.contains(*tag))
            .collect()
    }

    /// Required equipment not covered by `available`. The `none` tag is always available.
    #[must_use]
    pub fn missing_equipment<'a>(&'a self, available: &BTreeSet<Tag>) -> Vec<&'a Tag> {
        self.equipment
            .iter()
            .filter(|tag| !tag.is_none() && !available.contains(*tag))
            .collect()
    }
}

/// Suitability weight of an exercise per goal. Goals without an entry weigh 0.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GoalAffinities(BTreeMap<Goal, f64>);

impl GoalAffinities {
    pub fn set(&mut self, goal: Goal, weight: f64) -> Result<(), ValidationError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ValidationError::InvalidAffinity {
                goal,
                value: weight,
            });
        }
        self.0.insert(goal, weight);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, goal: Goal) -> f64 {
        self.0.get(&goal).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Goal, f64)> + '_ {
        self.0.iter().map(|(goal, weight)| (*goal, *weight))
    }
}

#[derive(Clone, Copy, Default, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Level {
    #[default]
    Beginner = 0,
    Intermediate = 1,
    Advanced = 2,
}

impl Level {
    pub fn from_rank(rank: i64) -> Result<Self, ValidationError> {
        match rank {
            r if r < 0 => Err(ValidationError::NegativeDifficulty(r)),
            0 => Ok(Level::Beginner),
            1 => Ok(Level::Intermediate),
            2 => Ok(Level::Advanced),
            r => Err(ValidationError::UnknownDifficulty(r.to_string())),
        }
    }

    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn distance(self, other: Level) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVELS: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Strength,
    Endurance,
    GeneralFitness,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 5] = [
            Goal::WeightLoss,
            Goal::MuscleGain,
            Goal::Strength,
            Goal::Endurance,
            Goal::GeneralFitness,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Strength => "Strength",
            Goal::Endurance => "Endurance",
            Goal::GeneralFitness => "General Fitness",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum WorkoutType {
    Strength,
    Cardio,
    Core,
    Flexibility,
    Mobility,
    Hiit,
    Circuit,
    LowImpact,
}

impl WorkoutType {
    /// Whether the work is prescribed by duration instead of sets and reps.
    #[must_use]
    pub fn is_timed(self) -> bool {
        matches!(
            self,
            WorkoutType::Cardio | WorkoutType::Flexibility | WorkoutType::Mobility
        )
    }
}

impl Property for WorkoutType {
    fn iter() -> Iter<'static, WorkoutType> {
        static WORKOUT_TYPES: [WorkoutType; 8] = [
            WorkoutType::Strength,
            WorkoutType::Cardio,
            WorkoutType::Core,
            WorkoutType::Flexibility,
            WorkoutType::Mobility,
            WorkoutType::Hiit,
            WorkoutType::Circuit,
            WorkoutType::LowImpact,
        ];
        WORKOUT_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            WorkoutType::Strength => "Strength",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Core => "Core",
            WorkoutType::Flexibility => "Flexibility",
            WorkoutType::Mobility => "Mobility",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Circuit => "Circuit",
            WorkoutType::LowImpact => "Low-Impact",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            WorkoutType::Strength => &["resistance"],
            _ => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Core,
    Legs,
    Glutes,
    FullBody,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 8] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Core,
            MuscleGroup::Legs,
            MuscleGroup::Glutes,
            MuscleGroup::FullBody,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::FullBody => "Full Body",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            MuscleGroup::Core => &["abs"],
            MuscleGroup::Legs => &["quads", "hamstrings", "calves"],
            _ => &[],
        }
    }
}

#[derive(Clone, Copy, Default, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Intensity {
    Low,
    #[default]
    Moderate,
    High,
}

impl Property for Intensity {
    fn iter() -> Iter<'static, Intensity> {
        static INTENSITY: [Intensity; 3] = [Intensity::Low, Intensity::Moderate, Intensity::High];
        INTENSITY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Intensity::Low => "Low",
            Intensity::Moderate => "Moderate",
            Intensity::High => "High",
        }
    }
}

pub trait Property: Clone + Copy + Sized + 'static {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;

    /// Additional keys accepted when parsing.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Looks a value up by its name or one of its aliases, ignoring case and
    /// the difference between spaces, `_` and `-`.
    fn parse(value: &str) -> Option<Self> {
        let key = Tag::new(value).ok()?;
        Self::iter().copied().find(|p| {
            Tag::new(p.name()).is_ok_and(|name| name == key)
                || p.aliases().iter().any(|a| *a == key.as_str())
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("unknown {kind} \"{value}\"")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! impl_property_traits {
    ($($type: ty => $kind: literal),* $(,)?) => {
        $(
            impl fmt::Display for $type {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str(self.name())
                }
            }

            impl FromStr for $type {
                type Err = ParseError;

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    <$type as Property>::parse(value).ok_or_else(|| ParseError {
                        kind: $kind,
                        value: value.to_string(),
                    })
                }
            }
        )*
    };
}

impl_property_traits!(
    Level => "level",
    Goal => "goal",
    WorkoutType => "workout type",
    MuscleGroup => "muscle group",
    Intensity => "intensity",
);
