use crate::{Goal, Name, NameError, ParseError, TagError};

/// A single exercise record is malformed.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error("invalid {field}: {source}")]
    Tag {
        field: &'static str,
        source: TagError,
    },
    #[error("difficulty must not be negative ({0})")]
    NegativeDifficulty(i64),
    #[error("unknown difficulty \"{0}\"")]
    UnknownDifficulty(String),
    #[error("unrecognized goal \"{0}\"")]
    UnknownGoal(String),
    #[error(transparent)]
    UnknownValue(#[from] ParseError),
    #[error("exercise must target at least one muscle group")]
    NoMuscleGroups,
    #[error("affinity for {goal} must be a non-negative number ({value})")]
    InvalidAffinity { goal: Goal, value: f64 },
    #[error("duplicate affinity for {0}")]
    DuplicateAffinity(Goal),
    #[error("duplicate exercise \"{0}\"")]
    DuplicateName(Name),
}

/// Failure of a single plan generation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(
        "no exercise in the catalog is compatible with the injuries and equipment of the profile"
    )]
    NoEligibleExercises,
    #[error("eligible exercises are insufficient to fill {days} training day(s) for {goal}")]
    InsufficientExercises { days: u8, goal: Goal },
    #[error(transparent)]
    SafetyViolation(#[from] SafetyViolationError),
}

/// An assembled plan breaks a hard constraint.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SafetyViolationError {
    #[error("day {day}: \"{exercise}\" is contraindicated for injury \"{injury}\"")]
    Injury {
        day: u8,
        exercise: Name,
        injury: String,
    },
    #[error("day {day}: \"{exercise}\" requires unavailable equipment \"{equipment}\"")]
    Equipment {
        day: u8,
        exercise: Name,
        equipment: String,
    },
    #[error("day {day}: \"{exercise}\" appears more than once")]
    Duplicate { day: u8, exercise: Name },
}
