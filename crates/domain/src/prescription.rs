use std::ops::RangeInclusive;

use crate::{Exercise, Goal, Intensity, Level, Prescription, WorkoutType};

/// Training volume for `exercise` given the fitness level and goal.
#[must_use]
pub fn prescribe(exercise: &Exercise, level: Level, goal: Goal) -> Prescription {
    if exercise.workout_type.is_timed() {
        return timed(exercise.workout_type, level, goal);
    }

    let (mut sets, mut reps, mut rest): ((u32, u32), (u32, u32), (u32, u32)) = match level {
        Level::Beginner => ((2, 3), (8, 12), (60, 90)),
        Level::Intermediate => ((3, 4), (10, 15), (45, 75)),
        Level::Advanced => ((3, 5), (12, 20), (30, 60)),
    };

    match goal {
        Goal::MuscleGain => {
            sets.0 += 1;
            rest.1 += 15;
        }
        Goal::Endurance => {
            reps.0 += 4;
            reps.1 += 4;
            rest.1 -= 15;
        }
        Goal::Strength => {
            sets.1 += 1;
            reps.0 = reps.0.saturating_sub(4).max(1);
            reps.1 = reps.1.saturating_sub(4).max(1);
            rest.1 += 30;
        }
        Goal::WeightLoss | Goal::GeneralFitness => {}
    }

    Prescription::Sets {
        sets: range(sets),
        reps: range(reps),
        rest_seconds: range(rest),
    }
}

fn timed(workout_type: WorkoutType, level: Level, goal: Goal) -> Prescription {
    let minutes = match workout_type {
        WorkoutType::Cardio => {
            let base = match level {
                Level::Beginner => 15,
                Level::Intermediate => 20,
                Level::Advanced => 30,
            };
            if goal == Goal::Endurance {
                base + 10
            } else {
                base
            }
        }
        _ => 10,
    };

    Prescription::Timed { minutes }
}

fn range((min, max): (u32, u32)) -> RangeInclusive<u32> {
    min..=max.max(min)
}

/// Safety hint shown alongside a plan entry.
#[must_use]
pub fn notes(exercise: &Exercise) -> String {
    let mut notes = vec![if exercise.intensity == Intensity::High {
        "Monitor form carefully".to_string()
    } else {
        "Perform with proper form".to_string()
    }];

    if !exercise.alternatives.is_empty() {
        notes.push(format!(
            "Alternatives: {}",
            exercise
                .alternatives
                .iter()
                .map(crate::Name::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    notes.join("; ")
}
