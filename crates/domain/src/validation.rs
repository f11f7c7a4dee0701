use std::collections::HashSet;

use log::error;

use crate::{Plan, Profile, SafetyViolationError};

/// Re-checks the hard constraints of every planned exercise against `profile`.
///
/// The plan is passed through unchanged if no injury, equipment or
/// duplication constraint is broken.
pub fn validate(plan: Plan, profile: &Profile) -> Result<Plan, SafetyViolationError> {
    for day in &plan.days {
        let mut seen = HashSet::with_capacity(day.entries.len());

        for entry in &day.entries {
            let exercise = &entry.exercise;

            let violation = if let Some(injury) =
                exercise.conflicting_injuries(&profile.injuries).first()
            {
                Some(SafetyViolationError::Injury {
                    day: day.index,
                    exercise: exercise.name.clone(),
                    injury: injury.to_string(),
                })
            } else if let Some(equipment) = exercise.missing_equipment(&profile.equipment).first()
            {
                Some(SafetyViolationError::Equipment {
                    day: day.index,
                    exercise: exercise.name.clone(),
                    equipment: equipment.to_string(),
                })
            } else if !seen.insert(&exercise.name) {
                Some(SafetyViolationError::Duplicate {
                    day: day.index,
                    exercise: exercise.name.clone(),
                })
            } else {
                None
            };

            if let Some(violation) = violation {
                error!("rejecting plan: {violation}");
                return Err(violation);
            }
        }
    }

    Ok(plan)
}
