use log::{debug, warn};

use crate::{Catalog, EngineError, Exercise, Profile, Tag};

/// Exercises of `catalog` that are safe and feasible for `profile`, in catalog order.
///
/// An exercise is eligible if none of its contraindications is among the
/// injuries of the profile and all of its required equipment is available
/// (the `none` tag is always available).
pub fn filter<'a>(
    catalog: &'a Catalog,
    profile: &Profile,
) -> Result<Vec<&'a Exercise>, EngineError> {
    for injury in unmatched_injuries(catalog, profile) {
        warn!("injury \"{injury}\" matches no contraindication in the catalog");
    }

    let eligible = catalog
        .all()
        .iter()
        .filter(|exercise| is_eligible(exercise, profile))
        .collect::<Vec<_>>();

    if eligible.is_empty() {
        return Err(EngineError::NoEligibleExercises);
    }

    debug!("{} of {} exercises eligible", eligible.len(), catalog.len());

    Ok(eligible)
}

/// Injuries of `profile` that rule out no exercise of `catalog`.
pub fn unmatched_injuries<'p>(catalog: &Catalog, profile: &'p Profile) -> Vec<&'p Tag> {
    profile
        .injuries
        .iter()
        .filter(|injury| !injury.is_none())
        .filter(|injury| {
            !catalog
                .all()
                .iter()
                .any(|e| e.contraindications.contains(*injury))
        })
        .collect()
}

fn is_eligible(exercise: &Exercise, profile: &Profile) -> bool {
    let injuries = exercise.conflicting_injuries(&profile.injuries);
    if !injuries.is_empty() {
        debug!("excluding {}: contraindicated for {injuries:?}", exercise.name);
        return false;
    }

    let missing = exercise.missing_equipment(&profile.equipment);
    if !missing.is_empty() {
        debug!("excluding {}: missing {missing:?}", exercise.name);
        return false;
    }

    true
}
