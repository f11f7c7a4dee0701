use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDateTime, Weekday};
use log::{debug, warn};

use crate::{
    EngineError, MuscleGroup, Plan, PlanDay, PlanEntry, PlanSettings, Profile, ScoredExercise,
    prescription, scoring,
};

/// Arranges scored exercises into one day per training day of `profile`.
///
/// Days rotate round-robin over the muscle groups that have exercises with a
/// positive score, ordered by their aggregate score, so consecutive days never
/// share a focus unless only one group is left. Each day takes the best
/// scoring exercises of its focus group. Groups whose exercises all scored 0
/// are never planned; the days they would have covered in a rotation over all
/// eligible groups are recorded as substitutions.
pub fn assemble(
    scored: &[ScoredExercise<'_>],
    profile: &Profile,
    settings: &PlanSettings,
    generated_at: NaiveDateTime,
) -> Result<Plan, EngineError> {
    let groups = scored
        .iter()
        .flat_map(|s| s.exercise.muscle_groups.iter().copied())
        .collect::<BTreeSet<_>>();
    let candidates = candidates_by_group(scored);

    if candidates.is_empty() {
        return Err(EngineError::InsufficientExercises {
            days: profile.training_days.get(),
            goal: profile.goal,
        });
    }

    let aggregate = |group: &MuscleGroup| -> f64 {
        candidates
            .get(group)
            .map_or(0.0, |c| c.iter().map(|s| s.score).sum())
    };
    let mut groups = groups.into_iter().collect::<Vec<_>>();
    groups.sort_by(|a, b| aggregate(b).total_cmp(&aggregate(a)).then(a.cmp(b)));
    let rotation = groups
        .iter()
        .copied()
        .filter(|g| candidates.contains_key(g))
        .collect::<Vec<_>>();
    debug!("focus rotation: {rotation:?}, all groups: {groups:?}");

    let num_days = profile.training_days.get();
    let mut days: Vec<PlanDay> = Vec::with_capacity(usize::from(num_days));

    for i in 0..num_days {
        let position = usize::from(i) % rotation.len();
        let focus = rotation[position];
        let intended = groups[usize::from(i) % groups.len()];

        let (intended_focus, rationale) = if candidates.contains_key(&intended) {
            (
                None,
                format!("{focus} focus, rotation {} of {}", position + 1, rotation.len()),
            )
        } else {
            warn!("day {}: no suitable {intended} exercises, substituting {focus}", i + 1);
            (
                Some(intended),
                format!(
                    "No suitable {intended} exercises available; \
                     substituted {focus}, the next group in the rotation"
                ),
            )
        };

        let entries = candidates[&focus]
            .iter()
            .take(settings.exercises_per_day.get())
            .map(|s| PlanEntry {
                exercise: s.exercise.clone(),
                score: s.score,
                rationale: s.rationale.clone(),
                prescription: prescription::prescribe(s.exercise, profile.level, profile.goal),
                notes: prescription::notes(s.exercise),
            })
            .collect::<Vec<_>>();

        days.push(PlanDay {
            index: i + 1,
            weekday: weekday(i, num_days),
            focus,
            intended_focus,
            rationale,
            entries,
        });
    }

    Ok(Plan {
        days,
        profile: profile.clone(),
        generated_at,
    })
}

/// Exercises with a positive score per muscle group, best first.
fn candidates_by_group<'s, 'a>(
    scored: &'s [ScoredExercise<'a>],
) -> BTreeMap<MuscleGroup, Vec<&'s ScoredExercise<'a>>> {
    let mut result: BTreeMap<MuscleGroup, Vec<&ScoredExercise>> = BTreeMap::new();

    for s in scored.iter().filter(|s| s.score > 0.0) {
        for group in &s.exercise.muscle_groups {
            result.entry(*group).or_default().push(s);
        }
    }

    for exercises in result.values_mut() {
        scoring::sort_by_score(exercises);
    }

    result
}

/// Spreads `num_days` sessions evenly over a week starting on Monday.
fn weekday(day: u8, num_days: u8) -> Weekday {
    let offset = u32::from(day) * 7 / u32::from(num_days.max(1));
    (0..offset).fold(Weekday::Mon, |weekday, _| weekday.succ())
}
