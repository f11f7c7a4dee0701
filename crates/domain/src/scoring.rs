use crate::{Exercise, Level, PlanSettings, Profile};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredExercise<'a> {
    pub exercise: &'a Exercise,
    pub score: f64,
    pub rationale: String,
}

/// Scores each exercise for the goal, level and preferences of `profile`.
///
/// The result has the same length and order as `eligible`. Exercises without
/// affinity for the goal are kept with a score of 0.
#[must_use]
pub fn score<'a>(
    eligible: &[&'a Exercise],
    profile: &Profile,
    settings: &PlanSettings,
) -> Vec<ScoredExercise<'a>> {
    eligible
        .iter()
        .map(|exercise| {
            let affinity = exercise.affinities.get(profile.goal);
            let level_factor = level_match_factor(exercise.difficulty, profile.level);
            let preferred = profile.preferred_workouts.contains(&exercise.workout_type);
            let bonus = if preferred {
                settings.preference_bonus.get()
            } else {
                1.0
            };

            let mut rationale = format!(
                "{} affinity {affinity:.2}, {} difficulty x{level_factor:.2}",
                profile.goal, exercise.difficulty
            );
            if preferred {
                rationale.push_str(&format!(
                    ", preferred {} x{bonus:.2}",
                    exercise.workout_type
                ));
            }

            ScoredExercise {
                exercise,
                score: affinity * level_factor * bonus,
                rationale,
            }
        })
        .collect()
}

/// Penalty for a difficulty that does not match the fitness level.
#[must_use]
pub fn level_match_factor(difficulty: Level, level: Level) -> f64 {
    match difficulty.distance(level) {
        0 => 1.0,
        1 => 0.6,
        _ => 0.25,
    }
}

/// Orders by descending score. The sort is stable, so equal scores keep their
/// relative (catalog) order.
pub fn sort_by_score(scored: &mut [&ScoredExercise<'_>]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Goal, MuscleGroup, Name, PreferenceBonus, TrainingDays, WorkoutType};

    fn exercise(name: &str, workout_type: WorkoutType, difficulty: Level, weight: f64) -> Exercise {
        Exercise::new(name, workout_type, &[MuscleGroup::Core], difficulty)
            .unwrap()
            .with_affinity(Goal::Endurance, weight)
            .unwrap()
    }

    fn profile(level: Level) -> Profile {
        Profile::new(
            Name::new("Bob").unwrap(),
            Goal::Endurance,
            level,
            TrainingDays::new(2).unwrap(),
        )
    }

    #[rstest]
    #[case(Level::Beginner, Level::Beginner, 1.0)]
    #[case(Level::Intermediate, Level::Beginner, 0.6)]
    #[case(Level::Beginner, Level::Intermediate, 0.6)]
    #[case(Level::Advanced, Level::Beginner, 0.25)]
    #[case(Level::Beginner, Level::Advanced, 0.25)]
    fn test_level_match_factor(
        #[case] difficulty: Level,
        #[case] level: Level,
        #[case] expected: f64,
    ) {
        assert_approx_eq!(level_match_factor(difficulty, level), expected);
    }

    #[test]
    fn test_score() {
        let a = exercise("A", WorkoutType::Cardio, Level::Beginner, 0.8);
        let b = exercise("B", WorkoutType::Strength, Level::Advanced, 1.0);
        let c = exercise("C", WorkoutType::Core, Level::Intermediate, 0.5);
        let profile = profile(Level::Beginner).with_preferred_workouts([WorkoutType::Cardio]);

        let scored = score(&[&a, &b, &c], &profile, &PlanSettings::default());

        assert_eq!(scored.len(), 3);
        assert_eq!(
            scored.iter().map(|s| s.exercise.name.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        assert_approx_eq!(scored[0].score, 0.8 * 1.0 * 1.2);
        assert_approx_eq!(scored[1].score, 1.0 * 0.25);
        assert_approx_eq!(scored[2].score, 0.5 * 0.6);
    }

    #[test]
    fn test_score_keeps_unsupported_goal_with_zero() {
        let a = Exercise::new("A", WorkoutType::Strength, &[MuscleGroup::Arms], Level::Beginner)
            .unwrap()
            .with_affinity(Goal::MuscleGain, 1.0)
            .unwrap();

        let scored = score(&[&a], &profile(Level::Beginner), &PlanSettings::default());

        assert_eq!(scored.len(), 1);
        assert_approx_eq!(scored[0].score, 0.0);
    }

    #[test]
    fn test_score_uses_configured_preference_bonus() {
        let a = exercise("A", WorkoutType::Hiit, Level::Beginner, 1.0);
        let profile = profile(Level::Beginner).with_preferred_workouts([WorkoutType::Hiit]);
        let settings = PlanSettings {
            preference_bonus: PreferenceBonus::new(1.5).unwrap(),
            ..PlanSettings::default()
        };

        let scored = score(&[&a], &profile, &settings);

        assert_approx_eq!(scored[0].score, 1.5);
        assert!(scored[0].rationale.contains("preferred HIIT"));
    }

    #[test]
    fn test_score_rationale() {
        let a = exercise("A", WorkoutType::Cardio, Level::Intermediate, 0.9);

        let scored = score(&[&a], &profile(Level::Beginner), &PlanSettings::default());

        assert_eq!(
            scored[0].rationale,
            "Endurance affinity 0.90, Intermediate difficulty x0.60"
        );
    }

    #[test]
    fn test_sort_by_score_is_stable() {
        let a = exercise("A", WorkoutType::Core, Level::Beginner, 0.5);
        let b = exercise("B", WorkoutType::Core, Level::Beginner, 0.9);
        let c = exercise("C", WorkoutType::Core, Level::Beginner, 0.5);
        let d = exercise("D", WorkoutType::Core, Level::Beginner, 0.9);
        let scored = score(&[&a, &b, &c, &d], &profile(Level::Beginner), &PlanSettings::default());
        let mut refs = scored.iter().collect::<Vec<_>>();

        sort_by_score(&mut refs);

        assert_eq!(
            refs.iter().map(|s| s.exercise.name.as_str()).collect::<Vec<_>>(),
            vec!["B", "D", "A", "C"]
        );
    }
}
