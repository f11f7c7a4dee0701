use chrono::{Local, NaiveDateTime};
use log::info;

use crate::{
    Catalog, EngineError, Plan, PlanSettings, Profile, assembly, eligibility, scoring, validation,
};

/// Generates a plan with the default settings, stamped with the current local time.
pub fn generate_plan(profile: &Profile, catalog: &Catalog) -> Result<Plan, EngineError> {
    generate_plan_with(
        profile,
        catalog,
        &PlanSettings::default(),
        Local::now().naive_local(),
    )
}

/// Filters, scores, assembles and validates a plan.
///
/// The result depends only on the arguments: identical inputs produce
/// identical plans.
pub fn generate_plan_with(
    profile: &Profile,
    catalog: &Catalog,
    settings: &PlanSettings,
    generated_at: NaiveDateTime,
) -> Result<Plan, EngineError> {
    let eligible = eligibility::filter(catalog, profile)?;
    let scored = scoring::score(&eligible, profile, settings);
    let plan = assembly::assemble(&scored, profile, settings, generated_at)?;
    let plan = validation::validate(plan, profile)?;

    info!(
        "generated {}-day {} plan with {} exercises ({} substitutions)",
        plan.days.len(),
        profile.goal,
        plan.entries().count(),
        plan.substitutions()
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, thread};

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        Exercise, Goal, Level, MuscleGroup, Name, Property, Tag, TrainingDays, WorkoutType,
    };

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn exercise(
        name: &str,
        workout_type: WorkoutType,
        group: MuscleGroup,
        level: Level,
    ) -> Exercise {
        Exercise::new(name, workout_type, &[group], level).unwrap()
    }

    fn tags(values: &[&str]) -> Vec<Tag> {
        values.iter().map(|v| Tag::new(v).unwrap()).collect()
    }

    fn profile(goal: Goal, level: Level, days: u8) -> Profile {
        Profile::new(
            Name::new("Erin").unwrap(),
            goal,
            level,
            TrainingDays::new(days).unwrap(),
        )
    }

    fn generate(profile: &Profile, catalog: &Catalog) -> Result<Plan, EngineError> {
        generate_plan_with(profile, catalog, &PlanSettings::default(), timestamp())
    }

    fn plan_names(plan: &Plan) -> BTreeSet<&str> {
        plan.entries()
            .map(|(_, e)| e.exercise.name.as_str())
            .collect()
    }

    #[test]
    fn test_knee_injury_excludes_squat() {
        let catalog = Catalog::new(vec![
            exercise("Bodyweight Squat", WorkoutType::Strength, MuscleGroup::Legs, Level::Beginner)
                .with_contraindications(tags(&["knee"]))
                .with_affinity(Goal::WeightLoss, 0.9)
                .unwrap(),
            exercise("Push-Up", WorkoutType::Strength, MuscleGroup::Chest, Level::Beginner)
                .with_affinity(Goal::WeightLoss, 0.5)
                .unwrap(),
        ])
        .unwrap();
        let profile = profile(Goal::WeightLoss, Level::Beginner, 3)
            .with_injuries(tags(&["knee"]))
            .with_equipment(tags(&["none"]));

        let plan = generate(&profile, &catalog).unwrap();

        assert_eq!(plan.days.len(), 3);
        assert_eq!(plan_names(&plan), BTreeSet::from(["Push-Up"]));
    }

    #[test]
    fn test_unavailable_equipment_excluded_regardless_of_score() {
        let catalog = Catalog::new(vec![
            exercise("Barbell Curl", WorkoutType::Strength, MuscleGroup::Arms, Level::Beginner)
                .with_equipment(tags(&["barbell"]))
                .with_affinity(Goal::MuscleGain, 1.0)
                .unwrap(),
            exercise("Dumbbell Curl", WorkoutType::Strength, MuscleGroup::Arms, Level::Advanced)
                .with_equipment(tags(&["dumbbells"]))
                .with_affinity(Goal::MuscleGain, 0.1)
                .unwrap(),
        ])
        .unwrap();
        let profile =
            profile(Goal::MuscleGain, Level::Beginner, 2).with_equipment(tags(&["dumbbells"]));

        let plan = generate(&profile, &catalog).unwrap();

        assert_eq!(plan_names(&plan), BTreeSet::from(["Dumbbell Curl"]));
    }

    #[test]
    fn test_no_eligible_exercises() {
        let catalog = Catalog::new(vec![
            exercise("Barbell Squat", WorkoutType::Strength, MuscleGroup::Legs, Level::Beginner)
                .with_equipment(tags(&["barbell"]))
                .with_affinity(Goal::Strength, 1.0)
                .unwrap(),
        ])
        .unwrap();

        assert_eq!(
            generate(&profile(Goal::Strength, Level::Beginner, 3), &catalog),
            Err(EngineError::NoEligibleExercises)
        );
    }

    #[test]
    fn test_eligible_but_unsuitable_for_goal() {
        let catalog = Catalog::new(vec![
            exercise("Yoga Flow", WorkoutType::Flexibility, MuscleGroup::FullBody, Level::Beginner)
                .with_affinity(Goal::GeneralFitness, 0.7)
                .unwrap(),
        ])
        .unwrap();

        assert_eq!(
            generate(&profile(Goal::Strength, Level::Beginner, 2), &catalog),
            Err(EngineError::InsufficientExercises {
                days: 2,
                goal: Goal::Strength
            })
        );
    }

    #[test]
    fn test_equal_scores_follow_catalog_order() {
        let a = Exercise::new("A", WorkoutType::Core, &[MuscleGroup::Core], Level::Beginner)
            .unwrap()
            .with_affinity(Goal::Endurance, 0.5)
            .unwrap();
        let b = Exercise::new("B", WorkoutType::Core, &[MuscleGroup::Core], Level::Beginner)
            .unwrap()
            .with_affinity(Goal::Endurance, 0.5)
            .unwrap();
        let profile = profile(Goal::Endurance, Level::Beginner, 1);
        let order = |catalog: &Catalog| {
            generate(&profile, catalog).unwrap().days[0]
                .entries
                .iter()
                .map(|e| e.exercise.name.to_string())
                .collect::<Vec<_>>()
        };

        let original = Catalog::new(vec![a.clone(), b.clone()]).unwrap();
        let shuffled = Catalog::new(vec![b.clone(), a.clone()]).unwrap();
        let restored = Catalog::new(vec![a, b]).unwrap();

        assert_eq!(order(&original), vec!["A", "B"]);
        assert_eq!(order(&shuffled), vec!["B", "A"]);
        assert_eq!(order(&restored), order(&original));
    }

    #[rstest]
    #[case(Goal::WeightLoss, Level::Beginner, 3, &["knee"], &[])]
    #[case(Goal::MuscleGain, Level::Intermediate, 4, &["shoulder"], &["dumbbells", "bench"])]
    #[case(Goal::Strength, Level::Advanced, 5, &["lower back"], &["barbell", "pull-up bar"])]
    #[case(Goal::Endurance, Level::Beginner, 6, &[], &["pool", "stationary bike"])]
    #[case(
        Goal::GeneralFitness,
        Level::Intermediate,
        7,
        &["wrist", "ankle"],
        &["resistance bands", "kettlebell"]
    )]
    fn test_builtin_catalog_properties(
        #[case] goal: Goal,
        #[case] level: Level,
        #[case] days: u8,
        #[case] injuries: &[&str],
        #[case] equipment: &[&str],
    ) {
        let profile = profile(goal, level, days)
            .with_injuries(tags(injuries))
            .with_equipment(tags(equipment));

        let plan = generate(&profile, Catalog::builtin()).unwrap();

        assert_eq!(plan.days.len(), usize::from(days));
        for (index, day) in plan.days.iter().enumerate() {
            assert_eq!(usize::from(day.index), index + 1);
            assert!(!day.entries.is_empty());

            let names = day.entries.iter().map(|e| &e.exercise.name).collect::<Vec<_>>();
            assert_eq!(names.iter().collect::<BTreeSet<_>>().len(), names.len());

            for pair in day.entries.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
        for pair in plan.days.windows(2) {
            assert_ne!(pair[0].focus, pair[1].focus);
        }
        for (_, entry) in plan.entries() {
            assert!(entry.exercise.conflicting_injuries(&profile.injuries).is_empty());
            assert!(entry.exercise.missing_equipment(&profile.equipment).is_empty());
            assert!(entry.score > 0.0);
        }
    }

    #[rstest]
    #[case("Knee Injury", "knee")]
    #[case("Back Pain", "lower-back")]
    #[case("Shoulder Injury", "shoulder")]
    #[case("Ankle Sprain", "ankle")]
    #[case("Hip Pain", "hip")]
    #[case("Wrist Pain", "wrist")]
    fn test_builtin_catalog_injury_descriptions(#[case] injury: &str, #[case] body_part: &str) {
        let body_part = Tag::new(body_part).unwrap();
        let profile = profile(Goal::WeightLoss, Level::Beginner, 7)
            .with_injuries([Tag::injury(injury).unwrap()])
            .with_equipment(tags(&["dumbbells", "kettlebell", "stationary bike"]));

        let plan = generate(&profile, Catalog::builtin()).unwrap();

        assert_eq!(plan.days.len(), 7);
        for (_, entry) in plan.entries() {
            assert!(
                !entry.exercise.contraindications.contains(&body_part),
                "{} is contraindicated for {body_part}",
                entry.exercise.name
            );
        }
    }

    #[test]
    fn test_builtin_catalog_is_deterministic() {
        for goal in Goal::iter() {
            let profile = profile(*goal, Level::Intermediate, 5)
                .with_equipment(tags(&["dumbbells", "kettlebell"]))
                .with_preferred_workouts([WorkoutType::Hiit]);

            assert_eq!(
                generate(&profile, Catalog::builtin()),
                generate(&profile, Catalog::builtin())
            );
        }
    }

    #[test]
    fn test_shared_catalog_across_threads() {
        let catalog = Catalog::builtin();
        let expected = generate(&profile(Goal::Endurance, Level::Beginner, 4), catalog).unwrap();

        let plans = thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        generate(&profile(Goal::Endurance, Level::Beginner, 4), catalog).unwrap()
                    })
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        for plan in plans {
            assert_eq!(plan, expected);
        }
    }

    #[test]
    fn test_generate_plan_uses_default_settings() {
        let profile = profile(Goal::GeneralFitness, Level::Beginner, 2);

        let plan = generate_plan(&profile, Catalog::builtin()).unwrap();

        assert_eq!(plan.days.len(), 2);
        assert!(
            plan.days
                .iter()
                .all(|d| d.entries.len() <= PlanSettings::default().exercises_per_day.get())
        );
    }
}
