use std::collections::HashSet;

use crate::{
    Exercise, Goal, Intensity, Level, MuscleGroup, Name, Tag, TagError, ValidationError,
    WorkoutType,
};

/// Ordered, immutable collection of exercises.
///
/// The insertion order is significant: it breaks ties between equally scored
/// exercises. A catalog is never mutated after construction and can be shared
/// between threads by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, ValidationError> {
        let mut names = HashSet::with_capacity(exercises.len());
        for exercise in &exercises {
            if !names.insert(&exercise.name) {
                return Err(ValidationError::DuplicateName(exercise.name.clone()));
            }
        }
        Ok(Self { exercises })
    }

    /// The exercise collection shipped with the library.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    #[must_use]
    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name.as_str() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

struct BuiltinExercise {
    name: &'static str,
    workout_type: WorkoutType,
    muscle_groups: &'static [MuscleGroup],
    equipment: &'static [&'static str],
    contraindications: &'static [&'static str],
    difficulty: Level,
    intensity: Intensity,
    affinities: [f64; 5],
    alternatives: &'static [&'static str],
}

impl BuiltinExercise {
    fn build(&self) -> Result<Exercise, ValidationError> {
        let alternatives = self
            .alternatives
            .iter()
            .map(|a| Name::new(a))
            .collect::<Result<Vec<_>, _>>()?;

        let mut exercise = Exercise::new(
            self.name,
            self.workout_type,
            self.muscle_groups,
            self.difficulty,
        )?
        .with_equipment(tags("equipment", self.equipment, Tag::new)?)
        .with_contraindications(tags(
            "contraindication",
            self.contraindications,
            Tag::injury,
        )?)
        .with_intensity(self.intensity)
        .with_alternatives(alternatives);

        for (goal, weight) in GOAL_ORDER.iter().zip(self.affinities) {
            exercise = exercise.with_affinity(*goal, weight)?;
        }

        Ok(exercise)
    }
}

fn tags(
    field: &'static str,
    values: &[&str],
    tag: fn(&str) -> Result<Tag, TagError>,
) -> Result<Vec<Tag>, ValidationError> {
    values
        .iter()
        .map(|v| tag(v).map_err(|source| ValidationError::Tag { field, source }))
        .collect()
}

const GOAL_ORDER: [Goal; 5] = [
    Goal::WeightLoss,
    Goal::MuscleGain,
    Goal::Strength,
    Goal::Endurance,
    Goal::GeneralFitness,
];

static BUILTIN: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| {
    let exercises = BUILTIN_EXERCISES
        .iter()
        .map(BuiltinExercise::build)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    Catalog::new(exercises).unwrap()
});

// Affinities are listed as [weight loss, muscle gain, strength, endurance, general fitness].
const BUILTIN_EXERCISES: [BuiltinExercise; 28] = [
    BuiltinExercise {
        name: "Dumbbell Thrusters",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Shoulders],
        equipment: &["dumbbells"],
        contraindications: &["shoulder"],
        difficulty: Level::Intermediate,
        intensity: Intensity::High,
        affinities: [0.8, 0.6, 0.6, 0.5, 0.6],
        alternatives: &["Bodyweight Squats"],
    },
    BuiltinExercise {
        name: "Step-Ups",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &["step"],
        contraindications: &["knee"],
        difficulty: Level::Beginner,
        intensity: Intensity::Moderate,
        affinities: [0.6, 0.4, 0.4, 0.5, 0.7],
        alternatives: &["Bodyweight Squats"],
    },
    BuiltinExercise {
        name: "Resistance Band Rows",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Back],
        equipment: &["resistance-bands"],
        contraindications: &["shoulder"],
        difficulty: Level::Beginner,
        intensity: Intensity::Moderate,
        affinities: [0.4, 0.6, 0.5, 0.4, 0.7],
        alternatives: &["Seated Rows"],
    },
    BuiltinExercise {
        name: "Stationary Bike",
        workout_type: WorkoutType::Cardio,
        muscle_groups: &[MuscleGroup::Legs],
        equipment: &["stationary-bike"],
        contraindications: &["knee"],
        difficulty: Level::Beginner,
        intensity: Intensity::Moderate,
        affinities: [0.9, 0.1, 0.1, 0.9, 0.6],
        alternatives: &["Swimming"],
    },
    BuiltinExercise {
        name: "Swimming",
        workout_type: WorkoutType::Cardio,
        muscle_groups: &[MuscleGroup::FullBody],
        equipment: &["pool"],
        contraindications: &[],
        difficulty: Level::Beginner,
        intensity: Intensity::Moderate,
        affinities: [0.9, 0.2, 0.2, 1.0, 0.8],
        alternatives: &["Water Aerobics"],
    },
    BuiltinExercise {
        name: "Bodyweight Squats",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[],
        contraindications: &[],
        difficulty: Level::Beginner,
        intensity: Intensity::Low,
        affinities: [0.6, 0.5, 0.5, 0.6, 0.8],
        alternatives: &["Wall Sit"],
    },
    BuiltinExercise {
        name: "Plank",
        workout_type: WorkoutType::Core,
        muscle_groups: &[MuscleGroup::Core],
        equipment: &[],
        contraindications: &[],
        difficulty: Level::Beginner,
        intensity: Intensity::Low,
        affinities: [0.4, 0.4, 0.5, 0.6, 0.8],
        alternatives: &["Side Plank"],
    },
    BuiltinExercise {
        name: "Elliptical",
        workout_type: WorkoutType::Cardio,
        muscle_groups: &[MuscleGroup::FullBody],
        equipment: &["elliptical"],
        contraindications: &["knee"],
        difficulty: Level::Beginner,
        intensity: Intensity::Moderate,
        affinities: [0.9, 0.1, 0.1, 0.9, 0.7],
        alternatives: &["Rowing Machine"],
    },
    BuiltinExercise {
        name: "Push-Ups",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Arms],
        equipment: &[],
        contraindications: &["wrist", "shoulder"],
        difficulty: Level::Beginner,
        intensity: Intensity::Moderate,
        affinities: [0.5, 0.7, 0.6, 0.5, 0.8],
        alternatives: &["Incline Push-Ups"],
    },
    BuiltinExercise {
        name: "Barbell Back Squat",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &["barbell"],
        contraindications: &["knee", "lower-back"],
        difficulty: Level::Advanced,
        intensity: Intensity::High,
        affinities: [0.5, 0.9, 1.0, 0.3, 0.5],
        alternatives: &["Goblet Squat"],
    },
    BuiltinExercise {
        name: "Deadlift",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &["barbell"],
        contraindications: &["lower-back"],
        difficulty: Level::Advanced,
        intensity: Intensity::High,
        affinities: [0.5, 0.9, 1.0, 0.3, 0.4],
        alternatives: &["Romanian Deadlift"],
    },
    BuiltinExercise {
        name: "Dumbbell Bench Press",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Arms],
        equipment: &["dumbbells", "bench"],
        contraindications: &["shoulder"],
        difficulty: Level::Intermediate,
        intensity: Intensity::Moderate,
        affinities: [0.3, 0.9, 0.8, 0.2, 0.6],
        alternatives: &["Push-Ups"],
    },
    BuiltinExercise {
        name: "Pull-Ups",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Arms],
        equipment: &["pull-up-bar"],
        contraindications: &["shoulder"],
        difficulty: Level::Intermediate,
        intensity: Intensity::High,
        affinities: [0.4, 0.9, 0.9, 0.4, 0.6],
        alternatives: &["Resistance Band Rows"],
    },
    BuiltinExercise {
        name: "Dumbbell Shoulder Press",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Arms],
        equipment: &["dumbbells"],
        contraindications: &["shoulder"],
        difficulty: Level::Intermediate,
        intensity: Intensity::Moderate,
        affinities: [0.3, 0.8, 0.7, 0.3, 0.6],
        alternatives: &["Pike Push-Ups"],
    },
    BuiltinExercise {
        name: "Dumbbell Curls",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Arms],
        equipment: &["dumbbells"],
        contraindications: &[],
        difficulty: Level::Beginner,
        intensity: Intensity::Low,
        affinities: [0.2, 0.7, 0.4, 0.2, 0.5],
        alternatives: &["Resistance Band Curls"],
    },
    BuiltinExercise {
        name: "Glute Bridge",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Glutes, MuscleGroup::Core],
        equipment: &[],
        contraindications: &[],
        difficulty: Level::Beginner,
        intensity: Intensity::Low,
        affinities: [0.4, 0.5, 0.4, 0.4, 0.7],
        alternatives: &["Single-Leg Glute Bridge"],
    },
    BuiltinExercise {
        name: "Kettlebell Swings",
        workout_type: WorkoutType::Hiit,
        muscle_groups: &[MuscleGroup::Glutes, MuscleGroup::Legs, MuscleGroup::Back],
        equipment: &["kettlebell"],
        contraindications: &["lower-back", "hip"],
        difficulty: Level::Intermediate,
        intensity: Intensity::High,
        affinities: [0.9, 0.5, 0.6, 0.8, 0.6],
        alternatives: &["Glute Bridge"],
    },
    BuiltinExercise {
        name: "Burpees",
        workout_type: WorkoutType::Hiit,
        muscle_groups: &[MuscleGroup::FullBody],
        equipment: &[],
        contraindications: &["knee", "wrist"],
        difficulty: Level::Intermediate,
        intensity: Intensity::High,
        affinities: [1.0, 0.3, 0.3, 0.9, 0.6],
        alternatives: &["Jumping Jacks"],
    },
    BuiltinExercise {
        name: "Jumping Jacks",
        workout_type: WorkoutType::Cardio,
        muscle_groups: &[MuscleGroup::FullBody],
        equipment: &[],
        contraindications: &["ankle"],
        difficulty: Level::Beginner,
        intensity: Intensity::Moderate,
        affinities: [0.8, 0.1, 0.1, 0.7, 0.6],
        alternatives: &["Marching in Place"],
    },
    BuiltinExercise {
        name: "Mountain Climbers",
        workout_type: WorkoutType::Hiit,
        muscle_groups: &[MuscleGroup::Core, MuscleGroup::Shoulders],
        equipment: &[],
        contraindications: &["wrist"],
        difficulty: Level::Intermediate,
        intensity: Intensity::High,
        affinities: [0.9, 0.3, 0.3, 0.8, 0.6],
        alternatives: &["Plank"],
    },
    BuiltinExercise {
        name: "Bicycle Crunches",
        workout_type: WorkoutType::Core,
        muscle_groups: &[MuscleGroup::Core],
        equipment: &[],
        contraindications: &["lower-back"],
        difficulty: Level::Beginner,
        intensity: Intensity::Moderate,
        affinities: [0.5, 0.4, 0.3, 0.5, 0.7],
        alternatives: &["Dead Bug"],
    },
    BuiltinExercise {
        name: "Yoga Flow",
        workout_type: WorkoutType::Flexibility,
        muscle_groups: &[MuscleGroup::FullBody],
        equipment: &[],
        contraindications: &[],
        difficulty: Level::Beginner,
        intensity: Intensity::Low,
        affinities: [0.3, 0.1, 0.1, 0.3, 0.7],
        alternatives: &["Static Stretching"],
    },
    BuiltinExercise {
        name: "Hip Mobility Drills",
        workout_type: WorkoutType::Mobility,
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[],
        contraindications: &[],
        difficulty: Level::Beginner,
        intensity: Intensity::Low,
        affinities: [0.2, 0.2, 0.3, 0.3, 0.6],
        alternatives: &[],
    },
    BuiltinExercise {
        name: "Rowing Machine",
        workout_type: WorkoutType::Cardio,
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::FullBody],
        equipment: &["rowing-machine"],
        contraindications: &["lower-back"],
        difficulty: Level::Intermediate,
        intensity: Intensity::Moderate,
        affinities: [0.9, 0.3, 0.3, 0.9, 0.7],
        alternatives: &["Elliptical"],
    },
    BuiltinExercise {
        name: "Dumbbell Lunges",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &["dumbbells"],
        contraindications: &["knee", "hip"],
        difficulty: Level::Intermediate,
        intensity: Intensity::Moderate,
        affinities: [0.6, 0.7, 0.6, 0.5, 0.6],
        alternatives: &["Step-Ups"],
    },
    BuiltinExercise {
        name: "Band Pull-Aparts",
        workout_type: WorkoutType::Strength,
        muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Back],
        equipment: &["resistance-bands"],
        contraindications: &[],
        difficulty: Level::Beginner,
        intensity: Intensity::Low,
        affinities: [0.2, 0.5, 0.4, 0.3, 0.7],
        alternatives: &[],
    },
    BuiltinExercise {
        name: "Side Plank",
        workout_type: WorkoutType::Core,
        muscle_groups: &[MuscleGroup::Core],
        equipment: &[],
        contraindications: &["shoulder"],
        difficulty: Level::Intermediate,
        intensity: Intensity::Moderate,
        affinities: [0.4, 0.4, 0.5, 0.6, 0.7],
        alternatives: &["Plank"],
    },
    BuiltinExercise {
        name: "Bodyweight Circuit",
        workout_type: WorkoutType::Circuit,
        muscle_groups: &[MuscleGroup::FullBody],
        equipment: &[],
        contraindications: &[],
        difficulty: Level::Intermediate,
        intensity: Intensity::High,
        affinities: [0.9, 0.4, 0.3, 0.9, 0.7],
        alternatives: &["Jumping Jacks"],
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Property;

    fn exercise(name: &str) -> Exercise {
        Exercise::new(name, WorkoutType::Strength, &[MuscleGroup::Legs], Level::Beginner).unwrap()
    }

    #[test]
    fn test_catalog_new_preserves_order() {
        let catalog = Catalog::new(vec![exercise("B"), exercise("A"), exercise("C")]).unwrap();

        assert_eq!(
            catalog
                .all()
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec!["B", "A", "C"]
        );
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_new_duplicate_name() {
        assert_eq!(
            Catalog::new(vec![exercise("A"), exercise("B"), exercise("A")]),
            Err(ValidationError::DuplicateName(Name::new("A").unwrap()))
        );
    }

    #[test]
    fn test_catalog_get() {
        let catalog = Catalog::new(vec![exercise("A"), exercise("B")]).unwrap();

        assert_eq!(catalog.get("B").map(|e| e.name.as_str()), Some("B"));
        assert_eq!(catalog.get("C"), None);
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), BUILTIN_EXERCISES.len());
        for group in MuscleGroup::iter() {
            assert!(
                catalog.all().iter().any(|e| e.muscle_groups.contains(group)),
                "no built-in exercise for {group}"
            );
        }
        for goal in Goal::iter() {
            assert!(
                catalog.all().iter().any(|e| e.affinities.get(*goal) > 0.0),
                "no built-in exercise for {goal}"
            );
        }
    }

    #[test]
    fn test_builtin_catalog_tags_are_normalized() {
        let bike = Catalog::builtin().get("Stationary Bike").unwrap();

        assert!(bike.equipment.contains(&Tag::new("Stationary Bike").unwrap()));
        assert!(bike.contraindications.contains(&Tag::new("Knee").unwrap()));
    }

    #[test]
    fn test_builtin_catalog_covers_injury_labels() {
        for label in [
            "Knee Injury",
            "Back Pain",
            "Shoulder Injury",
            "Ankle Sprain",
            "Hip Pain",
            "Wrist Pain",
        ] {
            let injury = Tag::injury(label).unwrap();
            assert!(
                Catalog::builtin()
                    .all()
                    .iter()
                    .any(|e| e.contraindications.contains(&injury)),
                "no built-in exercise is contraindicated for {label}"
            );
        }
    }
}
