use std::{fmt, ops::RangeInclusive};

use chrono::{NaiveDateTime, Weekday};

use crate::{Exercise, MuscleGroup, Profile};

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub days: Vec<PlanDay>,
    pub profile: Profile,
    pub generated_at: NaiveDateTime,
}

impl Plan {
    pub fn entries(&self) -> impl Iterator<Item = (&PlanDay, &PlanEntry)> {
        self.days
            .iter()
            .flat_map(|day| day.entries.iter().map(move |entry| (day, entry)))
    }

    #[must_use]
    pub fn substitutions(&self) -> usize {
        self.days
            .iter()
            .filter(|day| day.intended_focus.is_some())
            .count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanDay {
    /// 1-based position of the day within the plan.
    pub index: u8,
    pub weekday: Weekday,
    pub focus: MuscleGroup,
    /// Focus the rotation asked for, if it had to be substituted.
    pub intended_focus: Option<MuscleGroup>,
    pub rationale: String,
    pub entries: Vec<PlanEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub exercise: Exercise,
    pub score: f64,
    pub rationale: String,
    pub prescription: Prescription,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prescription {
    Sets {
        sets: RangeInclusive<u32>,
        reps: RangeInclusive<u32>,
        rest_seconds: RangeInclusive<u32>,
    },
    Timed {
        minutes: u32,
    },
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Prescription::Sets {
                sets,
                reps,
                rest_seconds,
            } => write!(
                f,
                "Sets: {} | Reps: {} | Rest: {} s",
                RangeDisplay(sets),
                RangeDisplay(reps),
                RangeDisplay(rest_seconds)
            ),
            Prescription::Timed { minutes } => write!(f, "Duration: {minutes} min"),
        }
    }
}

/// Formats a range as `"start-end"`, or as a single number if both bounds are
/// equal.
pub struct RangeDisplay<'a>(pub &'a RangeInclusive<u32>);

impl fmt::Display for RangeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.start() == self.0.end() {
            write!(f, "{}", self.0.start())
        } else {
            write!(f, "{}-{}", self.0.start(), self.0.end())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        Prescription::Sets { sets: 2..=3, reps: 8..=12, rest_seconds: 60..=90 },
        "Sets: 2-3 | Reps: 8-12 | Rest: 60-90 s"
    )]
    #[case(
        Prescription::Sets { sets: 3..=3, reps: 5..=5, rest_seconds: 120..=150 },
        "Sets: 3 | Reps: 5 | Rest: 120-150 s"
    )]
    #[case(Prescription::Timed { minutes: 20 }, "Duration: 20 min")]
    fn test_prescription_display(#[case] prescription: Prescription, #[case] expected: &str) {
        assert_eq!(prescription.to_string(), expected);
    }

    #[rstest]
    #[case(4..=4, "4")]
    #[case(10..=15, "10-15")]
    fn test_range_display(#[case] range: RangeInclusive<u32>, #[case] expected: &str) {
        assert_eq!(RangeDisplay(&range).to_string(), expected);
    }
}
