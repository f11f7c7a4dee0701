//! Plain-text rendering of a plan for the terminal.

use std::fmt::Write;

use chrono::Weekday;
use regimen_domain::{Plan, Tag};

const RULE: usize = 70;
const DAY_RULE: usize = 40;

#[must_use]
pub fn render(plan: &Plan) -> String {
    let profile = &plan.profile;
    let mut output = String::new();

    let _ = writeln!(output, "{}", "=".repeat(RULE));
    let _ = writeln!(
        output,
        "PERSONALIZED WORKOUT PLAN FOR {}",
        profile.name.as_str().to_uppercase()
    );
    let _ = writeln!(output, "{}", "=".repeat(RULE));
    let _ = writeln!(
        output,
        "Goal: {} | Fitness Level: {}",
        profile.goal, profile.level
    );
    let _ = writeln!(output, "Injuries: {}", list(&profile.injuries));
    let _ = writeln!(output, "Equipment: {}", list(&profile.equipment));
    if !profile.preferred_workouts.is_empty() {
        let _ = writeln!(
            output,
            "Preferred: {}",
            profile
                .preferred_workouts
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    let _ = write!(output, "{}", "=".repeat(RULE));

    for day in &plan.days {
        let _ = writeln!(
            output,
            "\n\nDAY {} ({})",
            day.index,
            weekday_name(day.weekday).to_uppercase()
        );
        let _ = writeln!(output, "{}", "-".repeat(DAY_RULE));
        let _ = writeln!(output, "Focus: {}", day.focus);
        let _ = writeln!(output, "{}", day.rationale);

        for (number, entry) in day.entries.iter().enumerate() {
            let _ = write!(
                output,
                "\n{}. {}\n   {}\n   Why: {}\n   Note: {}",
                number + 1,
                entry.exercise.name,
                entry.prescription,
                entry.rationale,
                entry.notes
            );
        }
    }

    output.push('\n');
    output
}

fn list<'a>(tags: impl IntoIterator<Item = &'a Tag>) -> String {
    let values = tags.into_iter().map(Tag::as_str).collect::<Vec<_>>();
    if values.is_empty() {
        "None".to_string()
    } else {
        values.join(", ")
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
