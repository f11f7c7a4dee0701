#![warn(clippy::pedantic)]

mod args;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use chrono::Local;
use clap::Parser;
use log::info;
use regimen_domain::{Catalog, PlanSettings, generate_plan_with};
use regimen_storage::{LoadPolicy, export_plan, load_catalog_file, load_settings_file};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let profile = args.profile()?;

    let loaded;
    let catalog = match &args.catalog {
        Some(path) => {
            let policy = if args.skip_invalid {
                LoadPolicy::SkipInvalid
            } else {
                LoadPolicy::FailFast
            };
            loaded = load_catalog_file(path, policy)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            &loaded
        }
        None => Catalog::builtin(),
    };

    let mut settings = match &args.settings {
        Some(path) => load_settings_file(path)
            .with_context(|| format!("Failed to load settings {}", path.display()))?,
        None => PlanSettings::default(),
    };
    if let Some(exercises_per_day) = args.exercises_per_day()? {
        settings.exercises_per_day = exercises_per_day;
    }

    info!(
        "planning {} day(s) for {} from {} exercises",
        profile.training_days,
        profile.goal,
        catalog.len()
    );

    let plan = generate_plan_with(&profile, catalog, &settings, Local::now().naive_local())
        .context("Failed to generate plan")?;

    if args.json {
        println!("{}", export_plan(&plan).context("Failed to export plan")?);
    } else {
        print!("{}", renderer::render(&plan));
    }

    Ok(())
}
