#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod assembly;
pub mod catalog;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod exercise;
pub mod name;
pub mod plan;
pub mod prescription;
pub mod profile;
pub mod scoring;
pub mod settings;
pub mod tag;
pub mod validation;

pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use exercise::*;
pub use name::*;
pub use plan::*;
pub use profile::*;
pub use scoring::ScoredExercise;
pub use settings::*;
pub use tag::*;
