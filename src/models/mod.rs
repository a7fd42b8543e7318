// ABOUTME: Core data models for the wizard: the career profile snapshot and the step ordinal

pub mod profile;
pub mod step;

pub use profile::{Education, PersonalInfo, Profile, Project, WorkExperience};
pub use step::Step;
