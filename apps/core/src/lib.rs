// Linguistic Lab Core
// Constraint-driven concept generation and text-gap analysis

pub mod config;
pub mod engine;
pub mod error;
pub mod fs_manager;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod seed;
pub mod storage;
pub mod workspace;

#[cfg(test)]
mod tests;

pub use config::LabConfig;
pub use engine::{
    ConstraintCategory, LexicalConstraintAnalyzer, RandomSource, RngSource, ScriptedSource,
    TemplateConceptGenerator,
};
pub use error::{LabError, Result};
pub use models::{Concept, Element, ElementKind, SharedConcept, Solution};
pub use workspace::LabState;
