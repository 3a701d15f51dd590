//! # Engine Module
//!
//! The concept-generation and text-analysis core of the lab.
//! Everything here is synchronous and holds no mutable state; randomness is
//! supplied by the caller through [`RandomSource`].
//!
//! ## Components
//! - `constraint`: the five constraint categories
//! - `catalog`: declarative pattern, keyword and template tables
//! - `random`: injectable random source and distinct-index sampling
//! - `template`: two-slot template filling
//! - `generator`: template-based concept generation
//! - `analyzer`: regex/keyword scoring, gaps and alternative phrasings
//! - `solution`: problem/concept solution synthesis

pub mod analyzer;
pub mod catalog;
pub mod constraint;
pub mod generator;
pub mod random;
pub mod solution;
pub mod template;

pub use analyzer::{AnalysisResult, ConstraintAnalysis, Gap, LexicalConstraintAnalyzer};
pub use catalog::{ConceptPattern, ConstraintProfile};
pub use constraint::ConstraintCategory;
pub use generator::TemplateConceptGenerator;
pub use random::{RandomSource, RngSource, ScriptedSource};
