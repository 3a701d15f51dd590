//! Template-based concept generation.
//!
//! Turns a set of workspace elements and a constraint category into one to
//! three candidate concepts by filling randomly chosen two-slot templates
//! with randomly chosen pairs of distinct element labels.

use chrono::Utc;
use tracing::debug;

use super::catalog::{self, NAME_SUFFIXES};
use super::constraint::ConstraintCategory;
use super::random::{choose, pick_distinct, RandomSource};
use super::template;
use crate::models::{new_concept_id, Concept, Element};

/// Upper bound on the number of concepts produced per call
pub const MAX_CONCEPTS_PER_CALL: usize = 3;

/// Stateless concept generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateConceptGenerator;

impl TemplateConceptGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate between one and three concepts from `elements`.
    ///
    /// Returns an empty list when fewer than two elements are supplied.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        elements: &[Element],
        constraint: ConstraintCategory,
        rng: &mut R,
    ) -> Vec<Concept> {
        if elements.len() < 2 {
            return Vec::new();
        }

        let profile = catalog::profile(constraint);
        let count = rng.next_index(MAX_CONCEPTS_PER_CALL) + 1;
        let mut concepts = Vec::with_capacity(count);

        for _ in 0..count {
            let (Some(pattern), Some(description)) = (
                choose(rng, profile.patterns),
                choose(rng, profile.descriptions),
            ) else {
                break;
            };

            let picked = pick_distinct(rng, elements.len(), 2);
            let first = &elements[picked[0]];
            let second = &elements[picked[1]];

            let suffix = choose(rng, NAME_SUFFIXES).copied().unwrap_or_default();
            let filled = template::fill(pattern.template, &first.label, &second.label);

            concepts.push(Concept {
                id: new_concept_id(),
                name: format!("{} {}", pattern.name, suffix),
                description: format!("{}: {}", description, filled),
                constraint,
                elements: elements.to_vec(),
                pattern: Some(pattern.name.to_string()),
                created_at: Utc::now(),
            });
        }

        debug!(
            constraint = %constraint,
            elements = elements.len(),
            generated = concepts.len(),
            "Generated concepts"
        );

        concepts
    }

    /// Like [`generate`](Self::generate), resolving `tag` leniently: an
    /// unknown tag uses the subject-object configuration.
    pub fn generate_for_tag<R: RandomSource + ?Sized>(
        &self,
        elements: &[Element],
        tag: &str,
        rng: &mut R,
    ) -> Vec<Concept> {
        self.generate(elements, ConstraintCategory::from_tag_lenient(tag), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::random::{RngSource, ScriptedSource};
    use crate::models::ElementKind;

    fn linear_time_pair() -> Vec<Element> {
        vec![
            Element::with_id("element-4", ElementKind::Entity, "Time-Independent"),
            Element::with_id("element-5", ElementKind::Relation, "Asynchronous Link"),
        ]
    }

    #[test]
    fn test_fewer_than_two_elements_yields_nothing() {
        let generator = TemplateConceptGenerator::new();
        let mut rng = RngSource::seeded(3);

        let one = vec![Element::new(ElementKind::Entity, "Solo")];
        for category in ConstraintCategory::ALL {
            assert!(generator.generate(&[], category, &mut rng).is_empty());
            assert!(generator.generate(&one, category, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_scripted_generation_is_exact() {
        let generator = TemplateConceptGenerator::new();
        // count: 0 -> 1 concept; pattern 2 (Atemporal Node); description 1;
        // elements: index 1 then the remaining index 0; suffix 6 (Nexus).
        let mut rng = ScriptedSource::new([0, 2, 1, 1, 0, 6]);

        let concepts = generator.generate(&linear_time_pair(), ConstraintCategory::LinearTime, &mut rng);

        assert_eq!(concepts.len(), 1);
        let concept = &concepts[0];
        assert_eq!(concept.name, "Atemporal Node Nexus");
        assert_eq!(
            concept.description,
            "A phenomenon where sequence gives way to simultaneous existence: \
             A point where Asynchronous Link and Time-Independent interact outside sequential time"
        );
        assert_eq!(concept.pattern.as_deref(), Some("Atemporal Node"));
        assert_eq!(concept.constraint, ConstraintCategory::LinearTime);
        assert_eq!(concept.elements, linear_time_pair());
    }

    #[test]
    fn test_linear_time_concepts_contain_both_labels() {
        let generator = TemplateConceptGenerator::new();
        let mut rng = RngSource::seeded(11);

        for _ in 0..50 {
            let concepts =
                generator.generate(&linear_time_pair(), ConstraintCategory::LinearTime, &mut rng);
            assert!((1..=3).contains(&concepts.len()));
            for concept in &concepts {
                assert!(concept.description.contains("Time-Independent"));
                assert!(concept.description.contains("Asynchronous Link"));
                assert!(!concept.description.contains("{0}"));
                assert!(!concept.description.contains("{1}"));
            }
        }
    }

    #[test]
    fn test_unknown_tag_uses_subject_object() {
        let generator = TemplateConceptGenerator::new();
        let mut rng = RngSource::seeded(5);

        let concepts = generator.generate_for_tag(&linear_time_pair(), "not-a-tag", &mut rng);
        assert!(!concepts.is_empty());

        let names: Vec<&str> = catalog::profile(ConstraintCategory::SubjectObject)
            .patterns
            .iter()
            .map(|p| p.name)
            .collect();
        for concept in concepts {
            assert_eq!(concept.constraint, ConstraintCategory::SubjectObject);
            assert!(names.contains(&concept.pattern.as_deref().unwrap()));
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let generator = TemplateConceptGenerator::new();
        // Force three concepts.
        let mut rng = ScriptedSource::new([2]);

        let concepts = generator.generate(&linear_time_pair(), ConstraintCategory::Causality, &mut rng);
        assert_eq!(concepts.len(), 3);
        assert_ne!(concepts[0].id, concepts[1].id);
        assert_ne!(concepts[1].id, concepts[2].id);
    }
}
