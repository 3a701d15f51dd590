//! Seed concepts shown in the community feed before anyone shares.

use chrono::{DateTime, Duration, Utc};

use crate::engine::ConstraintCategory;
use crate::models::{Concept, Element, ElementKind, SharedConcept};

struct Seed {
    name: &'static str,
    description: &'static str,
    constraint: ConstraintCategory,
    author: &'static str,
    days_ago: i64,
    elements: [(ElementKind, &'static str); 3],
}

const SEEDS: &[Seed] = &[
    Seed {
        name: "Non-dual Observer",
        description: "A state of awareness where the observer and observed are recognized as a unified field. Transcends the subject-object dichotomy inherent in language by creating a conceptual framework where perception doesn't require separation.",
        constraint: ConstraintCategory::SubjectObject,
        author: "Linguistic Commons",
        days_ago: 14,
        elements: [
            (ElementKind::Entity, "Subject-Object"),
            (ElementKind::Relation, "Non-dualistic Binding"),
            (ElementKind::Context, "Unity Field"),
        ],
    },
    Seed {
        name: "Temporal Mesh",
        description: "A conceptual framework where events exist in a non-linear interconnected network rather than a sequential timeline. Allows expression of temporal relationships that aren't constrained by before/after ordering.",
        constraint: ConstraintCategory::LinearTime,
        author: "Chronos Institute",
        days_ago: 11,
        elements: [
            (ElementKind::Entity, "Time-Independent"),
            (ElementKind::Relation, "Asynchronous Link"),
            (ElementKind::Property, "Temporal Invariant"),
        ],
    },
    Seed {
        name: "Mutual Emergence Field",
        description: "A system where causation flows bidirectionally or multi-directionally between elements. Bypasses the linguistic constraint of unidirectional causality to express phenomena where causes and effects co-create each other simultaneously.",
        constraint: ConstraintCategory::Causality,
        author: "Causal Systems Lab",
        days_ago: 8,
        elements: [
            (ElementKind::Entity, "Acausal Node"),
            (ElementKind::Relation, "Mutual Emergence"),
            (ElementKind::Process, "Circular Causation"),
        ],
    },
    Seed {
        name: "Quantum Valence",
        description: "A logical framework allowing propositions to exist in superposition across multiple truth values simultaneously. Transcends binary true/false constraints in language to express concepts with quantum-like logical properties.",
        constraint: ConstraintCategory::BinaryLogic,
        author: "Quantum Logic Society",
        days_ago: 5,
        elements: [
            (ElementKind::Entity, "Multi-valued Object"),
            (ElementKind::Property, "Quantum Attribute"),
            (ElementKind::Process, "State Fluidity"),
        ],
    },
    Seed {
        name: "Omniperspectival Frame",
        description: "A conceptual viewpoint that integrates multiple perspectives simultaneously without privileging any single one. Enables expression of ideas that are invariant across all possible observer positions.",
        constraint: ConstraintCategory::Perspectives,
        author: "Perspective Integration Project",
        days_ago: 2,
        elements: [
            (ElementKind::Entity, "Multi-perspective"),
            (ElementKind::Relation, "Viewpoint Fusion"),
            (ElementKind::Property, "Perspective-invariant"),
        ],
    },
    Seed {
        name: "Interpenetrative Identity",
        description: "A concept for expressing how distinct entities can maintain both individual identity and complete mutual containment simultaneously. Transcends the linguistic constraint that separate things cannot be completely within each other.",
        constraint: ConstraintCategory::SubjectObject,
        author: "Conceptual Engineering Lab",
        days_ago: 7,
        elements: [
            (ElementKind::Entity, "Subject-Object"),
            (ElementKind::Relation, "Non-dualistic Binding"),
            (ElementKind::Context, "Unity Field"),
        ],
    },
    Seed {
        name: "Causal Harmony",
        description: "A framework for understanding events that are meaningfully connected without direct causation. Allows expression of patterns that transcend conventional cause-effect relationships while maintaining coherent structure.",
        constraint: ConstraintCategory::Causality,
        author: "Synchronicity Research Group",
        days_ago: 6,
        elements: [
            (ElementKind::Entity, "Acausal Node"),
            (ElementKind::Relation, "Mutual Emergence"),
            (ElementKind::Process, "Circular Causation"),
        ],
    },
    Seed {
        name: "Recursive Present",
        description: "A temporal framework where 'now' contains nested instances of itself across multiple scales. Bypasses linear time constraints by allowing events to be simultaneously present at different levels of temporal engagement.",
        constraint: ConstraintCategory::LinearTime,
        author: "Temporal Linguistics Institute",
        days_ago: 4,
        elements: [
            (ElementKind::Entity, "Time-Independent"),
            (ElementKind::Process, "Non-sequential Flow"),
            (ElementKind::Context, "Time Field"),
        ],
    },
    Seed {
        name: "Coherent Paradox",
        description: "A logical state where contradictions co-exist within a higher-order consistency. Allows expression of ideas that maintain opposing truth values simultaneously while preserving meaningful structure.",
        constraint: ConstraintCategory::BinaryLogic,
        author: "Multi-valued Logic Consortium",
        days_ago: 3,
        elements: [
            (ElementKind::Entity, "Multi-valued Object"),
            (ElementKind::Property, "Quantum Attribute"),
            (ElementKind::Context, "Logic Field"),
        ],
    },
    Seed {
        name: "Vantage Integration",
        description: "A framework for synthesizing fundamentally incompatible viewpoints without reducing their essential differences. Transcends perspective limitations by maintaining the unique value of each viewing position while creating emergent insights.",
        constraint: ConstraintCategory::Perspectives,
        author: "Perspective Dynamics Group",
        days_ago: 1,
        elements: [
            (ElementKind::Entity, "Multi-perspective"),
            (ElementKind::Relation, "Viewpoint Fusion"),
            (ElementKind::Process, "Observer Merger"),
        ],
    },
];

/// The seed community feed, with share dates relative to `now`.
pub fn seed_concepts(now: DateTime<Utc>) -> Vec<SharedConcept> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            let elements = seed
                .elements
                .iter()
                .enumerate()
                .map(|(j, (kind, label))| {
                    Element::with_id(format!("element-{}", i * 3 + j + 1), *kind, *label)
                })
                .collect();
            let shared = now - Duration::days(seed.days_ago);

            SharedConcept {
                concept: Concept {
                    id: format!("seed-concept-{}", i + 1),
                    name: seed.name.to_string(),
                    description: seed.description.to_string(),
                    constraint: seed.constraint,
                    elements,
                    pattern: None,
                    created_at: shared,
                },
                author: seed.author.to_string(),
                shared,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_seeds_with_three_elements() {
        let seeds = seed_concepts(Utc::now());
        assert_eq!(seeds.len(), 10);
        for seed in &seeds {
            assert_eq!(seed.concept.elements.len(), 3);
        }
        assert_eq!(seeds[0].concept.id, "seed-concept-1");
        assert_eq!(seeds[9].concept.elements[2].id, "element-30");
    }

    #[test]
    fn test_every_category_is_seeded_twice() {
        let seeds = seed_concepts(Utc::now());
        for category in ConstraintCategory::ALL {
            let count = seeds.iter().filter(|s| s.concept.constraint == category).count();
            assert_eq!(count, 2, "{}", category);
        }
    }

    #[test]
    fn test_share_dates_are_in_the_past() {
        let now = Utc::now();
        let seeds = seed_concepts(now);
        assert_eq!(seeds[0].shared, now - Duration::days(14));
        assert!(seeds.iter().all(|s| s.shared < now));
    }
}
