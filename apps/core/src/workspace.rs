//! Workspace Module
//!
//! Caller-owned lab state: the selected constraint, the element canvas, the
//! user's saved concepts and the community feed. The engine stays stateless;
//! everything that changes between calls lives here.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::LabConfig;
use crate::engine::{
    ConstraintCategory, LexicalConstraintAnalyzer, RandomSource, TemplateConceptGenerator,
};
use crate::error::{LabError, Result};
use crate::metrics::days_between;
use crate::models::{Concept, Element, ElementKind, SharedConcept, Solution};
use crate::seed::seed_concepts;

/// Author recorded on concepts shared from this workspace.
pub const LOCAL_AUTHOR: &str = "Current User";

const MIN_ELEMENTS: usize = 2;

pub struct LabState {
    selected_constraint: ConstraintCategory,
    canvas: Vec<Element>,
    user_concepts: Vec<Concept>,
    community_concepts: Vec<SharedConcept>,
    concept_counter: usize,
    started_at: DateTime<Utc>,
    feed_limit: usize,
}

impl LabState {
    /// Fresh state with the seed community feed.
    pub fn new(config: &LabConfig, now: DateTime<Utc>) -> Self {
        Self {
            selected_constraint: ConstraintCategory::default(),
            canvas: Vec::new(),
            user_concepts: Vec::new(),
            community_concepts: seed_concepts(now),
            concept_counter: 0,
            started_at: now,
            feed_limit: config.community_feed_limit,
        }
    }

    /// Restores previously saved user concepts; the counter resumes from their count.
    pub fn with_user_concepts(mut self, concepts: Vec<Concept>) -> Self {
        self.concept_counter = concepts.len();
        self.user_concepts = concepts;
        self
    }

    pub fn selected_constraint(&self) -> ConstraintCategory {
        self.selected_constraint
    }

    pub fn canvas(&self) -> &[Element] {
        &self.canvas
    }

    pub fn user_concepts(&self) -> &[Concept] {
        &self.user_concepts
    }

    pub fn community_concepts(&self) -> &[SharedConcept] {
        &self.community_concepts
    }

    pub fn concept_counter(&self) -> usize {
        self.concept_counter
    }

    /// Switches constraint. The canvas is cleared since its labels belong to the old one.
    pub fn select_constraint(&mut self, constraint: ConstraintCategory) {
        self.selected_constraint = constraint;
        self.canvas.clear();
    }

    pub fn add_element(&mut self, kind: ElementKind) -> &Element {
        let label = self.selected_constraint.element_label(kind);
        self.canvas.push(Element::new(kind, label));
        &self.canvas[self.canvas.len() - 1]
    }

    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
    }

    /// Runs the generator over the canvas and keeps the results.
    pub fn generate_concepts<R: RandomSource + ?Sized>(
        &mut self,
        generator: &TemplateConceptGenerator,
        rng: &mut R,
    ) -> Result<Vec<Concept>> {
        if self.canvas.len() < MIN_ELEMENTS {
            return Err(LabError::Validation(
                "Please add at least two elements to the workspace to generate concepts."
                    .to_string(),
            ));
        }

        let now = Utc::now();
        let mut concepts = generator.generate(&self.canvas, self.selected_constraint, rng);
        for concept in &mut concepts {
            concept.created_at = now;
        }

        self.concept_counter += concepts.len();
        self.user_concepts.extend(concepts.iter().cloned());

        info!(
            constraint = %self.selected_constraint,
            generated = concepts.len(),
            "Generated concepts from workspace"
        );
        Ok(concepts)
    }

    /// Name suggestion from the constraint prefix and the most frequent element kind.
    pub fn suggest_concept_name(&self) -> Option<String> {
        // kinds in first-seen order
        let mut counts: Vec<(ElementKind, usize)> = Vec::new();
        for element in &self.canvas {
            match counts.iter_mut().find(|(kind, _)| *kind == element.kind) {
                Some((_, count)) => *count += 1,
                None => counts.push((element.kind, 1)),
            }
        }

        let (dominant, _) = counts
            .into_iter()
            .reduce(|best, next| if best.1 > next.1 { best } else { next })?;

        Some(format!(
            "{}-{} {}",
            self.selected_constraint.name_prefix(),
            dominant.name_suffix(),
            self.concept_counter + 1
        ))
    }

    /// Saves a manually named concept built from the canvas, then clears it.
    pub fn save_concept(&mut self, name: &str, description: &str) -> Result<&Concept> {
        if self.canvas.len() < MIN_ELEMENTS {
            return Err(LabError::Validation(
                "Please add at least two elements to the workspace before saving a concept."
                    .to_string(),
            ));
        }
        if name.trim().is_empty() || description.trim().is_empty() {
            return Err(LabError::Validation(
                "Please provide both a name and description for your concept.".to_string(),
            ));
        }

        let concept = Concept::manual(
            name.trim(),
            description.trim(),
            self.selected_constraint,
            &self.canvas,
        );
        debug!(concept = %concept.name, "Saved concept");

        self.user_concepts.push(concept);
        self.concept_counter += 1;
        self.canvas.clear();

        Ok(&self.user_concepts[self.user_concepts.len() - 1])
    }

    /// Shares the most recent user concept to the top of the community feed.
    pub fn share_latest(&mut self) -> Result<&SharedConcept> {
        let Some(latest) = self.user_concepts.last() else {
            return Err(LabError::Validation(
                "Create a concept before sharing to the community.".to_string(),
            ));
        };

        let shared = SharedConcept {
            concept: latest.clone(),
            author: LOCAL_AUTHOR.to_string(),
            shared: Utc::now(),
        };
        info!(concept = %shared.concept.name, "Shared concept with community");

        self.community_concepts.insert(0, shared);
        self.community_concepts.truncate(self.feed_limit);
        Ok(&self.community_concepts[0])
    }

    /// Applies the user concepts whose ids are in `selected_ids` to `problem`.
    pub fn solve<R: RandomSource + ?Sized>(
        &self,
        analyzer: &LexicalConstraintAnalyzer,
        problem: &str,
        selected_ids: &[String],
        rng: &mut R,
    ) -> Solution {
        let selected: Vec<Concept> = self
            .user_concepts
            .iter()
            .filter(|c| selected_ids.contains(&c.id))
            .cloned()
            .collect();

        analyzer.generate_solution(problem, &selected, rng)
    }

    pub fn days_active(&self, now: DateTime<Utc>) -> i64 {
        days_between(self.started_at, now)
    }

    /// Concepts created per 30 days since the workspace started, rounded.
    pub fn concepts_per_month(&self, now: DateTime<Utc>) -> u64 {
        let days = self.days_active(now);
        if days == 0 {
            return 0;
        }
        (self.concept_counter as f64 * 30.0 / days as f64).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScriptedSource;
    use chrono::Duration;

    fn state() -> LabState {
        LabState::new(&LabConfig::default(), Utc::now())
    }

    #[test]
    fn test_add_element_uses_constraint_label() {
        let mut lab = state();
        lab.select_constraint(ConstraintCategory::LinearTime);

        let element = lab.add_element(ElementKind::Relation);
        assert_eq!(element.label, "Asynchronous Link");
        assert_eq!(element.kind, ElementKind::Relation);
    }

    #[test]
    fn test_select_constraint_clears_canvas() {
        let mut lab = state();
        lab.add_element(ElementKind::Entity);
        lab.select_constraint(ConstraintCategory::Causality);
        assert!(lab.canvas().is_empty());
    }

    #[test]
    fn test_suggest_name_ties_go_to_later_kind() {
        let mut lab = state();
        assert_eq!(lab.suggest_concept_name(), None);

        lab.add_element(ElementKind::Entity);
        lab.add_element(ElementKind::Process);
        assert_eq!(lab.suggest_concept_name().as_deref(), Some("Unified-Flow 1"));

        lab.add_element(ElementKind::Entity);
        assert_eq!(lab.suggest_concept_name().as_deref(), Some("Unified-Being 1"));
    }

    #[test]
    fn test_generate_needs_two_elements() {
        let mut lab = state();
        lab.add_element(ElementKind::Entity);

        let err = lab
            .generate_concepts(&TemplateConceptGenerator::new(), &mut ScriptedSource::default())
            .unwrap_err();
        assert!(matches!(err, LabError::Validation(_)));
        assert_eq!(lab.concept_counter(), 0);
    }

    #[test]
    fn test_generate_appends_and_counts() {
        let mut lab = state();
        lab.add_element(ElementKind::Entity);
        lab.add_element(ElementKind::Context);

        let mut rng = ScriptedSource::new([2]);
        let concepts = lab
            .generate_concepts(&TemplateConceptGenerator::new(), &mut rng)
            .unwrap();

        assert_eq!(concepts.len(), 3);
        assert_eq!(lab.user_concepts().len(), 3);
        assert_eq!(lab.concept_counter(), 3);
        assert_eq!(lab.canvas().len(), 2);
    }

    #[test]
    fn test_save_concept_validates_and_clears() {
        let mut lab = state();
        lab.add_element(ElementKind::Entity);
        lab.add_element(ElementKind::Relation);

        assert!(lab.save_concept("  ", "desc").is_err());
        assert_eq!(lab.canvas().len(), 2);

        let saved = lab.save_concept("Unity", "A unified field").unwrap();
        assert_eq!(saved.elements.len(), 2);
        assert!(saved.pattern.is_none());
        assert!(lab.canvas().is_empty());
        assert_eq!(lab.concept_counter(), 1);

        assert!(lab.save_concept("Again", "desc").is_err());
    }

    #[test]
    fn test_share_latest_prepends_and_truncates() {
        let config = LabConfig {
            community_feed_limit: 10,
            ..LabConfig::default()
        };
        let mut lab = LabState::new(&config, Utc::now());
        assert!(matches!(lab.share_latest(), Err(LabError::Validation(_))));

        lab.add_element(ElementKind::Entity);
        lab.add_element(ElementKind::Relation);
        lab.save_concept("Unity", "A unified field").unwrap();

        let shared = lab.share_latest().unwrap();
        assert_eq!(shared.author, LOCAL_AUTHOR);
        assert_eq!(shared.concept.name, "Unity");
        assert_eq!(lab.community_concepts().len(), 10);
        assert_eq!(lab.community_concepts()[0].concept.name, "Unity");
    }

    #[test]
    fn test_solve_uses_selected_concepts_only() {
        let mut lab = state();
        lab.add_element(ElementKind::Entity);
        lab.add_element(ElementKind::Relation);
        let id = lab.save_concept("Unity", "A unified field").unwrap().id.clone();

        let analyzer = LexicalConstraintAnalyzer::new();
        let mut rng = ScriptedSource::default();

        let none = lab.solve(&analyzer, "I observe the system", &[], &mut rng);
        let some = lab.solve(&analyzer, "I observe the system", &[id], &mut rng);
        assert_ne!(none.approach, some.approach);
    }

    #[test]
    fn test_concepts_per_month() {
        let now = Utc::now();
        let mut lab = LabState::new(&LabConfig::default(), now - Duration::days(10));
        assert_eq!(lab.concepts_per_month(now), 0);

        lab.add_element(ElementKind::Entity);
        lab.add_element(ElementKind::Relation);
        lab.save_concept("Unity", "A unified field").unwrap();

        assert_eq!(lab.days_active(now), 10);
        assert_eq!(lab.concepts_per_month(now), 3);
        assert_eq!(lab.concepts_per_month(now - Duration::days(10)), 0);
    }
}
