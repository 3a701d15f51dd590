//! Concept-rate and problem-solving metrics.
//!
//! Tracks when concepts are created and how problem-solving tests went, and
//! summarises both over sliding windows of days against configured targets.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::LabConfig;
use crate::engine::ConstraintCategory;
use crate::models::Concept;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// One created concept, as remembered by the tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptRecord {
    pub id: String,
    pub name: String,
    pub constraint: ConstraintCategory,
    pub date: DateTime<Utc>,
}

/// Outcome of applying concepts to a problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemSolvingTest {
    pub id: String,
    pub problem: String,
    /// Improvement in percent
    pub improvement: f64,
    /// Ids of the concepts applied
    pub concepts: Vec<String>,
    pub date: DateTime<Utc>,
}

/// Persisted tracker state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsState {
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub concept_history: Vec<ConceptRecord>,
    #[serde(default)]
    pub problem_solving_tests: Vec<ProblemSolvingTest>,
}

impl MetricsState {
    pub fn new(start_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            concept_history: Vec::new(),
            problem_solving_tests: Vec::new(),
        }
    }
}

/// Metrics for one window of days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodMetrics {
    pub period: u32,
    pub concepts_created: usize,
    pub concepts_per_day: f64,
    pub concepts_per_month: f64,
    pub progress_percent: f64,
    pub constraint_distribution: BTreeMap<ConstraintCategory, usize>,
    pub problem_solving_tests: usize,
    pub average_improvement: f64,
    pub improvement_progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub start_date: DateTime<Utc>,
    pub days_active: i64,
    pub total_concepts: usize,
    pub problem_solving_tests: usize,
}

/// Summary plus one entry per configured window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub summary: MetricsSummary,
    pub periods: BTreeMap<u32, PeriodMetrics>,
}

pub struct MetricsTracker {
    target_concepts_per_month: f64,
    target_improvement: f64,
    windows: Vec<u32>,
    state: MetricsState,
}

impl MetricsTracker {
    /// Creates an empty tracker starting at `now`.
    pub fn new(config: &LabConfig, now: DateTime<Utc>) -> Self {
        Self::with_state(config, MetricsState::new(now))
    }

    /// Creates a tracker around previously saved state.
    pub fn with_state(config: &LabConfig, state: MetricsState) -> Self {
        Self {
            target_concepts_per_month: f64::from(config.target_concepts_per_month),
            target_improvement: config.target_problem_solving_improvement,
            windows: config.analysis_windows.clone(),
            state,
        }
    }

    pub fn state(&self) -> &MetricsState {
        &self.state
    }

    pub fn record_concept(&mut self, concept: &Concept, now: DateTime<Utc>) {
        self.state.concept_history.push(ConceptRecord {
            id: concept.id.clone(),
            name: concept.name.clone(),
            constraint: concept.constraint,
            date: now,
        });
        debug!(concept = %concept.name, "Recorded concept creation");
    }

    /// Records a problem-solving result. Non-finite improvements are ignored.
    pub fn record_problem_solving_test(
        &mut self,
        problem: &str,
        improvement: f64,
        concepts: Vec<String>,
        now: DateTime<Utc>,
    ) -> bool {
        if !improvement.is_finite() {
            warn!(improvement, "Ignoring problem-solving test with invalid improvement");
            return false;
        }

        self.state.problem_solving_tests.push(ProblemSolvingTest {
            id: format!("test-{}", Uuid::new_v4()),
            problem: problem.to_string(),
            improvement,
            concepts,
            date: now,
        });
        true
    }

    /// Metrics for the `days` ending at `now`.
    pub fn calculate(&self, days: u32, now: DateTime<Utc>) -> PeriodMetrics {
        let window_start = now - Duration::days(i64::from(days));
        let period = f64::from(days.max(1));

        let recent: Vec<&ConceptRecord> = self
            .state
            .concept_history
            .iter()
            .filter(|c| c.date >= window_start)
            .collect();

        let mut constraint_distribution = BTreeMap::new();
        for record in &recent {
            *constraint_distribution.entry(record.constraint).or_insert(0) += 1;
        }

        let concepts_created = recent.len();
        let concepts_per_day = concepts_created as f64 / period;
        let concepts_per_month = concepts_per_day * 30.0;
        let progress_percent = percent_of(concepts_per_month, self.target_concepts_per_month);

        let tests: Vec<&ProblemSolvingTest> = self
            .state
            .problem_solving_tests
            .iter()
            .filter(|t| t.date >= window_start)
            .collect();

        let (average_improvement, improvement_progress) = if tests.is_empty() {
            (0.0, 0.0)
        } else {
            let average = tests.iter().map(|t| t.improvement).sum::<f64>() / tests.len() as f64;
            (average, percent_of(average, self.target_improvement))
        };

        PeriodMetrics {
            period: days,
            concepts_created,
            concepts_per_day,
            concepts_per_month,
            progress_percent,
            constraint_distribution,
            problem_solving_tests: tests.len(),
            average_improvement,
            improvement_progress,
        }
    }

    /// Whole days since the tracker started, rounded up.
    pub fn days_active(&self, now: DateTime<Utc>) -> i64 {
        days_between(self.state.start_date, now)
    }

    /// Total concepts scaled to a 30-day month, rounded.
    pub fn lifetime_concepts_per_month(&self, now: DateTime<Utc>) -> u64 {
        let days = self.days_active(now);
        if days <= 0 {
            return 0;
        }
        (self.state.concept_history.len() as f64 / days as f64 * 30.0).round() as u64
    }

    pub fn report(&self, now: DateTime<Utc>) -> MetricsReport {
        MetricsReport {
            summary: MetricsSummary {
                start_date: self.state.start_date,
                days_active: self.days_active(now),
                total_concepts: self.state.concept_history.len(),
                problem_solving_tests: self.state.problem_solving_tests.len(),
            },
            periods: self
                .windows
                .iter()
                .map(|&days| (days, self.calculate(days, now)))
                .collect(),
        }
    }

    /// Clears all history and restarts the tracker at `now`.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.state = MetricsState::new(now);
    }
}

/// Days between two instants, rounded up; a partial day counts as one.
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = (end - start).num_milliseconds().unsigned_abs() as f64 / 1000.0;
    (seconds / SECONDS_PER_DAY).ceil() as i64
}

fn percent_of(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 100.0;
    }
    (value / target * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(name: &str, constraint: ConstraintCategory) -> Concept {
        Concept::manual(name, "desc", constraint, &[])
    }

    #[test]
    fn test_days_between_rounds_up() {
        let start = Utc::now();
        assert_eq!(days_between(start, start), 0);
        assert_eq!(days_between(start, start + Duration::hours(1)), 1);
        assert_eq!(days_between(start, start + Duration::days(3)), 3);
        assert_eq!(days_between(start + Duration::days(2), start), 2);
    }

    #[test]
    fn test_window_filters_old_records() {
        let config = LabConfig::default();
        let now = Utc::now();
        let mut tracker = MetricsTracker::new(&config, now - Duration::days(60));

        tracker.record_concept(&concept("old", ConstraintCategory::Causality), now - Duration::days(40));
        tracker.record_concept(&concept("a", ConstraintCategory::Causality), now - Duration::days(2));
        tracker.record_concept(&concept("b", ConstraintCategory::LinearTime), now - Duration::days(1));

        let week = tracker.calculate(7, now);
        assert_eq!(week.concepts_created, 2);
        assert_eq!(week.constraint_distribution[&ConstraintCategory::Causality], 1);
        assert!((week.concepts_per_month - 2.0 / 7.0 * 30.0).abs() < 1e-9);

        let quarter = tracker.calculate(90, now);
        assert_eq!(quarter.concepts_created, 3);
    }

    #[test]
    fn test_progress_is_capped() {
        let config = LabConfig::default();
        let now = Utc::now();
        let mut tracker = MetricsTracker::new(&config, now);

        for i in 0..20 {
            tracker.record_concept(&concept(&format!("c{}", i), ConstraintCategory::BinaryLogic), now);
        }

        let week = tracker.calculate(7, now);
        assert_eq!(week.progress_percent, 100.0);
    }

    #[test]
    fn test_problem_solving_average() {
        let config = LabConfig::default();
        let now = Utc::now();
        let mut tracker = MetricsTracker::new(&config, now);

        assert!(tracker.record_problem_solving_test("p1", 40.0, vec![], now));
        assert!(tracker.record_problem_solving_test("p2", 60.0, vec![], now));
        assert!(!tracker.record_problem_solving_test("p3", f64::NAN, vec![], now));

        let week = tracker.calculate(7, now);
        assert_eq!(week.problem_solving_tests, 2);
        assert_eq!(week.average_improvement, 50.0);
        assert!((week.improvement_progress - 50.0 / 83.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_has_every_window() {
        let config = LabConfig::default();
        let now = Utc::now();
        let mut tracker = MetricsTracker::new(&config, now - Duration::days(10));
        tracker.record_concept(&concept("a", ConstraintCategory::Perspectives), now);

        let report = tracker.report(now);
        assert_eq!(report.summary.days_active, 10);
        assert_eq!(report.summary.total_concepts, 1);
        assert_eq!(report.periods.keys().copied().collect::<Vec<_>>(), vec![7, 30, 90]);
        assert_eq!(tracker.lifetime_concepts_per_month(now), 3);
    }

    #[test]
    fn test_reset() {
        let config = LabConfig::default();
        let now = Utc::now();
        let mut tracker = MetricsTracker::new(&config, now - Duration::days(5));
        tracker.record_concept(&concept("a", ConstraintCategory::Perspectives), now);

        tracker.reset(now);
        assert!(tracker.state().concept_history.is_empty());
        assert_eq!(tracker.days_active(now), 0);
        assert_eq!(tracker.lifetime_concepts_per_month(now), 0);
    }
}
