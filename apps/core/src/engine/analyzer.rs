//! Lexical constraint analysis.
//!
//! Scores free text against every constraint category using the catalog's
//! regular expressions and whole-word keywords, reports the categories that
//! cross the detection threshold as gaps, and proposes alternative phrasings
//! built from words taken out of the text itself.
//!
//! Scoring is purely lexical: a pattern hit is worth 0.6 and keyword density
//! contributes up to 0.4.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

use super::catalog::{self, ConstraintProfile};
use super::constraint::ConstraintCategory;
use super::random::{pick_distinct, RandomSource};
use super::template;

/// Contribution of any pattern match to a category score
pub const PATTERN_WEIGHT: f32 = 0.6;
/// Maximum contribution of keyword density to a category score
pub const KEYWORD_WEIGHT: f32 = 0.4;
/// A category is reported as found when its score is strictly above this
pub const FOUND_THRESHOLD: f32 = 0.3;
/// Tokens must be longer than this many characters to feed alternatives
pub const MIN_KEYWORD_CHARS: usize = 4;
/// Size of the keyword pool used to fill alternative templates
pub const KEYWORD_POOL_SIZE: usize = 5;

/// Per-category analysis outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Score in `[0, 1]`
    pub score: f32,
    /// `score > FOUND_THRESHOLD`
    pub found: bool,
    /// Number of distinct configured keywords present in the text
    pub keywords_found: usize,
}

impl AnalysisResult {
    fn from_counts(pattern_found: bool, keywords_found: usize, total_keywords: usize) -> Self {
        let pattern_score = if pattern_found { PATTERN_WEIGHT } else { 0.0 };
        let keyword_score = if total_keywords == 0 {
            0.0
        } else {
            (keywords_found as f32 / total_keywords as f32 * KEYWORD_WEIGHT).min(KEYWORD_WEIGHT)
        };
        let score = (pattern_score + keyword_score).clamp(0.0, 1.0);

        Self {
            score,
            found: score > FOUND_THRESHOLD,
            keywords_found,
        }
    }
}

/// Scores for every category, iterated in category order
pub type ConstraintAnalysis = BTreeMap<ConstraintCategory, AnalysisResult>;

/// A detected linguistic constraint with suggested rephrasings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    #[serde(rename = "type")]
    pub category: ConstraintCategory,
    pub description: String,
    pub confidence: f32,
    pub alternatives: Vec<String>,
}

/// Catalog profile with its expressions compiled
struct CompiledProfile {
    profile: &'static ConstraintProfile,
    patterns: Vec<Regex>,
    keywords: Vec<Regex>,
}

// Compile every category's expressions once.
// NOTE: expect() is acceptable here: the catalog is static and covered by tests.
static COMPILED: LazyLock<Vec<CompiledProfile>> = LazyLock::new(|| {
    catalog::profiles()
        .map(|profile| CompiledProfile {
            profile,
            patterns: profile
                .text_patterns
                .iter()
                .map(|p| {
                    Regex::new(&format!("(?i){}", p)).expect("Invalid regex: catalog text pattern")
                })
                .collect(),
            keywords: profile
                .keywords
                .iter()
                .map(|k| {
                    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(k)))
                        .expect("Invalid regex: catalog keyword")
                })
                .collect(),
        })
        .collect()
});

/// Stateless analyzer over the static constraint catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalConstraintAnalyzer;

impl LexicalConstraintAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score `text` against every category.
    ///
    /// Returns `None` for empty text.
    pub fn analyze(&self, text: &str) -> Option<ConstraintAnalysis> {
        if text.is_empty() {
            return None;
        }

        let results: ConstraintAnalysis = COMPILED
            .iter()
            .map(|compiled| (compiled.profile.category, Self::score(compiled, text)))
            .collect();

        debug!(
            found = results.values().filter(|r| r.found).count(),
            "Analyzed text for linguistic constraints"
        );

        Some(results)
    }

    /// Score `text` against a single category
    pub fn analyze_category(&self, text: &str, category: ConstraintCategory) -> AnalysisResult {
        COMPILED
            .iter()
            .find(|c| c.profile.category == category)
            .map(|compiled| Self::score(compiled, text))
            .unwrap_or_else(|| AnalysisResult::from_counts(false, 0, 0))
    }

    fn score(compiled: &CompiledProfile, text: &str) -> AnalysisResult {
        let pattern_found = compiled.patterns.iter().any(|re| re.is_match(text));
        let keywords_found = compiled.keywords.iter().filter(|re| re.is_match(text)).count();

        AnalysisResult::from_counts(pattern_found, keywords_found, compiled.keywords.len())
    }

    /// Report every found category as a gap, in category order.
    pub fn identify_gaps<R: RandomSource + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<Gap> {
        let Some(analysis) = self.analyze(text) else {
            return Vec::new();
        };

        analysis
            .into_iter()
            .filter(|(_, result)| result.found)
            .map(|(category, result)| Gap {
                category,
                description: catalog::profile(category).gap_description.to_string(),
                confidence: result.score,
                alternatives: self.generate_alternatives(text, category, rng),
            })
            .collect()
    }

    /// Fill every alternative template of `constraint` with two distinct
    /// words drawn from the text's keyword pool.
    ///
    /// Empty when the pool holds fewer than two words.
    pub fn generate_alternatives<R: RandomSource + ?Sized>(
        &self,
        text: &str,
        constraint: ConstraintCategory,
        rng: &mut R,
    ) -> Vec<String> {
        let pool = Self::keyword_pool(text);
        if pool.len() < 2 {
            return Vec::new();
        }

        catalog::profile(constraint)
            .alternative_templates
            .iter()
            .map(|t| {
                let picked = pick_distinct(rng, pool.len(), 2);
                template::fill(t, &pool[picked[0]], &pool[picked[1]])
            })
            .collect()
    }

    /// The first five whitespace-separated words longer than four
    /// characters, with `.,;?!` removed.
    pub fn keyword_pool(text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
            .map(|word| word.replace(['.', ',', ';', '?', '!'], ""))
            .filter(|word| !word.is_empty())
            .take(KEYWORD_POOL_SIZE)
            .collect()
    }
}
