//! Solution synthesis.
//!
//! Combines the gaps found in a problem description with the concepts the
//! user has built, pairing each gap with a concept of the same category.

use tracing::debug;

use super::analyzer::{Gap, LexicalConstraintAnalyzer};
use super::random::{choose, RandomSource};
use crate::models::{Concept, Solution};

/// Characters of a concept description quoted in an approach
pub const DESCRIPTION_EXCERPT_CHARS: usize = 100;

const INSUFFICIENT_APPROACH: &str = "Insufficient information to generate solution.";
const INSUFFICIENT_INSIGHTS: &str =
    "Please provide both a problem description and relevant concepts.";

const MATCHED_APPROACH: &str =
    "This problem exhibits linguistic constraints that can be addressed with your developed concepts:";
const MATCHED_CLOSING: &str = "By applying these concepts, you can approach the problem from a linguistic framework that allows previously inaccessible solutions to emerge.";

const UNMATCHED_APPROACH: &str =
    "This problem exhibits linguistic constraints, but you don't have matching concepts yet:";
const UNMATCHED_CLOSING: &str = "Developing concepts that address these specific linguistic constraints would empower new solution approaches.";

const NO_GAPS_APPROACH: &str = "This problem doesn't exhibit clear linguistic constraints, but your concepts may still offer novel perspectives:";
const NO_GAPS_INSIGHTS: &str = "Sometimes the most powerful approach is to apply a concept that seems unrelated, forcing the mind to create connections that bypass habitual thinking patterns.";

impl LexicalConstraintAnalyzer {
    /// Suggest an approach to `problem` using `concepts`.
    ///
    /// Never fails: missing input yields a fixed explanatory pair.
    pub fn generate_solution<R: RandomSource + ?Sized>(
        &self,
        problem: &str,
        concepts: &[Concept],
        rng: &mut R,
    ) -> Solution {
        if problem.is_empty() || concepts.is_empty() {
            return Solution {
                approach: INSUFFICIENT_APPROACH.to_string(),
                insights: INSUFFICIENT_INSIGHTS.to_string(),
            };
        }

        let gaps = self.identify_gaps(problem, rng);
        let matches: Vec<(&Gap, &Concept)> = gaps
            .iter()
            .filter_map(|gap| {
                concepts
                    .iter()
                    .find(|c| c.constraint == gap.category)
                    .map(|concept| (gap, concept))
            })
            .collect();

        debug!(gaps = gaps.len(), matched = matches.len(), "Synthesizing solution");

        if !matches.is_empty() {
            let mut approach = MATCHED_APPROACH.to_string();
            let mut insights = String::new();

            for (gap, concept) in &matches {
                approach.push_str(&format!("\n\n• {}", gap.description));
                approach.push_str(&format!(
                    "\n  Apply concept: {} - {}...",
                    concept.name,
                    excerpt(&concept.description)
                ));
                if let Some(alternative) = gap.alternatives.first() {
                    insights.push_str(&format!("\n\n• Alternative expression: \"{}\"", alternative));
                }
            }
            insights.push_str(&format!("\n\n{}", MATCHED_CLOSING));

            return Solution { approach, insights };
        }

        if !gaps.is_empty() {
            let mut approach = UNMATCHED_APPROACH.to_string();
            let mut insights = String::new();

            for gap in &gaps {
                approach.push_str(&format!("\n\n• {}", gap.description));
                if let Some(alternative) = gap.alternatives.first() {
                    insights.push_str(&format!(
                        "\n\n• Consider this alternative framing: \"{}\"",
                        alternative
                    ));
                }
            }
            insights.push_str(&format!("\n\n{}", UNMATCHED_CLOSING));

            return Solution { approach, insights };
        }

        let mut approach = NO_GAPS_APPROACH.to_string();
        if let Some(concept) = choose(rng, concepts) {
            approach.push_str(&format!(
                "\n\n• Consider applying {} to reframe the problem in a way that transcends conventional thinking.",
                concept.name
            ));
        }

        Solution {
            approach,
            insights: NO_GAPS_INSIGHTS.to_string(),
        }
    }
}

fn excerpt(description: &str) -> String {
    description.chars().take(DESCRIPTION_EXCERPT_CHARS).collect()
}
