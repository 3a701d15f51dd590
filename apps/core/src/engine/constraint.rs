//! Constraint categories.
//!
//! The five linguistic limitations that concepts are tagged with and that
//! free text is scored against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::LabError;
use crate::models::ElementKind;

/// One of the fixed linguistic-limitation tags.
///
/// Declaration order is significant: analysis results and gaps are reported
/// in this order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ConstraintCategory {
    /// Separation between observer and observed
    #[default]
    SubjectObject,
    /// Sequential, before/after temporality
    LinearTime,
    /// Direct cause-effect relationships
    Causality,
    /// True/false distinctions
    BinaryLogic,
    /// Single-viewpoint framing
    Perspectives,
}

impl fmt::Display for ConstraintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for ConstraintCategory {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.tag() == tag)
            .ok_or_else(|| LabError::UnknownConstraint(s.to_string()))
    }
}

impl ConstraintCategory {
    /// Every category, in reporting order.
    pub const ALL: [ConstraintCategory; 5] = [
        ConstraintCategory::SubjectObject,
        ConstraintCategory::LinearTime,
        ConstraintCategory::Causality,
        ConstraintCategory::BinaryLogic,
        ConstraintCategory::Perspectives,
    ];

    /// Kebab-case tag used in storage and on the command line
    pub fn tag(&self) -> &'static str {
        match self {
            ConstraintCategory::SubjectObject => "subject-object",
            ConstraintCategory::LinearTime => "linear-time",
            ConstraintCategory::Causality => "causality",
            ConstraintCategory::BinaryLogic => "binary-logic",
            ConstraintCategory::Perspectives => "perspectives",
        }
    }

    /// Resolve a tag, falling back to `SubjectObject` for anything unknown.
    pub fn from_tag_lenient(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            warn!(tag, "Unknown constraint tag, falling back to subject-object");
            ConstraintCategory::SubjectObject
        })
    }

    /// Human-readable name of the limitation this category targets
    pub fn limitation_label(&self) -> &'static str {
        match self {
            ConstraintCategory::SubjectObject => "Subject-Object Separation",
            ConstraintCategory::LinearTime => "Linear Temporality",
            ConstraintCategory::Causality => "Direct Causality",
            ConstraintCategory::BinaryLogic => "Binary Logic",
            ConstraintCategory::Perspectives => "Single Perspective",
        }
    }

    /// Instruction shown when the workspace switches to this category
    pub fn guidance(&self) -> &'static str {
        match self {
            ConstraintCategory::SubjectObject => {
                "Create concepts that transcend the separation between subject and object"
            }
            ConstraintCategory::LinearTime => {
                "Design concepts that exist outside linear temporal progression"
            }
            ConstraintCategory::Causality => {
                "Form concepts that bypass simple cause-effect relationships"
            }
            ConstraintCategory::BinaryLogic => {
                "Develop concepts that operate beyond binary true/false logic"
            }
            ConstraintCategory::Perspectives => {
                "Create concepts that transcend single-perspective limitations"
            }
        }
    }

    /// Leading word of a suggested name for a manually saved concept
    pub fn name_prefix(&self) -> &'static str {
        match self {
            ConstraintCategory::SubjectObject => "Unified",
            ConstraintCategory::LinearTime => "Atemporal",
            ConstraintCategory::Causality => "Acausal",
            ConstraintCategory::BinaryLogic => "Quantum",
            ConstraintCategory::Perspectives => "Omniperspective",
        }
    }

    /// Label given to a new workspace element of `kind` under this category
    pub fn element_label(&self, kind: ElementKind) -> &'static str {
        use ConstraintCategory::*;
        use ElementKind::*;

        match (self, kind) {
            (SubjectObject, Entity) => "Subject-Object",
            (SubjectObject, Relation) => "Non-dualistic Binding",
            (SubjectObject, Property) => "Shared Attribute",
            (SubjectObject, Process) => "Subject-Object Merger",
            (SubjectObject, Context) => "Unity Field",

            (LinearTime, Entity) => "Time-Independent",
            (LinearTime, Relation) => "Asynchronous Link",
            (LinearTime, Property) => "Temporal Invariant",
            (LinearTime, Process) => "Non-sequential Flow",
            (LinearTime, Context) => "Time Field",

            (Causality, Entity) => "Acausal Node",
            (Causality, Relation) => "Mutual Emergence",
            (Causality, Property) => "Uncaused Attribute",
            (Causality, Process) => "Circular Causation",
            (Causality, Context) => "Causality Field",

            (BinaryLogic, Entity) => "Multi-valued Object",
            (BinaryLogic, Relation) => "Superposition Link",
            (BinaryLogic, Property) => "Quantum Attribute",
            (BinaryLogic, Process) => "State Fluidity",
            (BinaryLogic, Context) => "Logic Field",

            (Perspectives, Entity) => "Multi-perspective",
            (Perspectives, Relation) => "Viewpoint Fusion",
            (Perspectives, Property) => "Perspective-invariant",
            (Perspectives, Process) => "Observer Merger",
            (Perspectives, Context) => "Perspective Field",
        }
    }
}
