use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::engine::ConstraintCategory;
use crate::error::LabError;

/// The kind of a workspace element, matching the palette tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Entity,
    Relation,
    Property,
    Process,
    Context,
}

impl ElementKind {
    /// Every kind, in palette order.
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Entity,
        ElementKind::Relation,
        ElementKind::Property,
        ElementKind::Process,
        ElementKind::Context,
    ];

    /// Word used as the trailing part of a suggested concept name.
    pub fn name_suffix(&self) -> &'static str {
        match self {
            ElementKind::Entity => "Being",
            ElementKind::Relation => "Connection",
            ElementKind::Property => "Attribute",
            ElementKind::Process => "Flow",
            ElementKind::Context => "Field",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Entity => "entity",
            ElementKind::Relation => "relation",
            ElementKind::Property => "property",
            ElementKind::Process => "process",
            ElementKind::Context => "context",
        };
        f.write_str(name)
    }
}

impl FromStr for ElementKind {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.to_string() == wanted)
            .ok_or_else(|| LabError::Validation(format!("Unknown element type: {}", s)))
    }
}

/// A small labeled unit placed in the workspace and combined into concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier (`element-<uuid>` for elements created in the lab).
    pub id: String,
    /// Palette kind of the element.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Text substituted into concept templates.
    pub label: String,
}

impl Element {
    /// Creates an element with a fresh identifier.
    pub fn new(kind: ElementKind, label: impl Into<String>) -> Self {
        Self {
            id: format!("element-{}", Uuid::new_v4()),
            kind,
            label: label.into(),
        }
    }

    /// Creates an element with a caller-chosen identifier.
    pub fn with_id(id: impl Into<String>, kind: ElementKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
        }
    }
}

/// A named, described, constraint-tagged artifact built from two or more elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: String,
    pub name: String,
    pub description: String,
    pub constraint: ConstraintCategory,
    /// Snapshot of the source elements at creation time, in selection order.
    pub elements: Vec<Element>,
    /// Name of the generator pattern used; absent for manually saved concepts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(alias = "created")]
    pub created_at: DateTime<Utc>,
}

impl Concept {
    /// Creates a manually authored concept from a snapshot of `elements`.
    pub fn manual(
        name: impl Into<String>,
        description: impl Into<String>,
        constraint: ConstraintCategory,
        elements: &[Element],
    ) -> Self {
        Self {
            id: new_concept_id(),
            name: name.into(),
            description: description.into(),
            constraint,
            elements: elements.to_vec(),
            pattern: None,
            created_at: Utc::now(),
        }
    }
}

/// Generates a fresh concept identifier.
pub fn new_concept_id() -> String {
    format!("concept-{}", Uuid::new_v4())
}

/// A concept as it appears in the community feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedConcept {
    #[serde(flatten)]
    pub concept: Concept,
    /// Display name of whoever shared it.
    pub author: String,
    /// When it was shared.
    pub shared: DateTime<Utc>,
}

/// Output of solution synthesis for a problem description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub approach: String,
    pub insights: String,
}
