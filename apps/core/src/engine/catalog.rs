//! Constraint catalog.
//!
//! Static configuration for every constraint category: generator patterns and
//! descriptions, analyzer patterns and keywords, alternative-phrasing
//! templates and gap descriptions. Adding a category is a data change here;
//! the generator and analyzer are generic over these tables.
//!
//! Templates carry two slots, `{0}` and `{1}`.

use super::constraint::ConstraintCategory;

/// A named two-slot template used to build concept descriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptPattern {
    pub name: &'static str,
    pub template: &'static str,
}

/// Everything the engine knows about one constraint category
#[derive(Debug)]
pub struct ConstraintProfile {
    pub category: ConstraintCategory,
    /// Name/template pairs the generator picks from
    pub patterns: &'static [ConceptPattern],
    /// Description prefixes the generator picks from
    pub descriptions: &'static [&'static str],
    /// Case-insensitive regular expressions the analyzer tests
    pub text_patterns: &'static [&'static str],
    /// Whole-word keywords the analyzer counts
    pub keywords: &'static [&'static str],
    /// Alternative phrasings filled with keywords taken from analyzed text
    pub alternative_templates: &'static [&'static str],
    /// Human-readable description of the gap this category represents
    pub gap_description: &'static str,
}

/// Short tokens appended to generated concept names.
pub const NAME_SUFFIXES: &[&str] = &[
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Prime", "Nexus", "Node", "Field", "Wave",
    "Omega", "Zero", "One", "All", "Void",
];

static SUBJECT_OBJECT: ConstraintProfile = ConstraintProfile {
    category: ConstraintCategory::SubjectObject,
    patterns: &[
        ConceptPattern {
            name: "Unifier",
            template: "A state where {0} and {1} become indistinguishable",
        },
        ConceptPattern {
            name: "Non-dual Perceiver",
            template: "An awareness that experiences {0} without separation from {1}",
        },
        ConceptPattern {
            name: "Subject-Object Merger",
            template: "A process where {0} and {1} continuously flow into each other",
        },
    ],
    descriptions: &[
        "A concept that eliminates the boundary between perceiver and perceived",
        "An experience where the observer and observed become a unified field",
        "A state of awareness where inside and outside are recognized as the same",
    ],
    text_patterns: &[
        "subject.*object",
        ".*observer.*observed",
        "perceive.*external",
        "separate.*from",
    ],
    keywords: &[
        "observe",
        "perceive",
        "subject",
        "object",
        "external",
        "internal",
        "separation",
    ],
    alternative_templates: &[
        "A non-dualistic state where {0} and {1} exist without separation",
        "A unified field of {0}-{1} that transcends differentiation",
        "A process where {0} and {1} continuously flow into each other",
    ],
    gap_description: "This text assumes a separation between observer and observed, limiting expression of unified experiences.",
};

static LINEAR_TIME: ConstraintProfile = ConstraintProfile {
    category: ConstraintCategory::LinearTime,
    patterns: &[
        ConceptPattern {
            name: "Temporal Field",
            template: "A domain where {0} and {1} exist simultaneously across all timeframes",
        },
        ConceptPattern {
            name: "Chronos Loop",
            template: "A process where {0} precedes {1} which precedes {0}",
        },
        ConceptPattern {
            name: "Atemporal Node",
            template: "A point where {0} and {1} interact outside sequential time",
        },
    ],
    descriptions: &[
        "A concept that exists across past, present, and future simultaneously",
        "A phenomenon where sequence gives way to simultaneous existence",
        "A state where time becomes a dimension that can be navigated non-linearly",
    ],
    text_patterns: &[
        "before.*after",
        "past.*future",
        "sequential",
        "chronological",
        "timeline",
    ],
    keywords: &[
        "time",
        "sequence",
        "chronology",
        "past",
        "present",
        "future",
        "temporal",
    ],
    alternative_templates: &[
        "A state where {0} and {1} exist simultaneously across all timeframes",
        "A domain where {0} precedes, coincides with, and follows {1}",
        "An atemporal relationship between {0} and {1} outside sequential causation",
    ],
    gap_description: "The language here enforces linear temporality, preventing expression of non-sequential relationships.",
};

static CAUSALITY: ConstraintProfile = ConstraintProfile {
    category: ConstraintCategory::Causality,
    patterns: &[
        ConceptPattern {
            name: "Mutual Emergence",
            template: "A phenomenon where {0} and {1} simultaneously cause each other",
        },
        ConceptPattern {
            name: "Causal Mesh",
            template: "A network where {0} and {1} have non-directional causal relationships",
        },
        ConceptPattern {
            name: "Acausal Sync",
            template: "A meaningful connection between {0} and {1} without causal linkage",
        },
    ],
    descriptions: &[
        "A system where effects can precede causes without paradox",
        "A network of relationships where causation flows in multiple directions",
        "A field where meaningful connections replace cause-effect relationships",
    ],
    text_patterns: &[
        "cause.*effect",
        "result.*from",
        "lead.*to",
        "because",
        "therefore",
    ],
    keywords: &[
        "cause",
        "effect",
        "result",
        "reason",
        "consequence",
        "because",
        "due to",
    ],
    alternative_templates: &[
        "A bidirectional emergence pattern where {0} and {1} co-create each other",
        "A non-causal synchronicity between {0} and {1}",
        "A mutual manifestation field connecting {0} and {1} without directional causation",
    ],
    gap_description: "This phrasing enforces direct causality, limiting description of acausal or mutually emergent phenomena.",
};

static BINARY_LOGIC: ConstraintProfile = ConstraintProfile {
    category: ConstraintCategory::BinaryLogic,
    patterns: &[
        ConceptPattern {
            name: "Quantum State",
            template: "A condition where {0} and {1} are simultaneously true and false",
        },
        ConceptPattern {
            name: "Paradox Field",
            template: "A domain where {0} and {1} maintain contradictory truth values",
        },
        ConceptPattern {
            name: "Multi-value Logic",
            template: "A system where {0} and {1} exist across a spectrum of truth values",
        },
    ],
    descriptions: &[
        "A concept that maintains contradictory properties simultaneously",
        "A state where multiple truth values can coexist without resolution",
        "A system that operates beyond the constraints of true/false distinctions",
    ],
    text_patterns: &[
        "either.*or",
        "true.*false",
        "correct.*incorrect",
        "right.*wrong",
    ],
    keywords: &[
        "true",
        "false",
        "binary",
        "either",
        "or",
        "dichotomy",
        "exclusive",
    ],
    alternative_templates: &[
        "A quantum state where {0} and {1} maintain both truth and falsity simultaneously",
        "A multi-valued logical relationship between {0} and {1} beyond binary options",
        "A spectral truth domain connecting {0} and {1}",
    ],
    gap_description: "The logic structure here enforces binary true/false distinctions, preventing multi-valued expressions.",
};

static PERSPECTIVES: ConstraintProfile = ConstraintProfile {
    category: ConstraintCategory::Perspectives,
    patterns: &[
        ConceptPattern {
            name: "Omniperspective",
            template: "A viewpoint that simultaneously experiences {0} and {1} from all possible perspectives",
        },
        ConceptPattern {
            name: "Perspective Fusion",
            template: "A merging of all possible viewpoints on {0} and {1}",
        },
        ConceptPattern {
            name: "Observer Network",
            template: "A system where multiple observers of {0} and {1} form a unified awareness",
        },
    ],
    descriptions: &[
        "A viewpoint that encompasses all possible perspectives simultaneously",
        "A mode of perception that integrates subjective and objective completely",
        "A form of awareness that transcends the limitations of single-point observation",
    ],
    text_patterns: &[
        "from.*perspective",
        "point of view",
        "from.*standpoint",
        "my.*opinion",
    ],
    keywords: &[
        "perspective",
        "viewpoint",
        "opinion",
        "stance",
        "position",
        "view",
        "angle",
    ],
    alternative_templates: &[
        "An omniperspectival view that integrates all possible viewpoints on {0} and {1}",
        "A perspective-invariant relationship between {0} and {1}",
        "A consensus awareness field that harmonizes all perspectives on {0} and {1}",
    ],
    gap_description: "This viewpoint is perspective-bound, limiting expression of omniperspectival concepts.",
};

/// Returns the configuration for `category`.
pub fn profile(category: ConstraintCategory) -> &'static ConstraintProfile {
    match category {
        ConstraintCategory::SubjectObject => &SUBJECT_OBJECT,
        ConstraintCategory::LinearTime => &LINEAR_TIME,
        ConstraintCategory::Causality => &CAUSALITY,
        ConstraintCategory::BinaryLogic => &BINARY_LOGIC,
        ConstraintCategory::Perspectives => &PERSPECTIVES,
    }
}

/// All profiles in reporting order.
pub fn profiles() -> impl Iterator<Item = &'static ConstraintProfile> {
    ConstraintCategory::ALL.into_iter().map(profile)
}
