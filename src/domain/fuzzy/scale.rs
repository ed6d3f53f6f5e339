//! Linguistic scales - fixed vocabularies of labels bound to triangular fuzzy numbers.
//!
//! Two independent seven-term scales exist: one for criterion importance and
//! one for alternative performance. Both bind their terms, in order, to the
//! same seven triangular numbers. Unknown labels resolve to the scale's
//! neutral term rather than failing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TriangularFuzzyNumber;

type Tfn = TriangularFuzzyNumber;

/// Triangular numbers shared by both scales, weakest to strongest.
const SCALE_POINTS: [Tfn; 7] = [
    Tfn::new(0.0, 0.0, 0.1),
    Tfn::new(0.0, 0.1, 0.3),
    Tfn::new(0.1, 0.3, 0.5),
    Tfn::new(0.3, 0.5, 0.7),
    Tfn::new(0.5, 0.7, 0.9),
    Tfn::new(0.7, 0.7, 1.0),
    Tfn::new(0.9, 1.0, 1.0),
];

/// Behaviour shared by the terms of a linguistic scale.
pub trait LinguisticTerm: Copy + Default + PartialEq + fmt::Debug + 'static {
    /// Every term of the scale, weakest to strongest.
    const ALL: &'static [Self];

    /// Which scale this term belongs to.
    const KIND: ScaleKind;

    /// Position on the scale (0 = weakest).
    fn ordinal(&self) -> usize;

    /// The symbolic label, e.g. `"MH"`.
    fn label(&self) -> &'static str;

    /// The triangular number bound to this term.
    fn tfn(&self) -> Tfn {
        SCALE_POINTS[self.ordinal()]
    }

    /// Parses an exact label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|term| term.label() == label)
    }

    /// Parses a label, substituting the neutral term for unknown input.
    fn from_label_or_default(label: &str) -> Self {
        Self::from_label(label).unwrap_or_else(|| {
            let scale = Self::KIND;
            tracing::trace!(label, scale = %scale, "unknown term, using neutral default");
            Self::default()
        })
    }
}

/// Criterion-importance term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportanceTerm {
    #[serde(rename = "VL")]
    VeryLow,
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "ML")]
    MediumLow,
    #[default]
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "MH")]
    MediumHigh,
    #[serde(rename = "H")]
    High,
    #[serde(rename = "VH")]
    VeryHigh,
}

impl LinguisticTerm for ImportanceTerm {
    const ALL: &'static [Self] = &[
        ImportanceTerm::VeryLow,
        ImportanceTerm::Low,
        ImportanceTerm::MediumLow,
        ImportanceTerm::Medium,
        ImportanceTerm::MediumHigh,
        ImportanceTerm::High,
        ImportanceTerm::VeryHigh,
    ];

    const KIND: ScaleKind = ScaleKind::Importance;

    fn ordinal(&self) -> usize {
        *self as usize
    }

    fn label(&self) -> &'static str {
        match self {
            ImportanceTerm::VeryLow => "VL",
            ImportanceTerm::Low => "L",
            ImportanceTerm::MediumLow => "ML",
            ImportanceTerm::Medium => "M",
            ImportanceTerm::MediumHigh => "MH",
            ImportanceTerm::High => "H",
            ImportanceTerm::VeryHigh => "VH",
        }
    }
}

/// Alternative-performance term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceTerm {
    #[serde(rename = "VP")]
    VeryPoor,
    #[serde(rename = "P")]
    Poor,
    #[serde(rename = "MP")]
    MediumPoor,
    #[default]
    #[serde(rename = "F")]
    Fair,
    #[serde(rename = "MG")]
    MediumGood,
    #[serde(rename = "G")]
    Good,
    #[serde(rename = "VG")]
    VeryGood,
}

impl LinguisticTerm for PerformanceTerm {
    const ALL: &'static [Self] = &[
        PerformanceTerm::VeryPoor,
        PerformanceTerm::Poor,
        PerformanceTerm::MediumPoor,
        PerformanceTerm::Fair,
        PerformanceTerm::MediumGood,
        PerformanceTerm::Good,
        PerformanceTerm::VeryGood,
    ];

    const KIND: ScaleKind = ScaleKind::Performance;

    fn ordinal(&self) -> usize {
        *self as usize
    }

    fn label(&self) -> &'static str {
        match self {
            PerformanceTerm::VeryPoor => "VP",
            PerformanceTerm::Poor => "P",
            PerformanceTerm::MediumPoor => "MP",
            PerformanceTerm::Fair => "F",
            PerformanceTerm::MediumGood => "MG",
            PerformanceTerm::Good => "G",
            PerformanceTerm::VeryGood => "VG",
        }
    }
}

/// Selects one of the two scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Importance,
    Performance,
}

impl ScaleKind {
    /// Resolves `label` on this scale; unknown labels give the neutral number.
    pub fn lookup(&self, label: &str) -> Tfn {
        match self {
            ScaleKind::Importance => ImportanceTerm::from_label_or_default(label).tfn(),
            ScaleKind::Performance => PerformanceTerm::from_label_or_default(label).tfn(),
        }
    }

    /// Label substituted for absent or unknown cells.
    pub fn neutral_label(&self) -> &'static str {
        match self {
            ScaleKind::Importance => ImportanceTerm::default().label(),
            ScaleKind::Performance => PerformanceTerm::default().label(),
        }
    }

    /// All labels, weakest to strongest.
    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            ScaleKind::Importance => ImportanceTerm::ALL.iter().map(|t| t.label()).collect(),
            ScaleKind::Performance => PerformanceTerm::ALL.iter().map(|t| t.label()).collect(),
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleKind::Importance => f.write_str("importance"),
            ScaleKind::Performance => f.write_str("performance"),
        }
    }
}

/// Looks up `label` on the given scale.
pub fn lookup(kind: ScaleKind, label: &str) -> Tfn {
    kind.lookup(label)
}
