//! Narrative analysis types.

use serde::{Deserialize, Serialize};

/// The analysis block attached to a report.
///
/// Every field is optional; list fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Analysis {
    /// One-paragraph overview
    pub overview: Option<String>,

    /// Key points
    pub key_points: Vec<String>,

    /// Structured plan, in execution order
    pub plan: Vec<PlanStep>,

    /// Opportunities
    pub opportunities: Vec<String>,

    /// Risks
    pub risks: Vec<String>,

    /// Sources the analysis drew on
    pub attribution: Vec<Attribution>,

    /// Confidence statement (e.g. "High")
    pub confidence: Option<String>,
}

impl Analysis {
    /// Create an empty analysis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overview.
    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    /// Set the key points.
    pub fn with_key_points<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.key_points = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the plan steps.
    pub fn with_plan(mut self, plan: Vec<PlanStep>) -> Self {
        self.plan = plan;
        self
    }

    /// Set the opportunities.
    pub fn with_opportunities<S: Into<String>>(
        mut self,
        items: impl IntoIterator<Item = S>,
    ) -> Self {
        self.opportunities = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the risks.
    pub fn with_risks<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.risks = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the attribution list.
    pub fn with_attribution(mut self, attribution: Vec<Attribution>) -> Self {
        self.attribution = attribution;
        self
    }

    /// Set the confidence statement.
    pub fn with_confidence(mut self, confidence: impl Into<String>) -> Self {
        self.confidence = Some(confidence.into());
        self
    }

    /// Overview text, if present and not blank.
    pub fn overview(&self) -> Option<&str> {
        non_blank(self.overview.as_deref())
    }

    /// Confidence text, if present and not blank.
    pub fn confidence(&self) -> Option<&str> {
        non_blank(self.confidence.as_deref())
    }

    /// Check whether the analysis would render nothing.
    pub fn is_empty(&self) -> bool {
        self.overview().is_none()
            && self.key_points.is_empty()
            && self.plan.is_empty()
            && self.opportunities.is_empty()
            && self.risks.is_empty()
            && self.attribution.is_empty()
            && self.confidence().is_none()
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// One step of the structured plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanStep {
    /// Short step title
    pub step: String,

    /// Optional elaboration
    pub detail: Option<String>,
}

impl PlanStep {
    /// Create a plan step without detail.
    pub fn new(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            detail: None,
        }
    }

    /// Attach a detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// A cited source and what was taken from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribution {
    /// Source name or URL
    pub source: String,

    /// Notes on what the source contributed
    pub notes: String,
}

impl Attribution {
    /// Create a new attribution.
    pub fn new(source: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            notes: notes.into(),
        }
    }
}
