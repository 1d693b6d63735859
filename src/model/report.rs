//! Report-level types.

use super::{Analysis, Chart, Spreadsheet};
use serde::{Deserialize, Serialize};

/// The structured result of a chat turn, ready for export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Report {
    /// Narrative summary
    pub summary: String,

    /// Short highlight bullets
    pub highlights: Option<Vec<String>>,

    /// Headline metrics (label/value pairs)
    pub metrics: Option<Vec<Metric>>,

    /// Narrative analysis block
    pub analysis: Option<Analysis>,

    /// The active spreadsheet
    pub spreadsheet: Spreadsheet,

    /// Chart series derived from the spreadsheet
    pub chart: Chart,

    /// Suggested follow-up actions
    pub actions: Option<Vec<String>>,
}

impl Report {
    /// Create a new report with a summary and an empty spreadsheet.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Set the highlight bullets.
    pub fn with_highlights<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.highlights = Some(items.into_iter().map(Into::into).collect());
        self
    }

    /// Set the headline metrics.
    pub fn with_metrics(mut self, metrics: Vec<Metric>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Set the analysis block.
    pub fn with_analysis(mut self, analysis: Analysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    /// Set the active spreadsheet.
    pub fn with_spreadsheet(mut self, spreadsheet: Spreadsheet) -> Self {
        self.spreadsheet = spreadsheet;
        self
    }

    /// Set the chart series.
    pub fn with_chart(mut self, chart: Chart) -> Self {
        self.chart = chart;
        self
    }

    /// Set the follow-up actions.
    pub fn with_actions<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.actions = Some(items.into_iter().map(Into::into).collect());
        self
    }

    /// Highlights, or an empty slice when absent.
    pub fn highlights(&self) -> &[String] {
        self.highlights.as_deref().unwrap_or_default()
    }

    /// Metrics, or an empty slice when absent.
    pub fn metrics(&self) -> &[Metric] {
        self.metrics.as_deref().unwrap_or_default()
    }

    /// Actions, or an empty slice when absent.
    pub fn actions(&self) -> &[String] {
        self.actions.as_deref().unwrap_or_default()
    }

    /// Load a report from its JSON form.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A labelled headline number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric label (e.g. "Revenue")
    pub label: String,

    /// Display value (already formatted)
    pub value: String,
}

impl Metric {
    /// Create a new metric.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_sections_read_as_empty() {
        let report = Report::new("Quarterly revenue");
        assert!(report.highlights().is_empty());
        assert!(report.metrics().is_empty());
        assert!(report.actions().is_empty());
        assert!(report.analysis.is_none());
    }

    #[test]
    fn test_from_json_tolerates_missing_fields() {
        let report = Report::from_json(r#"{"summary": "Hi"}"#).unwrap();
        assert_eq!(report.summary, "Hi");
        assert!(report.metrics.is_none());
        assert!(report.spreadsheet.rows.is_empty());
    }

    #[test]
    fn test_from_json_camel_case() {
        let json = r#"{
            "summary": "S",
            "metrics": [{"label": "Revenue", "value": "$4.2M"}],
            "spreadsheet": {"name": "Market Insights", "lastUpdated": "Today", "rows": [["a", "b"]]},
            "chart": {"title": "Revenue", "labels": ["A"], "values": [1.5]}
        }"#;
        let report = Report::from_json(json).unwrap();
        assert_eq!(report.metrics()[0], Metric::new("Revenue", "$4.2M"));
        assert_eq!(report.spreadsheet.last_updated, "Today");
        assert_eq!(report.chart.values, vec![1.5]);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            Report::from_json("{not json"),
            Err(crate::Error::Json(_))
        ));
    }
}
