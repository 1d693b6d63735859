//! Spreadsheet and chart types.

use serde::{Deserialize, Serialize};

/// The active spreadsheet: a named, ragged grid of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spreadsheet {
    /// Display name (also drives the export filename)
    pub name: String,

    /// Human-readable last-updated stamp
    pub last_updated: String,

    /// Row grid; rows may have differing lengths
    pub rows: Vec<Vec<String>>,
}

impl Spreadsheet {
    /// Create a new spreadsheet.
    pub fn new(name: impl Into<String>, last_updated: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_updated: last_updated.into(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn add_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Builder form of [`Spreadsheet::add_row`].
    pub fn with_row<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.add_row(cells);
        self
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Title line: name plus the last-updated stamp when known.
    pub fn title_line(&self) -> String {
        match (self.name.trim(), self.last_updated.trim()) {
            (name, "") => name.to_string(),
            ("", stamp) => format!("Last updated {}", stamp),
            (name, stamp) => format!("{} (Last updated {})", name, stamp),
        }
    }
}

/// A single chart series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chart {
    /// Chart title
    pub title: String,

    /// Category labels
    pub labels: Vec<String>,

    /// Values, parallel to `labels`
    pub values: Vec<f64>,
}

impl Chart {
    /// Create a new chart.
    pub fn new<S: Into<String>>(
        title: impl Into<String>,
        labels: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            title: title.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            values: values.into_iter().collect(),
        }
    }

    /// Label/value pairs with the value formatted for display.
    ///
    /// A label without a matching value pairs with an empty string.
    pub fn points(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.labels.iter().enumerate().map(|(i, label)| {
            let value = self.values.get(i).map(|v| v.to_string()).unwrap_or_default();
            (label.as_str(), value)
        })
    }

    /// Check if the chart has neither a title nor points.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.labels.is_empty()
    }
}
