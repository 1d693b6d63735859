//! Flattening of a report into display lines and table rows.
//!
//! Both outputs enumerate sections in the same fixed order:
//!
//! 1. summary, highlights, metrics
//! 2. analysis: overview, key points, plan, opportunities, risks, sources, confidence
//! 3. spreadsheet name and last-updated stamp
//! 4. spreadsheet rows
//! 5. chart title and points
//! 6. next actions
//!
//! Groups are separated by a single blank line (a `[]` row in the table
//! form); nothing trails the last group. In the line form the spreadsheet
//! title runs straight into the sheet rows, while the table form keeps a
//! `[]` row between them. Absent or empty sections emit nothing, including
//! their header.

use crate::model::{Analysis, Report};

/// Bullet prefix for list items in the line form.
pub const BULLET: &str = "• ";

/// Separator between spreadsheet cells in the line form.
pub const CELL_SEPARATOR: &str = " | ";

/// A report flattened into its two parallel representations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatReport {
    /// Display lines in reading order (unwrapped)
    pub lines: Vec<String>,

    /// Table rows; rows may be ragged
    pub rows: Vec<Vec<String>>,
}

/// Accumulates both forms, holding back separators until more content
/// follows.
#[derive(Default)]
struct FlatBuilder {
    flat: FlatReport,
    line_gap: bool,
    row_gap: bool,
}

impl FlatBuilder {
    fn push_line(&mut self, line: impl Into<String>) {
        let gap = std::mem::take(&mut self.line_gap);
        if gap && self.flat.lines.last().is_some_and(|l| !l.is_empty()) {
            self.flat.lines.push(String::new());
        }
        self.flat.lines.push(line.into());
    }

    fn push_cells(&mut self, cells: Vec<String>) {
        let gap = std::mem::take(&mut self.row_gap);
        if gap && self.flat.rows.last().is_some_and(|r| !r.is_empty()) {
            self.flat.rows.push(Vec::new());
        }
        self.flat.rows.push(cells);
    }

    fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.push_cells(cells.into_iter().map(Into::into).collect());
    }

    /// Header line plus a single-cell header row.
    fn header(&mut self, title: &str) {
        self.push_line(title);
        self.push_row([title]);
    }

    /// Close a group with one blank line and one empty row.
    ///
    /// The gap is only written once more content follows, and never right
    /// after an entry that is already blank.
    fn separator(&mut self) {
        self.line_gap = true;
        self.row_gap = true;
    }

    /// Like [`separator`](Self::separator), for the row form only.
    fn row_separator(&mut self) {
        self.row_gap = true;
    }

    fn bullets(&mut self, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        self.header(title);
        for item in items {
            self.push_line(format!("{}{}", BULLET, item));
            self.push_row([item.as_str()]);
        }
    }

    fn finish(self) -> FlatReport {
        self.flat
    }
}

/// Flatten a report into display lines and table rows.
pub fn flatten(report: &Report) -> FlatReport {
    let mut flat = FlatBuilder::default();

    flatten_summary(&mut flat, report);
    flat.separator();

    if let Some(analysis) = report.analysis.as_ref().filter(|a| !a.is_empty()) {
        flatten_analysis(&mut flat, analysis);
        flat.separator();
    }

    flatten_spreadsheet(&mut flat, report);
    flatten_chart(&mut flat, report);

    let actions = report.actions();
    if !actions.is_empty() {
        flat.separator();
        flat.bullets("Next actions", actions);
    }

    let flat = flat.finish();
    log::debug!(
        "Flattened report into {} lines and {} rows",
        flat.lines.len(),
        flat.rows.len()
    );
    flat
}

fn flatten_summary(flat: &mut FlatBuilder, report: &Report) {
    let summary = report.summary.trim();
    if !summary.is_empty() {
        flat.push_line("Report summary");
        flat.push_line(summary);
        flat.push_row(["Summary"]);
        flat.push_row([summary]);
    }

    flat.bullets("Highlights", report.highlights());

    let metrics = report.metrics();
    if !metrics.is_empty() {
        flat.header("Key metrics");
        for metric in metrics {
            flat.push_line(format!("{}: {}", metric.label, metric.value));
            flat.push_row([metric.label.as_str(), metric.value.as_str()]);
        }
    }
}

fn flatten_analysis(flat: &mut FlatBuilder, analysis: &Analysis) {
    if let Some(overview) = analysis.overview() {
        flat.header("Analysis");
        flat.push_line(overview);
        flat.push_row([overview]);
    }

    flat.bullets("Key points", &analysis.key_points);

    if !analysis.plan.is_empty() {
        flat.header("Plan");
        for (i, step) in analysis.plan.iter().enumerate() {
            let number = (i + 1).to_string();
            match step.detail.as_deref().filter(|d| !d.trim().is_empty()) {
                Some(detail) => {
                    flat.push_line(format!("{}. {}: {}", number, step.step, detail));
                    flat.push_row([number.as_str(), step.step.as_str(), detail]);
                }
                None => {
                    flat.push_line(format!("{}. {}", number, step.step));
                    flat.push_row([number.as_str(), step.step.as_str()]);
                }
            }
        }
    }

    flat.bullets("Opportunities", &analysis.opportunities);
    flat.bullets("Risks", &analysis.risks);

    if !analysis.attribution.is_empty() {
        flat.header("Sources");
        for source in &analysis.attribution {
            if source.notes.trim().is_empty() {
                flat.push_line(format!("{}{}", BULLET, source.source));
            } else {
                flat.push_line(format!("{}{}: {}", BULLET, source.source, source.notes));
            }
            flat.push_row([source.source.as_str(), source.notes.as_str()]);
        }
    }

    if let Some(confidence) = analysis.confidence() {
        flat.push_line(format!("Confidence: {}", confidence));
        flat.push_row(["Confidence", confidence]);
    }
}

fn flatten_spreadsheet(flat: &mut FlatBuilder, report: &Report) {
    let sheet = &report.spreadsheet;
    let name = sheet.name.trim();
    let stamp = sheet.last_updated.trim();

    if !name.is_empty() || !stamp.is_empty() {
        flat.push_line(sheet.title_line());
        flat.push_row(["Spreadsheet", name]);
        if !stamp.is_empty() {
            flat.push_row(["Last updated", stamp]);
        }
        flat.row_separator();
    }

    if !sheet.rows.is_empty() {
        for row in &sheet.rows {
            flat.push_line(row.join(CELL_SEPARATOR));
            flat.push_cells(row.clone());
        }
        flat.separator();
    }
}

fn flatten_chart(flat: &mut FlatBuilder, report: &Report) {
    let chart = &report.chart;
    if chart.is_empty() {
        return;
    }

    let title = match chart.title.trim() {
        "" => "Chart",
        title => title,
    };
    flat.header(title);
    for (label, value) in chart.points() {
        flat.push_line(format!("{}: {}", label, value));
        flat.push_row([label, value.as_str()]);
    }
}
