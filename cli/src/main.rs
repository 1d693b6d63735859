//! reportdoc CLI - report export tool

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use reportdoc::{
    BaseFont, ExportOptions, ExportResult, ExportStats, ExporterRegistry, JsonFormat,
    PageGeometry, Report,
};

#[derive(Parser)]
#[command(name = "reportdoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Export spreadsheet reports to CSV and PDF", long_about = None)]
struct Cli {
    /// Input report (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    layout: LayoutArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a report to every format (CSV, PDF, text, JSON)
    All {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Export a report to a CSV table
    Csv {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Export a report to a PDF document
    Pdf {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (derived from the spreadsheet name if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render a report as wrapped plain text
    Text {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Re-emit a report as normalized JSON
    Json {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show layout information for a report
    Info {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show version information
    Version,
}

/// Page geometry and document options shared by the layout commands.
#[derive(Args, Clone, Default)]
struct LayoutArgs {
    /// Page geometry JSON file (flags below override it)
    #[arg(long, value_name = "FILE")]
    geometry: Option<PathBuf>,

    /// Page size preset
    #[arg(long, value_enum)]
    page: Option<PagePreset>,

    /// Page height in points
    #[arg(long)]
    page_height: Option<f64>,

    /// Margin in points
    #[arg(long)]
    margin: Option<f64>,

    /// Line pitch in points
    #[arg(long)]
    line_pitch: Option<f64>,

    /// Font size in points
    #[arg(long)]
    font_size: Option<f64>,

    /// Maximum characters per line
    #[arg(long, env = "REPORTDOC_WRAP")]
    wrap: Option<usize>,

    /// Font (helvetica, times, courier)
    #[arg(long)]
    font: Option<String>,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Compress content streams
    #[arg(long)]
    compress: bool,

    /// Stamp the document with the current time
    #[arg(long)]
    timestamp: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PagePreset {
    /// US letter (612 x 792 pt)
    Letter,
    /// A4 (595 x 842 pt)
    A4,
}

impl LayoutArgs {
    fn geometry(&self) -> Result<PageGeometry, Box<dyn std::error::Error>> {
        let mut geometry = match &self.geometry {
            Some(path) => PageGeometry::from_json(&fs::read_to_string(path)?)?,
            None => PageGeometry::default(),
        };

        if let Some(preset) = self.page {
            let base = match preset {
                PagePreset::Letter => PageGeometry::letter(),
                PagePreset::A4 => PageGeometry::a4(),
            };
            geometry = geometry.with_page_size(base.page_width, base.page_height);
        }
        if let Some(height) = self.page_height {
            geometry = geometry.with_page_size(geometry.page_width, height);
        }
        if let Some(margin) = self.margin {
            geometry = geometry.with_margin(margin);
        }
        if let Some(pitch) = self.line_pitch {
            geometry = geometry.with_line_pitch(pitch);
        }
        if let Some(size) = self.font_size {
            geometry = geometry.with_font_size(size);
        }
        if let Some(wrap) = self.wrap {
            geometry = geometry.with_max_chars(wrap);
        }

        Ok(geometry)
    }

    fn options(&self) -> Result<ExportOptions, Box<dyn std::error::Error>> {
        let mut options = ExportOptions::new()
            .with_geometry(self.geometry()?)
            .with_compression(self.compress);

        if let Some(ref font) = self.font {
            options = options.with_font(BaseFont::parse(font)?);
        }
        if let Some(ref title) = self.title {
            options = options.with_title(title.clone());
        }
        if self.timestamp {
            options = options.with_creation_date(chrono::Utc::now());
        }

        Ok(options)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::All {
            input,
            output,
            layout,
        }) => cmd_all(&input, output.as_deref(), &layout),
        Some(Commands::Csv { input, output }) => cmd_export(
            &input,
            output.as_deref(),
            "csv",
            &LayoutArgs::default(),
            true,
        ),
        Some(Commands::Pdf {
            input,
            output,
            layout,
        }) => cmd_export(&input, output.as_deref(), "pdf", &layout, false),
        Some(Commands::Text {
            input,
            output,
            layout,
        }) => cmd_export(&input, output.as_deref(), "txt", &layout, true),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input, layout }) => cmd_info(&input, &layout),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: export everything if input is provided
            if let Some(input) = cli.input {
                cmd_all(&input, cli.output.as_deref(), &cli.layout)
            } else {
                println!("{}", "Usage: reportdoc <FILE> [OUTPUT]".yellow());
                println!("       reportdoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load(input: &Path) -> Result<Report, Box<dyn std::error::Error>> {
    log::info!("Loading report from {}", input.display());
    Ok(reportdoc::load_report(input)?)
}

/// Write an export to `output`, to `stdout` for text formats, or to its
/// suggested filename otherwise. Bytes are written unchanged.
fn write_result<W: Write>(
    result: &ExportResult,
    output: Option<&Path>,
    stdout_ok: bool,
    stdout: &mut W,
) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, &result.bytes)?;
            Ok(Some(path.to_path_buf()))
        }
        None if stdout_ok => {
            stdout.write_all(&result.bytes)?;
            stdout.flush()?;
            Ok(None)
        }
        None => {
            let path = PathBuf::from(&result.filename);
            fs::write(&path, &result.bytes)?;
            Ok(Some(path))
        }
    }
}

fn cmd_export(
    input: &Path,
    output: Option<&Path>,
    format: &str,
    layout: &LayoutArgs,
    stdout_ok: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = load(input)?;
    let options = layout.options()?;

    let registry = ExporterRegistry::with_defaults();
    let result = registry.export(&report, format, &options)?;

    let mut stdout = io::stdout().lock();
    if let Some(path) = write_result(&result, output, stdout_ok, &mut stdout)? {
        println!("{} {}", "Saved to".green(), path.display());
    }

    Ok(())
}

fn cmd_all(
    input: &Path,
    output: Option<&Path>,
    layout: &LayoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_export", stem))
    });
    fs::create_dir_all(&output_dir)?;

    let report = load(input)?;
    let options = layout.options()?;
    let registry = ExporterRegistry::with_defaults();

    let mut total = ExportStats::new();
    let mut written = Vec::new();
    for format in registry.supported_extensions() {
        let result = registry.export(&report, format, &options)?;
        fs::write(output_dir.join(&result.filename), &result.bytes)?;
        total.merge(&result.stats);
        written.push(result.filename);
    }

    println!("\n{}", "Output files:".green().bold());
    for (i, name) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), name);
    }
    println!(
        "{} {} bytes written to {}",
        "Done!".green().bold(),
        total.byte_len,
        output_dir.display()
    );

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = load(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = reportdoc::render::to_json(&report, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, layout: &LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = load(input)?;
    let options = layout.options()?;
    let geometry = options.geometry;
    let lines_per_page = geometry.lines_per_page()?;

    let csv = reportdoc::export_delimited(&report);
    let pdf = reportdoc::export_document(&report, &options)?;

    println!("{}", "Report Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if !report.spreadsheet.name.is_empty() {
        println!("{}: {}", "Spreadsheet".bold(), report.spreadsheet.name);
    }
    println!("{}: {}", "Rows".bold(), report.spreadsheet.row_count());

    println!();
    println!("{}", "Layout".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!(
        "{}: {} x {} pt",
        "Page".bold(),
        geometry.page_width,
        geometry.page_height
    );
    println!("{}: {}", "Lines per page".bold(), lines_per_page);
    println!("{}: {}", "Wrap width".bold(), geometry.max_chars);
    println!("{}: {}", "Report lines".bold(), pdf.stats.line_count);
    println!("{}: {}", "Wrapped lines".bold(), pdf.stats.wrapped_line_count);
    println!("{}: {}", "Pages".bold(), pdf.stats.page_count);
    println!("{}: {}", "PDF objects".bold(), pdf.stats.object_count);
    if pdf.stats.replaced_chars > 0 {
        println!(
            "{}: {}",
            "Transliterated".bold().yellow(),
            pdf.stats.replaced_chars
        );
    }

    println!();
    println!("{}", "Output".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {} ({} bytes)", "PDF".bold(), pdf.filename, pdf.content_len());
    println!(
        "{}: {} ({} rows, {} bytes)",
        "CSV".bold(),
        csv.filename,
        csv.stats.row_count,
        csv.content_len()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "reportdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Report export tool (CSV, PDF)");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_args_override_geometry_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geometry.json");
        fs::write(&path, r#"{"margin": 36, "line_pitch": 14}"#).unwrap();

        let args = LayoutArgs {
            geometry: Some(path),
            page: Some(PagePreset::A4),
            line_pitch: Some(18.0),
            wrap: Some(72),
            ..LayoutArgs::default()
        };
        let geometry = args.geometry().unwrap();

        assert_eq!(geometry.margin, 36.0);
        assert_eq!(geometry.line_pitch, 18.0);
        assert_eq!(geometry.page_height, 842.0);
        assert_eq!(geometry.max_chars, 72);
    }

    #[test]
    fn test_write_result_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let report = Report::new("Hello");
        let result = reportdoc::export_delimited(&report);

        let written = write_result(&result, Some(&path), true, &mut Vec::new()).unwrap();

        assert_eq!(written, Some(path.clone()));
        assert_eq!(fs::read(&path).unwrap(), result.bytes);
    }

    #[test]
    fn test_unknown_font_rejected() {
        let args = LayoutArgs {
            font: Some("wingdings".to_string()),
            ..LayoutArgs::default()
        };
        assert!(args.options().is_err());
    }

    #[test]
    fn test_write_result_to_stdout_is_verbatim() {
        let report = Report::new("Hello")
            .with_spreadsheet(reportdoc::Spreadsheet::new("S", "").with_row(["a"]));
        let result = reportdoc::export_delimited(&report);

        let mut out = Vec::new();
        let written = write_result(&result, None, true, &mut out).unwrap();

        assert_eq!(written, None);
        assert_eq!(out, result.bytes);
        assert!(!out.ends_with(b"\n"));
    }

    #[test]
    fn test_default_command_reads_layout_flags() {
        let cli = Cli::try_parse_from(["reportdoc", "report.json", "--wrap", "40", "--compress"])
            .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.input, Some(PathBuf::from("report.json")));
        assert_eq!(cli.layout.geometry().unwrap().max_chars, 40);
        assert!(cli.layout.options().unwrap().compress_streams);
    }

    #[test]
    fn test_default_command_reads_wrap_env() {
        std::env::set_var("REPORTDOC_WRAP", "55");
        let cli = Cli::try_parse_from(["reportdoc", "report.json"]);
        std::env::remove_var("REPORTDOC_WRAP");

        assert_eq!(cli.unwrap().layout.wrap, Some(55));
    }
}
