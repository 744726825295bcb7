use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::{info, warn};

use crate::cli::CheckArgs;
use crate::epub::load_book_text;
use crate::model::{CheckCounts, CheckInputs, CheckRunManifest, RowFinding, SaveOutcome};
use crate::sheet::{TocLayout, load_toc_sheet};
use crate::util::{containing_dir, now_utc_string, sha256_file, write_json_pretty};
use crate::validation::{TocEntry, ValidationReport, check, load_normalizer};

mod discover;
mod save;

use discover::{find_epub_near, find_toc_near};
use save::{open_with_default_app, save_annotated_copy};

const DEFAULT_OUTPUT_NAME: &str = "000_Excel_Check.xlsx";
const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub toc_path: PathBuf,
    pub epub_path: PathBuf,
    pub output_path: PathBuf,
    pub layout: TocLayout,
    pub normalization_table: Option<PathBuf>,
    pub open_output: bool,
}

impl CheckConfig {
    pub fn resolve(args: &CheckArgs) -> Result<Self> {
        let pattern = Regex::new(&args.toc_pattern)
            .with_context(|| format!("invalid --toc-pattern regex: {}", args.toc_pattern))?;

        let (toc_path, epub_path) = match (&args.toc, &args.epub) {
            (Some(toc), Some(epub)) => (toc.clone(), epub.clone()),
            (Some(toc), None) => {
                let epub = find_epub_near(toc)?.with_context(|| {
                    format!("no .epub file found next to {}", toc.display())
                })?;
                info!(epub = %epub.display(), "discovered EPUB next to ToC");
                (toc.clone(), epub)
            }
            (None, Some(epub)) => {
                let toc = find_toc_near(epub, &pattern)?.with_context(|| {
                    format!(
                        "no .xlsx file matching '{}' found next to {}",
                        args.toc_pattern,
                        epub.display()
                    )
                })?;
                info!(toc = %toc.display(), "discovered ToC next to EPUB");
                (toc, epub.clone())
            }
            (None, None) => bail!("at least one of --toc or --epub is required"),
        };

        let output_path = args
            .output
            .clone()
            .unwrap_or_else(|| containing_dir(&toc_path).join(DEFAULT_OUTPUT_NAME));

        Ok(Self {
            toc_path,
            epub_path,
            output_path,
            layout: TocLayout {
                title_column: args.title_column,
                level_column: args.level_column,
                header_rows: args.header_rows,
            },
            normalization_table: args.normalization_table.clone(),
            open_output: !args.no_open,
        })
    }
}

pub fn run(args: CheckArgs) -> Result<()> {
    let config = CheckConfig::resolve(&args)?;
    let manifest = execute(&config)?;

    if manifest.has_errors {
        warn!(
            hierarchy_errors = manifest.counts.hierarchy_error_count,
            title_errors = manifest.counts.title_error_count,
            "{}",
            manifest.status_message
        );
    } else {
        info!(entries = manifest.counts.entry_count, "{}", manifest.status_message);
    }

    if let Some(report_path) = &args.report {
        write_json_pretty(report_path, &manifest)?;
        info!(path = %report_path.display(), "wrote check report");
    }

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&manifest).context("failed to serialize check report")?;
        println!("{rendered}");
    }

    Ok(())
}

pub fn execute(config: &CheckConfig) -> Result<CheckRunManifest> {
    let normalizer = load_normalizer(config.normalization_table.as_deref())?;
    let sheet = load_toc_sheet(&config.toc_path, config.layout)?;
    let book = load_book_text(&config.epub_path)?;

    let report = check(&sheet.entries, &book.text, &normalizer);

    info!(
        entries = report.rows.len(),
        hierarchy_errors = report.hierarchy_error_count(),
        title_errors = report.title_error_count(),
        "validated ToC"
    );

    let save = if report.has_errors() {
        let outcome = save_annotated_copy(&sheet, &report, &config.toc_path, &config.output_path);
        match &outcome {
            SaveOutcome::Saved { path } => {
                info!(path = %path, "saved annotated workbook");
                if config.open_output {
                    open_with_default_app(&config.output_path);
                }
            }
            SaveOutcome::LockedElsewhere { path } => {
                warn!(path = %path, "annotated workbook is locked by another program");
            }
            SaveOutcome::Failed { path, reason } => {
                warn!(path = %path, reason = %reason, "failed to save annotated workbook");
            }
        }
        Some(outcome)
    } else {
        None
    };

    Ok(CheckRunManifest {
        manifest_version: MANIFEST_VERSION,
        generated_at: now_utc_string(),
        has_errors: report.has_errors(),
        status_message: status_message(&report, save.as_ref()),
        inputs: CheckInputs {
            toc_path: config.toc_path.display().to_string(),
            toc_sha256: sha256_file(&config.toc_path)?,
            sheet_name: sheet.name.clone(),
            epub_path: config.epub_path.display().to_string(),
            epub_sha256: sha256_file(&config.epub_path)?,
            output_path: config.output_path.display().to_string(),
            normalization_table: config
                .normalization_table
                .as_deref()
                .map(|path| path.display().to_string()),
        },
        counts: CheckCounts {
            entry_count: report.rows.len(),
            hierarchy_error_count: report.hierarchy_error_count(),
            title_error_count: report.title_error_count(),
            epub_document_count: book.document_count,
            book_char_count: book.text.chars().count(),
        },
        save,
        findings: collect_findings(&sheet.entries, &report, &sheet.layout()),
        warnings: book.warnings,
    })
}

pub fn collect_findings(
    entries: &[TocEntry],
    report: &ValidationReport,
    layout: &TocLayout,
) -> Vec<RowFinding> {
    entries
        .iter()
        .zip(&report.rows)
        .enumerate()
        .filter(|(_, (_, row))| row.has_error())
        .map(|(index, (entry, row))| RowFinding {
            row: layout.spreadsheet_row(index),
            title: entry.title.as_title().unwrap_or_default().to_string(),
            level: entry.level.as_level(),
            hierarchy_error: row.hierarchy_error,
            title_error: row.title_error,
        })
        .collect()
}

pub fn status_message(report: &ValidationReport, save: Option<&SaveOutcome>) -> String {
    if !report.has_errors() {
        return "No problems found in the ToC.".to_string();
    }

    let mut kinds = Vec::new();
    if report.has_hierarchy_errors() {
        kinds.push("hierarchy level");
    }
    if report.has_title_errors() {
        kinds.push("chapter title");
    }
    let found = format!("Found problems with: {}.", kinds.join(" and "));

    match save {
        Some(SaveOutcome::Saved { path }) => {
            format!("{found} Annotated workbook saved to {path}.")
        }
        Some(SaveOutcome::LockedElsewhere { path }) => format!(
            "{found} The annotated workbook could not be saved to {path}; close it if it is already open and run the check again."
        ),
        Some(SaveOutcome::Failed { path, reason }) => {
            format!("{found} The annotated workbook could not be saved to {path}: {reason}")
        }
        None => found,
    }
}
