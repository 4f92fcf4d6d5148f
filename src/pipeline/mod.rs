//! Screening pipeline: load, dedupe, classify, flag, report.

pub mod classify;
pub mod dedupe;
pub mod journal;
pub mod loader;
pub mod report;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::config::Config;
use crate::constants::{
    ABSTRACT_COLUMN, ANNOTATED_CSV_FILE, DETECTION_TEXT_COLUMN, JOURNAL_FLAG_COLUMN,
    SOURCE_DATABASE_COLUMN, SUMMARY_FILE, THEORY_LIST_COLUMN, THEORY_STRING_COLUMN, TITLE_COLUMN,
    VENUE_COLUMN,
};
use crate::error::Result;
use classify::{detect_theories, detection_text, theory_string};
use journal::likely_journal_article;
use loader::Record;
use report::SummaryStats;

/// A retained record with its detection results.
///
/// The derived values are also stored as text columns on `record` so the
/// annotated CSV can be written straight from it.
#[derive(Debug, Clone)]
pub struct ScreenedRecord {
    pub record: Record,
    pub theories: Vec<&'static str>,
    pub likely_journal: bool,
}

/// Classifies and flags one record
pub fn annotate(mut record: Record) -> ScreenedRecord {
    let text = detection_text(record.get(TITLE_COLUMN), record.get(ABSTRACT_COLUMN));
    let theories = detect_theories(&text);
    let likely_journal = likely_journal_article(record.get(VENUE_COLUMN), record.get(SOURCE_DATABASE_COLUMN));

    let joined = theory_string(&theories);
    record.set(DETECTION_TEXT_COLUMN, Some(text));
    record.set(THEORY_LIST_COLUMN, Some(serde_json::json!(theories).to_string()));
    record.set(THEORY_STRING_COLUMN, (!joined.is_empty()).then_some(joined));
    record.set(
        JOURNAL_FLAG_COLUMN,
        Some(if likely_journal { "True" } else { "False" }.to_string()),
    );

    ScreenedRecord {
        record,
        theories,
        likely_journal,
    }
}

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub input_file: String,
    pub rows_loaded: usize,
    pub records_retained: usize,
    pub duplicates_dropped: usize,
    pub journal_likely: usize,
    pub annotated_csv: PathBuf,
    pub summary_file: PathBuf,
}

pub struct Pipeline;

impl Pipeline {
    /// Runs every stage in order and writes both artifacts into `output_dir`.
    #[instrument(skip(config))]
    pub fn run(input: &Path, output_dir: &Path, config: &Config) -> Result<PipelineResult> {
        report::ensure_output_dir(output_dir)?;

        println!("Reading {}", input.display());
        let table = loader::load_csv(input)?;
        println!("Rows loaded: {}", table.len());
        info!(rows = table.len(), columns = table.headers.len(), "Input loaded");

        let outcome = dedupe::deduplicate(table.records);
        println!("Deduplicated by Title: {} -> {}", outcome.before, outcome.after);
        let (rows_loaded, duplicates_dropped) = (outcome.before, outcome.dropped());

        let screened: Vec<ScreenedRecord> = outcome.records.into_iter().map(annotate).collect();

        let annotated_csv = output_dir.join(ANNOTATED_CSV_FILE);
        report::write_annotated_csv(&annotated_csv, &table.headers, &screened)?;
        println!("Saved annotated CSV to {}", annotated_csv.display());

        let stats = SummaryStats::compute(&screened);
        info!(
            total = stats.total,
            journal_likely = stats.journal_likely,
            theories = stats.theory_counts.len(),
            "Summary computed"
        );

        let input_file = input.display().to_string();
        let summary = report::render_summary(&input_file, &stats, &screened, &config.report);
        let summary_file = output_dir.join(SUMMARY_FILE);
        report::write_summary(&summary_file, &summary)?;
        println!("Saved summary to {}", summary_file.display());

        Ok(PipelineResult {
            input_file,
            rows_loaded,
            records_retained: stats.total,
            duplicates_dropped,
            journal_likely: stats.journal_likely,
            annotated_csv,
            summary_file,
        })
    }
}
