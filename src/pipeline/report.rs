use std::fs;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::{debug, instrument};

use crate::config::ReportConfig;
use crate::constants::{DERIVED_COLUMNS, TITLE_COLUMN, VENUE_COLUMN, THEORY_STRING_COLUMN};
use crate::error::{Result, ScreenError};
use crate::pipeline::ScreenedRecord;

/// Aggregate counts over the retained records
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub total: usize,
    pub journal_likely: usize,
    /// Theory name and number of records it was detected in, most frequent first
    pub theory_counts: Vec<(String, usize)>,
}

impl SummaryStats {
    /// Counts are ranked by frequency; equal counts keep first-seen order.
    pub fn compute(records: &[ScreenedRecord]) -> Self {
        let mut theory_counts: Vec<(String, usize)> = Vec::new();

        for record in records {
            for theory in &record.theories {
                match theory_counts.iter_mut().find(|(name, _)| name == theory) {
                    Some((_, count)) => *count += 1,
                    None => theory_counts.push((theory.to_string(), 1)),
                }
            }
        }

        // stable sort keeps insertion order among ties
        theory_counts.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            total: records.len(),
            journal_likely: records.iter().filter(|r| r.likely_journal).count(),
            theory_counts,
        }
    }

    pub fn top_theories(&self, limit: usize) -> &[(String, usize)] {
        &self.theory_counts[..self.theory_counts.len().min(limit)]
    }
}

/// Creates the output directory (and parents) if it does not exist
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| ScreenError::output(dir, format!("cannot create output directory: {}", e)))
}

/// Column order of the annotated CSV: input header, then the derived columns
pub fn output_headers(input_headers: &[String]) -> Vec<String> {
    let mut headers = input_headers.to_vec();
    for column in DERIVED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            headers.push(column.to_string());
        }
    }
    headers
}

/// Writes the annotated table, overwriting any existing file
#[instrument(skip(input_headers, records), fields(rows = records.len()))]
pub fn write_annotated_csv(path: &Path, input_headers: &[String], records: &[ScreenedRecord]) -> Result<()> {
    let to_output_error = |e: csv::Error| ScreenError::output(path, format!("cannot write CSV: {}", e));

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(to_output_error)?;

    let headers = output_headers(input_headers);
    writer.write_record(&headers).map_err(to_output_error)?;

    for screened in records {
        let row = headers.iter().map(|column| screened.record.text(column));
        writer.write_record(row).map_err(to_output_error)?;
    }

    writer
        .flush()
        .map_err(|e| ScreenError::output(path, format!("cannot flush CSV: {}", e)))?;

    debug!("Annotated CSV written");
    Ok(())
}

/// Renders the markdown digest. Lines are joined with `\n` and there is no
/// trailing newline.
pub fn render_summary(
    input_path: &str,
    stats: &SummaryStats,
    records: &[ScreenedRecord],
    config: &ReportConfig,
) -> String {
    let mut lines: Vec<String> = vec![
        "# Summary of Screening and Moral Theory Detection".to_string(),
        String::new(),
        format!("- Input file: `{}`", input_path),
        format!("- Total records after deduplication: **{}**", stats.total),
        format!("- Records likely journal articles: **{}**", stats.journal_likely),
        String::new(),
        "## Top detected moral theories".to_string(),
        String::new(),
    ];

    if stats.theory_counts.is_empty() {
        lines.push("- No moral theories detected using basic keyword heuristics.".to_string());
    } else {
        for (theory, count) in stats.top_theories(config.top_theories) {
            lines.push(format!("- **{}**: {} articles", theory, count));
        }
    }

    lines.push(String::new());
    lines.push(format!("## Examples (first {} records)", config.sample_records));
    lines.push(String::new());

    for screened in records.iter().take(config.sample_records) {
        let record = &screened.record;
        lines.push(format!(
            "- `{}` — Venue: `{}` — Theories: `{}`",
            record.text(TITLE_COLUMN),
            record.text(VENUE_COLUMN),
            record.text(THEORY_STRING_COLUMN)
        ));
    }

    lines.join("\n")
}

/// Writes the markdown digest, overwriting any existing file
pub fn write_summary(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ScreenError::output(path, format!("cannot write summary: {}", e)))
}
