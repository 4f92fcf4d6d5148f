//! Column and file name constants shared by the pipeline stages and the reporter.

// Input columns the pipeline reads (absent columns read as empty text)
pub const TITLE_COLUMN: &str = "Title";
pub const ABSTRACT_COLUMN: &str = "Abstract";
pub const VENUE_COLUMN: &str = "Venue";
pub const SOURCE_DATABASE_COLUMN: &str = "Source Database";

// Derived columns, appended to the annotated CSV in this order
pub const NORM_TITLE_COLUMN: &str = "__norm_title";
pub const DETECTION_TEXT_COLUMN: &str = "text_for_detection";
pub const THEORY_LIST_COLUMN: &str = "moral_theories_list";
pub const THEORY_STRING_COLUMN: &str = "moral_theories";
pub const JOURNAL_FLAG_COLUMN: &str = "likely_journal_article";

pub const DERIVED_COLUMNS: [&str; 5] = [
    NORM_TITLE_COLUMN,
    DETECTION_TEXT_COLUMN,
    THEORY_LIST_COLUMN,
    THEORY_STRING_COLUMN,
    JOURNAL_FLAG_COLUMN,
];

// Output artifacts, written inside the output directory
pub const ANNOTATED_CSV_FILE: &str = "academic_search_results_with_theories.csv";
pub const SUMMARY_FILE: &str = "summary.md";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Joins title and abstract into the text scanned for theories
pub const DETECTION_TEXT_SEPARATOR: &str = ". ";

/// Joins detected theory names into the `moral_theories` column
pub const THEORY_SEPARATOR: &str = "; ";

/// Source databases that only index peer-reviewed material (compared lowercase)
pub const JOURNAL_SOURCE_DATABASES: [&str; 4] = ["semantic scholar", "scopus", "pubmed", "openalex"];

/// Venue marker for preprints
pub const PREPRINT_VENUE_MARKER: &str = "arxiv";
