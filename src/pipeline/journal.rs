use crate::constants::{JOURNAL_SOURCE_DATABASES, PREPRINT_VENUE_MARKER};

/// Heuristic for "probably a peer-reviewed journal article".
///
/// True when the venue is non-blank and not an arXiv venue, or when the
/// source database is one that indexes peer-reviewed work. Missing fields
/// never make a record journal-likely on their own.
pub fn likely_journal_article(venue: Option<&str>, source_database: Option<&str>) -> bool {
    let has_journal_venue = venue
        .map(|v| !v.trim().is_empty() && !v.to_lowercase().contains(PREPRINT_VENUE_MARKER))
        .unwrap_or(false);

    if has_journal_venue {
        return true;
    }

    source_database
        .map(|source| {
            let source = source.to_lowercase();
            JOURNAL_SOURCE_DATABASES.contains(&source.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::annotate;
    use crate::pipeline::loader::Record;

    #[test]
    fn test_source_database_alone() {
        assert!(likely_journal_article(Some(""), Some("PubMed")));
        assert!(likely_journal_article(None, Some("Semantic Scholar")));
        assert!(likely_journal_article(None, Some("SCOPUS")));
        assert!(likely_journal_article(None, Some("openalex")));
    }

    #[test]
    fn test_arxiv_venue_is_not_journal() {
        assert!(!likely_journal_article(Some("arXiv preprint"), Some("")));
        assert!(!likely_journal_article(Some("ARXIV"), None));
    }

    #[test]
    fn test_arxiv_venue_rescued_by_source() {
        assert!(likely_journal_article(Some("arXiv preprint"), Some("Scopus")));
    }

    #[test]
    fn test_named_venue() {
        assert!(likely_journal_article(Some("Journal of Medical Ethics"), None));
        assert!(likely_journal_article(Some("Nature"), Some("Google Scholar")));
    }

    #[test]
    fn test_blank_or_missing_fields() {
        assert!(!likely_journal_article(None, None));
        assert!(!likely_journal_article(Some("   "), Some("")));
        assert!(!likely_journal_article(None, Some("Google Scholar")));
    }

    #[test]
    fn test_source_is_compared_exactly() {
        // substring and padded names are not on the allow-list
        assert!(!likely_journal_article(None, Some("PubMed Central")));
        assert!(!likely_journal_article(None, Some(" pubmed ")));
    }

    #[test]
    fn test_flag_ignores_other_columns() {
        let field_pairs = [
            ("Ethics", ""),
            ("", "PubMed"),
            ("arXiv preprint", ""),
            ("arXiv", "Scopus"),
            ("", ""),
        ];

        for (venue, source) in field_pairs {
            let expected = likely_journal_article(
                (!venue.is_empty()).then_some(venue),
                (!source.is_empty()).then_some(source),
            );

            let variants = [
                Record::from_pairs([("Venue", venue), ("Source Database", source)]),
                Record::from_pairs([
                    ("Title", "arXiv"),
                    ("Abstract", "Posted to arxiv.org; indexed by PubMed"),
                    ("Venue", venue),
                    ("Source Database", source),
                ]),
                Record::from_pairs([
                    ("Title", "Kantian duties in Scopus-indexed journals"),
                    ("Year", "2020"),
                    ("Venue", venue),
                    ("Source Database", source),
                ]),
            ];

            for record in variants {
                assert_eq!(
                    annotate(record).likely_journal,
                    expected,
                    "venue={:?} source={:?}",
                    venue,
                    source
                );
            }
        }
    }
}
