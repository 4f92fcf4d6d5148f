use std::collections::HashSet;

use tracing::{debug, info};

use crate::constants::{NORM_TITLE_COLUMN, TITLE_COLUMN};
use crate::pipeline::loader::Record;

/// Canonical dedupe key for a title: trimmed, lowercased, whitespace runs
/// collapsed to one space. Absent titles map to `""`, so all untitled records
/// share one bucket.
pub fn normalize_title(title: Option<&str>) -> String {
    match title {
        Some(title) => title.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase(),
        None => String::new(),
    }
}

/// Result of a dedupe pass
#[derive(Debug, Clone)]
pub struct DedupeOutcome {
    pub records: Vec<Record>,
    pub before: usize,
    pub after: usize,
}

impl DedupeOutcome {
    pub fn dropped(&self) -> usize {
        self.before - self.after
    }
}

/// Keeps the first record for each normalized title, preserving input order.
/// Every record gets its key stored in the `__norm_title` column.
pub fn deduplicate(records: Vec<Record>) -> DedupeOutcome {
    let before = records.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(before);
    let mut retained = Vec::with_capacity(before);

    for mut record in records {
        let key = normalize_title(record.get(TITLE_COLUMN));
        if seen.contains(&key) {
            debug!(norm_title = %key, "Dropping duplicate title");
            continue;
        }
        seen.insert(key.clone());
        record.set(NORM_TITLE_COLUMN, Some(key));
        retained.push(record);
    }

    let after = retained.len();
    info!(before, after, "Deduplicated by title");

    DedupeOutcome {
        records: retained,
        before,
        after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Record {
        Record::from_pairs([(TITLE_COLUMN, title)])
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title(Some("  Ethics\tof\n\nAI  ")), "ethics of ai");
        assert_eq!(normalize_title(Some("ALREADY normal")), "already normal");
        assert_eq!(normalize_title(Some("   ")), "");
        assert_eq!(normalize_title(None), "");
    }

    #[test]
    fn test_whitespace_and_case_variants_collapse() {
        let outcome = deduplicate(vec![titled("Ethics of AI"), titled("ethics   of AI  ")]);

        assert_eq!(outcome.before, 2);
        assert_eq!(outcome.after, 1);
        assert_eq!(outcome.dropped(), 1);
        assert_eq!(outcome.records[0].get(TITLE_COLUMN), Some("Ethics of AI"));
        assert_eq!(outcome.records[0].get(NORM_TITLE_COLUMN), Some("ethics of ai"));
    }

    #[test]
    fn test_order_is_stable() {
        let outcome = deduplicate(vec![
            titled("B"),
            titled("A"),
            titled("b"),
            titled("C"),
            titled("a"),
        ]);

        let titles: Vec<_> = outcome.records.iter().map(|r| r.text(TITLE_COLUMN)).collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_untitled_records_share_one_bucket() {
        let outcome = deduplicate(vec![Record::new(), titled(""), titled("X"), Record::new()]);

        assert_eq!(outcome.after, 2);
        assert_eq!(outcome.records[0].get(NORM_TITLE_COLUMN), Some(""));
        assert_eq!(outcome.records[1].get(TITLE_COLUMN), Some("X"));
    }

    #[test]
    fn test_retained_keys_are_pairwise_distinct() {
        let inputs = ["One", "one ", "Two", " TWO", "Three", "three  ", "one"];
        let outcome = deduplicate(inputs.iter().map(|t| titled(t)).collect());

        let keys: HashSet<_> = outcome
            .records
            .iter()
            .map(|r| r.text(NORM_TITLE_COLUMN).to_string())
            .collect();
        assert_eq!(keys.len(), outcome.after);

        // every input key is represented by a retained record
        for title in inputs {
            assert!(keys.contains(&normalize_title(Some(title))));
        }
    }
}
