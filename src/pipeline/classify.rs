use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::constants::{DETECTION_TEXT_SEPARATOR, THEORY_SEPARATOR};

/// A named theory and the keyword patterns that attribute a text to it.
pub struct Theory {
    pub name: &'static str,
    patterns: Vec<Regex>,
}

impl Theory {
    fn new(name: &'static str, patterns: &[&str]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .expect("built-in theory pattern must compile")
            })
            .collect();
        Self { name, patterns }
    }

    /// True if any pattern occurs anywhere in `text`
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

/// Built-in taxonomy, in detection order.
///
/// Several keywords ("care", "fairness", "consequent", "care ethics") sit in
/// more than one theory, so one text often maps to several theories.
pub static TAXONOMY: Lazy<Vec<Theory>> = Lazy::new(|| {
    vec![
        Theory::new(
            "Utilitarianism",
            &["utilitarian", "consequent", "consequential", "greatest good", "maxim", "utility"],
        ),
        Theory::new("Deontology", &["deontol", "duty", "kant", "rights", "obligation"]),
        Theory::new("Virtue Ethics", &["virtue", "virtues", "character", "aristot", "excellenc"]),
        Theory::new(
            "Care Ethics",
            &["care ethics", "care", "relational", "care-based", "care-based"],
        ),
        Theory::new(
            "Principlism",
            &["principlism", "autonom", "beneficence", "non-?maleficence", "justice"],
        ),
        Theory::new("Contractualism", &["contract", "contractualis", "rawls", "fairness"]),
        Theory::new(
            "Moral Foundations",
            &[
                "moral foundation",
                "moral foundations",
                "fairness",
                "loyalty",
                "authority",
                "sanctity",
                "care",
            ],
        ),
        Theory::new("Consequentialism", &["consequent", "consequentialism"]),
        Theory::new("Care-orientation", &["care-based", "care ethics"]),
        Theory::new("Feminist Ethics", &["feminist"]),
        Theory::new("Moral Psychology", &["moral psychology", "moral-psycholog"]),
    ]
});

/// Text scanned for theories: title, separator, abstract
pub fn detection_text(title: Option<&str>, abstract_text: Option<&str>) -> String {
    format!(
        "{}{}{}",
        title.unwrap_or(""),
        DETECTION_TEXT_SEPARATOR,
        abstract_text.unwrap_or("")
    )
}

/// Names of all theories with at least one pattern hit, sorted by name.
/// Blank text yields nothing.
pub fn detect_theories(text: &str) -> Vec<&'static str> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let found: BTreeSet<&'static str> = TAXONOMY
        .iter()
        .filter(|theory| theory.matches(text))
        .map(|theory| theory.name)
        .collect();

    found.into_iter().collect()
}

/// `"; "`-joined theory names, empty when none were detected
pub fn theory_string(theories: &[&str]) -> String {
    theories.join(THEORY_SEPARATOR)
}
