//! Speaker identification.
//!
//! A speaker is any run of two capitalized words separated by one whitespace
//! character, e.g. `John Smith`. There is no name list behind this: `United
//! States` or a sentence starting `The Senate` are picked up just the same.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, instrument};

static SPEAKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]*\s[A-Z][a-z]*\b").unwrap());

/// Candidate speaker names found across all `statements`.
///
/// The statements are joined with single spaces before matching, so a name
/// split across two adjacent statements can still match. Duplicates collapse
/// on exact string equality.
#[instrument(level = "debug", skip_all, fields(statements = statements.len()))]
pub fn identify_speakers(statements: &[String]) -> HashSet<String> {
    let text = statements.iter().join(" ");
    let speakers: HashSet<String> = SPEAKER_RE
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect();
    debug!(count = speakers.len(), "Identified speakers");
    speakers
}
