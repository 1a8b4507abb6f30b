//! Data models shared by the pipeline stages.
//!
//! - [`FactCheckRecord`]: one fact-checked statement scraped for a speaker
//! - [`SpeakerScores`]: the final speaker → score mapping written to disk
//!
//! Statements and speakers are plain `String`s; neither carries any structure
//! beyond its text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single fact-checked statement from the archive's search results.
///
/// The rating is kept exactly as the site labels it (whitespace trimmed).
/// Mapping it to a number is the scorer's job, see [`crate::scoring`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FactCheckRecord {
    /// The quoted statement as it appears in the result listing.
    pub title: String,
    /// The rating label, e.g. `"Mostly True"` or `"Pants on Fire!"`.
    pub rating: String,
}

impl FactCheckRecord {
    pub fn new(title: impl Into<String>, rating: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rating: rating.into(),
        }
    }
}

/// Speaker name → average truthfulness score.
///
/// A `BTreeMap` so the JSON object comes out in a stable key order.
pub type SpeakerScores = BTreeMap<String, f64>;
