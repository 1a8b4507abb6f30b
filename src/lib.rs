//! # Speaker Fact-Check
//!
//! Scores the people quoted in a news article by how their past statements
//! were rated on PolitiFact.
//!
//! ## Architecture
//!
//! A single sequential pipeline:
//! 1. **Fetch**: download the article and pull every `"..."` quote out of its `<p>` text
//! 2. **Identify**: find two-capitalized-word runs in the quotes and treat them as speakers
//! 3. **Look up**: page through the fact-check archive's listing for each speaker
//! 4. **Score**: average the rating values per speaker
//! 5. **Output**: write `speaker_scores.json`
//!
//! Network failures degrade to "no data". A fact-check page whose structure
//! does not match what [`scrapers::politifact::parse_results_page`] expects
//! aborts the run.

pub mod cli;
pub mod http;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod scoring;
pub mod scrapers;
pub mod speakers;
pub mod utils;
