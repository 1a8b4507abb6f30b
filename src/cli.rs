//! Command-line interface definitions.
//!
//! Every option besides the article URL has a default, and the fact-check
//! settings can also come from environment variables.

use crate::scrapers::politifact::DEFAULT_BASE_URL;
use clap::Parser;
use url::Url;

/// Analyze speakers in a news article against PolitiFact.
///
/// # Examples
///
/// ```sh
/// # Write ./speaker_scores.json
/// speaker_factcheck -u https://example.com/story
///
/// # Write into another directory, created if missing
/// speaker_factcheck -u https://example.com/story -o ./results
///
/// # Point at a different archive origin
/// FACTCHECK_BASE_URL=http://localhost:8080 speaker_factcheck -u https://example.com/story
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// URL of the article to analyze
    #[arg(short, long)]
    pub url: String,

    /// Output directory for the speaker scores file
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Origin of the fact-check archive
    #[arg(long, env = "FACTCHECK_BASE_URL", default_value = DEFAULT_BASE_URL, value_parser = Url::parse)]
    pub factcheck_base_url: Url,

    /// User-Agent header sent with every request
    #[arg(long, env = "FACTCHECK_USER_AGENT", default_value = concat!("speaker_factcheck/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
}
