//! Command-line entry point.
//!
//! ## Usage
//!
//! ```sh
//! speaker_factcheck -u https://example.com/story -o ./results
//! ```

use clap::Parser;
use speaker_factcheck::cli::Cli;
use speaker_factcheck::http::HttpPageSource;
use speaker_factcheck::outputs::json;
use speaker_factcheck::pipeline::analyze_speakers_in_article;
use speaker_factcheck::scrapers::politifact::FactCheckClient;
use std::error::Error;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let source = HttpPageSource::new(&args.user_agent)?;
    let client = FactCheckClient::new(&args.factcheck_base_url)?;

    let speaker_scores = analyze_speakers_in_article(&source, &client, &args.url).await?;
    let path = json::write_speaker_scores(&speaker_scores, Path::new(&args.output)).await?;

    let elapsed = start_time.elapsed();
    info!(?elapsed, speakers = speaker_scores.len(), "Execution complete");

    println!("Speaker scores saved to {}", path.display());
    Ok(())
}
