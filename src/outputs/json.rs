//! JSON output for the speaker scores.
//!
//! The mapping is written once, at the end of a run, as a flat object
//! pretty-printed with 4-space indentation:
//!
//! ```text
//! {
//!     "Jane Doe": 0.5,
//!     "John Smith": -1.0
//! }
//! ```
//!
//! The file is overwritten in place; there is no temp-file-and-rename step.

use crate::models::SpeakerScores;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Name of the file written inside the output directory.
pub const SCORES_FILENAME: &str = "speaker_scores.json";

/// Serialize `scores` as JSON indented with four spaces.
pub fn to_pretty_json(scores: &SpeakerScores) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    scores.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Write `scores` to `{output_dir}/speaker_scores.json`.
///
/// Creates `output_dir` (and any parents) first if it does not exist.
///
/// # Returns
///
/// The path of the written file.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display()))]
pub async fn write_speaker_scores(
    scores: &SpeakerScores,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = to_pretty_json(scores)?;

    info!("Ensuring output directory exists");
    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = output_dir.join(SCORES_FILENAME);
    info!(path = %path.display(), speakers = scores.len(), "Writing JSON");
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote speaker scores");

    Ok(path)
}
