//! The end-to-end analysis: article → statements → speakers → fact-checks → scores.
//!
//! Everything runs strictly in sequence. Speakers are looked up one at a time
//! and each lookup walks its pages one request at a time.

use crate::http::PageSource;
use crate::models::SpeakerScores;
use crate::scoring::average_score;
use crate::scrapers::article::fetch_statements;
use crate::scrapers::politifact::FactCheckClient;
use crate::speakers::identify_speakers;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::error::Error;
use tracing::{error, info, instrument};

/// Score every speaker quoted in the article at `url`.
///
/// A failed article fetch is logged and yields an empty mapping. A failed
/// fact-check request only truncates that speaker's records. A fact-check
/// page with an unexpected structure aborts the whole analysis.
#[instrument(level = "info", skip(source, client))]
pub async fn analyze_speakers_in_article<S: PageSource>(
    source: &S,
    client: &FactCheckClient,
    url: &str,
) -> Result<SpeakerScores, Box<dyn Error>> {
    let statements = match fetch_statements(source, url).await {
        Ok(statements) => statements,
        Err(e) => {
            error!(%url, error = %e, "Error fetching article");
            return Ok(SpeakerScores::new());
        }
    };

    let speakers = identify_speakers(&statements);
    info!(count = speakers.len(), "Speakers to look up");

    let scores: SpeakerScores = stream::iter(speakers)
        .then(|speaker| async move {
            let records = client.lookup_speaker(source, &speaker).await?;
            let score = average_score(&records);
            info!(%speaker, statements = records.len(), score, "Scored speaker");
            Ok::<_, Box<dyn Error>>((speaker, score))
        })
        .try_collect()
        .await?;

    info!(count = scores.len(), "Completed speaker scoring");
    Ok(scores)
}
