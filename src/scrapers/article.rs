//! News article scraper.
//!
//! Pulls every quoted statement out of an arbitrary article page. The page
//! structure is not assumed beyond `<p>` elements: their text is joined and
//! every `"..."` run becomes a statement.

use crate::http::PageSource;
use crate::utils::truncate_for_log;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};

static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());
static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Every substring enclosed in ASCII double quotes, in order of appearance.
///
/// Curly quotes are not recognized.
pub fn extract_quotes(text: &str) -> Vec<String> {
    QUOTE_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Join the text of all `<p>` elements with single spaces and extract the
/// quoted statements from it.
pub fn extract_statements(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let article_text = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .join(" ");
    extract_quotes(&article_text)
}

/// Fetch an article and return its quoted statements.
///
/// Transport and status errors are returned as-is; deciding that a failed
/// fetch means "no statements" is left to the caller.
#[instrument(level = "info", skip(source))]
pub async fn fetch_statements<S: PageSource>(
    source: &S,
    url: &str,
) -> Result<Vec<String>, Box<dyn Error>> {
    let body = source.fetch(url).await?;
    let statements = extract_statements(&body);

    info!(bytes = body.len(), count = statements.len(), "Extracted article statements");
    for statement in &statements {
        debug!(statement = %truncate_for_log(statement, 120), "Statement");
    }
    Ok(statements)
}
