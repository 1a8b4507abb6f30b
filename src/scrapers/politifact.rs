//! PolitiFact fact-check archive scraper.
//!
//! Walks the paginated search listing at
//! `{base}/factchecks/list/?page={n}&speaker={name}` until a page comes back
//! with no entries.
//!
//! # Page structure
//!
//! | Field  | Where it is read from                                           |
//! |--------|-----------------------------------------------------------------|
//! | entry  | `li.o-listicle__item`                                           |
//! | title  | text of the first `a.m-statement__quote` in the entry           |
//! | rating | `alt` of the first `img` in the first `picture` in the first `div.m-statement__meter` |
//!
//! All selector knowledge lives in [`parse_results_page`]. If the site
//! changes, that function fails loudly and nothing else needs to move.

use crate::http::PageSource;
use crate::models::FactCheckRecord;
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Origin used when no other archive is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.politifact.com";

static ENTRY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li.o-listicle__item").unwrap());
static QUOTE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.m-statement__quote").unwrap());
static METER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.m-statement__meter").unwrap());
static PICTURE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("picture").unwrap());
static IMG_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

/// Parse one page of search results.
///
/// An empty `Vec` means the listing has run out. A result entry that is
/// missing any of the expected elements is an error.
pub fn parse_results_page(html: &str) -> Result<Vec<FactCheckRecord>, Box<dyn Error>> {
    let document = Html::parse_document(html);
    document
        .select(&ENTRY_SELECTOR)
        .enumerate()
        .map(|(index, entry)| {
            parse_entry(entry).map_err(|e| -> Box<dyn Error> { format!("result entry {index}: {e}").into() })
        })
        .collect()
}

fn parse_entry(entry: ElementRef<'_>) -> Result<FactCheckRecord, Box<dyn Error>> {
    let title = entry
        .select(&QUOTE_SELECTOR)
        .next()
        .ok_or("missing a.m-statement__quote")?
        .text()
        .collect::<String>();

    let rating = entry
        .select(&METER_SELECTOR)
        .next()
        .ok_or("missing div.m-statement__meter")?
        .select(&PICTURE_SELECTOR)
        .next()
        .ok_or("missing picture in rating meter")?
        .select(&IMG_SELECTOR)
        .next()
        .ok_or("missing img in rating picture")?
        .value()
        .attr("alt")
        .ok_or("rating img has no alt attribute")?;

    Ok(FactCheckRecord::new(title.trim(), rating.trim()))
}

/// Client for the fact-check archive's speaker search.
#[derive(Debug, Clone)]
pub struct FactCheckClient {
    list_url: Url,
}

impl FactCheckClient {
    /// Build a client rooted at `base_url`, e.g. `https://www.politifact.com`.
    pub fn new(base_url: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            list_url: base_url.join("factchecks/list/")?,
        })
    }

    /// The search listing URL for `speaker` at `page` (1-based).
    pub fn search_url(&self, speaker: &str, page: u32) -> String {
        let mut url = self.list_url.clone();
        let query = format!("page={}&speaker={}", page, urlencoding::encode(speaker));
        url.set_query(Some(&query));
        url.to_string()
    }

    /// Collect every fact-check listed for `speaker`, page by page.
    ///
    /// Stops at the first page with no entries. A failed request also stops
    /// the walk, and whatever was collected before it is returned as a normal
    /// result. Only a page that does not have the expected structure fails
    /// the lookup.
    #[instrument(level = "info", skip(self, source))]
    pub async fn lookup_speaker<S: PageSource>(
        &self,
        source: &S,
        speaker: &str,
    ) -> Result<Vec<FactCheckRecord>, Box<dyn Error>> {
        let mut records = Vec::new();
        let mut page = 1u32;

        loop {
            let url = self.search_url(speaker, page);
            let body = match source.fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    error!(page, %url, error = %e, "Error scraping fact-check archive; keeping partial results");
                    break;
                }
            };

            let entries = parse_results_page(&body)?;
            if entries.is_empty() {
                debug!(page, "Empty results page; listing exhausted");
                break;
            }

            debug!(page, count = entries.len(), "Parsed results page");
            for entry in &entries {
                debug!(rating = %entry.rating, title = %truncate_for_log(&entry.title, 120), "Fact-check");
            }
            records.extend(entries);
            page += 1;
        }

        info!(count = records.len(), last_page = page, "Collected fact-checks for speaker");
        Ok(records)
    }
}
