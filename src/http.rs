//! Page retrieval for the article and the fact-check archive.
//!
//! Both ends of the pipeline only ever need "GET this URL, give me the body".
//! The [`PageSource`] trait captures exactly that so the parsing code can be
//! exercised against fixture pages without touching the network.

use reqwest::Client;
use std::error::Error;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Something that can fetch the body of a page.
///
/// Implementations must treat a non-2xx status as an error, so callers can
/// tell "the page was empty" apart from "the request failed".
pub trait PageSource {
    /// Fetch `url` and return its body as text.
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// [`PageSource`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// Build a client that sends `user_agent` on every request.
    ///
    /// No timeout is configured; reqwest's default applies.
    pub fn new(user_agent: &str) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let res = async {
            let response = self.client.get(url).send().await?.error_for_status()?;
            Ok::<_, reqwest::Error>(response.text().await?)
        }
        .await;
        let dt = t0.elapsed();

        match &res {
            Ok(body) => debug!(elapsed_ms = dt.as_millis(), bytes = body.len(), "GET succeeded"),
            Err(e) => warn!(elapsed_ms = dt.as_millis(), error = %e, "GET failed"),
        }
        Ok(res?)
    }
}
