//! Scrapers for the two pages the pipeline reads.
//!
//! | Page | Module | Notes |
//! |------|--------|-------|
//! | News article | [`article`] | Any HTML; only `<p>` text is used |
//! | Fact-check listing | [`politifact`] | Paginated speaker search, fixed structure |
//!
//! Both take a [`crate::http::PageSource`] so they can run against fixture
//! pages in tests. Parsing is done by plain functions over HTML strings
//! (`article::extract_statements`, `politifact::parse_results_page`).

pub mod article;
pub mod politifact;
