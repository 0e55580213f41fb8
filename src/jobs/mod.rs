//! Job search normalization.
//!
//! Reads a search request, delegates the scrape to a [`JobScraper`] and maps
//! every returned row into a fixed result shape.

pub mod normalize;
pub mod request;
pub mod scraper;

use serde::Serialize;
use serde_json::json;

use crate::error::Result;

pub use normalize::{normalize_job, normalize_salary, JobResult, Salary};
pub use request::{ScrapeQuery, SearchRequest};
pub use scraper::{CommandScraper, JobScraper, RawJob};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<JobResult>,
    pub total_found: usize,
    pub search_params: SearchRequest,
}

/// Runs one search from raw request JSON. Any failure aborts the whole
/// search; there are no partial results.
pub fn search(input: &str, scraper: &dyn JobScraper) -> Result<SearchResponse> {
    let request = SearchRequest::from_json(input)?;
    request.validate()?;

    let rows = scraper.scrape(&request.to_query())?;
    log::debug!("Scraper returned {} row(s)", rows.len());

    let results: Vec<JobResult> =
        rows.iter().enumerate().map(|(index, row)| normalize_job(row, index)).collect();

    Ok(SearchResponse { total_found: results.len(), results, search_params: request })
}

/// The JSON document printed for a search and its exit status.
pub fn render_outcome(outcome: Result<SearchResponse>) -> (String, i32) {
    match outcome.and_then(|response| Ok(serde_json::to_string(&response)?)) {
        Ok(json) => (json, 0),
        Err(e) => (json!({ "error": e.to_string() }).to_string(), 1),
    }
}
