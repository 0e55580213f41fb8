use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const MAX_RESULTS_WANTED: u32 = 50;

fn default_results_wanted() -> u32 {
    20
}

fn default_hours_old() -> u32 {
    72
}

fn default_site_names() -> Vec<String> {
    ["indeed", "linkedin", "glassdoor"].iter().map(|s| s.to_string()).collect()
}

/// Job types the scraper understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Fulltime,
    Parttime,
    Contract,
    Internship,
}

impl JobType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fulltime" => Some(Self::Fulltime),
            "parttime" => Some(Self::Parttime),
            "contract" => Some(Self::Contract),
            "internship" => Some(Self::Internship),
            _ => None,
        }
    }
}

/// Request body as sent. A field that is absent or `null` takes its default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RequestBody {
    keywords: Option<String>,
    location: Option<String>,
    remote: Option<bool>,
    job_type: Option<String>,
    results_wanted: Option<u32>,
    hours_old: Option<u32>,
    site_names: Option<Vec<String>>,
}

/// Search request read from stdin. Also echoed back as `searchParams`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub keywords: String,
    pub location: String,
    pub remote: bool,
    pub job_type: Option<String>,
    pub results_wanted: u32,
    pub hours_old: u32,
    pub site_names: Vec<String>,
}

impl SearchRequest {
    fn from_body(body: RequestBody) -> Self {
        Self {
            keywords: body.keywords.unwrap_or_default(),
            location: body.location.unwrap_or_default(),
            remote: body.remote.unwrap_or_default(),
            job_type: body.job_type,
            results_wanted: body
                .results_wanted
                .unwrap_or_else(default_results_wanted)
                .min(MAX_RESULTS_WANTED),
            hours_old: body.hours_old.unwrap_or_else(default_hours_old),
            site_names: body.site_names.unwrap_or_else(default_site_names),
        }
    }

    pub fn from_json(input: &str) -> Result<Self> {
        let body: RequestBody = serde_json::from_str(input)?;
        Ok(Self::from_body(body))
    }

    /// # Errors
    /// * `Error::JobSearchError` if `keywords` is empty
    pub fn validate(&self) -> Result<()> {
        if self.keywords.is_empty() {
            return Err(Error::JobSearchError("keywords is required".into()));
        }
        Ok(())
    }

    /// Builds the query handed to the scraper.
    pub fn to_query(&self) -> ScrapeQuery {
        ScrapeQuery {
            site_name: self.site_names.clone(),
            search_term: self.keywords.clone(),
            results_wanted: self.results_wanted,
            hours_old: self.hours_old,
            country_indeed: "USA".into(),
            linkedin_fetch_description: true,
            location: Some(self.location.clone()).filter(|l| !l.is_empty()),
            is_remote: self.remote.then_some(true),
            job_type: self.job_type.as_deref().and_then(JobType::parse),
        }
    }
}

/// Arguments of one scrape, in the scraping backend's own naming.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeQuery {
    pub site_name: Vec<String>,
    pub search_term: String,
    pub results_wanted: u32,
    pub hours_old: u32,
    pub country_indeed: String,
    pub linkedin_fetch_description: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_remote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
}
