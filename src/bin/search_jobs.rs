//! Reads a job search request from stdin and writes normalized results (or
//! `{"error": ...}`) to stdout.

use std::io::Read;

use clap::Parser;

use stackbake::error::{Error, Result};
use stackbake::jobs::{
    render_outcome, search, CommandScraper, JobScraper, RawJob, ScrapeQuery, SearchResponse,
};
use stackbake::logger::init_env_logger;

#[derive(Parser, Debug)]
#[command(author, version, about = "Normalize scraped job postings", long_about = None)]
struct Args {
    /// Program that performs the scrape (query JSON on stdin, rows on stdout)
    #[arg(long, env = "JOB_SCRAPER_CMD", value_name = "CMD")]
    scraper_cmd: Option<String>,
}

/// Stands in when no scraper command is set, so request errors still surface first.
struct Unconfigured;

impl JobScraper for Unconfigured {
    fn scrape(&self, _query: &ScrapeQuery) -> Result<Vec<RawJob>> {
        Err(Error::ScraperError("no scraper configured (set JOB_SCRAPER_CMD)".into()))
    }
}

fn run(args: Args) -> Result<SearchResponse> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let scraper: Box<dyn JobScraper> = match args.scraper_cmd {
        Some(command_line) => Box::new(CommandScraper::from_command_line(&command_line)?),
        None => Box::new(Unconfigured),
    };

    search(&input, &*scraper)
}

fn main() {
    let args = Args::parse();
    init_env_logger("warn");

    let (json, code) = render_outcome(run(args));
    println!("{json}");
    std::process::exit(code);
}
