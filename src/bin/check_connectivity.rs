// src/bin/check_connectivity.rs
//
// Smoke test: can we reach the portal at all, and what does it call itself?

use std::time::Duration;

use clap::Parser;
use ecourts_scrape::{
    config::{consts::{BASE_URL, PROBE_TIMEOUT_SECS}, options::FetchConfig},
    core::Fetcher,
};

#[derive(Parser, Debug)]
#[command(about = "Check that the eCourts portal answers")]
struct Args {
    #[arg(long, env = "ECOURTS_BASE_URL", default_value = BASE_URL)]
    base_url: String,

    #[arg(long, default_value_t = PROBE_TIMEOUT_SECS)]
    timeout: u64,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    ecourts_scrape::log::init_cli(args.verbose);

    println!("Testing scraper connectivity...");
    let fetcher = Fetcher::new(FetchConfig::new(args.base_url, Duration::from_secs(args.timeout)))?;
    let probe = fetcher.probe()?;

    println!("Status Code: {}", probe.status);
    println!("Page Title: {}", probe.title.as_deref().unwrap_or("(no title)"));
    Ok(())
}
