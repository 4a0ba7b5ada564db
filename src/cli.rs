// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::Parser;
use tracing::debug;

use crate::{
    config::{
        consts::{BASE_URL, CAUSE_LIST_FILE, FETCH_TIMEOUT_SECS},
        options::FetchConfig,
    },
    core::Fetcher,
    data::CaseQuery,
    error::{Result, ScrapeError},
    file,
    progress::Progress,
    runner,
};

const USAGE_HINT: &str = "Provide either CNR or Case Type + Number + Year.";

#[derive(Parser, Debug, Clone)]
#[command(name = "cli", about = "eCourts case-status scraper", version)]
pub struct Args {
    /// Search case by CNR number
    #[arg(long)]
    pub cnr: Option<String>,

    /// Case type (e.g. CR, CS)
    #[arg(long = "case_type")]
    pub case_type: Option<String>,

    /// Case number
    #[arg(long = "case_no")]
    pub case_no: Option<String>,

    /// Case year
    #[arg(long = "case_year")]
    pub case_year: Option<String>,

    /// Download today's cause list if available
    #[arg(long)]
    pub causelist: bool,

    /// Directory for case_result.json and downloaded PDFs
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Portal base URL (endpoint paths are appended to it)
    #[arg(long, env = "ECOURTS_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "ECOURTS_TIMEOUT", default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn query(&self) -> Option<CaseQuery> {
        CaseQuery::from_parts(
            self.cnr.as_deref(),
            self.case_type.as_deref(),
            self.case_no.as_deref(),
            self.case_year.as_deref(),
        )
    }

    /// Name for the downloaded case PDF: the case number when one was given,
    /// even alongside a CNR, else the query's own identifier.
    pub fn pdf_identifier<'a>(&'a self, query: &'a CaseQuery) -> &'a str {
        self.case_no
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| query.identifier())
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::new(self.base_url.clone(), Duration::from_secs(self.timeout))
    }
}

/// Progress lines go straight to stdout.
struct CliProgress;
impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

/// Parse the process arguments and run one lookup.
pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init_cli(args.verbose);
    run_with(&args)
}

/// Missing query → usage hint, Ok.
/// Case not found → `Error: …`, Ok.
/// Network / IO failures → Err, for the binary to report and exit non-zero.
pub fn run_with(args: &Args) -> Result<()> {
    let Some(query) = args.query() else {
        println!("{USAGE_HINT}");
        return Ok(());
    };
    debug!(?args, "cli args");

    let fetcher = Fetcher::new(args.fetch_config())?;

    let report = match runner::lookup(&fetcher, &query, Some(&mut CliProgress)) {
        Ok(r) => r,
        Err(ScrapeError::Extraction(e)) => {
            println!("Error: {e}");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("Listing Status: {}", report.listing);

    file::ensure_directory(&args.out_dir)?;

    if report.pdf_link.is_some() {
        println!("PDF available. Downloading...");
        if let Some(outcome) = runner::download_case_pdf(
            &fetcher,
            &report,
            &args.out_dir,
            args.pdf_identifier(&query),
        )? {
            println!("{outcome}");
        }
    } else {
        println!("No case PDF found.");
    }

    let result = report.to_result().with_downloaded_pdf(report.pdf_link.is_some());
    let path = file::write_result(&file::result_path(&args.out_dir), &result)?;
    println!("Case details saved as {}", path.display());

    if args.causelist {
        println!("Attempting to download today's cause list...");
        match fetcher.download_cause_list(&args.out_dir.join(CAUSE_LIST_FILE)) {
            Ok(outcome) => println!("{outcome}"),
            Err(e) => println!("Cause list not available: {e}"),
        }
    }

    Ok(())
}
