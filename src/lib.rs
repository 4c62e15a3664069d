// cargo watch -x 'fmt' -x 'run'

pub mod config;
pub mod dns;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{Config, SubnetLinePolicy};
pub use error::MapError;
pub use models::ReportOrder;
pub use processing::MatchStats;

use dns::Resolver;

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Subnets loaded, repeats counted once.
    pub subnets: usize,
    /// Subnets written to the report.
    pub matched_subnets: usize,
    pub stats: MatchStats,
}

/// Load both lists, resolve and match every domain, then write the report.
///
/// Input files are loaded before any lookup runs, so a missing file means
/// nothing is resolved and nothing is written.
pub fn run(config: &Config, resolver: &dyn Resolver) -> Result<RunSummary, MapError> {
    log::info!("#Start run() {config:?}");

    let subnets = input::load_subnets(&config.subnets_path, config.subnet_policy)?;
    let domains = input::load_domains(&config.domains_path)?;

    output::print_banner();
    let (groups, stats) = processing::match_domains(&domains, &subnets, resolver);

    output::write_report(&config.output_path, &groups, config.report_order)?;

    let summary = RunSummary {
        subnets: groups.subnets().count(),
        matched_subnets: groups.matched_count(),
        stats,
    };
    log::info!(
        "# Done: domains={} failed_lookups={} invalid_addresses={} matched_subnets={}/{}",
        stats.domains,
        stats.failed_lookups,
        stats.invalid_addresses,
        summary.matched_subnets,
        summary.subnets
    );
    Ok(summary)
}
