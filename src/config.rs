//! Run configuration.
//!
//! Paths are fixed constants; there are no CLI flags or environment overrides.

use crate::models::ReportOrder;
use std::path::PathBuf;

/// Default domain list file.
pub const DOMAINS_TXT: &str = "domains.txt";
/// Default subnet list file.
pub const SUBNETS_TXT: &str = "subnetsYandex.txt";
/// Default report file.
pub const OUTPUT_TXT: &str = "output.txt";
/// Default log4rs configuration file.
pub const LOG4RS_YML: &str = "log4rs.yml";

/// What to do with a subnet line that fails strict CIDR parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubnetLinePolicy {
    /// Fail the whole run on the first bad line.
    #[default]
    Abort,
    /// Warn about the line and keep loading.
    SkipWithWarning,
}

/// Settings for one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub domains_path: PathBuf,
    pub subnets_path: PathBuf,
    pub output_path: PathBuf,
    pub subnet_policy: SubnetLinePolicy,
    pub report_order: ReportOrder,
}

impl Config {
    pub fn new(
        domains_path: impl Into<PathBuf>,
        subnets_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Config {
        Config {
            domains_path: domains_path.into(),
            subnets_path: subnets_path.into(),
            output_path: output_path.into(),
            subnet_policy: SubnetLinePolicy::default(),
            report_order: ReportOrder::default(),
        }
    }

    pub fn with_subnet_policy(mut self, policy: SubnetLinePolicy) -> Config {
        self.subnet_policy = policy;
        self
    }

    pub fn with_report_order(mut self, order: ReportOrder) -> Config {
        self.report_order = order;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DOMAINS_TXT, SUBNETS_TXT, OUTPUT_TXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.domains_path, PathBuf::from("domains.txt"));
        assert_eq!(config.subnets_path, PathBuf::from("subnetsYandex.txt"));
        assert_eq!(config.output_path, PathBuf::from("output.txt"));
        assert_eq!(config.subnet_policy, SubnetLinePolicy::Abort);
        assert_eq!(config.report_order, ReportOrder::FirstMatch);
    }

    #[test]
    fn test_builders() {
        let config = Config::new("d.txt", "s.txt", "o.txt")
            .with_subnet_policy(SubnetLinePolicy::SkipWithWarning)
            .with_report_order(ReportOrder::SubnetFile);
        assert_eq!(config.subnet_policy, SubnetLinePolicy::SkipWithWarning);
        assert_eq!(config.report_order, ReportOrder::SubnetFile);
    }
}
