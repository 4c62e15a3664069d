//! Subnet list loader.

use super::{content_lines, read_input};
use crate::config::SubnetLinePolicy;
use crate::error::MapError;
use crate::models::{is_ipv6_network, Ipv4};
use crate::output::print_warning;
use std::path::Path;

/// Load CIDR ranges from `path`, one per non-empty line, in file order.
///
/// Every line is parsed strictly. IPv6 ranges are never matched, so they
/// are left out without counting as bad lines. A bad line either aborts the
/// load or is skipped with a warning, depending on `policy`.
pub fn load_subnets(path: &Path, policy: SubnetLinePolicy) -> Result<Vec<Ipv4>, MapError> {
    let text = read_input(path)?;
    let mut subnets = Vec::new();
    let mut ipv6_skipped = 0;

    for (line_no, line) in content_lines(&text) {
        match Ipv4::new(line) {
            Ok(subnet) => {
                log::trace!("line {line_no}: subnet {subnet}");
                subnets.push(subnet);
            }
            Err(_) if is_ipv6_network(line) => {
                log::debug!("line {line_no}: skipping IPv6 subnet {line}");
                ipv6_skipped += 1;
            }
            Err(reason) => {
                let err = MapError::SubnetParse {
                    path: path.to_path_buf(),
                    line: line_no,
                    text: line.to_string(),
                    reason,
                };
                match policy {
                    SubnetLinePolicy::Abort => return Err(err),
                    SubnetLinePolicy::SkipWithWarning => print_warning(&err),
                }
            }
        }
    }

    log::info!(
        "# Got subnet count = {} (IPv6 skipped = {ipv6_skipped})",
        subnets.len()
    );
    Ok(subnets)
}
