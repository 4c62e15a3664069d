//! Grouped text report.
//!
//! One block per matched subnet: a `<subnet>:` header, one domain per line,
//! then a blank line.

use crate::error::MapError;
use crate::models::{ReportOrder, SubnetGroups};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the report blocks to `out`.
pub fn write_blocks<W: Write>(
    out: &mut W,
    groups: &SubnetGroups,
    order: ReportOrder,
) -> io::Result<()> {
    for (subnet, domains) in groups.groups(order) {
        writeln!(out, "{subnet}:")?;
        for domain in domains {
            writeln!(out, "{domain}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write the report into it.
///
/// On failure the file is left as far as it got.
pub fn write_report(path: &Path, groups: &SubnetGroups, order: ReportOrder) -> Result<(), MapError> {
    let to_error = |source: io::Error| MapError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    log::info!("Writing report to {}", path.display());
    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    write_blocks(&mut out, groups, order).map_err(to_error)?;
    out.flush().map_err(to_error)?;
    Ok(())
}
