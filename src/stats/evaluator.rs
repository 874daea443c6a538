//! Threshold evaluation for a stats sample

use std::io::Write;

use crate::common::errors::Result;
use crate::common::types::{StatsSample, Violation};
use crate::config::types::Thresholds;

/// Check a sample against the thresholds.
///
/// Checks run in a fixed order (load, memory, disk, network) and each one is
/// independent. A ratio check is skipped when its total is zero.
pub fn evaluate(sample: &StatsSample, thresholds: &Thresholds) -> Vec<Violation> {
    let mut violations = Vec::new();

    let load = sample.load_average();
    if load > thresholds.max_load_average {
        violations.push(Violation::Load(load));
    }

    if sample.total_memory() != 0.0 {
        let usage_percent = sample.used_memory() / sample.total_memory() * 100.0;
        if usage_percent > thresholds.max_memory_percent {
            violations.push(Violation::Memory(usage_percent));
        }
    }

    if sample.total_disk() != 0.0 {
        let free = sample.total_disk() - sample.used_disk();
        if free / sample.total_disk() < thresholds.min_free_disk_ratio {
            violations.push(Violation::Disk(free));
        }
    }

    if sample.total_network() != 0.0 {
        let free = sample.total_network() - sample.used_network();
        if free / sample.total_network() < thresholds.min_free_network_ratio {
            violations.push(Violation::Network(free));
        }
    }

    violations
}

/// Write one line per violation
pub fn report<W: Write>(violations: &[Violation], out: &mut W) -> Result<()> {
    for violation in violations {
        writeln!(out, "{}", violation)?;
    }
    out.flush()?;
    Ok(())
}
