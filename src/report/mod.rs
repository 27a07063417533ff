//! Console and JSON rendering of check results.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::HarnessError;
use crate::testing::{CheckResult, RunReport};

const RULE_WIDTH: usize = 60;

pub fn write_header(out: &mut impl Write, base_url: &str) -> io::Result<()> {
    writeln!(out, "Testing API at: {base_url}\n")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn write_check(out: &mut impl Write, result: &CheckResult) -> io::Result<()> {
    writeln!(out, "Testing {}...", result.name)?;
    if let Some(status) = result.status {
        writeln!(out, "Status Code: {status}")?;
    }
    if let Some(body) = &result.body {
        writeln!(out, "Response: {body}")?;
    }

    let mark = if result.passed { "✅" } else { "❌" };
    writeln!(out, "{mark} {}", result.message)?;
    for failure in result.failed_assertions().skip(1) {
        writeln!(out, "   also: {}", failure.message)?;
    }
    writeln!(out)
}

pub fn write_footer(out: &mut impl Write, report: &RunReport) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "\n{}/{} checks passed in {} ms",
        report.passed, report.total, report.duration_ms
    )?;
    if report.all_passed() {
        writeln!(out, "All tests completed!")
    } else {
        writeln!(out, "{} check(s) failed", report.failed)
    }
}

pub fn to_json(report: &RunReport) -> Result<String, HarnessError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn write_json_report(report: &RunReport, path: &Path) -> Result<(), HarnessError> {
    let raw = to_json(report)?;
    fs::write(path, raw).map_err(|e| HarnessError::io("write report", path, e))
}
