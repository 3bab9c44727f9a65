//! Renders a finding set into a wiki-markup report.

use crate::model::{Finding, FindingSet};

/// Renders the whole set, most severe findings first.
pub fn render(findings: &FindingSet) -> String {
    let mut out = String::new();
    append_report(findings, &mut out, 1);
    out
}

/// Appends the set to `out` starting at the given nesting depth.
///
/// Top-level findings are stable-sorted by descending severity; subitems keep
/// the order their verifier produced.
pub fn append_report(findings: &FindingSet, out: &mut String, depth: usize) {
    let mut items: Vec<&Finding> = findings.iter().collect();
    items.sort_by(|a, b| b.severity.cmp(&a.severity));
    for finding in items {
        append_finding(finding, out, depth);
    }
}

fn append_finding(finding: &Finding, out: &mut String, depth: usize) {
    let marker = "*".repeat(depth);
    if depth == 1 {
        out.push_str(&format!(
            "{} {{color:{}}}[{}]{{color}} {}\n",
            marker,
            finding.severity.color(),
            finding.severity.label(),
            finding.message
        ));
    } else {
        out.push_str(&format!("{} {}\n", marker, finding.message));
    }
    for sub in &finding.subitems {
        append_finding(sub, out, depth + 1);
    }
}
