//! Report rendering.

use std::fmt::Write;

use crate::demo::DemoReport;

const NONE: &str = "(none)";

/// Render the report as plain text, one `Label: value` line each.
pub fn render_text(report: &DemoReport) -> String {
    let visitor = &report.visitor;
    let park = &report.park;

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Visitor: {}", visitor.name);
    let _ = writeln!(out, "Trips: {}", render_list(&visitor.trips));
    let _ = writeln!(out, "National Parks: {}", render_list(&visitor.national_parks));
    let _ = writeln!(out, "Park: {}", park.name);
    let _ = writeln!(out, "Trips: {}", render_list(&park.trips));
    let _ = writeln!(out, "Visitors: {}", render_list(&park.visitors));
    let _ = writeln!(out, "Total Visits: {}", park.total_visits);
    let _ = writeln!(
        out,
        "Best Visitor: {}",
        park.best_visitor.as_deref().unwrap_or(NONE)
    );
    let _ = writeln!(
        out,
        "Most Visited Park: {}",
        report.most_visited_park.as_deref().unwrap_or(NONE)
    );
    out
}

/// Render a list as `["a", "b"]`, quoting each item verbatim.
pub fn render_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("\"{item}\"")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &DemoReport) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
