use std::fmt::Write;

use crate::stats::{Report, StatItem};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

/// Renders a report for humans
///
/// A statistic with exactly one item prints as a single line. Any other
/// statistic prints its name, then each item indented by a tab.
pub fn render_plain_text(report: &Report) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Timestamp: {}", report.timestamp.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out, "User Count: {}", report.user_count);
    out.push('\n');

    for stat in &report.stats {
        if let [item] = stat.items.as_slice() {
            write_item(&mut out, item, 0);
        } else {
            out.push_str(&stat.name);
            out.push('\n');
            for item in &stat.items {
                write_item(&mut out, item, 1);
            }
        }
    }

    out
}

fn write_item(out: &mut String, item: &StatItem, indent: usize) {
    for _ in 0..indent {
        out.push('\t');
    }
    let _ = writeln!(out, "{}", item);
}

#[cfg(test)]
#[path = "plain_text_tests.rs"]
mod plain_text_tests;
