//! Tests for format/plain_text

use super::*;
use crate::stats::StatResult;
use chrono::{FixedOffset, TimeZone};
use insta::assert_snapshot;

fn report_with(stats: Vec<StatResult>) -> Report {
    Report {
        timestamp: FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 9, 15, 4, 5)
            .unwrap(),
        user_count: 3,
        stats,
    }
}

#[test]
fn test_single_item_prints_on_one_line() {
    let report = report_with(vec![StatResult::single("Percentage of males", 0.6667)]);
    let text = render_plain_text(&report);

    assert!(text.lines().any(|line| line == "Percentage of males: 66.67%"));
}

#[test]
fn test_header_lines() {
    let text = render_plain_text(&report_with(Vec::new()));
    assert_eq!(text, "Timestamp: 2024-03-09 15:04:05 -05:00\nUser Count: 3\n\n");
}

#[test]
fn test_multiple_items_are_indented_under_name() {
    let report = report_with(vec![StatResult::new(
        "Percentage of people in each state",
        vec![
            StatItem::new("Percentage of people in Ohio", 2.0 / 3.0),
            StatItem::new("Percentage of people in Utah", 1.0 / 3.0),
        ],
    )]);
    let text = render_plain_text(&report);
    let lines: Vec<_> = text.lines().skip(3).collect();

    assert_eq!(
        lines,
        vec![
            "Percentage of people in each state",
            "\tPercentage of people in Ohio: 66.67%",
            "\tPercentage of people in Utah: 33.33%",
        ]
    );
}

#[test]
fn test_statistic_without_items_prints_name_only() {
    let report = report_with(vec![StatResult::new("Percentage of people in the age range", Vec::new())]);
    let text = render_plain_text(&report);

    assert!(text.ends_with("\nPercentage of people in the age range\n"));
}

#[test]
fn snapshot_full_report() {
    let report = report_with(vec![
        StatResult::single("Percentage of males", 2.0 / 3.0),
        StatResult::single("Percentage of females", 1.0 / 3.0),
        StatResult::new(
            "Percentage of people in the age range",
            vec![
                StatItem::new("Percentage of people in the age range 21-40", 0.5),
                StatItem::new("Percentage of people in the age range 100+", 0.125),
            ],
        ),
    ]);

    assert_snapshot!(render_plain_text(&report));
}
