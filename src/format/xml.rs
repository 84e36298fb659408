use quick_xml::se::to_string;
use serde::Serialize;

use super::FormatError;
use crate::stats::{Report, StatItem, StatResult};

#[derive(Debug, Serialize)]
#[serde(rename = "StatResults")]
struct StatResultsXmlOut<'a> {
    #[serde(rename = "Timestamp")]
    timestamp: String,
    #[serde(rename = "UserCount")]
    user_count: usize,
    #[serde(rename = "Stats")]
    stats: StatsXmlOut<'a>,
}

#[derive(Debug, Serialize)]
struct StatsXmlOut<'a> {
    #[serde(rename = "StatQueryResult")]
    results: Vec<StatQueryResultXmlOut<'a>>,
}

#[derive(Debug, Serialize)]
struct StatQueryResultXmlOut<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Items")]
    items: ItemsXmlOut<'a>,
}

#[derive(Debug, Serialize)]
struct ItemsXmlOut<'a> {
    #[serde(rename = "StatQueryItem")]
    items: Vec<StatQueryItemXmlOut<'a>>,
}

#[derive(Debug, Serialize)]
struct StatQueryItemXmlOut<'a> {
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Pct")]
    pct: f64,
}

impl<'a> From<&'a StatItem> for StatQueryItemXmlOut<'a> {
    fn from(item: &'a StatItem) -> Self {
        StatQueryItemXmlOut {
            description: &item.description,
            pct: item.pct,
        }
    }
}

impl<'a> From<&'a StatResult> for StatQueryResultXmlOut<'a> {
    fn from(result: &'a StatResult) -> Self {
        StatQueryResultXmlOut {
            name: &result.name,
            items: ItemsXmlOut {
                items: result.items.iter().map(Into::into).collect(),
            },
        }
    }
}

/// Renders a report as an XML document rooted at `<StatResults>`
pub fn render_xml(report: &Report) -> Result<String, FormatError> {
    let xml = StatResultsXmlOut {
        timestamp: report.timestamp.to_rfc3339(),
        user_count: report.user_count,
        stats: StatsXmlOut {
            results: report.stats.iter().map(Into::into).collect(),
        },
    };

    to_string(&xml).map_err(|e| FormatError::Xml(e.to_string()))
}
