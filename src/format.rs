//! Report rendering
//!
//! A [`Report`] renders as JSON, XML or plain text. The HTTP layer picks the
//! format from the `Accept` header, the CLI from `--format`.

mod plain_text;
mod xml;

use serde::Deserialize;
use thiserror::Error;

use crate::stats::Report;

pub use plain_text::render_plain_text;
pub use xml::render_xml;

/// Errors raised while rendering a report
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML serialization failed: {0}")]
    Xml(String),
}

/// Supported report representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Xml,
    Text,
}

impl OutputFormat {
    /// Content type sent with a rendered report
    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json; charset=utf-8",
            OutputFormat::Xml => "application/xml; charset=utf-8",
            OutputFormat::Text => "text/plain; charset=utf-8",
        }
    }

    /// Maps a single media type (without parameters) to a format
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type.trim().to_ascii_lowercase().as_str() {
            "application/json" | "text/json" | "application/*+json" => Some(OutputFormat::Json),
            "application/xml" | "text/xml" | "application/*+xml" => Some(OutputFormat::Xml),
            "text/plain" => Some(OutputFormat::Text),
            _ => None,
        }
    }

    /// Picks a format from an `Accept` header value
    ///
    /// Highest quality wins; equal qualities keep header order. Wildcards,
    /// missing headers and headers naming only unsupported types fall back
    /// to JSON.
    pub fn negotiate(accept: Option<&str>) -> Self {
        let Some(accept) = accept else {
            return OutputFormat::default();
        };

        let mut candidates: Vec<(f32, usize, OutputFormat)> = accept
            .split(',')
            .enumerate()
            .filter_map(|(position, entry)| {
                let mut parts = entry.split(';');
                let format = Self::from_media_type(parts.next()?)?;
                let quality = parts
                    .filter_map(|param| param.trim().strip_prefix("q="))
                    .find_map(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (quality > 0.0).then_some((quality, position, format))
            })
            .collect();

        candidates.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        candidates
            .first()
            .map(|(_, _, format)| *format)
            .unwrap_or_default()
    }
}

/// Renders a report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Xml => render_xml(report),
        OutputFormat::Text => Ok(render_plain_text(report)),
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;
