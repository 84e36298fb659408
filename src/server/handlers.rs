use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::format::{OutputFormat, render};
use crate::input::parse_submission;
use crate::model::User;
use crate::provider::UserSource;
use crate::stats::StatsEngine;

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Query string of `GET /api/userstats`
#[derive(Debug, Deserialize)]
pub struct StatsParams {
    pub users: Option<u32>,
}

/// Problem-details error body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub status: u16,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, detail: Option<String>) -> Self {
        Problem {
            status: status.as_u16(),
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            detail,
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)],
            Json(self),
        )
            .into_response()
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

pub async fn get_stats<S: UserSource>(
    State(state): State<AppState<S>>,
    Query(params): Query<StatsParams>,
    headers: HeaderMap,
) -> Response {
    let count = params.users.unwrap_or(state.default_users);
    let format = accepted_format(&headers);

    match state.source.fetch_users(count).await {
        Ok(users) => report_response(&users, format),
        Err(e) => {
            log::error!("Fetching {} users failed: {}", count, e);
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, None).into_response()
        }
    }
}

pub async fn put_stats(headers: HeaderMap, body: Bytes) -> Response {
    let format = accepted_format(&headers);

    let users = match std::str::from_utf8(&body)
        .map_err(|e| e.to_string())
        .and_then(|text| parse_submission(text).map_err(|e| e.to_string()))
    {
        Ok(users) => users,
        Err(message) => {
            log::warn!("Rejected submission: {}", message);
            return Problem::new(StatusCode::BAD_REQUEST, Some(message)).into_response();
        }
    };

    report_response(&users, format)
}

pub async fn health<S: UserSource>(State(state): State<AppState<S>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

fn accepted_format(headers: &HeaderMap) -> OutputFormat {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok());
    OutputFormat::negotiate(accept)
}

fn report_response(users: &[User], format: OutputFormat) -> Response {
    let report = StatsEngine::with_defaults().get_statistics(users);

    match render(&report, format) {
        Ok(body) => ([(header::CONTENT_TYPE, format.content_type())], body).into_response(),
        Err(e) => {
            log::error!("Rendering report failed: {}", e);
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, None).into_response()
        }
    }
}
