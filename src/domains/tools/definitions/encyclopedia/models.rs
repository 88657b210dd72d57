//! Request and response shapes for encyclopedia search.
//!
//! `SearchEncyclopediaParams` is the tool input. Every invocation produces a
//! [`SearchOutcome`], which serializes to exactly one of [`SearchResponse`]
//! or [`ErrorResponse`].

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, INTERNAL_STATUS};

pub const DEFAULT_DISPLAY: i64 = 10;
pub const DEFAULT_START: i64 = 1;

/// Code used for failures that are not classified by the search client.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

fn default_display() -> i64 {
    DEFAULT_DISPLAY
}

fn default_start() -> i64 {
    DEFAULT_START
}

/// Parameters for the `search_encyclopedia` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchEncyclopediaParams {
    /// Search keyword.
    #[schemars(description = "Search keyword")]
    pub query: String,

    /// Number of results to return (1-100, default: 10).
    #[schemars(description = "Number of results to return (1-100, default: 10)")]
    #[schemars(range(min = 1, max = 100))]
    #[serde(default = "default_display")]
    pub display: i64,

    /// Position of the first result (1-1000, default: 1).
    #[schemars(description = "Position of the first result (1-1000, default: 1)")]
    #[schemars(range(min = 1, max = 1000))]
    #[serde(default = "default_start")]
    pub start: i64,
}

impl SearchEncyclopediaParams {
    pub fn new(query: impl Into<String>, display: i64, start: i64) -> Self {
        Self {
            query: query.into(),
            display,
            start,
        }
    }
}

/// A single encyclopedia entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EncyclopediaItem {
    /// Entry headword.
    pub title: String,
    /// URL of the entry.
    pub link: String,
    /// Entry summary.
    pub description: String,
    /// Thumbnail image URL, empty when the entry has none.
    pub thumbnail: String,
}

/// A page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchResponse {
    /// Total number of matches reported upstream.
    pub total: i64,
    /// Position of the first returned item.
    pub start: i64,
    /// Number of items on this page.
    pub display: i64,
    /// Items in upstream order.
    pub items: Vec<EncyclopediaItem>,
    /// Time the upstream generated the result.
    pub last_build_date: Option<String>,
}

/// A failed search, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// Always `true`.
    pub error: bool,
    pub error_code: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: true,
            error_code: error_code.into(),
            message: message.into(),
            status_code,
        }
    }

    /// Failure outside the client's error taxonomy.
    pub fn unknown(err: impl fmt::Display) -> Self {
        Self::new(
            UNKNOWN_ERROR,
            format!("unexpected error: {err}"),
            INTERNAL_STATUS,
        )
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self::new(err.code.as_str(), err.message, err.status_code)
    }
}

/// Result of one `search_encyclopedia` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchOutcome {
    Success(SearchResponse),
    Error(ErrorResponse),
}

impl SearchOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

// ============================================================================
// Upstream body shapes
// ============================================================================

/// Successful upstream body. Every field is optional; the dispatcher fills
/// in fallbacks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpstreamSearchBody {
    pub total: Option<i64>,
    pub start: Option<i64>,
    pub display: Option<i64>,
    pub items: Option<Vec<UpstreamItem>>,
    pub last_build_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

impl From<UpstreamItem> for EncyclopediaItem {
    fn from(item: UpstreamItem) -> Self {
        Self {
            title: item.title.unwrap_or_default(),
            link: item.link.unwrap_or_default(),
            description: item.description.unwrap_or_default(),
            thumbnail: item.thumbnail.unwrap_or_default(),
        }
    }
}

impl SearchResponse {
    /// Reshape a raw upstream body.
    ///
    /// Missing `total`/`start`/`display` fall back to `0`/`1`/`requested_display`.
    /// Fails when the body does not have the expected shape (not an object,
    /// `items` not a list, a non-text item field, ...).
    pub fn from_upstream(
        raw: serde_json::Value,
        requested_display: i64,
    ) -> Result<Self, serde_json::Error> {
        let body: UpstreamSearchBody = serde_json::from_value(raw)?;

        Ok(Self {
            total: body.total.unwrap_or(0),
            start: body.start.unwrap_or(DEFAULT_START),
            display: body.display.unwrap_or(requested_display),
            items: body
                .items
                .unwrap_or_default()
                .into_iter()
                .map(EncyclopediaItem::from)
                .collect(),
            last_build_date: body.last_build_date,
        })
    }
}
