//! Naver encyclopedia search.
//!
//! - `client`: upstream HTTP client (credential check, clamping, error mapping)
//! - `models`: tool parameters and the two result shapes
//! - `search`: the `search_encyclopedia` tool
//! - `error`: client error type

pub mod client;
pub mod error;
pub mod models;
pub mod search;

pub use client::NaverClient;
pub use error::{ApiError, ErrorCode};
pub use models::{
    EncyclopediaItem, ErrorResponse, SearchEncyclopediaParams, SearchOutcome, SearchResponse,
};
pub use search::{SearchEncyclopediaTool, search_encyclopedia};
