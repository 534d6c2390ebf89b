//! YouTube Data API v3 client.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    Parse(String),
}

/// One video hit, fully resolved (snippet + duration + view count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoResult {
    pub id: String,
    pub title: String,
    pub channel: String,
    /// ISO-8601 duration as returned by the API, e.g. "PT4M13S".
    pub duration: String,
    pub views: u64,
}

impl VideoResult {
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

pub struct SearchClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    max_results: u8,
}

impl SearchClient {
    pub fn new(api_key: String, base_url: Option<String>, max_results: u8) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            max_results,
        }
    }

    /// Keyword search, at most `max_results` hits, in API relevance order.
    ///
    /// Videos the second call returns no details for (deleted between the two
    /// requests, region-blocked) are silently dropped.
    pub async fn search(&self, query: &str) -> Result<Vec<VideoResult>, SearchError> {
        debug!(query, "youtube search");

        let search: SearchListResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("type", "video"),
                    ("maxResults", &self.max_results.to_string()),
                    ("q", query),
                ],
            )
            .await?;

        let ids: Vec<String> = search
            .items
            .iter()
            .filter_map(|item| item.id.video_id.clone())
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let details: VideoListResponse = self
            .get(
                "videos",
                &[("part", "contentDetails,statistics"), ("id", &ids.join(","))],
            )
            .await?;

        Ok(join_results(search.items, details.items))
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, SearchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), endpoint, "youtube API error");
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))
    }
}

/// Join snippets with their details, preserving search (relevance) order.
fn join_results(items: Vec<SearchItem>, details: Vec<VideoItem>) -> Vec<VideoResult> {
    let by_id: HashMap<String, VideoItem> =
        details.into_iter().map(|v| (v.id.clone(), v)).collect();

    items
        .into_iter()
        .filter_map(|item| {
            let id = item.id.video_id?;
            let detail = by_id.get(&id)?;
            let views = detail
                .statistics
                .view_count
                .as_deref()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            Some(VideoResult {
                id,
                title: item.snippet.title,
                channel: item.snippet.channel_title,
                duration: detail.content_details.duration.clone(),
                views,
            })
        })
        .collect()
}

// ── wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    channel_title: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    content_details: ContentDetails,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
}
