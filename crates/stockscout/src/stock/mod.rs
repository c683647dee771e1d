use crate::prelude::{println, *};
use serde::Deserialize;

pub mod search;
pub mod show;

// Re-export domain types from core
pub use stockscout_core::normalize::{normalize, RawImage, StockImage};
pub use stockscout_core::query::{build_query, ContentType, SearchFilter};

const PRODUCT_HEADER: &str = "stockscout/1.0";

/// Stock API configuration from environment variables
#[derive(Debug, Clone)]
pub struct StockConfig {
    pub base_url: String,
    pub api_key: String,
}

impl StockConfig {
    /// Default public search endpoint
    pub const DEFAULT_BASE_URL: &'static str = "https://stock.adobe.io/Rest/Media/1/Search/Files";

    /// Resolve configuration from the global CLI arguments
    ///
    /// The API key comes from `--api-key` or `ADOBE_STOCK_API_KEY`; the
    /// endpoint from `STOCK_API_BASE` with the public endpoint as default.
    pub fn resolve(global: &crate::Global) -> Result<Self> {
        let api_key = global
            .api_key
            .clone()
            .ok_or_eyre("ADOBE_STOCK_API_KEY environment variable not set")?;

        Ok(Self {
            base_url: std::env::var("STOCK_API_BASE")
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string()),
            api_key,
        })
    }
}

/// Create an HTTP client with the stock API auth headers
pub fn create_client(config: &StockConfig) -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

    let mut headers = HeaderMap::new();
    headers.insert(
        "x-api-key",
        HeaderValue::from_str(&config.api_key).map_err(|e| eyre!("Invalid API key: {}", e))?,
    );
    headers.insert("X-Product", HeaderValue::from_static(PRODUCT_HEADER));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Search response envelope from the stock API
#[derive(Debug, Deserialize)]
pub struct SearchFilesResponse {
    #[serde(default)]
    pub files: Vec<RawImage>,
}

/// Fetch and normalize one search result set
///
/// One GET per call, all-or-nothing: a non-2xx status or a malformed body
/// fails the whole fetch and no partial results survive.
pub async fn fetch_images(
    client: &reqwest::Client,
    config: &StockConfig,
    filter: &SearchFilter,
) -> Result<Vec<StockImage>> {
    let params = build_query(filter);

    let response = client
        .get(&config.base_url)
        .query(&params)
        .send()
        .await
        .map_err(|e| eyre!(Error::Network(f!("Failed to fetch stock images: {e}"))))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(eyre!(Error::Network(f!("Stock API error [{status}]: {body}"))));
    }

    let body_text = response
        .text()
        .await
        .map_err(|e| eyre!(Error::Network(f!("Failed to read response body: {e}"))))?;

    let search_response: SearchFilesResponse = serde_json::from_str(&body_text)
        .map_err(|e| eyre!(Error::Parse(f!("Failed to parse stock response: {e}"))))?;

    Ok(normalize(search_response.files))
}

/// Truncate text to a maximum number of characters
///
/// Counts characters, not bytes, so multi-byte titles never split inside a
/// code point.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_len).collect::<String>())
    }
}

/// Format a count with thousands separators
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0 {
        format!("-{out}")
    } else {
        out
    }
}

/// Format a trend score the way the table and detail card display it
pub fn format_trend_score(score: f64) -> String {
    if score > 0.0 {
        format!("{score:.1}%")
    } else {
        "0.0%".to_string()
    }
}
