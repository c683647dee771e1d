//! Query Builder: search filter to Adobe Stock API parameters

use serde::{Deserialize, Serialize};

/// Content-type filter applied to a search
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    All,
    Ai,
    Photo,
}

impl ContentType {
    /// Parse a content type from its CLI/user representation
    pub fn parse(input: &str) -> Result<Self, String> {
        match input {
            "all" => Ok(ContentType::All),
            "ai" => Ok(ContentType::Ai),
            "photo" => Ok(ContentType::Photo),
            _ => Err(format!(
                "Invalid content type: {input}. Valid types: all, ai, photo"
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::All => "all",
            ContentType::Ai => "ai",
            ContentType::Photo => "photo",
        }
    }
}

/// User-controlled search filter
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub words: String,
    pub content_type: ContentType,
}

/// Result columns requested on every search, matching the stock website's own
/// projection.
pub const RESULT_COLUMNS: &[&str] = &[
    "id",
    "title",
    "creator_name",
    "creator_id",
    "category",
    "thumbnail_url",
    "thumbnail_width",
    "thumbnail_height",
    "width",
    "height",
    "creation_date",
    "keywords",
    "nb_downloads",
    "nb_views",
    "description",
    "details_url",
    "vector_type",
    "content_type",
    "media_type_id",
    "category_hierarchy",
];

/// Build the full query-parameter list for a search request
///
/// Always produces a well-formed parameter set, including for an empty search
/// term (which returns the unfiltered top results). The search words are
/// passed through verbatim; URL encoding belongs to the transport layer.
///
/// Content-type mapping:
/// - `photo` sets the photographic-content flag only
/// - `ai` sets the AI-content flag only
/// - `all` sets neither flag
pub fn build_query(filter: &SearchFilter) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = vec![
        ("locale", "en_US"),
        ("search_parameters[limit]", "100"),
        ("search_parameters[offset]", "0"),
        ("search_parameters[order]", "relevance"),
        ("search_parameters[thumbnail_size]", "240"),
        ("search_parameters[filters][editorial]", "0"),
        ("search_parameters[filters][isolated]", "0"),
        ("search_parameters[filters][panoramic]", "0"),
        ("search_parameters[filters][premium]", "false"),
        ("search_parameters[filters][orientation]", "all"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    params.push((
        "search_parameters[words]".to_string(),
        filter.words.clone(),
    ));

    match filter.content_type {
        ContentType::Photo => params.push((
            "search_parameters[filters][content_type:photo]".to_string(),
            "1".to_string(),
        )),
        ContentType::Ai => params.push((
            "search_parameters[filters][content_type:ai]".to_string(),
            "1".to_string(),
        )),
        ContentType::All => {}
    }

    for column in RESULT_COLUMNS {
        params.push(("result_columns[]".to_string(), column.to_string()));
    }

    params
}
