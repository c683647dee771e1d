//! Result Normalizer: raw search-API records to shape-stable domain records
//!
//! The search API guarantees nothing about nested field shapes: `category` may
//! be a string or an object, `keywords` entries may be strings or objects with
//! a `name` or `text` field, and counters may arrive as numbers or strings.
//! The loose shapes are modeled as untagged unions at the boundary and
//! resolved to plain strings/integers here, so nothing downstream ever
//! re-inspects shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Public detail-page base used when the API omits `details_url`
pub const STOCK_DETAIL_BASE: &str = "https://stock.adobe.com/images";

/// Category field: string or `{name}` object, or anything else
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum LooseCategory {
    Named { name: String },
    Plain(String),
    Other(Value),
}

/// Keyword entry: string, `{name}` object, `{text}` object, or anything else
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum LooseKeyword {
    Plain(String),
    Named { name: String },
    Text { text: String },
    Other(Value),
}

/// Counter field: number or numeric string, or anything else
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum LooseCount {
    Int(i64),
    Str(String),
    Other(Value),
}

/// Stock image record from the search API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RawImage {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub category: Option<LooseCategory>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<LooseKeyword>>,
    #[serde(default)]
    pub nb_downloads: Option<LooseCount>,
    #[serde(default)]
    pub nb_views: Option<LooseCount>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub details_url: Option<String>,
}

/// Normalized stock image record
///
/// Shape-stable: every loosely-typed API field has been resolved, counters are
/// plain integers, and `trend_score` is clamped to `[0, 100]`. `rank` is the
/// 1-based position in the originally fetched order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StockImage {
    pub id: u64,
    pub rank: usize,
    pub title: String,
    pub category: String,
    pub creator_name: Option<String>,
    pub thumbnail_url: Option<String>,
    pub downloads: i64,
    pub views: i64,
    pub trend_score: f64,
    pub keywords: Vec<String>,
    pub description: Option<String>,
    pub stock_url: String,
}

/// Resolve a category field to its display string
///
/// Absent or null resolves to "Uncategorized"; `{name}` objects resolve to the
/// name; anything else resolves to its string form.
pub fn category_name(category: Option<&LooseCategory>) -> String {
    match category {
        None | Some(LooseCategory::Other(Value::Null)) => "Uncategorized".to_string(),
        Some(LooseCategory::Named { name }) => name.clone(),
        Some(LooseCategory::Plain(text)) => text.clone(),
        Some(LooseCategory::Other(Value::Number(n))) => n.to_string(),
        Some(LooseCategory::Other(Value::Bool(b))) => b.to_string(),
        Some(LooseCategory::Other(other)) => other.to_string(),
    }
}

/// Resolve a keyword entry to its display text
///
/// Never fails on malformed entries: anything without a usable string form
/// resolves to the empty string.
pub fn keyword_text(keyword: &LooseKeyword) -> String {
    match keyword {
        LooseKeyword::Plain(text) => text.clone(),
        LooseKeyword::Named { name } => name.clone(),
        LooseKeyword::Text { text } => text.clone(),
        LooseKeyword::Other(_) => String::new(),
    }
}

/// Parse a counter field as an integer
///
/// Non-numeric or absent values yield 0. Negative values pass through as-is;
/// they are invalid upstream and are not clamped here.
pub fn parse_count(count: Option<&LooseCount>) -> i64 {
    match count {
        None => 0,
        Some(LooseCount::Int(value)) => *value,
        Some(LooseCount::Str(text)) => text.trim().parse::<i64>().unwrap_or(0),
        Some(LooseCount::Other(value)) => value.as_i64().unwrap_or(0),
    }
}

/// Compute the trend score for a view/download pair
///
/// Display-only weighted popularity heuristic, not a probability. Downloads
/// saturate at 1000, views at 5000, downloads weigh twice as much as views,
/// and the result is clamped to `[0, 100]`.
pub fn trend_score(views: i64, downloads: i64) -> f64 {
    let normalized_downloads = downloads as f64 / 1000.0 * 100.0;
    let normalized_views = views as f64 / 5000.0 * 100.0;
    let score = (normalized_downloads * 2.0 + normalized_views) / 3.0;
    score.clamp(0.0, 100.0)
}

/// Slugify a title for a synthesized detail URL
///
/// Lowercases the title, collapses every non-alphanumeric run to a single
/// hyphen, and trims leading/trailing hyphens.
pub fn title_slug(title: &str) -> String {
    let mut slug = String::new();
    let mut pending_hyphen = false;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Resolve the canonical detail-page URL for an image
///
/// Uses the API-provided URL when present, otherwise synthesizes one from the
/// title slug and image id.
pub fn detail_url(details_url: Option<&str>, title: &str, id: u64) -> String {
    match details_url {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => format!("{}/{}/{}", STOCK_DETAIL_BASE, title_slug(title), id),
    }
}

/// Normalize a fetched record set
///
/// Order preserving; `rank` is assigned by 1-based position in the input.
/// Defensive extraction is applied per field, so malformed individual records
/// degrade to fallbacks instead of failing the whole set.
pub fn normalize(raw: Vec<RawImage>) -> Vec<StockImage> {
    raw.into_iter()
        .enumerate()
        .map(|(index, item)| {
            let title = item.title.unwrap_or_default();
            let views = parse_count(item.nb_views.as_ref());
            let downloads = parse_count(item.nb_downloads.as_ref());

            StockImage {
                id: item.id,
                rank: index + 1,
                category: category_name(item.category.as_ref()),
                creator_name: item.creator_name,
                thumbnail_url: item.thumbnail_url,
                downloads,
                views,
                trend_score: trend_score(views, downloads),
                keywords: item
                    .keywords
                    .unwrap_or_default()
                    .iter()
                    .map(keyword_text)
                    .collect(),
                description: item.description,
                stock_url: detail_url(item.details_url.as_deref(), &title, item.id),
                title,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_from(value: Value) -> RawImage {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_trend_score_saturates_at_scaling_denominators() {
        assert_eq!(trend_score(5000, 1000), 100.0);
    }

    #[test]
    fn test_trend_score_zero() {
        assert_eq!(trend_score(0, 0), 0.0);
    }

    #[test]
    fn test_trend_score_clamped_above() {
        assert_eq!(trend_score(1_000_000, 1_000_000), 100.0);
    }

    #[test]
    fn test_trend_score_clamped_below() {
        assert_eq!(trend_score(-5000, -1000), 0.0);
    }

    #[test]
    fn test_trend_score_weights_downloads_double() {
        // 500 downloads saturate half the download term, no views.
        let score = trend_score(0, 500);
        assert!((score - (50.0 * 2.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_trend_score_in_range_for_valid_pairs() {
        for views in [0, 1, 250, 4999, 5000, 50_000] {
            for downloads in [0, 1, 100, 999, 1000, 10_000] {
                let score = trend_score(views, downloads);
                assert!((0.0..=100.0).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn test_category_plain_string() {
        let category: LooseCategory = serde_json::from_value(json!("Nature")).unwrap();
        assert_eq!(category_name(Some(&category)), "Nature");
    }

    #[test]
    fn test_category_named_object() {
        let category: LooseCategory = serde_json::from_value(json!({"name": "Nature"})).unwrap();
        assert_eq!(category_name(Some(&category)), "Nature");
    }

    #[test]
    fn test_category_absent() {
        assert_eq!(category_name(None), "Uncategorized");
    }

    #[test]
    fn test_category_null() {
        let category = LooseCategory::Other(Value::Null);
        assert_eq!(category_name(Some(&category)), "Uncategorized");
    }

    #[test]
    fn test_category_number_string_form() {
        let category: LooseCategory = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(category_name(Some(&category)), "42");
    }

    #[test]
    fn test_keyword_plain_string() {
        let keyword: LooseKeyword = serde_json::from_value(json!("summer")).unwrap();
        assert_eq!(keyword_text(&keyword), "summer");
    }

    #[test]
    fn test_keyword_named_object() {
        let keyword: LooseKeyword = serde_json::from_value(json!({"name": "summer"})).unwrap();
        assert_eq!(keyword_text(&keyword), "summer");
    }

    #[test]
    fn test_keyword_text_object() {
        let keyword: LooseKeyword = serde_json::from_value(json!({"text": "summer"})).unwrap();
        assert_eq!(keyword_text(&keyword), "summer");
    }

    #[test]
    fn test_keyword_empty_object() {
        let keyword: LooseKeyword = serde_json::from_value(json!({})).unwrap();
        assert_eq!(keyword_text(&keyword), "");
    }

    #[test]
    fn test_keyword_name_takes_precedence_over_text() {
        let keyword: LooseKeyword =
            serde_json::from_value(json!({"name": "beach", "text": "sand"})).unwrap();
        assert_eq!(keyword_text(&keyword), "beach");
    }

    #[test]
    fn test_parse_count_integer() {
        let count: LooseCount = serde_json::from_value(json!(123)).unwrap();
        assert_eq!(parse_count(Some(&count)), 123);
    }

    #[test]
    fn test_parse_count_numeric_string() {
        let count: LooseCount = serde_json::from_value(json!("456")).unwrap();
        assert_eq!(parse_count(Some(&count)), 456);
    }

    #[test]
    fn test_parse_count_garbage_string() {
        let count: LooseCount = serde_json::from_value(json!("lots")).unwrap();
        assert_eq!(parse_count(Some(&count)), 0);
    }

    #[test]
    fn test_parse_count_absent() {
        assert_eq!(parse_count(None), 0);
    }

    #[test]
    fn test_parse_count_negative_passes_through() {
        let count: LooseCount = serde_json::from_value(json!(-5)).unwrap();
        assert_eq!(parse_count(Some(&count)), -5);
    }

    #[test]
    fn test_title_slug() {
        assert_eq!(title_slug("Sunset Over The Lake"), "sunset-over-the-lake");
        assert_eq!(title_slug("Cats & Dogs!!"), "cats-dogs");
        assert_eq!(title_slug("  Spaced  Out  "), "spaced-out");
        assert_eq!(title_slug(""), "");
    }

    #[test]
    fn test_detail_url_prefers_api_value() {
        let url = detail_url(Some("https://stock.adobe.com/images/foo/1"), "Bar", 1);
        assert_eq!(url, "https://stock.adobe.com/images/foo/1");
    }

    #[test]
    fn test_detail_url_synthesized_from_title() {
        let url = detail_url(None, "Sunset Over The Lake", 77);
        assert_eq!(
            url,
            "https://stock.adobe.com/images/sunset-over-the-lake/77"
        );
    }

    #[test]
    fn test_normalize_assigns_ranks_in_order() {
        let raw = vec![
            raw_from(json!({"id": 10, "title": "First"})),
            raw_from(json!({"id": 20, "title": "Second"})),
            raw_from(json!({"id": 30, "title": "Third"})),
        ];

        let images = normalize(raw);

        assert_eq!(images.len(), 3);
        assert_eq!(images[0].rank, 1);
        assert_eq!(images[1].rank, 2);
        assert_eq!(images[2].rank, 3);
        assert_eq!(images[0].id, 10);
        assert_eq!(images[2].id, 30);
    }

    #[test]
    fn test_normalize_full_record() {
        let raw = vec![raw_from(json!({
            "id": 12345,
            "title": "Mountain Lake",
            "creator_name": "Jane Doe",
            "category": {"name": "Landscapes"},
            "thumbnail_url": "https://t0.example/12345.jpg",
            "keywords": ["mountain", {"name": "lake"}, {"text": "water"}, {}],
            "nb_downloads": "800",
            "nb_views": 4000,
            "description": "A lake.",
            "details_url": "https://stock.adobe.com/images/mountain-lake/12345"
        }))];

        let images = normalize(raw);
        let image = &images[0];

        assert_eq!(image.title, "Mountain Lake");
        assert_eq!(image.category, "Landscapes");
        assert_eq!(image.creator_name, Some("Jane Doe".to_string()));
        assert_eq!(image.downloads, 800);
        assert_eq!(image.views, 4000);
        assert_eq!(image.keywords, vec!["mountain", "lake", "water", ""]);
        assert_eq!(
            image.stock_url,
            "https://stock.adobe.com/images/mountain-lake/12345"
        );
        // (80*2 + 80) / 3
        assert!((image.trend_score - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_defaults_for_sparse_record() {
        let raw = vec![raw_from(json!({"id": 9}))];

        let images = normalize(raw);
        let image = &images[0];

        assert_eq!(image.title, "");
        assert_eq!(image.category, "Uncategorized");
        assert_eq!(image.creator_name, None);
        assert_eq!(image.downloads, 0);
        assert_eq!(image.views, 0);
        assert_eq!(image.trend_score, 0.0);
        assert!(image.keywords.is_empty());
        assert_eq!(image.stock_url, "https://stock.adobe.com/images//9");
    }

    #[test]
    fn test_normalize_idempotent_over_normalized_shapes() {
        // Values already in final form (plain category string, integer counts)
        // must survive a second pass untouched.
        let value = json!({
            "id": 1,
            "title": "Nature Walk",
            "category": "Nature",
            "nb_downloads": 500,
            "nb_views": 2500,
            "keywords": ["walk"]
        });

        let first = normalize(vec![raw_from(value.clone())]);
        let second = normalize(vec![raw_from(value)]);

        assert_eq!(first, second);
        assert_eq!(first[0].category, "Nature");
        assert_eq!(first[0].downloads, 500);
        assert_eq!(first[0].views, 2500);
    }
}
