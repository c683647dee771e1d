//! View Projection: filter, sort, and paginate normalized records
//!
//! A projection is a pure function of the record set plus the view state: the
//! same inputs always yield the same page slice, with no hidden memory.

use serde::{Deserialize, Serialize};

use crate::normalize::StockImage;
use crate::query::{ContentType, SearchFilter};

/// Fixed number of images per rendered page
pub const PAGE_SIZE: usize = 10;

/// Sortable table fields
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    Rank,
    Title,
    Category,
    Downloads,
    Views,
    TrendScore,
}

impl SortField {
    /// Parse a sort field from its CLI representation
    pub fn parse(input: &str) -> Result<Self, String> {
        match input {
            "rank" => Ok(SortField::Rank),
            "title" => Ok(SortField::Title),
            "category" => Ok(SortField::Category),
            "downloads" => Ok(SortField::Downloads),
            "views" => Ok(SortField::Views),
            "trend-score" | "trend_score" => Ok(SortField::TrendScore),
            _ => Err(format!(
                "Invalid sort field: {input}. Valid fields: rank, title, category, downloads, views, trend-score"
            )),
        }
    }
}

/// Sort direction
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(input: &str) -> Result<Self, String> {
        match input {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: {input}. Valid orders: asc, desc")),
        }
    }
}

/// Transient view state for one projection
///
/// `page` is 1-indexed and must not exceed the total page count; the caller
/// validates it with [`calculate_pagination`] before projecting.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub search_term: String,
    pub sort_field: Option<SortField>,
    pub sort_order: SortOrder,
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: None,
            sort_order: SortOrder::Asc,
            page: 1,
        }
    }
}

/// Result of projecting a record set through a view state
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub page_images: Vec<StockImage>,
    pub total_filtered: usize,
    pub total_pages: usize,
}

/// Pagination metadata for search output
#[derive(Debug, Serialize, Clone)]
pub struct SearchPaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
    pub page_size: usize,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Complete search output with images and pagination
#[derive(Debug, Serialize, Clone)]
pub struct SearchOutput {
    pub words: String,
    pub content_type: ContentType,
    pub images: Vec<StockImage>,
    pub pagination: SearchPaginationInfo,
}

/// Error raised when a requested page cannot be served
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("No images available for pagination")]
    Empty,

    #[error("Page {page} is out of range. Only {total_pages} pages available.")]
    PageOutOfRange { page: usize, total_pages: usize },
}

/// Keep images whose title or resolved category contains the search term as a
/// case-insensitive substring
///
/// Note: this is deliberately redundant with the server-side word search. The
/// fetched set was already matched server-side; this re-applies the same term
/// over the in-memory set so narrowing the term never requires a refetch.
pub fn filter_images(images: &[StockImage], search_term: &str) -> Vec<StockImage> {
    let term = search_term.to_lowercase();
    images
        .iter()
        .filter(|image| {
            image.title.to_lowercase().contains(&term)
                || image.category.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Sort images by the chosen field, preserving filtered order when no field is
/// chosen
///
/// String fields compare lexicographically, numeric fields numerically;
/// descending order reverses the comparison. The sort is stable.
pub fn sort_images(images: &mut [StockImage], field: Option<SortField>, order: SortOrder) {
    let Some(field) = field else {
        return;
    };

    images.sort_by(|a, b| {
        let ordering = match field {
            SortField::Rank => a.rank.cmp(&b.rank),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Category => a.category.cmp(&b.category),
            SortField::Downloads => a.downloads.cmp(&b.downloads),
            SortField::Views => a.views.cmp(&b.views),
            SortField::TrendScore => a.trend_score.total_cmp(&b.trend_score),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Calculate pagination bounds for a given page
///
/// Returns (start_index, end_index) for slicing the filtered set. Returns an
/// error if the page is out of range or if there are no images.
pub fn calculate_pagination(
    total_filtered: usize,
    page: usize,
) -> Result<(usize, usize), ProjectionError> {
    if total_filtered == 0 {
        return Err(ProjectionError::Empty);
    }

    let total_pages = total_filtered.div_ceil(PAGE_SIZE);

    if page == 0 || (page - 1) * PAGE_SIZE >= total_filtered {
        return Err(ProjectionError::PageOutOfRange { page, total_pages });
    }

    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total_filtered);
    Ok((start, end))
}

/// Project a record set through the current view state
///
/// Filter, then sort, then slice the requested page. The slice is not
/// clamped: a page past the end yields an empty page, and enforcing the page
/// range up front is the caller's job via [`calculate_pagination`].
pub fn project(images: &[StockImage], state: &ViewState) -> Projection {
    let mut filtered = filter_images(images, &state.search_term);
    sort_images(&mut filtered, state.sort_field, state.sort_order);

    let total_filtered = filtered.len();
    let total_pages = total_filtered.div_ceil(PAGE_SIZE);

    let start = state.page.saturating_sub(1) * PAGE_SIZE;
    let page_images: Vec<StockImage> = filtered
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect();

    Projection {
        page_images,
        total_filtered,
        total_pages,
    }
}

fn page_command(filter: &SearchFilter, state: &ViewState, page: usize) -> String {
    let mut command = String::from("stockscout search");
    if !filter.words.is_empty() {
        command.push_str(&format!(" \"{}\"", filter.words));
    }
    if filter.content_type != ContentType::All {
        command.push_str(&format!(" --content-type {}", filter.content_type.as_str()));
    }
    if let Some(field) = state.sort_field {
        let field_str = match field {
            SortField::Rank => "rank",
            SortField::Title => "title",
            SortField::Category => "category",
            SortField::Downloads => "downloads",
            SortField::Views => "views",
            SortField::TrendScore => "trend-score",
        };
        command.push_str(&format!(" --sort-by {field_str}"));
        if state.sort_order == SortOrder::Desc {
            command.push_str(" --order desc");
        }
    }
    command.push_str(&format!(" --page {page}"));
    command
}

/// Package a projected page into a complete search output
///
/// Attaches pagination metadata and ready-to-run navigation commands that
/// reproduce the current filter and sort state on the neighboring pages.
pub fn transform_search_results(
    projection: Projection,
    filter: &SearchFilter,
    state: &ViewState,
) -> SearchOutput {
    let next_page_command = if state.page < projection.total_pages {
        Some(page_command(filter, state, state.page + 1))
    } else {
        None
    };

    let prev_page_command = if state.page > 1 {
        Some(page_command(filter, state, state.page - 1))
    } else {
        None
    };

    SearchOutput {
        words: filter.words.clone(),
        content_type: filter.content_type,
        images: projection.page_images,
        pagination: SearchPaginationInfo {
            current_page: state.page,
            total_pages: projection.total_pages,
            total_filtered: projection.total_filtered,
            page_size: PAGE_SIZE,
            next_page_command,
            prev_page_command,
        },
    }
}
