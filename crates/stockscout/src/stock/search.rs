use crate::prelude::{println, *};
use colored::Colorize;
use stockscout_core::pagination::{page_window, PageMark};
use stockscout_core::project::{
    calculate_pagination, project, transform_search_results, SearchOutput, SortField, SortOrder,
    ViewState, PAGE_SIZE,
};

use super::{
    create_client, fetch_images, format_count, format_trend_score, truncate_text, ContentType,
    SearchFilter, StockConfig,
};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchOptions {
    /// Search words, matched server-side and re-applied as a client-side
    /// title/category substring filter
    #[arg(value_name = "WORDS", default_value = "")]
    pub words: String,

    /// Content type filter: all, ai, photo
    #[arg(short, long, env = "STOCK_CONTENT_TYPE", default_value = "all")]
    pub content_type: String,

    /// Sort field: rank, title, category, downloads, views, trend-score
    #[arg(short, long)]
    pub sort_by: Option<String>,

    /// Sort order: asc, desc
    #[arg(long, default_value = "asc")]
    pub order: String,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!(
            "Searching stock images (words: {:?}, content type: {})...",
            options.words, options.content_type
        );
    }

    let output = search_images_data(&options, &global).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", format_search_text(&output));
    }

    Ok(())
}

/// Fetches one search result set and projects the requested page
///
/// The whole view state arrives as arguments; the fetch maps to exactly this
/// invocation, so there is no stale-response window to guard against.
pub async fn search_images_data(
    options: &SearchOptions,
    global: &crate::Global,
) -> Result<SearchOutput> {
    let content_type = ContentType::parse(&options.content_type).map_err(|e| eyre!(e))?;
    let sort_field = options
        .sort_by
        .as_deref()
        .map(SortField::parse)
        .transpose()
        .map_err(|e| eyre!(e))?;
    let sort_order = SortOrder::parse(&options.order).map_err(|e| eyre!(e))?;

    let filter = SearchFilter {
        words: options.words.clone(),
        content_type,
    };

    let config = StockConfig::resolve(global)?;
    let client = create_client(&config)?;
    let images = fetch_images(&client, &config, &filter).await?;

    let state = ViewState {
        search_term: options.words.clone(),
        sort_field,
        sort_order,
        page: options.page,
    };

    let projection = project(&images, &state);

    // The page control is the only collaborator allowed to move the page, so
    // a requested page past the end is an error, not a clamp. Page 1 is
    // always servable, empty result set included.
    if state.page != 1 {
        calculate_pagination(projection.total_filtered, state.page).map_err(|e| eyre!("{}", e))?;
    }

    Ok(transform_search_results(projection, &filter, &state))
}

/// Render the windowed page-number line, current page bracketed
fn format_page_line(current: usize, total: usize) -> String {
    page_window(current, total)
        .iter()
        .map(|mark| match mark {
            PageMark::Page(page) if *page == current => format!("[{page}]"),
            PageMark::Page(page) => page.to_string(),
            PageMark::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Convert search output to formatted text with colors
fn format_search_text(output: &SearchOutput) -> String {
    let mut result = String::new();
    let pagination = &output.pagination;

    // Header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    let heading = if output.words.is_empty() {
        format!(
            "TRENDING STOCK IMAGES (Page {} of {})",
            pagination.current_page, pagination.total_pages
        )
    } else {
        format!(
            "STOCK IMAGES \"{}\" (Page {} of {})",
            output.words, pagination.current_page, pagination.total_pages
        )
    };
    result.push_str(&format!("{}\n", heading.bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.images.is_empty() {
        result.push_str(&format!("\n{}\n", "No images matched.".yellow()));
    } else {
        let mut table = crate::prelude::new_table();
        table.add_row(prettytable::row![
            "Rank",
            "ID",
            "Title",
            "Category",
            "Downloads",
            "Views",
            "Trend"
        ]);

        for image in &output.images {
            table.add_row(prettytable::row![
                image.rank,
                image.id,
                truncate_text(&image.title, 45),
                truncate_text(&image.category, 20),
                format_count(image.downloads),
                format_count(image.views),
                format_trend_score(image.trend_score)
            ]);
        }

        result.push('\n');
        result.push_str(&table.to_string());
    }

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "\n{} {} {} {} ({} {})\n",
        "Showing page".bright_white(),
        pagination.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        pagination.total_pages.to_string().bright_cyan().bold(),
        pagination.total_filtered.to_string().bright_cyan().bold(),
        "matching images".bright_white()
    ));

    if pagination.total_pages > 1 {
        result.push_str(&format!(
            "{}: {}\n",
            "Pages".green(),
            format_page_line(pagination.current_page, pagination.total_pages).bright_white()
        ));
    }

    result.push_str(&format!("\n{}:\n", "To navigate".bright_white().bold()));
    if let Some(next) = &pagination.next_page_command {
        result.push_str(&format!("  {}: {}\n", "Next page".green(), next.cyan()));
    }
    if let Some(prev) = &pagination.prev_page_command {
        result.push_str(&format!("  {}: {}\n", "Previous page".green(), prev.cyan()));
    }

    result.push_str(&format!("\n{}:\n", "To sort".bright_white().bold()));
    result.push_str(&format!(
        "  {}\n",
        "stockscout search <words> --sort-by <field> [--order desc]".cyan()
    ));
    result.push_str(&format!(
        "  {}: {}\n",
        "Fields".green(),
        "rank, title, category, downloads, views, trend-score".cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To filter by content type".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        "stockscout search <words> --content-type <all|ai|photo>".cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To show image details".bright_white().bold()
    ));
    result.push_str(&format!("  {}\n", "stockscout show <id> <words>".cyan()));
    if let Some(first) = output.images.first() {
        let example = if output.words.is_empty() {
            format!("stockscout show {}", first.id)
        } else {
            format!("stockscout show {} \"{}\"", first.id, output.words)
        };
        result.push_str(&format!("  {}: {}\n", "Example".green(), example.cyan()));
    }

    result
}
