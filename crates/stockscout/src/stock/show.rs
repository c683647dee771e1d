use crate::prelude::{println, *};
use colored::Colorize;

use super::{
    create_client, fetch_images, format_count, format_trend_score, ContentType, SearchFilter,
    StockConfig, StockImage,
};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ShowOptions {
    /// Image ID from the search results
    #[arg(value_name = "ID")]
    pub id: u64,

    /// Search words that produced the result set
    #[arg(value_name = "WORDS", default_value = "")]
    pub words: String,

    /// Content type filter: all, ai, photo
    #[arg(short, long, env = "STOCK_CONTENT_TYPE", default_value = "all")]
    pub content_type: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ShowOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching image ID: {}", options.id);
    }

    let image = show_image_data(&options, &global).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&image)?);
    } else {
        println!("{}", format_image_text(&image));
    }

    Ok(())
}

/// Fetches the result set for the given filter and looks one image up by id
///
/// The lookup is by identity into the freshly fetched set; the image must be
/// part of the results the same filter produces.
pub async fn show_image_data(options: &ShowOptions, global: &crate::Global) -> Result<StockImage> {
    let content_type = ContentType::parse(&options.content_type).map_err(|e| eyre!(e))?;

    let filter = SearchFilter {
        words: options.words.clone(),
        content_type,
    };

    let config = StockConfig::resolve(global)?;
    let client = create_client(&config)?;
    let images = fetch_images(&client, &config, &filter).await?;

    images
        .into_iter()
        .find(|image| image.id == options.id)
        .ok_or_else(|| eyre!(Error::ImageNotFound(options.id.to_string())))
}

/// Convert an image to its detail-card text
fn format_image_text(image: &StockImage) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}: {}\n",
        "IMAGE".bright_cyan().bold(),
        if image.title.is_empty() {
            "(No title)".to_string().white().bold()
        } else {
            image.title.clone().white().bold()
        }
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if let Some(thumbnail) = &image.thumbnail_url {
        result.push_str(&format!(
            "{}: {}\n",
            "Preview".green(),
            thumbnail.cyan().underline()
        ));
    }

    result.push_str(&format!(
        "{}: {}\n",
        "Category".green(),
        image.category.bright_white()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Creator".green(),
        image
            .creator_name
            .as_ref()
            .unwrap_or(&"Unknown".to_string())
            .bright_white()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Downloads".green(),
        format_count(image.downloads).bright_yellow()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Views".green(),
        format_count(image.views).bright_magenta()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Trend Score".green(),
        format_trend_score(image.trend_score).bright_yellow()
    ));
    result.push_str(&format!(
        "{}: {} | {}: {}\n",
        "ID".green(),
        image.id.to_string().bright_white(),
        "Rank".green(),
        image.rank.to_string().bright_white()
    ));

    let chips: Vec<&str> = image
        .keywords
        .iter()
        .map(|k| k.as_str())
        .filter(|k| !k.is_empty())
        .collect();
    if !chips.is_empty() {
        result.push_str(&format!("{}: ", "Keywords".green()));
        result.push_str(
            &chips
                .iter()
                .map(|chip| format!("[{chip}]"))
                .collect::<Vec<String>>()
                .join(" "),
        );
        result.push('\n');
    }

    if let Some(description) = &image.description {
        result.push_str(&format!(
            "\n{}:\n{}\n",
            "Description".green(),
            description.bright_white()
        ));
    }

    result.push_str(&format!(
        "\n{}: {}\n",
        "View on Adobe Stock".green(),
        image.stock_url.cyan().underline()
    ));

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image() -> StockImage {
        StockImage {
            id: 555,
            rank: 3,
            title: "Harbor at Dawn".to_string(),
            category: "Travel".to_string(),
            creator_name: None,
            thumbnail_url: Some("https://t0.example/555.jpg".to_string()),
            downloads: 2500,
            views: 9000,
            trend_score: 100.0,
            keywords: vec![
                "harbor".to_string(),
                String::new(),
                "dawn".to_string(),
            ],
            description: Some("Boats at first light.".to_string()),
            stock_url: "https://stock.adobe.com/images/harbor-at-dawn/555".to_string(),
        }
    }

    #[test]
    fn test_format_image_text_full_card() {
        colored::control::set_override(false);
        let text = format_image_text(&create_test_image());

        assert!(text.contains("IMAGE: Harbor at Dawn"));
        assert!(text.contains("Category: Travel"));
        assert!(text.contains("Creator: Unknown"));
        assert!(text.contains("Downloads: 2,500"));
        assert!(text.contains("Trend Score: 100.0%"));
        assert!(text.contains("[harbor] [dawn]"));
        assert!(!text.contains("[] "));
        assert!(text.contains("Boats at first light."));
        assert!(text.contains("https://stock.adobe.com/images/harbor-at-dawn/555"));
    }

    #[test]
    fn test_format_image_text_untitled_without_keywords() {
        colored::control::set_override(false);
        let mut image = create_test_image();
        image.title = String::new();
        image.keywords.clear();
        image.description = None;

        let text = format_image_text(&image);

        assert!(text.contains("(No title)"));
        assert!(!text.contains("Keywords"));
        assert!(!text.contains("Description"));
    }
}
