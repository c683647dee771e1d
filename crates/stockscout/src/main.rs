#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod error;
mod prelude;
mod stock;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Search trending stock images from the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Adobe Stock API key
    #[clap(
        long,
        env = "ADOBE_STOCK_API_KEY",
        global = true,
        hide_env_values = true
    )]
    api_key: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "STOCKSCOUT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Search stock images and render a sortable, filterable, paginated table
    Search(crate::stock::search::SearchOptions),

    /// Show the detail card for one image in a result set
    Show(crate::stock::show::ShowOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Search(options) => crate::stock::search::run(options, app.global).await,
        SubCommands::Show(options) => crate::stock::show::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
