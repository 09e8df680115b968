use crate::prelude::*;
use clap::Parser;

mod client;
mod config;
mod dispatch;
mod error;
mod mcp;
mod news;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Search GNews articles and top headlines from the terminal or as MCP tools"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Clone, clap::Args)]
pub struct Global {
    /// GNews API key
    #[clap(long, env = "GNEWS_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// GNews API base URL
    #[clap(
        long,
        env = "GNEWS_BASE_URL",
        global = true,
        default_value = config::DEFAULT_BASE_URL
    )]
    base_url: String,

    /// Whether to display additional information.
    #[clap(long, env = "GNEWS_DEBUG", global = true, default_value = "false")]
    verbose: bool,
}

impl std::fmt::Debug for Global {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Global")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("verbose", &self.verbose)
            .finish()
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// GNews search and top headlines
    News(crate::news::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    init_logger(app.global.verbose);

    match app.command {
        SubCommands::News(sub_app) => crate::news::run(sub_app, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
