use crate::client::NewsClient;
use crate::config::GnewsConfig;
use crate::prelude::{println, *};
use colored::Colorize;
use gnews_core::NewsOutput;

pub mod headlines;
pub mod search;

#[derive(Debug, clap::Parser)]
#[command(name = "news")]
#[command(about = "GNews search and top headlines")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Search articles by keywords
    #[clap(name = "search")]
    Search(search::SearchOptions),

    /// Current trending headlines
    #[clap(name = "headlines")]
    Headlines(headlines::HeadlinesOptions),
}

/// How to print the articles.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OutputOptions {
    /// Output as JSON
    #[arg(long, conflicts_with = "table")]
    pub json: bool,

    /// Output as a compact table
    #[arg(long)]
    pub table: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = GnewsConfig::from_global(&global)?;
    log::debug!("GNews API Base: {}", config.base_url);
    let client = NewsClient::new(config)?;

    match app.command {
        Commands::Search(options) => search::run(options, &client).await,
        Commands::Headlines(options) => headlines::run(options, &client).await,
    }
}

/// Insert `value` under `name` when it is set.
fn set(arguments: &mut serde_json::Map<String, serde_json::Value>, name: &str, value: &Option<String>) {
    if let Some(value) = value {
        arguments.insert(name.to_string(), serde_json::Value::String(value.clone()));
    }
}

pub fn print_output(output: &NewsOutput, options: &OutputOptions, heading: &str) -> Result<()> {
    if options.json {
        println!("{}", format_json(output)?);
    } else if options.table {
        articles_table(output).printstd();
    } else {
        println!("{}", format_text(output, heading));
    }
    Ok(())
}

fn format_json(output: &NewsOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn articles_table(output: &NewsOutput) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row![
        "#".bold().cyan(),
        "Published".bold().cyan(),
        "Source".bold().cyan(),
        "Title".bold().cyan()
    ]);
    for (idx, article) in output.articles.iter().enumerate() {
        table.add_row(prettytable::row![
            (idx + 1).to_string().yellow(),
            article.published_at.as_deref().unwrap_or("-").bright_black(),
            article.source.name.as_deref().unwrap_or("-").green(),
            truncate_text(&article.title, 80).bright_white()
        ]);
    }
    table
}

fn format_text(output: &NewsOutput, heading: &str) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "GNEWS {} ({} of {} articles)",
            heading.to_uppercase(),
            output.articles.len(),
            output.total_articles
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.articles.is_empty() {
        result.push_str(&format!("\n{}\n", "No articles found.".yellow()));
    }

    for (idx, article) in output.articles.iter().enumerate() {
        result.push_str(&format!(
            "\n{} {}\n",
            format!("[{}]", idx + 1).yellow().bold(),
            article.title.white().bold()
        ));
        result.push_str(&format!(
            "    {}: {}\n",
            "URL".green(),
            article.url.cyan().underline()
        ));
        result.push_str(&format!(
            "    {}: {} | {}: {}\n",
            "Source".green(),
            article
                .source
                .name
                .as_deref()
                .unwrap_or("unknown")
                .bright_white(),
            "Published".green(),
            article
                .published_at
                .as_deref()
                .unwrap_or("unknown")
                .bright_black()
        ));
        if let Some(description) = &article.description {
            result.push_str(&format!("    {}\n", truncate_text(description, 200)));
        }
    }

    result.push('\n');
    result
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `...`.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnews_core::{ArticleResult, ArticleSource};

    fn create_test_article(n: usize) -> ArticleResult {
        ArticleResult {
            title: format!("Test Article {n}"),
            description: Some(format!("Description {n}")),
            content: None,
            url: format!("https://example.com/{n}"),
            image: None,
            published_at: Some("2024-01-15T09:00:00Z".to_string()),
            language: None,
            source: ArticleSource {
                name: Some("Example".to_string()),
                url: None,
            },
        }
    }

    fn create_test_output(n: usize) -> NewsOutput {
        NewsOutput {
            total_articles: 100,
            articles: (1..=n).map(create_test_article).collect(),
        }
    }

    #[test]
    fn test_format_json_structure() {
        let json = format_json(&create_test_output(2)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["total_articles"], 100);
        assert_eq!(parsed["articles"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["articles"][1]["title"], "Test Article 2");
    }

    #[test]
    fn test_format_text_lists_articles_in_order() {
        let text = format_text(&create_test_output(3), "search: rust");

        assert!(text.contains("GNEWS SEARCH: RUST (3 of 100 articles)"));
        let first = text.find("Test Article 1").unwrap();
        let third = text.find("Test Article 3").unwrap();
        assert!(first < third);
        assert!(text.contains("https://example.com/2"));
        assert!(text.contains("Description 3"));
    }

    #[test]
    fn test_format_text_empty() {
        let text = format_text(&create_test_output(0), "top headlines");
        assert!(text.contains("No articles found."));
    }

    #[test]
    fn test_articles_table_has_header_and_rows() {
        let table = articles_table(&create_test_output(4));
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_text("a longer sentence", 8), "a longer...");
        assert_eq!(truncate_text("ñandú güero", 5), "ñandú...");
    }

    #[test]
    fn test_set_skips_none() {
        let mut arguments = serde_json::Map::new();
        set(&mut arguments, "country", &None);
        set(&mut arguments, "language", &Some("fr".to_string()));

        assert_eq!(arguments.len(), 1);
        assert_eq!(arguments["language"], "fr");
    }
}
