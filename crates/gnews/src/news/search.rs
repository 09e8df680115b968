use serde_json::{Map, Value};

use super::{print_output, set, OutputOptions};
use crate::client::NewsApi;
use crate::dispatch::invoke;
use crate::prelude::*;

#[derive(Debug, Clone, clap::Args)]
pub struct SearchOptions {
    /// Keywords to search for
    #[arg(required = true)]
    pub query: String,

    /// Two-letter language code (defaults to en)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Two-letter country code
    #[arg(short, long)]
    pub country: Option<String>,

    /// Comma-separated fields to match against: title, description, content
    #[arg(long = "in", value_name = "FIELDS")]
    pub search_in: Option<String>,

    /// Sort order: publishedAt or relevance
    #[arg(long)]
    pub sortby: Option<String>,

    /// Only articles published on or after this date (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    pub start_date: Option<String>,

    /// Only articles published on or before this date (YYYY-MM-DD)
    #[arg(long = "to", value_name = "DATE")]
    pub end_date: Option<String>,

    #[command(flatten)]
    pub output: OutputOptions,
}

impl SearchOptions {
    /// Tool arguments for `search_news`. Unset flags are left out so the
    /// tool defaults apply.
    pub fn arguments(&self) -> Value {
        let mut arguments = Map::new();
        arguments.insert("q".to_string(), Value::String(self.query.clone()));
        set(&mut arguments, "language", &self.language);
        set(&mut arguments, "country", &self.country);
        set(&mut arguments, "in", &self.search_in);
        set(&mut arguments, "sortby", &self.sortby);
        set(&mut arguments, "start_date", &self.start_date);
        set(&mut arguments, "end_date", &self.end_date);
        Value::Object(arguments)
    }
}

pub async fn run(options: SearchOptions, api: &dyn NewsApi) -> Result<()> {
    let output = invoke(api, "search_news", Some(&options.arguments())).await?;
    print_output(&output, &options.output, &format!("search: {}", options.query))
}
