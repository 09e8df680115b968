use serde_json::{Map, Value};

use super::{print_output, set, OutputOptions};
use crate::client::NewsApi;
use crate::dispatch::invoke;
use crate::prelude::*;

#[derive(Debug, Clone, clap::Args)]
pub struct HeadlinesOptions {
    /// Category: general, world, nation, business, technology,
    /// entertainment, sports, science or health
    #[arg(long)]
    pub category: Option<String>,

    /// Two-letter language code (defaults to en)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Two-letter country code
    #[arg(short, long)]
    pub country: Option<String>,

    /// Keywords to narrow the headlines
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only headlines published on or after this date (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    pub start_date: Option<String>,

    /// Only headlines published on or before this date (YYYY-MM-DD)
    #[arg(long = "to", value_name = "DATE")]
    pub end_date: Option<String>,

    #[command(flatten)]
    pub output: OutputOptions,
}

impl HeadlinesOptions {
    pub fn arguments(&self) -> Value {
        let mut arguments = Map::new();
        set(&mut arguments, "category", &self.category);
        set(&mut arguments, "language", &self.language);
        set(&mut arguments, "country", &self.country);
        set(&mut arguments, "q", &self.query);
        set(&mut arguments, "start_date", &self.start_date);
        set(&mut arguments, "end_date", &self.end_date);
        Value::Object(arguments)
    }

    fn heading(&self) -> String {
        match &self.category {
            Some(category) => format!("top headlines: {category}"),
            None => "top headlines".to_string(),
        }
    }
}

pub async fn run(options: HeadlinesOptions, api: &dyn NewsApi) -> Result<()> {
    let output = invoke(api, "get_top_headlines", Some(&options.arguments())).await?;
    print_output(&output, &options.output, &options.heading())
}
