use serde::Serialize;
use serde_json::Value;

use crate::error::ToolError;
use crate::schema::ToolName;

/// A successful upstream response: status plus decoded JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSource {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// One article as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleResult {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: String,
    pub image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    /// Only reported by the top headlines endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub source: ArticleSource,
}

/// Tool result: at most ten articles, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsOutput {
    pub total_articles: u64,
    pub articles: Vec<ArticleResult>,
}

/// Check the upstream payload against the output shape of `tool` and keep the
/// first `max_results` usable articles.
///
/// Articles without a `title` or `url` are dropped; a payload without an
/// article list fails the whole call.
pub fn normalize(tool: ToolName, raw: &RawResponse) -> Result<NewsOutput, ToolError> {
    let output = tool.schema().output;

    let articles = raw
        .body
        .get(output.list_field)
        .ok_or_else(|| {
            ToolError::upstream(
                raw.status,
                format!("malformed response: missing '{}'", output.list_field),
            )
        })?
        .as_array()
        .ok_or_else(|| {
            ToolError::upstream(
                raw.status,
                format!("malformed response: '{}' is not an array", output.list_field),
            )
        })?;

    let articles: Vec<ArticleResult> = articles
        .iter()
        .filter(|article| {
            output
                .required_fields
                .iter()
                .all(|field| string_field(article, field).is_some())
        })
        .map(|article| ArticleResult {
            title: string_field(article, "title").unwrap_or_default(),
            description: string_field(article, "description"),
            content: string_field(article, "content"),
            url: string_field(article, "url").unwrap_or_default(),
            image: string_field(article, "image"),
            published_at: string_field(article, "publishedAt"),
            language: output
                .with_language
                .then(|| string_field(article, "lang"))
                .flatten(),
            source: ArticleSource {
                name: article.get("source").and_then(|s| string_field(s, "name")),
                url: article.get("source").and_then(|s| string_field(s, "url")),
            },
        })
        .take(output.max_results)
        .collect();

    let total_articles = raw
        .body
        .get("totalArticles")
        .and_then(Value::as_u64)
        .unwrap_or(articles.len() as u64);

    Ok(NewsOutput {
        total_articles,
        articles,
    })
}

/// Non-empty string member of `value`, if any.
fn string_field(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
