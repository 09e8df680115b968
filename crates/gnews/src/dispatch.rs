use gnews_core::{normalize, translate, validate, NewsOutput, ToolError, ToolName};
use serde_json::Value;

use crate::client::NewsApi;

/// Run one tool invocation end to end.
///
/// An unknown `tool_name` fails before validation starts, and a validation
/// failure never reaches `api`. Upstream and network errors come back exactly as
/// the client produced them.
pub async fn invoke(
    api: &dyn NewsApi,
    tool_name: &str,
    raw: Option<&Value>,
) -> Result<NewsOutput, ToolError> {
    let tool: ToolName = tool_name.parse()?;

    let mapping = validate(tool, raw).inspect_err(|e| log::debug!("{tool}: {e}"))?;
    let query = translate(tool, &mapping);
    log::debug!("{tool}: fetching /{}", query.endpoint);

    let response = api.fetch(&query).await?;
    let output = normalize(tool, &response)?;
    log::debug!(
        "{tool}: returning {} of {} article(s)",
        output.articles.len(),
        output.total_articles
    );

    Ok(output)
}
