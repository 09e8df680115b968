use serde::Serialize;

use crate::schema::{ToolName, MAX_ARTICLES};
use crate::validate::ParameterMapping;

/// Query-string fields GNews accepts on the two endpoints we call. The API key
/// is attached separately by the client.
pub const UPSTREAM_FIELDS: &[&str] = &[
    "q", "lang", "country", "in", "sortby", "from", "to", "category", "max",
];

/// (upstream field, parameter name) pairs, in the order they are sent.
const SEARCH_QUERY_FIELDS: &[(&str, &str)] = &[
    ("q", "q"),
    ("lang", "language"),
    ("country", "country"),
    ("in", "in"),
    ("sortby", "sortby"),
    ("from", "start_date"),
    ("to", "end_date"),
];

const HEADLINES_QUERY_FIELDS: &[(&str, &str)] = &[
    ("category", "category"),
    ("lang", "language"),
    ("country", "country"),
    ("q", "q"),
    ("from", "start_date"),
    ("to", "end_date"),
];

/// Upstream request derived from a [`ParameterMapping`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamQuery {
    /// Path below the API base URL.
    pub endpoint: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl UpstreamQuery {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }
}

/// Rename validated parameters to the fields the GNews endpoint of `tool` expects.
pub fn translate(tool: ToolName, mapping: &ParameterMapping) -> UpstreamQuery {
    let (endpoint, fields) = match tool {
        ToolName::SearchNews => ("search", SEARCH_QUERY_FIELDS),
        ToolName::TopHeadlines => ("top-headlines", HEADLINES_QUERY_FIELDS),
    };

    let mut params: Vec<(&'static str, String)> = fields
        .iter()
        .filter_map(|(upstream, name)| {
            let value = mapping.get(name)?;
            let value = match *upstream {
                "from" | "to" => to_upstream_timestamp(value),
                _ => value.to_string(),
            };
            Some((*upstream, value))
        })
        .collect();
    params.push(("max", MAX_ARTICLES.to_string()));

    UpstreamQuery { endpoint, params }
}

/// `YYYY-MM-DD` to the ISO 8601 timestamp GNews filters on (midnight UTC).
pub fn to_upstream_timestamp(date: &str) -> String {
    format!("{date}T00:00:00.000Z")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use serde_json::json;

    #[test]
    fn test_translate_search_news() {
        let mapping = validate(
            ToolName::SearchNews,
            Some(&json!({
                "q": "artificial intelligence",
                "language": "en",
                "country": "us",
                "sortby": "relevance",
                "start_date": "2024-01-01",
                "end_date": "2024-01-31"
            })),
        )
        .unwrap();

        let query = translate(ToolName::SearchNews, &mapping);

        assert_eq!(query.endpoint, "search");
        assert_eq!(
            query.params,
            vec![
                ("q", "artificial intelligence".to_string()),
                ("lang", "en".to_string()),
                ("country", "us".to_string()),
                ("in", "title,description".to_string()),
                ("sortby", "relevance".to_string()),
                ("from", "2024-01-01T00:00:00.000Z".to_string()),
                ("to", "2024-01-31T00:00:00.000Z".to_string()),
                ("max", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_translate_top_headlines_defaults() {
        let mapping = validate(ToolName::TopHeadlines, Some(&json!({ "category": "technology" })))
            .unwrap();

        let query = translate(ToolName::TopHeadlines, &mapping);

        assert_eq!(query.endpoint, "top-headlines");
        assert_eq!(query.get("category"), Some("technology"));
        assert_eq!(query.get("lang"), Some("en"));
        assert_eq!(query.get("max"), Some("10"));
        assert_eq!(query.get("country"), None);
        assert_eq!(query.get("q"), None);
    }

    #[test]
    fn test_translate_top_headlines_with_query() {
        let mapping = validate(
            ToolName::TopHeadlines,
            Some(&json!({ "query": " elections ", "country": "gb", "to": "2024-05-01" })),
        )
        .unwrap();

        let query = translate(ToolName::TopHeadlines, &mapping);

        assert_eq!(query.get("q"), Some("elections"));
        assert_eq!(query.get("country"), Some("gb"));
        assert_eq!(query.get("to"), Some("2024-05-01T00:00:00.000Z"));
        assert_eq!(query.get("from"), None);
    }

    #[test]
    fn test_translated_fields_are_accepted_upstream() {
        let inputs = [
            (
                ToolName::SearchNews,
                json!({
                    "q": "x", "country": "de", "in": "content",
                    "start_date": "2024-01-01", "end_date": "2024-01-02"
                }),
            ),
            (
                ToolName::TopHeadlines,
                json!({
                    "q": "x", "country": "de", "category": "science",
                    "start_date": "2024-01-01", "end_date": "2024-01-02"
                }),
            ),
        ];

        for (tool, raw) in inputs {
            let query = translate(tool, &validate(tool, Some(&raw)).unwrap());
            for (field, _) in &query.params {
                assert!(UPSTREAM_FIELDS.contains(field), "{tool}: {field}");
            }
        }
    }

    #[test]
    fn test_translate_is_deterministic() {
        let mapping = validate(ToolName::SearchNews, Some(&json!({ "q": "rust" }))).unwrap();
        assert_eq!(
            translate(ToolName::SearchNews, &mapping),
            translate(ToolName::SearchNews, &mapping)
        );
    }

    #[test]
    fn test_to_upstream_timestamp() {
        assert_eq!(to_upstream_timestamp("2024-01-15"), "2024-01-15T00:00:00.000Z");
    }
}
