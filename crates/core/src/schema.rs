//! Static description of the two GNews tools.
//!
//! The registry is the single source of truth: the validator interprets the
//! [`ParameterSpec`] entries, and the MCP `tools/list` handler renders the same
//! entries as JSON Schema.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Map, Value};

use crate::error::ToolError;

/// Fixed number of articles requested from, and returned by, every tool.
pub const MAX_ARTICLES: usize = 10;

/// Languages supported by GNews.
pub const LANGUAGES: &[&str] = &[
    "ar", "zh", "nl", "en", "fr", "de", "el", "he", "hi", "it", "ja", "ml", "mr", "no", "pt",
    "ro", "ru", "es", "sv", "ta", "te", "uk",
];

/// Countries supported by GNews.
pub const COUNTRIES: &[&str] = &[
    "au", "br", "ca", "cn", "eg", "fr", "de", "gr", "hk", "in", "ie", "il", "it", "jp", "nl",
    "no", "pk", "pe", "ph", "pt", "ro", "ru", "sg", "es", "se", "ch", "tw", "ua", "gb", "us",
];

/// Top headlines categories.
pub const CATEGORIES: &[&str] = &[
    "general",
    "world",
    "nation",
    "business",
    "technology",
    "entertainment",
    "sports",
    "science",
    "health",
];

pub const SORT_KEYS: &[&str] = &["publishedAt", "relevance"];

/// Article attributes a keyword search can look in.
pub const SEARCH_FIELDS: &[&str] = &["title", "description", "content"];

/// The closed set of tools this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    SearchNews,
    TopHeadlines,
}

impl ToolName {
    pub const ALL: [ToolName; 2] = [ToolName::SearchNews, ToolName::TopHeadlines];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::SearchNews => "search_news",
            ToolName::TopHeadlines => "get_top_headlines",
        }
    }

    pub fn schema(self) -> &'static ToolSchema {
        match self {
            ToolName::SearchNews => &SEARCH_NEWS,
            ToolName::TopHeadlines => &TOP_HEADLINES,
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| ToolError::validation(format!("Unknown tool: {s}")))
    }
}

/// Semantic type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Any string; trimmed, must not be empty.
    FreeText,
    /// Exactly one of `allowed`, compared case-sensitively.
    Enum { allowed: &'static [&'static str] },
    /// Comma separated members of `allowed`.
    EnumList { allowed: &'static [&'static str] },
    /// A calendar date written as `YYYY-MM-DD`.
    Date,
}

#[derive(Debug, Clone, Copy)]
pub struct ParameterSpec {
    pub name: &'static str,
    /// Other keys accepted for this parameter.
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<&'static str>,
}

impl ParameterSpec {
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.aliases.contains(&key)
    }
}

/// Expected shape of the upstream response.
#[derive(Debug, Clone, Copy)]
pub struct OutputSpec {
    /// Top-level field holding the article list.
    pub list_field: &'static str,
    /// Articles missing any of these are dropped.
    pub required_fields: &'static [&'static str],
    pub max_results: usize,
    /// Whether articles carry their language code.
    pub with_language: bool,
}

#[derive(Debug)]
pub struct ToolSchema {
    pub name: ToolName,
    pub description: &'static str,
    pub params: &'static [ParameterSpec],
    pub output: OutputSpec,
}

const LANGUAGE: ParameterSpec = ParameterSpec {
    name: "language",
    aliases: &["lang"],
    description: "2-letter language code of the articles (default: 'en')",
    kind: ParamKind::Enum { allowed: LANGUAGES },
    required: false,
    default: Some("en"),
};

const COUNTRY: ParameterSpec = ParameterSpec {
    name: "country",
    aliases: &[],
    description: "2-letter country code where the articles were published",
    kind: ParamKind::Enum { allowed: COUNTRIES },
    required: false,
    default: None,
};

const START_DATE: ParameterSpec = ParameterSpec {
    name: "start_date",
    aliases: &["from"],
    description: "Only articles published on or after this date (YYYY-MM-DD)",
    kind: ParamKind::Date,
    required: false,
    default: None,
};

const END_DATE: ParameterSpec = ParameterSpec {
    name: "end_date",
    aliases: &["to"],
    description: "Only articles published before this date (YYYY-MM-DD)",
    kind: ParamKind::Date,
    required: false,
    default: None,
};

const ARTICLE_OUTPUT: OutputSpec = OutputSpec {
    list_field: "articles",
    required_fields: &["title", "url"],
    max_results: MAX_ARTICLES,
    with_language: false,
};

pub static SEARCH_NEWS: ToolSchema = ToolSchema {
    name: ToolName::SearchNews,
    description: "Search for news articles using keywords with filtering options. Supports logical operators (AND, OR, NOT) and quoted phrases in the query. Returns up to 10 articles with title, description, content, URL, image, publication date and source. Requires the GNEWS_KEY environment variable.",
    params: &[
        ParameterSpec {
            name: "q",
            aliases: &["query"],
            description: "Search keywords (e.g., 'artificial intelligence', '\"climate change\" AND policy')",
            kind: ParamKind::FreeText,
            required: true,
            default: None,
        },
        LANGUAGE,
        COUNTRY,
        ParameterSpec {
            name: "in",
            aliases: &[],
            description: "Comma separated article attributes to search in: title, description, content (default: 'title,description')",
            kind: ParamKind::EnumList {
                allowed: SEARCH_FIELDS,
            },
            required: false,
            default: Some("title,description"),
        },
        ParameterSpec {
            name: "sortby",
            aliases: &["sort_by"],
            description: "Sort order: 'publishedAt' (newest first) or 'relevance' (default: 'publishedAt')",
            kind: ParamKind::Enum { allowed: SORT_KEYS },
            required: false,
            default: Some("publishedAt"),
        },
        START_DATE,
        END_DATE,
    ],
    output: ARTICLE_OUTPUT,
};

pub static TOP_HEADLINES: ToolSchema = ToolSchema {
    name: ToolName::TopHeadlines,
    description: "Get current trending news headlines based on Google News ranking. Filter by category, language, country, date range and keywords. Returns up to 10 articles. Requires the GNEWS_KEY environment variable.",
    params: &[
        ParameterSpec {
            name: "category",
            aliases: &[],
            description: "News category (default: 'general')",
            kind: ParamKind::Enum {
                allowed: CATEGORIES,
            },
            required: false,
            default: Some("general"),
        },
        LANGUAGE,
        COUNTRY,
        ParameterSpec {
            name: "q",
            aliases: &["query"],
            description: "Keywords to search for within the headlines",
            kind: ParamKind::FreeText,
            required: false,
            default: None,
        },
        START_DATE,
        END_DATE,
    ],
    output: OutputSpec {
        with_language: true,
        ..ARTICLE_OUTPUT
    },
};

impl ToolSchema {
    pub fn param(&self, key: &str) -> Option<&'static ParameterSpec> {
        self.params.iter().find(|spec| spec.matches(key))
    }

    /// JSON Schema advertised as the tool's `inputSchema`.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for spec in self.params {
            let mut property = json!({
                "type": "string",
                "description": spec.description,
            });
            match spec.kind {
                ParamKind::Enum { allowed } => {
                    property["enum"] = json!(allowed);
                }
                ParamKind::Date => {
                    property["format"] = json!("date");
                    property["pattern"] = json!(r"^\d{4}-\d{2}-\d{2}$");
                }
                ParamKind::FreeText | ParamKind::EnumList { .. } => {}
            }
            if let Some(default) = spec.default {
                property["default"] = json!(default);
            }
            properties.insert(spec.name.to_string(), property);
        }

        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false
        })
    }

    /// JSON Schema advertised as the tool's `outputSchema`.
    pub fn output_schema(&self) -> Value {
        let nullable_string = json!({ "type": ["string", "null"] });
        let mut article = json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "description": nullable_string,
                "content": nullable_string,
                "url": { "type": "string" },
                "image": nullable_string,
                "publishedAt": nullable_string,
                "source": {
                    "type": "object",
                    "properties": {
                        "name": nullable_string,
                        "url": nullable_string
                    }
                }
            },
            "required": self.output.required_fields,
        });
        if self.output.with_language {
            article["properties"]["language"] = nullable_string;
        }

        json!({
            "type": "object",
            "properties": {
                "total_articles": { "type": "integer" },
                "articles": {
                    "type": "array",
                    "maxItems": self.output.max_results,
                    "items": article
                }
            },
            "required": ["total_articles", "articles"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name_round_trip() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
            assert_eq!(tool.schema().name, tool);
        }
    }

    #[test]
    fn test_unknown_tool_is_validation_error() {
        let err = "get_weather".parse::<ToolName>().unwrap_err();
        assert_eq!(err, ToolError::validation("Unknown tool: get_weather"));
    }

    #[test]
    fn test_param_lookup_by_alias() {
        let spec = SEARCH_NEWS.param("query").unwrap();
        assert_eq!(spec.name, "q");
        assert_eq!(SEARCH_NEWS.param("sort_by").unwrap().name, "sortby");
        assert!(SEARCH_NEWS.param("category").is_none());
    }

    #[test]
    fn test_param_names_are_unique() {
        for tool in ToolName::ALL {
            let params = tool.schema().params;
            for (i, a) in params.iter().enumerate() {
                for b in &params[i + 1..] {
                    assert!(!b.matches(a.name), "{} collides in {tool}", a.name);
                    for alias in a.aliases {
                        assert!(!b.matches(alias), "{alias} collides in {tool}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_defaults_are_permitted_values() {
        for tool in ToolName::ALL {
            for spec in tool.schema().params {
                let (Some(default), ParamKind::Enum { allowed }) = (spec.default, spec.kind) else {
                    continue;
                };
                assert!(allowed.contains(&default), "{}: {default}", spec.name);
            }
        }
    }

    #[test]
    fn test_input_schema_search_news() {
        let schema = SEARCH_NEWS.input_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["q"]));
        assert_eq!(schema["additionalProperties"], false);
        assert_eq!(schema["properties"]["sortby"]["enum"], json!(SORT_KEYS));
        assert_eq!(schema["properties"]["language"]["default"], "en");
        assert_eq!(schema["properties"]["start_date"]["format"], "date");
        assert!(schema["properties"]["in"].get("enum").is_none());
    }

    #[test]
    fn test_input_schema_top_headlines_has_no_required() {
        let schema = TOP_HEADLINES.input_schema();

        assert_eq!(schema["required"], json!([]));
        assert_eq!(schema["properties"]["category"]["default"], "general");
        assert_eq!(
            schema["properties"]["category"]["enum"]
                .as_array()
                .unwrap()
                .len(),
            CATEGORIES.len()
        );
    }

    #[test]
    fn test_output_schema_language_only_for_headlines() {
        let search = SEARCH_NEWS.output_schema();
        let headlines = TOP_HEADLINES.output_schema();

        assert_eq!(search["properties"]["articles"]["maxItems"], 10);
        assert!(search["properties"]["articles"]["items"]["properties"]
            .get("language")
            .is_none());
        assert!(headlines["properties"]["articles"]["items"]["properties"]
            .get("language")
            .is_some());
    }
}
