//! Core library for gnews
//!
//! This crate implements the **Functional Core** of the gnews application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The gnews project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`gnews_core`** (this crate): Pure transformation functions with zero I/O
//! - **`gnews`**: HTTP calls, MCP transports and the CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! A tool call flows through the modules in this order:
//!
//! - [`schema`]: Static registry of the `search_news` and `get_top_headlines` tools
//! - [`validate`]: Checks raw tool arguments against the registry and applies defaults
//! - [`query`]: Renames validated parameters to GNews query-string fields
//! - [`normalize`]: Checks the GNews response shape and keeps the first ten articles
//! - [`error`]: The [`ToolError`] taxonomy shared by every stage
//!
//! The HTTP request between [`query`] and [`normalize`] happens in the shell.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use gnews_core::{normalize, translate, validate, RawResponse, ToolName};
//!
//! let tool: ToolName = "get_top_headlines".parse()?;
//! let mapping = validate(tool, Some(&serde_json::json!({ "category": "technology" })))?;
//! let query = translate(tool, &mapping);
//!
//! assert_eq!(query.endpoint, "top-headlines");
//! assert_eq!(query.get("lang"), Some("en"));
//!
//! // `body` comes from the HTTP client
//! let output = normalize(tool, &RawResponse { status: 200, body })?;
//! assert!(output.articles.len() <= 10);
//! ```

pub mod error;
pub mod normalize;
pub mod query;
pub mod schema;
pub mod validate;

pub use error::{upstream_error_message, ToolError};
pub use normalize::{normalize, ArticleResult, ArticleSource, NewsOutput, RawResponse};
pub use query::{translate, UpstreamQuery, UPSTREAM_FIELDS};
pub use schema::{ParamKind, ParameterSpec, ToolName, ToolSchema, MAX_ARTICLES};
pub use validate::{validate, ParameterMapping};
