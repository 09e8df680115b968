use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use crate::error::ToolError;
use crate::schema::{ParamKind, ParameterSpec, ToolName};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Validated parameters of one invocation, keyed by canonical parameter name.
///
/// Every parameter that declares a default is present. Parameters without a
/// default only appear when the caller supplied them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMapping {
    values: BTreeMap<&'static str, String>,
}

impl ParameterMapping {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Check `raw` against the parameter schema of `tool`.
///
/// `raw` must be a JSON object; `None` and `null` are treated as an empty one.
/// `null` members count as absent.
pub fn validate(tool: ToolName, raw: Option<&Value>) -> Result<ParameterMapping, ToolError> {
    let schema = tool.schema();
    let empty = serde_json::Map::new();
    let object = match raw {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(object)) => object,
        Some(_) => {
            return Err(ToolError::validation(
                "Tool arguments must be a JSON object",
            ))
        }
    };

    let mut supplied: BTreeMap<&'static str, &str> = BTreeMap::new();
    for (key, value) in object {
        let spec = schema.param(key).ok_or_else(|| {
            ToolError::validation(format!("Unknown parameter '{key}' for {tool}"))
        })?;

        let value = match value {
            Value::Null => continue,
            Value::String(s) => s.as_str(),
            _ => {
                return Err(ToolError::validation(format!(
                    "'{}' must be a string",
                    spec.name
                )))
            }
        };

        if supplied.insert(spec.name, value).is_some() {
            return Err(ToolError::validation(format!(
                "'{}' was given more than once",
                spec.name
            )));
        }
    }

    let mut values = BTreeMap::new();
    for spec in schema.params {
        match supplied.get(spec.name) {
            Some(raw) => {
                values.insert(spec.name, check_value(spec, raw)?);
            }
            None if spec.required => {
                return Err(ToolError::validation(format!(
                    "'{}' is required",
                    spec.name
                )));
            }
            None => {
                if let Some(default) = spec.default {
                    values.insert(spec.name, default.to_string());
                }
            }
        }
    }

    if let (Some(start), Some(end)) = (values.get("start_date"), values.get("end_date")) {
        if parse_date(start)? > parse_date(end)? {
            return Err(ToolError::validation(format!(
                "'start_date' ({start}) must not be after 'end_date' ({end})"
            )));
        }
    }

    Ok(ParameterMapping { values })
}

fn check_value(spec: &ParameterSpec, raw: &str) -> Result<String, ToolError> {
    match spec.kind {
        ParamKind::FreeText => {
            let text = raw.trim();
            if text.is_empty() {
                return Err(ToolError::validation(format!(
                    "'{}' cannot be empty",
                    spec.name
                )));
            }
            Ok(text.to_string())
        }
        ParamKind::Enum { allowed } => {
            if allowed.contains(&raw) {
                Ok(raw.to_string())
            } else {
                Err(ToolError::validation(format!(
                    "'{}' must be one of: {} (got '{raw}')",
                    spec.name,
                    allowed.join(", ")
                )))
            }
        }
        ParamKind::EnumList { allowed } => {
            let mut members: Vec<&str> = Vec::new();
            for member in raw.split(',').map(str::trim) {
                if !allowed.contains(&member) {
                    return Err(ToolError::validation(format!(
                        "'{}' entries must be among: {} (got '{member}')",
                        spec.name,
                        allowed.join(", ")
                    )));
                }
                if members.contains(&member) {
                    return Err(ToolError::validation(format!(
                        "'{}' lists '{member}' more than once",
                        spec.name
                    )));
                }
                members.push(member);
            }
            Ok(members.join(","))
        }
        ParamKind::Date => {
            parse_date(raw)?;
            Ok(raw.to_string())
        }
    }
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ToolError> {
    let invalid = || {
        ToolError::validation(format!(
            "Invalid date format: {value}. Use YYYY-MM-DD format (e.g., 2024-01-15)"
        ))
    };

    if !DATE_RE.is_match(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}
