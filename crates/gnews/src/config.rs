use crate::prelude::Error;

pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

/// Settings the GNews client needs, resolved from flags and environment.
#[derive(Clone)]
pub struct GnewsConfig {
    pub api_key: String,
    pub base_url: String,
}

impl GnewsConfig {
    pub fn from_global(global: &crate::Global) -> Result<Self, Error> {
        Self::new(global.api_key.as_deref(), &global.base_url)
    }

    pub fn new(api_key: Option<&str>, base_url: &str) -> Result<Self, Error> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)?;

        let base_url = base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|e| Error::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
        })
    }
}

impl std::fmt::Debug for GnewsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GnewsConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
