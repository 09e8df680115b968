#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("GNews API key not set. Please set the GNEWS_KEY environment variable or pass --api-key")]
    MissingApiKey,

    #[error("Invalid GNews base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
