#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insufficient arguments: api_key and model required")]
    InsufficientArguments,
    #[error("invalid response format")]
    InvalidResponseFormat,
    #[error("unknown provider '{0}'")]
    UnknownProvider(String),
    #[error("invalid base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("{0}")]
    Api(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
