use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeederError {
    // Configuration errors
    #[error("Please provide at least a username or organization name as arguments")]
    Usage,

    #[error("Configuration error: {0}")]
    Config(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("Feed item is missing required field: {0}")]
    MissingField(&'static str),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<quick_xml::Error> for FeederError {
    fn from(err: quick_xml::Error) -> Self {
        FeederError::FeedParse(err.to_string())
    }
}

pub type FeederResult<T> = Result<T, FeederError>;
