use thiserror::Error;

/// Startup configuration errors.
///
/// The service fails fast on malformed environment variables instead of
/// starting in a broken state; request handlers themselves never fail.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid {var} value {value:?}: expected true/false or 1/0")]
    InvalidBool { var: String, value: String },
}
