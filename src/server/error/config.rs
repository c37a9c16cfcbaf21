use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The gallery endpoint requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables. Reported per request
    /// as a 500 Internal Server Error without contacting Discord.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Optional environment variable is set but cannot be parsed.
    ///
    /// Only raised while loading configuration at startup.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },
}
