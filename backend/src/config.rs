use anyhow::{Context, Result};
use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "gardenlog";

/// Runtime configuration for the server.
///
/// Read once from the environment at startup and passed along explicitly;
/// nothing else in the application touches environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub database: String,
}

impl AppConfig {
    /// Builds the configuration from `GARDEN_HOST`, `GARDEN_PORT`,
    /// `MONGODB_URI` and `GARDEN_DB`, falling back to local defaults for
    /// anything unset. A port that is present but unparseable is a
    /// startup error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        let host = env::var("GARDEN_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("GARDEN_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        let mongo_uri = env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_MONGO_URI.to_string());
        let database = env::var("GARDEN_DB").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        Ok(AppConfig {
            host,
            port,
            mongo_uri,
            database,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.parse::<u16>()
        .with_context(|| format!("GARDEN_PORT is not a valid port number: '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_port() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port("1").unwrap(), 1);
    }

    #[test]
    fn rejects_garbage_port() {
        assert!(parse_port("eighty-eighty").is_err());
        assert!(parse_port("70000").is_err());
        assert!(parse_port("").is_err());
    }
}
