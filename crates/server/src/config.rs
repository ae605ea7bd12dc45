use axum::http::HeaderValue;
use log::warn;
use std::env;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Process-wide configuration, read from the environment once at startup
/// and never mutated afterwards
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub allowed_origins: Vec<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let allowed_origins =
            parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_owned()));

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            database_url,
            allowed_origins,
            port,
        })
    }

    /// The configured origins as header values, or `None` when the
    /// wildcard policy applies
    pub fn origin_values(&self) -> Option<Vec<HeaderValue>> {
        if self.allowed_origins.iter().any(|origin| origin == "*") {
            return None;
        }

        Some(
            self.allowed_origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("ignoring unparseable origin {origin:?}");
                        None
                    }
                })
                .collect(),
        )
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_origins(raw: &str) -> Config {
        Config {
            database_url: "postgres://localhost/survey".to_owned(),
            allowed_origins: parse_origins(raw),
            port: DEFAULT_PORT,
        }
    }

    #[test]
    fn splits_and_trims_origins() {
        assert_eq!(
            parse_origins("https://a.example, https://b.example"),
            vec![
                "https://a.example".to_owned(),
                "https://b.example".to_owned()
            ]
        );
    }

    #[test]
    fn wildcard_disables_the_allow_list() {
        assert!(config_with_origins("*").origin_values().is_none());
    }

    #[test]
    fn explicit_origins_parse_into_header_values() {
        let values = config_with_origins("https://survey.example.org")
            .origin_values()
            .unwrap();

        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "https://survey.example.org");
    }
}
