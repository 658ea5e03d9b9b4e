//! Process configuration, read from the environment once at startup.

use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}")]
    InvalidVar(&'static str),
}

/// Everything the server needs, resolved up front and injected into the
/// shared state instead of being read ambiently per request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address, e.g. "0.0.0.0:8000".
    pub listen_addr: String,
    pub database_url: String,
    /// Base URL used when building password-reset links.
    pub frontend_url: String,
    /// Pre-shared HS256 secret of the external token issuer.
    pub jwt_secret: String,
    /// Outbound mail; absent means mail delivery is disabled.
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let listen_addr =
            env::var("LISTEN_ADDR").unwrap_or_else(|_| Self::default_listen_addr());
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| Self::default_frontend_url());

        let smtp = match env::var("SMTP_HOST") {
            Ok(host) => {
                let port = match env::var("SMTP_PORT") {
                    Ok(raw) => raw
                        .parse::<u16>()
                        .map_err(|_| ConfigError::InvalidVar("SMTP_PORT"))?,
                    Err(_) => 587,
                };
                let username =
                    env::var("SMTP_USERNAME").map_err(|_| ConfigError::MissingVar("SMTP_USERNAME"))?;
                let password =
                    env::var("SMTP_PASSWORD").map_err(|_| ConfigError::MissingVar("SMTP_PASSWORD"))?;
                let from_address = env::var("SMTP_FROM").unwrap_or_else(|_| username.clone());
                Some(SmtpConfig {
                    host,
                    port,
                    username,
                    password,
                    from_address,
                })
            }
            Err(_) => None,
        };

        Ok(Self {
            listen_addr,
            database_url,
            frontend_url,
            jwt_secret,
            smtp,
        })
    }

    fn default_listen_addr() -> String {
        "0.0.0.0:8000".to_string()
    }

    fn default_frontend_url() -> String {
        "http://localhost:5173".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            listen_addr: Config::default_listen_addr(),
            database_url: "postgres://localhost/exams".to_string(),
            frontend_url: Config::default_frontend_url(),
            jwt_secret: "secret".to_string(),
            smtp: None,
        }
    }

    #[test]
    fn defaults() {
        let config = base_config();
        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.frontend_url, "http://localhost:5173");
        assert!(config.smtp.is_none());
    }
}
