use anyhow::{Context, Result};

const DEFAULT_JWT_TTL_MINUTES: i64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Absent means the in-memory store.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_ttl_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            jwt_secret: std::env::var("JWT_SECRET")
                .context("Cannot load JWT_SECRET env variable")?,
            jwt_ttl_minutes: match std::env::var("JWT_TTL_MINUTES") {
                Ok(ttl) => ttl.parse().context("JWT_TTL_MINUTES must be a number")?,
                Err(_) => DEFAULT_JWT_TTL_MINUTES,
            },
        })
    }
}
