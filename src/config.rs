// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    page_size: u32,
    uploads_dir: String,
    comment_blocklist: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// mode=rwc lets sqlite create the database file on first start.
fn default_database_url() -> String {
    "sqlite:kawaraban.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const DEFAULT_PAGE_SIZE: u32 = 10;

fn default_uploads_dir() -> String {
    "public/uploads".into()
}

fn default_comment_blocklist() -> Vec<String> {
    vec!["badword1".into(), "badword2".into(), "badword3".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Every key has a
    /// default; an unparsable or zero page size falls back rather than
    /// failing startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        listen_addr.parse::<SocketAddr>().map_err(|_| {
            ConfigError::Invalid(format!("LISTEN_ADDR is not a socket address: {listen_addr}"))
        })?;

        let page_size = env::var("PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&v| v != 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let uploads_dir = env::var("UPLOADS_DIR").unwrap_or_else(|_| default_uploads_dir());

        let comment_blocklist = env::var("COMMENT_BLOCKLIST")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_comment_blocklist);

        Ok(Self {
            database_url,
            listen_addr,
            page_size,
            uploads_dir,
            comment_blocklist,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn uploads_dir(&self) -> &str {
        &self.uploads_dir
    }

    pub fn comment_blocklist(&self) -> &[String] {
        &self.comment_blocklist
    }
}
