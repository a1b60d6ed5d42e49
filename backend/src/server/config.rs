//! Process configuration parsed from flags and environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::domain::DEFAULT_NEWS_COUNT_ON_HOME_PAGE;

/// Command-line and environment configuration for the bulletin server.
#[derive(Debug, Clone, Parser)]
#[command(name = "bulletin", about = "News and notes backend")]
pub struct AppConfig {
    /// Socket address to bind.
    #[arg(long, env = "BULLETIN_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// SQLite database location.
    #[arg(long, env = "DATABASE_URL", default_value = "bulletin.sqlite3")]
    pub database_url: String,

    /// Maximum number of news entries on the home page.
    #[arg(
        long,
        env = "NEWS_COUNT_ON_HOME_PAGE",
        default_value_t = DEFAULT_NEWS_COUNT_ON_HOME_PAGE
    )]
    pub news_count_on_home_page: usize,

    /// File holding the session signing key; omitted means an ephemeral key.
    #[arg(long, env = "SESSION_KEY_FILE")]
    pub session_key_file: Option<PathBuf>,

    /// Set the Secure flag on session cookies.
    #[arg(long, env = "SESSION_COOKIE_SECURE", default_value_t = false)]
    pub cookie_secure: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        // Only assert on settings whose env vars are unlikely to be present.
        let config = AppConfig::parse_from(["bulletin"]);
        assert_eq!(config.news_count_on_home_page, 10);
        assert!(config.session_key_file.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::parse_from([
            "bulletin",
            "--news-count-on-home-page",
            "3",
            "--database-url",
            "/tmp/b.sqlite3",
        ]);
        assert_eq!(config.news_count_on_home_page, 3);
        assert_eq!(config.database_url, "/tmp/b.sqlite3");
    }
}
