//! Server configuration, flag- and environment-driven.

use clap::Parser;

/// Chat relay server configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "parlor-server", version, about)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "CHAT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "CHAT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Postgres connection URL; when absent the in-memory store is used
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Connection pool size for the message store
    #[arg(long, env = "CHAT_MAX_DB_CONNECTIONS", default_value_t = 5)]
    pub max_db_connections: u32,

    /// Origins allowed on the plain HTTP routes (comma-separated); an empty
    /// list allows any origin
    #[arg(
        long,
        env = "CHAT_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values_t = [
            "http://localhost:4200".to_string(),
            "http://localhost:90".to_string(),
            "http://localhost:30080".to_string(),
        ]
    )]
    pub allowed_origins: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // テスト項目: 引数なしでローカル開発向けのデフォルト値になる
        // when (操作):
        let config = ServerConfig::parse_from(["parlor-server"]);

        // then (期待する結果):
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, None);
        assert_eq!(
            config.allowed_origins,
            vec![
                "http://localhost:4200",
                "http://localhost:90",
                "http://localhost:30080",
            ]
        );
    }

    #[test]
    fn test_allowed_origins_comma_separated() {
        // テスト項目: --allowed-origins はカンマ区切りで複数指定できる
        // when (操作):
        let config = ServerConfig::parse_from([
            "parlor-server",
            "--allowed-origins",
            "http://a.example,http://b.example",
        ]);

        // then (期待する結果):
        assert_eq!(
            config.allowed_origins,
            vec!["http://a.example", "http://b.example"]
        );
    }
}
