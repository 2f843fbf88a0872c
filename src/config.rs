//! Runtime configuration read from the environment at startup.

use std::{env, net::SocketAddr, path::PathBuf};

use tracing::{info, warn};

/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE_NAME: &str = ".dominoCount.db";
/// Environment variable naming the directory that holds the database.
const SQLITE_VOLUME_ENV: &str = "SQLITE_VOLUME";
/// Port used when neither `PORT` nor `SERVER_PORT` is set.
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Location of the SQLite database file.
    pub database_path: PathBuf,
    /// TCP port the HTTP server listens on.
    pub port: u16,
}

impl AppConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the configuration through `lookup`, which maps variable names to values.
    ///
    /// The database lives in `$SQLITE_VOLUME`, falling back to `$HOME` and then to the
    /// working directory.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let directory = [SQLITE_VOLUME_ENV, "HOME"]
            .into_iter()
            .find_map(|key| lookup(key).filter(|value| !value.is_empty()))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let database_path = directory.join(DATABASE_FILE_NAME);

        let port = ["PORT", "SERVER_PORT"]
            .into_iter()
            .find_map(|key| lookup(key).map(|value| (key, value)))
            .and_then(|(key, value)| match value.parse::<u16>() {
                Ok(port) => Some(port),
                Err(err) => {
                    warn!(variable = key, %value, error = %err, "ignoring invalid port");
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        info!(database = %database_path.display(), port, "configuration loaded");
        Self {
            database_path,
            port,
        }
    }

    /// Address the HTTP server binds to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn sqlite_volume_wins_over_home() {
        let config = config_from(&[("SQLITE_VOLUME", "/data"), ("HOME", "/home/me")]);
        assert_eq!(config.database_path, PathBuf::from("/data/.dominoCount.db"));
    }

    #[test]
    fn home_is_used_without_volume() {
        let config = config_from(&[("SQLITE_VOLUME", ""), ("HOME", "/home/me")]);
        assert_eq!(
            config.database_path,
            PathBuf::from("/home/me/.dominoCount.db")
        );
    }

    #[test]
    fn working_directory_is_the_last_resort() {
        let config = config_from(&[]);
        assert_eq!(config.database_path, PathBuf::from("./.dominoCount.db"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn port_comes_from_port_or_server_port() {
        assert_eq!(config_from(&[("PORT", "9000")]).port, 9000);
        assert_eq!(config_from(&[("SERVER_PORT", "9001")]).port, 9001);
        assert_eq!(
            config_from(&[("PORT", "9000"), ("SERVER_PORT", "9001")]).port,
            9000
        );
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "eighty")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), SocketAddr::from(([0, 0, 0, 0], 8080)));
    }
}
