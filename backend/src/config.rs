//! Server configuration read from `CATALOG_*` environment variables.
//!
//! | variable               | default          |
//! |------------------------|------------------|
//! | `CATALOG_HOST`         | `127.0.0.1`      |
//! | `CATALOG_PORT`         | `8080`           |
//! | `CATALOG_DB`           | `catalog.sqlite` |
//! | `CATALOG_STORAGE_DIR`  | `storage`        |
//! | `CATALOG_OPEN_BROWSER` | `true`           |

use std::path::PathBuf;

/// Maximum accepted size of an uploaded image and of a JSON body.
pub const MAX_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file holding the products collection.
    pub database_path: PathBuf,
    /// Root directory of the storage namespaces.
    pub storage_dir: PathBuf,
    /// Open the UI in the default browser once the server is up.
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let port = match lookup("CATALOG_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("CATALOG_PORT `{}` is not a valid port: {}", raw, e))?,
            None => 8080,
        };
        let open_browser = match lookup("CATALOG_OPEN_BROWSER").as_deref() {
            None | Some("1") | Some("true") => true,
            Some("0") | Some("false") => false,
            Some(other) => return Err(format!("CATALOG_OPEN_BROWSER `{}` is not a boolean", other)),
        };

        Ok(Self {
            host: lookup("CATALOG_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            database_path: lookup("CATALOG_DB")
                .unwrap_or_else(|| "catalog.sqlite".to_string())
                .into(),
            storage_dir: lookup("CATALOG_STORAGE_DIR")
                .unwrap_or_else(|| "storage".to_string())
                .into(),
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.database_path, PathBuf::from("catalog.sqlite"));
        assert_eq!(config.storage_dir, PathBuf::from("storage"));
        assert!(config.open_browser);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("CATALOG_HOST", "0.0.0.0"),
            ("CATALOG_PORT", "9000"),
            ("CATALOG_DB", "/tmp/c.sqlite"),
            ("CATALOG_OPEN_BROWSER", "false"),
        ]))
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(config.database_path, PathBuf::from("/tmp/c.sqlite"));
        assert!(!config.open_browser);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("CATALOG_PORT", "http")])).unwrap_err();
        assert!(err.contains("CATALOG_PORT"));
    }
}
