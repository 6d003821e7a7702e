//! HTTP API of the catalog server.

use actix_files::Files;
use actix_web::web;
use std::path::Path;

#[cfg(test)]
macro_rules! test_app {
    ($env:ident) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($env.config.clone()))
                .app_data(actix_web::web::Data::new($env.session.clone()))
                .configure(|cfg| crate::services::configure(cfg, &$env.config.storage_dir)),
        )
        .await
    };
}

pub mod products;
pub mod session;
pub mod storage;

/// Registers every API scope plus the static files of the storage service.
pub fn configure(cfg: &mut web::ServiceConfig, storage_dir: &Path) {
    cfg.service(products::configure_routes())
        .service(session::configure_routes())
        .service(storage::configure_routes())
        .service(Files::new(storage::FILES_PATH, storage_dir));
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::ServerConfig;
    use crate::session_controller::state::SessionState;
    use tempfile::TempDir;

    /// Throwaway database and storage directory for one test.
    pub struct TestEnv {
        pub config: ServerConfig,
        pub session: SessionState,
        _dir: TempDir,
    }

    impl TestEnv {
        pub fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let config = ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                database_path: dir.path().join("catalog.sqlite"),
                storage_dir: dir.path().join("storage"),
                open_browser: false,
            };
            crate::db::open(&config.database_path).unwrap();
            std::fs::create_dir_all(&config.storage_dir).unwrap();
            Self {
                config,
                session: SessionState::default(),
                _dir: dir,
            }
        }
    }
}
