/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_blob")]
    pub blob: BlobSettings,

    #[serde(default = "default_upload")]
    pub upload: UploadSettings,

    #[serde(default = "default_admin")]
    pub admin: AdminSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Required; there is no default database
    #[serde(default)]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlobSettings {
    #[serde(default)]
    pub backend: BlobBackend,

    #[serde(default = "default_blob_endpoint")]
    pub endpoint: String,

    /// Required for the `http` backend
    #[serde(default)]
    pub token: String,

    #[serde(default = "default_local_root")]
    pub local_root: PathBuf,

    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobBackend {
    /// Remote object store reached over HTTP
    #[default]
    Http,
    /// Files on local disk, served by this server
    Local,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadSettings {
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminSettings {
    /// Shared secret for the admin page. Not an access-control mechanism.
    #[serde(default = "default_admin_password")]
    pub password: String,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Sources, later ones winning: `config_path` (or `config.toml` if present),
    /// `WISH_`-prefixed variables with `__` between sections
    /// (`WISH_STORAGE__DATABASE_URL`), then `DATABASE_URL` and `BLOB_READ_WRITE_TOKEN`.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match config_path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("config.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("WISH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        settings = settings
            .set_override_option("storage.database_url", std::env::var("DATABASE_URL").ok())
            .and_then(|s| {
                s.set_override_option("blob.token", std::env::var("BLOB_READ_WRITE_TOKEN").ok())
            })
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.validate_database()?;

        if self.blob.backend == BlobBackend::Http {
            if self.blob.token.is_empty() {
                return Err(ServerError::Config(
                    "Blob store token is required (set BLOB_READ_WRITE_TOKEN or WISH_BLOB__TOKEN)"
                        .to_string(),
                ));
            }
            if self.blob.endpoint.is_empty() {
                return Err(ServerError::Config(
                    "Blob store endpoint is required (set WISH_BLOB__ENDPOINT)".to_string(),
                ));
            }
        }

        if self.upload.max_body_bytes == 0 {
            return Err(ServerError::Config(
                "upload.max_body_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate only what database-only commands need
    pub fn validate_database(&self) -> Result<()> {
        if self.storage.database_url.is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set DATABASE_URL or WISH_STORAGE__DATABASE_URL)"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Path prefix under which local blobs are served, if this server serves them
    pub fn local_blob_mount(&self) -> Option<&str> {
        let base = self.blob.public_base_url.trim_end_matches('/');
        (self.blob.backend == BlobBackend::Local && base.starts_with('/') && base.len() > 1)
            .then_some(base)
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: String::new(),
    }
}

fn default_blob() -> BlobSettings {
    BlobSettings {
        backend: BlobBackend::default(),
        endpoint: default_blob_endpoint(),
        token: String::new(),
        local_root: default_local_root(),
        public_base_url: default_public_base_url(),
    }
}

fn default_blob_endpoint() -> String {
    "https://blob.vercel-storage.com".to_string()
}

fn default_local_root() -> PathBuf {
    PathBuf::from("./data/blobs")
}

fn default_public_base_url() -> String {
    "/blobs".to_string()
}

fn default_upload() -> UploadSettings {
    UploadSettings {
        max_body_bytes: default_max_body_bytes(),
    }
}

fn default_max_body_bytes() -> usize {
    25 * 1024 * 1024
}

fn default_admin() -> AdminSettings {
    AdminSettings {
        password: default_admin_password(),
    }
}

fn default_admin_password() -> String {
    "admin1234".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            blob: default_blob(),
            upload: default_upload(),
            admin: default_admin(),
        }
    }
}
