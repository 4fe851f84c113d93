#![allow(dead_code)]

/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use bytes::Bytes;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use wish_core::{
    blob::{BlobStore, StoredBlob},
    storage::RecordStore,
    types::{NewRecord, RecordId, UserRecord},
    WishError,
};
use wish_server::{create_router, AppState, BlobBackend, ServerConfig};
use wish_storage::SqliteRecordStore;

pub const ADMIN_PASSWORD: &str = "admin1234";

/// Blob store that keeps uploads in memory and can be told to fail
#[derive(Default)]
pub struct MemoryBlobStore {
    uploads: Mutex<Vec<(String, Bytes, String)>>,
    fail: bool,
}

impl MemoryBlobStore {
    pub fn failing() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    /// (pathname, content type) of every upload, in order
    pub fn uploads(&self) -> Vec<(String, String)> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|(pathname, _, content_type)| (pathname.clone(), content_type.clone()))
            .collect()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(
        &self,
        pathname: &str,
        data: Bytes,
        content_type: &str,
    ) -> wish_core::Result<StoredBlob> {
        if self.fail {
            return Err(WishError::blob("object store unavailable"));
        }
        self.uploads
            .lock()
            .unwrap()
            .push((pathname.to_string(), data, content_type.to_string()));
        Ok(StoredBlob {
            url: format!("https://blobs.example/{}", pathname),
            pathname: pathname.to_string(),
        })
    }
}

/// Record store whose writes and reads always fail
pub struct BrokenRecordStore;

#[async_trait]
impl RecordStore for BrokenRecordStore {
    async fn create(&self, _record: NewRecord) -> wish_core::Result<UserRecord> {
        Err(WishError::storage("disk full"))
    }

    async fn list_all(&self) -> wish_core::Result<Vec<UserRecord>> {
        Err(WishError::storage("connection refused"))
    }

    async fn get(&self, _id: &RecordId) -> wish_core::Result<Option<UserRecord>> {
        Err(WishError::storage("connection refused"))
    }

    async fn count(&self) -> wish_core::Result<u64> {
        Err(WishError::storage("connection refused"))
    }
}

/// Router plus handles on its stores
pub struct TestApp {
    pub router: Router,
    pub records: Arc<SqliteRecordStore>,
    pub blobs: Arc<MemoryBlobStore>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        use tower::ServiceExt;
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Create a test database with migrations applied, in a real SQLite file
pub async fn create_test_store(temp_dir: &TempDir) -> Arc<SqliteRecordStore> {
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let pool = wish_storage::create_pool(&db_url).await.unwrap();
    wish_storage::run_migrations(&pool).await.unwrap();
    Arc::new(SqliteRecordStore::new(pool))
}

pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.storage.database_url = "sqlite::memory:".to_string();
    config.blob.token = "test-token".to_string();
    config.admin.password = ADMIN_PASSWORD.to_string();
    config
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with(MemoryBlobStore::default()).await
}

pub async fn create_test_app_with(blobs: MemoryBlobStore) -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let records = create_test_store(&temp_dir).await;
    let blobs = Arc::new(blobs);

    let app_state = AppState::new(records.clone(), blobs.clone(), ADMIN_PASSWORD);
    let router = create_router(app_state, &test_config());

    TestApp {
        router,
        records,
        blobs,
        _temp_dir: temp_dir,
    }
}

/// Router over a record store that always fails
pub fn create_broken_app(blobs: Arc<MemoryBlobStore>) -> Router {
    let app_state = AppState::new(Arc::new(BrokenRecordStore), blobs, ADMIN_PASSWORD);
    create_router(app_state, &test_config())
}

/// Router using the local blob backend rooted in `blob_dir`
pub async fn create_local_blob_app(temp_dir: &TempDir) -> Router {
    let mut config = test_config();
    config.blob.backend = BlobBackend::Local;
    config.blob.local_root = temp_dir.path().join("blobs");

    let records = create_test_store(temp_dir).await;
    let blobs = wish_server::services::blob_store_from_config(&config.blob)
        .await
        .unwrap();

    create_router(AppState::new(records, blobs, ADMIN_PASSWORD), &config)
}

/// Hand-built `multipart/form-data` body
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "----wish-test-boundary-7MA4YWxkTrZu0gW".to_string(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                self.boundary, name, filename, content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn into_request(mut self, uri: &str) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());

        Request::builder()
            .uri(uri)
            .method("POST")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", self.boundary),
            )
            .body(Body::from(self.body))
            .unwrap()
    }
}

/// Valid scalar fields for a submission
pub fn valid_fields() -> MultipartBody {
    MultipartBody::new()
        .text("firstName", "Ali")
        .text("lastName", "Khan")
        .text("dateOfBirth", "2000-05-10")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
