/// Submission service - validates, uploads images, persists the record
use std::sync::Arc;
use wish_blob::upload_images;
use wish_core::{
    error::Result,
    types::{NewRecord, UserRecord},
    validation::{parse_date_of_birth, validate, SubmissionInput, ValidSubmission},
    BlobStore, RecordStore,
};

/// Creates and lists user records.
///
/// Blob uploads and the record insert are not atomic: if the insert fails
/// after some images were uploaded, those blobs stay in the store with no
/// record pointing at them.
pub struct SubmissionService {
    records: Arc<dyn RecordStore>,
    blobs: Arc<dyn BlobStore>,
}

impl SubmissionService {
    pub fn new(records: Arc<dyn RecordStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { records, blobs }
    }

    /// Validate a raw submission, then create it
    pub async fn create(&self, input: SubmissionInput) -> Result<UserRecord> {
        let submission = validate(input)?;
        self.create_validated(submission).await
    }

    /// Upload the images in order and persist the record
    pub async fn create_validated(&self, submission: ValidSubmission) -> Result<UserRecord> {
        let date_of_birth = parse_date_of_birth(&submission.date_of_birth)?;

        let images = upload_images(self.blobs.as_ref(), &submission.images).await?;

        let record = self
            .records
            .create(NewRecord {
                first_name: submission.first_name,
                last_name: submission.last_name,
                date_of_birth,
                images,
            })
            .await?;

        tracing::info!(
            id = %record.id,
            images = record.images.len(),
            "Record created"
        );

        Ok(record)
    }

    /// All records, newest first
    pub async fn list(&self) -> Result<Vec<UserRecord>> {
        self.records.list_all().await
    }

    pub async fn count(&self) -> Result<u64> {
        self.records.count().await
    }
}
