//! Ordered batch upload of a submission's images.

use crate::naming::blob_pathname;
use chrono::Utc;
use wish_core::blob::BlobStore;
use wish_core::types::ImageFile;

/// Upload `images` one at a time, in order, and return their URLs in the same order.
///
/// Stops at the first failure. Blobs written before it stay in the store.
pub async fn upload_images(
    store: &dyn BlobStore,
    images: &[ImageFile],
) -> wish_core::Result<Vec<String>> {
    let mut urls = Vec::with_capacity(images.len());

    for (index, image) in images.iter().enumerate() {
        let pathname = blob_pathname(Utc::now().timestamp_millis(), index, &image.file_name);
        let content_type = content_type_for(image);

        tracing::debug!(
            pathname = %pathname,
            size = image.len(),
            content_type = %content_type,
            "Uploading image"
        );

        let blob = store
            .put(&pathname, image.data.clone(), &content_type)
            .await?;
        urls.push(blob.url);
    }

    Ok(urls)
}

/// Content type sent by the client, or one guessed from the filename
pub fn content_type_for(image: &ImageFile) -> String {
    image
        .content_type
        .as_deref()
        .filter(|ct| !ct.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            mime_guess::from_path(&image.file_name)
                .first_or_octet_stream()
                .to_string()
        })
}
