//! # Bootstrap
//!
//! The startup upload: one greeting blob under a freshly generated id.
use uuid::Uuid;

use crate::{
    errors::UploadResult,
    uploader::{BlobUploader, UploadOptions},
};

pub const GREETING: &str = "Hello, world!";
pub const FILE_NAME: &str = "test.txt";

/// Uploads the greeting under a new random v4 id.
///
/// # Errors
///
/// Returns the upload error unchanged after logging it.
pub async fn upload_greeting(uploader: &BlobUploader) -> UploadResult<String> {
    upload_greeting_with_id(uploader, Uuid::new_v4()).await
}

/// Uploads [`GREETING`] to `<id>/test.txt` with metadata `{id: <id>}` and
/// returns the blob name.
///
/// # Errors
///
/// Returns the upload error unchanged after logging it.
pub async fn upload_greeting_with_id(uploader: &BlobUploader, id: Uuid) -> UploadResult<String> {
    let id = id.to_string();
    let blob_name = format!("{id}/{FILE_NAME}");
    let options = UploadOptions::default().metadata([("id", id.as_str())]);

    tracing::info!(blob_name = %blob_name, "uploading blob to Azure Storage");

    if let Err(error) = uploader.upload(&blob_name, GREETING, Some(&options)).await {
        tracing::error!(blob_name = %blob_name, %error, "failed to upload blob to Azure Storage");
        return Err(error);
    }

    Ok(blob_name)
}
