use std::collections::BTreeMap;

use crate::{
    container::ContainerHandle,
    endpoint::StorageEndpoint,
    errors::UploadResult,
    transport::BlobClientTrait,
};

/// Optional settings attached to a single upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Custom metadata stored with the blob, sent as `x-ms-meta-*` headers.
    pub metadata: BTreeMap<String, String>,
    /// `Content-Type` of the blob. The service default applies when unset.
    pub content_type: Option<String>,
}

impl UploadOptions {
    /// Replaces the metadata with the given pairs.
    #[must_use]
    pub fn metadata<I, K, V>(mut self, metadata: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = metadata
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self
    }

    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Clone)]
pub struct BlobUploader {
    container: ContainerHandle,
}

impl BlobUploader {
    #[must_use]
    pub fn new(container: ContainerHandle) -> Self {
        Self { container }
    }

    /// Builds an uploader backed by the Azure Blob service.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::UploadError::Transport`] when the SAS token
    /// cannot be parsed.
    pub fn from_endpoint(endpoint: &StorageEndpoint) -> UploadResult<Self> {
        Ok(Self::new(ContainerHandle::new(endpoint)?))
    }

    /// Creates a [`BlobUploader`] on top of the provided client.
    #[must_use]
    pub fn with_client(container: &str, client: Box<dyn BlobClientTrait>) -> Self {
        Self::new(ContainerHandle::with_client(container, client))
    }

    #[must_use]
    pub fn container(&self) -> &ContainerHandle {
        &self.container
    }

    /// Uploads `content` as the blob `blob_name`, overwriting any blob with the
    /// same name. Exactly one write is attempted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use azure_sas_upload::{transport::inmem::InMemoryClient, uploader::{BlobUploader, UploadOptions}};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = InMemoryClient::default();
    ///     let uploader = BlobUploader::with_client("ctr", Box::new(client.clone()));
    ///     let options = UploadOptions::default().metadata([("id", "abc-123")]);
    ///
    ///     uploader
    ///         .upload("abc-123/test.txt", "Hello, world!", Some(&options))
    ///         .await
    ///         .unwrap();
    ///     assert!(client.blob("ctr", "abc-123/test.txt").is_some());
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Any transport or service failure, including the service rejecting an
    /// empty `blob_name`, is logged and returned unchanged as
    /// [`crate::errors::UploadError::Transport`].
    pub async fn upload<C: AsRef<[u8]> + Send>(
        &self,
        blob_name: &str,
        content: C,
        options: Option<&UploadOptions>,
    ) -> UploadResult<()> {
        let default_options = UploadOptions::default();
        let options = options.unwrap_or(&default_options);
        let blob = self.container.blob(blob_name);

        if let Err(error) = blob.put(content.as_ref().to_vec(), options).await {
            tracing::error!(blob_name, %error, "blob upload failed");
            return Err(error.into());
        }

        tracing::debug!(path = %blob.path(), "blob uploaded");
        Ok(())
    }
}
