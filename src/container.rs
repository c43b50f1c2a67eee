use crate::{
    endpoint::StorageEndpoint,
    transport::{azure, BlobClientTrait},
    uploader::UploadOptions,
};

/// An authorized handle to one container.
///
/// The handle is read-only once built and can be cloned and shared between
/// concurrent uploads.
pub struct ContainerHandle {
    container: String,
    client: Box<dyn BlobClientTrait>,
}

impl Clone for ContainerHandle {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            client: dyn_clone::clone_box(&*self.client),
        }
    }
}

impl ContainerHandle {
    /// Create a new [`ContainerHandle`] for the given endpoint. No request is
    /// sent until the first upload.
    ///
    /// # Errors
    ///
    /// Returns an error when the SAS token cannot be parsed.
    pub fn new(endpoint: &StorageEndpoint) -> azure_core::Result<Self> {
        Ok(Self {
            container: endpoint.container().to_string(),
            client: Box::new(azure::Client::new(endpoint)?),
        })
    }

    /// Creates a new [`ContainerHandle`] with the provided client and
    /// container name.
    #[must_use]
    pub fn with_client(container: &str, client: Box<dyn BlobClientTrait>) -> Self {
        Self {
            container: container.to_string(),
            client,
        }
    }

    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Resolves the blob-scoped handle for `name`.
    #[must_use]
    pub fn blob<'a>(&'a self, name: &'a str) -> BlobHandle<'a> {
        BlobHandle {
            container: self,
            name,
        }
    }
}

/// A single blob inside a [`ContainerHandle`].
pub struct BlobHandle<'a> {
    container: &'a ContainerHandle,
    name: &'a str,
}

impl BlobHandle<'_> {
    #[must_use]
    pub fn name(&self) -> &str {
        self.name
    }

    /// Path of the blob relative to the account, `container/name`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}", self.container.container, self.name)
    }

    /// Writes the full content in one request.
    ///
    /// # Errors
    ///
    /// Returns the transport error as is.
    pub async fn put(&self, content: Vec<u8>, options: &UploadOptions) -> azure_core::Result<()> {
        self.container
            .client
            .put_block_blob(&self.container.container, self.name, content, options)
            .await
    }
}
