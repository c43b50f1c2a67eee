use azure_core::{request_options::Metadata, RetryOptions};
use azure_storage::prelude::*;
use azure_storage_blobs::prelude::*;

use super::BlobClientTrait;
use crate::{endpoint::StorageEndpoint, uploader::UploadOptions};

/// Azure Blob service client authorized with a SAS token.
#[derive(Clone)]
pub struct Client {
    client_builder: ClientBuilder,
}

impl Client {
    /// Builds the client without touching the network. The SAS token is parsed
    /// here as a plain query string, so any string is accepted; an unusable
    /// account or token is reported by the service on the first request.
    ///
    /// # Errors
    ///
    /// Returns an error when the SAS token cannot be parsed into query pairs.
    pub fn new(endpoint: &StorageEndpoint) -> azure_core::Result<Self> {
        let credentials = StorageCredentials::sas_token(endpoint.sas_token())?;

        Ok(Self::with_builder(ClientBuilder::new(
            endpoint.account().to_string(),
            credentials,
        )))
    }

    /// Wraps a preconfigured builder, e.g. one with a custom transport.
    /// Retries are always switched off: every put is a single request and a
    /// failure comes back exactly as the transport reported it.
    #[must_use]
    pub fn with_builder(client_builder: ClientBuilder) -> Self {
        Self {
            client_builder: client_builder.retry(RetryOptions::none()),
        }
    }
}

#[async_trait::async_trait]
impl BlobClientTrait for Client {
    async fn put_block_blob(
        &self,
        container: &str,
        blob: &str,
        content: Vec<u8>,
        options: &UploadOptions,
    ) -> azure_core::Result<()> {
        let mut request = self
            .client_builder
            .clone()
            .blob_client(container.to_string(), blob)
            .put_block_blob(content);

        if !options.metadata.is_empty() {
            request = request.metadata(to_metadata(options));
        }
        if let Some(content_type) = &options.content_type {
            request = request.content_type(content_type.clone());
        }

        request.await?;
        Ok(())
    }
}

fn to_metadata(options: &UploadOptions) -> Metadata {
    let mut metadata = Metadata::new();
    for (key, value) in &options.metadata {
        metadata.insert(key.clone(), value.clone());
    }
    metadata
}
