use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use super::BlobClientTrait;
use crate::uploader::UploadOptions;

/// A single write as it reached the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRequest {
    pub container: String,
    pub blob: String,
    pub content: Vec<u8>,
    pub options: UploadOptions,
}

#[derive(Debug, Clone)]
pub struct StoredBlob {
    pub content: Vec<u8>,
    pub metadata: BTreeMap<String, String>,
    pub content_type: Option<String>,
}

#[derive(Debug, Default)]
struct State {
    blobs: BTreeMap<(String, String), StoredBlob>,
    requests: Vec<PutRequest>,
}

/// Keeps blobs in process memory and records every write it receives.
///
/// Clones share the same state, so a test can hand one clone to a
/// [`crate::container::ContainerHandle`] and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClient {
    state: Arc<Mutex<State>>,
}

impl InMemoryClient {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every write received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<PutRequest> {
        self.state().requests.clone()
    }

    /// The latest blob written under `container/blob`.
    #[must_use]
    pub fn blob(&self, container: &str, blob: &str) -> Option<StoredBlob> {
        self.state()
            .blobs
            .get(&(container.to_string(), blob.to_string()))
            .cloned()
    }

    /// Blob paths currently stored, as `container/blob`.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.state()
            .blobs
            .keys()
            .map(|(container, blob)| format!("{container}/{blob}"))
            .collect()
    }
}

#[async_trait::async_trait]
impl BlobClientTrait for InMemoryClient {
    async fn put_block_blob(
        &self,
        container: &str,
        blob: &str,
        content: Vec<u8>,
        options: &UploadOptions,
    ) -> azure_core::Result<()> {
        let mut state = self.state();

        state.requests.push(PutRequest {
            container: container.to_string(),
            blob: blob.to_string(),
            content: content.clone(),
            options: options.clone(),
        });

        state.blobs.insert(
            (container.to_string(), blob.to_string()),
            StoredBlob {
                content,
                metadata: options.metadata.clone(),
                content_type: options.content_type.clone(),
            },
        );

        Ok(())
    }
}
