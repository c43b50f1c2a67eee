//! # Transport Module
//!
//! The `transport` module defines [`BlobClientTrait`], the single seam between
//! this crate and the remote Blob service. The Azure SDK backed client lives in
//! [`azure`]; [`inmem`] keeps blobs in process memory.
use dyn_clone::DynClone;

use crate::uploader::UploadOptions;

pub mod azure;

#[cfg(feature = "inmem")]
pub mod inmem;

#[async_trait::async_trait]
pub trait BlobClientTrait: DynClone + Sync + Send {
    /// Writes `content` as a block blob named `blob` in `container`, replacing
    /// any existing blob with that name. One request, no retries.
    async fn put_block_blob(
        &self,
        container: &str,
        blob: &str,
        content: Vec<u8>,
        options: &UploadOptions,
    ) -> azure_core::Result<()>;
}
