//! # Azure SAS Upload
//!
//! Uploads blobs to a single Azure Storage container using a container-scoped
//! Shared Access Signature (SAS) token. The credentials never leave the
//! [`endpoint::StorageEndpoint`]; the account key is never needed.
//!
//! Building a [`container::ContainerHandle`] performs no network I/O. Each
//! [`uploader::BlobUploader::upload`] call issues exactly one write with no
//! retries, and failures are logged and then returned unchanged.
//!
//! ## Example
//!
//! ```rust,no_run
//! use azure_sas_upload::{endpoint::StorageEndpoint, uploader::{BlobUploader, UploadOptions}};
//!
//! #[tokio::main]
//! async fn main() {
//!     let endpoint = StorageEndpoint::new("account", "container", "sv=2022-11-02&sig=...");
//!     let uploader = BlobUploader::from_endpoint(&endpoint).unwrap();
//!
//!     let options = UploadOptions::default().metadata([("id", "abc-123")]);
//!     uploader
//!         .upload("abc-123/test.txt", "Hello, world!", Some(&options))
//!         .await
//!         .unwrap();
//! }
//! ```

pub mod bootstrap;
pub mod config;
pub mod container;
pub mod endpoint;
pub mod errors;
pub mod transport;
pub mod uploader;
