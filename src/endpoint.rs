//! # Storage Endpoint
//!
//! [`StorageEndpoint`] holds the three values needed to reach a container:
//! the storage account, the container and a container-scoped SAS token.
use std::fmt;

/// DNS suffix of the Azure Blob service in the public cloud.
pub const BLOB_DOMAIN: &str = "blob.core.windows.net";

#[derive(Clone, PartialEq, Eq)]
pub struct StorageEndpoint {
    account: String,
    container: String,
    sas_token: String,
}

impl StorageEndpoint {
    #[must_use]
    pub fn new(
        account: impl Into<String>,
        container: impl Into<String>,
        sas_token: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            container: container.into(),
            sas_token: sas_token.into(),
        }
    }

    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    #[must_use]
    pub fn sas_token(&self) -> &str {
        &self.sas_token
    }

    /// The container URL the handle targets, without the SAS query string.
    ///
    /// # Examples
    ///
    /// ```
    /// use azure_sas_upload::endpoint::StorageEndpoint;
    ///
    /// let endpoint = StorageEndpoint::new("acct", "ctr", "sv=2022-11-02&sig=abc");
    /// assert_eq!(
    ///     endpoint.container_url(),
    ///     "https://acct.blob.core.windows.net/ctr"
    /// );
    /// ```
    #[must_use]
    pub fn container_url(&self) -> String {
        format!("https://{}.{BLOB_DOMAIN}/{}", self.account, self.container)
    }
}

impl fmt::Debug for StorageEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageEndpoint")
            .field("account", &self.account)
            .field("container", &self.container)
            .field("sas_token", &"<redacted>")
            .finish()
    }
}
