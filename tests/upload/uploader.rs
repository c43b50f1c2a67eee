use std::collections::BTreeMap;

use azure_sas_upload::{
    endpoint::StorageEndpoint,
    errors::UploadError,
    transport::inmem::InMemoryClient,
    uploader::{BlobUploader, UploadOptions},
};

use super::{
    logs::CapturedLogs,
    mock::{self, FailingClient},
};

const CONTAINER_NAME: &str = "ctr";

fn uploader() -> (BlobUploader, InMemoryClient) {
    let client = InMemoryClient::default();
    let uploader = BlobUploader::with_client(CONTAINER_NAME, Box::new(client.clone()));
    (uploader, client)
}

#[tokio::test]
async fn sends_one_write_with_path_and_body() {
    let (uploader, client) = uploader();

    uploader
        .upload("foo/file-1.txt", "content", None)
        .await
        .unwrap();

    let requests = client.requests();
    assert_eq!(requests.len(), 1, "expected exactly one write");
    assert_eq!(
        format!("{}/{}", requests[0].container, requests[0].blob),
        "ctr/foo/file-1.txt"
    );
    assert_eq!(requests[0].content, b"content".to_vec());
}

#[tokio::test]
async fn sends_exactly_the_given_metadata() {
    let (uploader, client) = uploader();
    let options = UploadOptions::default().metadata([("id", "abc-123"), ("owner", "demo")]);

    uploader
        .upload("file.txt", b"content".to_vec(), Some(&options))
        .await
        .unwrap();

    assert_eq!(
        client.requests()[0].options.metadata,
        BTreeMap::from([
            ("id".to_string(), "abc-123".to_string()),
            ("owner".to_string(), "demo".to_string()),
        ])
    );
}

#[tokio::test]
async fn overwrites_without_conflict_check() {
    let (uploader, client) = uploader();

    uploader.upload("file.txt", "first", None).await.unwrap();
    uploader.upload("file.txt", "second", None).await.unwrap();

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].content, b"second".to_vec());
    assert_eq!(
        client.blob(CONTAINER_NAME, "file.txt").unwrap().content,
        b"second".to_vec()
    );
}

#[tokio::test]
async fn concurrent_uploads_are_independent() {
    let (uploader, client) = uploader();
    let other = uploader.clone();

    let (first, second) = tokio::join!(
        uploader.upload("a/test.txt", "a", None),
        other.upload("b/test.txt", "b", None),
    );

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(client.paths(), vec!["ctr/a/test.txt", "ctr/b/test.txt"]);
}

#[tokio::test]
async fn failure_is_logged_once_and_returned_unchanged() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let client = FailingClient::default();
    let uploader = BlobUploader::with_client(CONTAINER_NAME, Box::new(client.clone()));

    let result = uploader.upload("abc-123/test.txt", "content", None).await;

    let error = match result {
        Err(UploadError::Transport(error)) => error,
        other => panic!("expected a transport error, got {other:?}"),
    };
    assert!(mock::is_authentication_failed(&error));
    assert_eq!(error.to_string(), mock::authentication_failed().to_string());
    assert_eq!(client.attempts(), 1, "expected a single attempt");

    let errors = logs.at_level("ERROR");
    assert_eq!(errors.len(), 1, "expected one error line, got {errors:?}");
    assert!(errors[0].contains("abc-123/test.txt"));
    assert!(errors[0].contains(mock::FAILURE_MESSAGE));
}

#[tokio::test]
async fn writes_to_container_of_the_endpoint() {
    let endpoint = StorageEndpoint::new("acct", "ctr", "tok");
    let client = InMemoryClient::default();
    let uploader = BlobUploader::with_client(endpoint.container(), Box::new(client.clone()));
    let options = UploadOptions::default().metadata([("id", "abc-123")]);

    uploader
        .upload("abc-123/test.txt", "Hello, world!", Some(&options))
        .await
        .unwrap();

    assert_eq!(endpoint.container_url(), "https://acct.blob.core.windows.net/ctr");

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].container, "ctr");
    assert_eq!(requests[0].blob, "abc-123/test.txt");
    assert_eq!(requests[0].content, b"Hello, world!".to_vec());
    assert_eq!(
        requests[0].options.metadata,
        BTreeMap::from([("id".to_string(), "abc-123".to_string())])
    );
}

#[tokio::test]
async fn empty_blob_name_failure_is_logged_and_returned() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let client = FailingClient::default();
    let uploader = BlobUploader::with_client(CONTAINER_NAME, Box::new(client.clone()));

    let result = uploader.upload("", "a", None).await;

    assert!(matches!(
        &result,
        Err(UploadError::Transport(error)) if mock::is_authentication_failed(error)
    ));
    assert_eq!(client.attempts(), 1, "expected the write to be attempted");
    assert_eq!(logs.at_level("ERROR").len(), 1);
}
