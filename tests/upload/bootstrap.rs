use azure_sas_upload::{bootstrap, errors::UploadError, uploader::BlobUploader};
use uuid::Uuid;

use super::{
    logs::CapturedLogs,
    mock::{self, FailingClient},
};

#[tokio::test]
async fn failure_is_logged_by_both_layers_and_propagated() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let client = FailingClient::default();
    let uploader = BlobUploader::with_client("ctr", Box::new(client.clone()));
    let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();

    let result = bootstrap::upload_greeting_with_id(&uploader, id).await;

    assert!(matches!(
        &result,
        Err(UploadError::Transport(error)) if mock::is_authentication_failed(error)
    ));
    assert_eq!(client.attempts(), 1, "startup upload is never retried");

    let blob_name = "67e55044-10b1-426f-9247-bb680e5fe0c8/test.txt";

    let infos = logs.at_level("INFO");
    assert_eq!(infos.len(), 1);
    assert!(infos[0].contains(blob_name));

    let errors = logs.at_level("ERROR");
    assert_eq!(errors.len(), 2, "got {errors:?}");
    assert!(errors.iter().all(|line| line.contains(blob_name)));
}
