use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tunecost_engine::Estimator;
use tunecost_vertex::VertexClient;

const MODEL: &str = "gemini-2.0-flash-001";
const COUNT_PATH: &str = "/v1/projects/test-project/locations/us-central1\
                          /publishers/google/models/gemini-2.0-flash-001:countTokens";

fn write_dataset(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn client_for(server: &mockito::ServerGuard) -> VertexClient {
    VertexClient::new(
        "test-project",
        "us-central1",
        "test-token",
        Duration::from_secs(5),
    )
    .unwrap()
    .with_base_url(server.url())
}

#[tokio::test]
async fn test_end_to_end_estimate() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", COUNT_PATH)
        .match_header("Authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"totalTokens": 5}"#)
        .expect(2)
        .create_async()
        .await;

    // Two records, one blank line, one invalid line.
    let file = write_dataset(
        "{\"systemInstruction\":{\"parts\":[{\"text\":\"be brief\"}]},\
          \"contents\":[{\"role\":\"user\",\"parts\":[{\"text\":\"hi\"}]}]}\n\
         \n\
         not json\n\
         {\"contents\":[{\"parts\":[{\"text\":\"bye\"}]}]}\n",
    );

    let estimator = Estimator::new(Arc::new(client_for(&server)), MODEL);
    let report = estimator.run(file.path()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(report.total_examples, 2);
    assert_eq!(report.total_tokens, 10);
    assert_eq!(report.projected_tokens(), 30);
}

#[tokio::test]
async fn test_provider_error_aborts_without_report() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", COUNT_PATH)
        .with_status(404)
        .with_body(r#"{"error": {"message": "model not found"}}"#)
        .create_async()
        .await;

    let file = write_dataset("{\"contents\":[{\"parts\":[{\"text\":\"hi\"}]}]}\n");

    let estimator = Estimator::new(Arc::new(client_for(&server)), MODEL);
    let err = estimator.run(file.path()).await.unwrap_err();

    mock.assert_async().await;
    assert!(format!("{err:#}").contains("404"));
}
