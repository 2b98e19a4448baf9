//! HTTP transport tests against a local mock registry

#[cfg(test)]
mod tests {
    use crate::common::DocumentFactory;
    use crpt_api::{
        ClientConfig, CrptApi, Dispatcher, DispatcherConfig, DocumentJsonWriter, FAILURE_STATUS,
        HttpTransport, HttpTransportConfig, RateWindow, Submission, SubmissionFailure, TimeUnit,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CREATE_PATH: &str = "/api/v3/lk/documents/create";

    fn client_for(server: &MockServer, limit: u32) -> CrptApi {
        let mut config = ClientConfig::new(TimeUnit::Seconds, limit);
        config.endpoint = format!("{}{}", server.uri(), CREATE_PATH);
        CrptApi::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_post_sends_signature_and_json_body() {
        let server = MockServer::start().await;
        let document = DocumentFactory::complete();
        let expected_body: serde_json::Value =
            serde_json::from_str(&DocumentJsonWriter::write_document(&document).unwrap()).unwrap();

        Mock::given(method("POST"))
            .and(path(CREATE_PATH))
            .and(header("X-signature", "signature-1"))
            .and(header("content-type", "application/json"))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server, 5);
        let status = api.post_document_async(&document, "signature-1").await;
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn test_error_statuses_are_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CREATE_PATH))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server, 5);
        let status = api
            .post_document_async(&DocumentFactory::minimal("d1"), "expired")
            .await;
        assert_eq!(status, 401);
    }

    #[tokio::test]
    async fn test_blocking_post_from_worker_thread() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CREATE_PATH))
            .respond_with(ResponseTemplate::new(201))
            .expect(2)
            .mount(&server)
            .await;

        let api = client_for(&server, 10);
        let statuses = tokio::task::spawn_blocking(move || {
            let first = api.post_document(&DocumentFactory::minimal("a"), "sig");
            let second = api.post_document(&DocumentFactory::minimal("b"), "sig");
            (first, second)
        })
        .await
        .unwrap();

        assert_eq!(statuses, (201, 201));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_collapses_to_failure_status() {
        let mut config = ClientConfig::new(TimeUnit::Seconds, 1);
        // Port 9 (discard) is not listening on test hosts.
        config.endpoint = format!("http://127.0.0.1:9{}", CREATE_PATH);
        config.connect_timeout = 2;
        let api = CrptApi::from_config(&config).unwrap();

        let status = api
            .post_document_async(&DocumentFactory::minimal("x"), "sig")
            .await;
        assert_eq!(status, FAILURE_STATUS);
    }

    #[tokio::test]
    async fn test_invalid_signature_header_collapses_to_failure_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let api = client_for(&server, 5);
        let status = api
            .post_document_async(&DocumentFactory::minimal("x"), "bad\nsignature")
            .await;
        assert_eq!(status, FAILURE_STATUS);
    }

    #[tokio::test]
    async fn test_client_timeout_is_reported_as_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CREATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(HttpTransportConfig {
            endpoint: format!("{}{}", server.uri(), CREATE_PATH),
            request_timeout: Duration::from_millis(300),
            ..Default::default()
        })
        .unwrap();
        let dispatcher = Dispatcher::new(
            RateWindow::new(TimeUnit::Seconds, 5).unwrap(),
            Arc::new(transport),
            DispatcherConfig {
                send_timeout: Duration::from_secs(10),
            },
        )
        .unwrap();

        let result = dispatcher.submit_async(Submission::new("{}", "slow")).await;
        assert_eq!(
            result,
            Err(SubmissionFailure::Timeout(Duration::from_millis(300)))
        );
    }
}
