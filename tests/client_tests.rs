//! Integration tests driving the client against a mock HTTP server.

use onfido::{
    ApplicantId, ApplicantRequest, CheckId, ClientConfig, DocumentId, DocumentType,
    DocumentUpload, Error, OnfidoClient,
};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OnfidoClient {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    OnfidoClient::with_config(
        "test_122333",
        ClientConfig::default().with_endpoint(server.uri()),
    )
    .expect("client should build")
}

#[tokio::test]
async fn create_applicant_sends_token_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/applicants"))
        .and(header("Authorization", "Token token=test_122333"))
        .and(body_string_contains("\"first_name\":\"Jane\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "appl-123",
            "first_name": "Jane",
            "last_name": "Doe",
            "sandbox": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let applicant = client
        .applicants()
        .create(&ApplicantRequest {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(applicant.id, Some(ApplicantId::new("appl-123")));
    assert!(applicant.sandbox);
}

#[tokio::test]
async fn validation_error_envelope_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/applicants"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "error": {
                "id": "a1b2c3",
                "type": "validation_error",
                "message": "There was a validation error on this request",
                "fields": { "email": ["invalid format"] }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .applicants()
        .create(&ApplicantRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert!(err.is_client_error());
    let Error::Api(api) = err else {
        panic!("expected an API error, got {err:?}");
    };
    assert_eq!(api.error_type.as_deref(), Some("validation_error"));
    assert_eq!(api.to_string(), "There was a validation error on this request");
    assert!(api.fields.contains_key("email"));
}

#[tokio::test]
async fn non_json_error_falls_back_to_status_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/applicants/appl-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .applicants()
        .get(&ApplicantId::new("appl-1"))
        .await
        .unwrap_err();

    assert!(err.is_server_error());
    let Error::Api(api) = err else {
        panic!("expected an API error, got {err:?}");
    };
    assert_eq!(api.to_string(), "http request failed with status code 500");
}

#[tokio::test]
async fn pagination_follows_link_headers() {
    let server = MockServer::start().await;

    // Mocks are tried in mount order, so the page-2 mock (more specific)
    // comes first.
    let page_two = format!("{}/applicants?page=2", server.uri());
    Mock::given(method("GET"))
        .and(path("/applicants"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "applicants": [
                { "id": "appl-c", "first_name": "C" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/applicants"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", format!("<{page_two}>; rel=\"next\"").as_str())
                .set_body_json(serde_json::json!({
                    "applicants": [
                        { "id": "appl-a", "first_name": "A" },
                        { "id": "appl-b", "first_name": "B" }
                    ]
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut iter = client.applicants().list();

    let mut names = Vec::new();
    while let Some(applicant) = iter.next().await.unwrap() {
        names.push(applicant.first_name.unwrap());
    }
    assert_eq!(names, ["A", "B", "C"]);

    // Exhaustion is idempotent and issues no further requests.
    assert!(iter.next().await.unwrap().is_none());
    assert!(!iter.has_more());
}

#[tokio::test]
async fn pagination_failure_is_sticky() {
    let server = MockServer::start().await;

    let page_two = format!("{}/applicants?page=2", server.uri());
    Mock::given(method("GET"))
        .and(path("/applicants"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/applicants"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", format!("<{page_two}>; rel=\"next\"").as_str())
                .set_body_json(serde_json::json!({
                    "applicants": [{ "id": "appl-a" }]
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut iter = client.applicants().list();

    assert!(iter.next().await.unwrap().is_some());
    let err = iter.next().await.unwrap_err();
    assert!(err.is_server_error());

    // Subsequent advances report exhaustion without retrying; the
    // expect(1) on the failing page mock enforces the request count.
    assert!(iter.next().await.unwrap().is_none());
    assert!(iter.next().await.unwrap().is_none());
}

#[tokio::test]
async fn empty_intermediate_page_requires_extra_advance() {
    let server = MockServer::start().await;

    let page_two = format!("{}/applicants?page=2", server.uri());
    Mock::given(method("GET"))
        .and(path("/applicants"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "applicants": [{ "id": "appl-a", "first_name": "A" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/applicants"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", format!("<{page_two}>; rel=\"next\"").as_str())
                .set_body_json(serde_json::json!({ "applicants": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut iter = client.applicants().list();

    // The empty page yields a gap: None even though a page remains.
    assert!(iter.next().await.unwrap().is_none());
    assert!(iter.has_more());

    let applicant = iter.next().await.unwrap().expect("element after the gap");
    assert_eq!(applicant.first_name.as_deref(), Some("A"));
    assert!(iter.next().await.unwrap().is_none());
}

#[tokio::test]
async fn collect_steps_over_empty_pages() {
    let server = MockServer::start().await;

    let page_two = format!("{}/applicants?page=2", server.uri());
    Mock::given(method("GET"))
        .and(path("/applicants"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "applicants": [{ "id": "appl-a" }, { "id": "appl-b" }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/applicants"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", format!("<{page_two}>; rel=\"next\"").as_str())
                .set_body_json(serde_json::json!({ "applicants": [] })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let applicants = client.applicants().list().collect().await.unwrap();
    assert_eq!(applicants.len(), 2);
}

#[tokio::test]
async fn empty_postcode_fails_without_a_request() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and the error would differ.

    let client = client_for(&server);
    let mut iter = client.addresses().pick("");

    let err = iter.next().await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.is_client_error());

    // Sticky after the reported failure.
    assert!(iter.next().await.unwrap().is_none());
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn check_download_returns_raw_bytes() {
    let server = MockServer::start().await;

    let pdf = b"%PDF-1.7 fake report".to_vec();
    Mock::given(method("GET"))
        .and(path("/checks/chk-1/download"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/pdf")
                .set_body_bytes(pdf.clone()),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bytes = client.checks().download(&CheckId::new("chk-1")).await.unwrap();
    assert_eq!(bytes, pdf);
}

#[tokio::test]
async fn document_upload_tags_sniffed_content_type() {
    let server = MockServer::start().await;

    // The multipart body carries raw (non-UTF-8) image bytes, so it is
    // inspected after the fact instead of matched on.
    Mock::given(method("POST"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "doc-1",
            "type": "passport",
            "file_name": "passport.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let document = client
        .documents()
        .upload(DocumentUpload {
            applicant_id: ApplicantId::new("appl-123"),
            document_type: DocumentType::Passport,
            side: None,
            file_name: "passport.png".into(),
            data: b"\x89PNG\r\n\x1a\n fake image data".to_vec(),
        })
        .await
        .unwrap();

    assert_eq!(document.id, Some(DocumentId::new("doc-1")));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("Content-Type: image/png"), "body: {body}");
    assert!(!body.contains("application/octet-stream"));
    assert!(body.contains("name=\"applicant_id\""));
    assert!(body.contains("appl-123"));
    assert!(body.contains("name=\"type\""));
    assert!(body.contains("passport"));
}

#[tokio::test]
async fn document_download_returns_raw_bytes() {
    let server = MockServer::start().await;

    let jpeg = b"\xff\xd8\xff\xe0 fake photo".to_vec();
    Mock::given(method("GET"))
        .and(path("/documents/doc-1/download"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "image/jpeg")
                .set_body_bytes(jpeg.clone()),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bytes = client
        .documents()
        .download(&DocumentId::new("doc-1"))
        .await
        .unwrap();
    assert_eq!(bytes, jpeg);
}

#[tokio::test]
async fn expired_deadline_surfaces_as_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/applicants/appl-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_secs(5))
                .set_body_json(serde_json::json!({ "id": "appl-1" })),
        )
        .mount(&server)
        .await;

    let client = OnfidoClient::with_config(
        "test_122333",
        ClientConfig::default()
            .with_endpoint(server.uri())
            .with_timeout(std::time::Duration::from_millis(200)),
    )
    .unwrap();

    let err = client
        .applicants()
        .get(&ApplicantId::new("appl-1"))
        .await
        .unwrap_err();

    // Deadline expiry is distinct from other transport failures.
    assert!(matches!(err, Error::Timeout), "got {err:?}");
}

#[tokio::test]
async fn non_json_success_body_is_unsupported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/applicants/appl-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain")
                .set_body_string("not json"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .applicants()
        .get(&ApplicantId::new("appl-1"))
        .await
        .unwrap_err();

    let Error::UnsupportedResponse { content_type, .. } = err else {
        panic!("expected an unsupported response error, got {err:?}");
    };
    assert_eq!(content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn expanded_check_fetches_each_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/checks/chk-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chk-1",
            "status": "complete",
            "report_ids": ["rep-1", "rep-2"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/reports/rep-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "rep-1",
            "name": "document",
            "result": "clear"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/reports/rep-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "rep-2",
            "name": "facial_similarity_photo",
            "result": "consider"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let expanded = client
        .checks()
        .get_expanded(&CheckId::new("chk-1"))
        .await
        .unwrap();

    assert_eq!(expanded.reports.len(), 2);
    assert_eq!(
        expanded.reports[0].name,
        Some(onfido::ReportName::Document)
    );
    assert_eq!(
        expanded.reports[1].result,
        Some(onfido::ReportResult::Consider)
    );
}
