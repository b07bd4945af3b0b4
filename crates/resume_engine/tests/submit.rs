use std::time::Duration;

use pretty_assertions::assert_eq;
use resume_core::{
    AnalysisResult, SelectedFile, SubmissionError, SubmissionRequest, PDF_MIME_TYPE,
};
use resume_engine::{ReqwestSubmitter, SubmitSettings, Submitter, UPLOAD_TOO_LARGE_MESSAGE};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resume_pdf() -> SelectedFile {
    SelectedFile::new("resume.pdf", PDF_MIME_TYPE, b"%PDF-1.4 fake".to_vec())
}

fn submitter_for(server: &MockServer) -> ReqwestSubmitter {
    ReqwestSubmitter::new(SubmitSettings {
        base_url: server.uri(),
        ..SubmitSettings::default()
    })
}

async fn mount_json(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

async fn sent_body(server: &MockServer) -> String {
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"), "{content_type}");
    String::from_utf8_lossy(&requests[0].body).into_owned()
}

#[tokio::test]
async fn request_without_email_carries_only_resume_field() {
    let server = MockServer::start().await;
    mount_json(&server, 200, "{}").await;

    let request = SubmissionRequest::new(resume_pdf(), "");
    submitter_for(&server)
        .submit(1, &request)
        .await
        .expect("submit ok");

    let body = sent_body(&server).await;
    assert!(body.contains(r#"name="resume""#));
    assert!(body.contains(r#"filename="resume.pdf""#));
    assert!(body.contains("application/pdf"));
    assert!(body.contains("%PDF-1.4 fake"));
    assert!(!body.contains(r#"name="email""#));
}

#[tokio::test]
async fn request_with_email_carries_both_fields() {
    let server = MockServer::start().await;
    mount_json(&server, 200, "{}").await;

    let request = SubmissionRequest::new(resume_pdf(), "a@b.com");
    submitter_for(&server)
        .submit(2, &request)
        .await
        .expect("submit ok");

    let body = sent_body(&server).await;
    assert!(body.contains(r#"name="resume""#));
    assert!(body.contains(r#"name="email""#));
    assert!(body.contains("a@b.com"));
}

#[tokio::test]
async fn success_body_is_parsed() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        200,
        r#"{"domain":"Engineering","skills":["Go","SQL"],"strengths":[],"weaknesses":[],"suggestions":["Add metrics"]}"#,
    )
    .await;

    let result = submitter_for(&server)
        .submit(3, &SubmissionRequest::new(resume_pdf(), ""))
        .await
        .expect("submit ok");

    assert_eq!(
        result,
        AnalysisResult {
            domain: Some("Engineering".into()),
            skills: Some(vec!["Go".into(), "SQL".into()]),
            strengths: Some(Vec::new()),
            weaknesses: Some(Vec::new()),
            suggestions: Some(vec!["Add metrics".into()]),
        }
    );
}

#[tokio::test]
async fn server_error_reason_is_reported() {
    let server = MockServer::start().await;
    mount_json(&server, 500, r#"{"error":"parse failed"}"#).await;

    let err = submitter_for(&server)
        .submit(4, &SubmissionRequest::new(resume_pdf(), ""))
        .await
        .unwrap_err();
    assert_eq!(err, SubmissionError::ServerRejected("parse failed".into()));
    assert_eq!(err.to_string(), "parse failed");
}

#[tokio::test]
async fn html_error_page_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(502).set_body_raw("<h1>Bad Gateway</h1>", "text/html"),
        )
        .mount(&server)
        .await;

    let err = submitter_for(&server)
        .submit(5, &SubmissionRequest::new(resume_pdf(), ""))
        .await
        .unwrap_err();
    assert!(matches!(err, SubmissionError::TransportOrParseFailure(_)));
}

#[tokio::test]
async fn size_refusal_from_service_is_reported_as_too_large() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(413)
                .set_body_raw("<h1>Request Entity Too Large</h1>", "text/html"),
        )
        .mount(&server)
        .await;

    let err = submitter_for(&server)
        .submit(5, &SubmissionRequest::new(resume_pdf(), ""))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SubmissionError::ServerRejected(UPLOAD_TOO_LARGE_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(SubmitSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..SubmitSettings::default()
    });
    let err = submitter
        .submit(6, &SubmissionRequest::new(resume_pdf(), ""))
        .await
        .unwrap_err();
    assert!(matches!(err, SubmissionError::TransportOrParseFailure(_)));
}

#[tokio::test]
async fn oversize_upload_is_refused_without_a_request() {
    let server = MockServer::start().await;
    mount_json(&server, 200, "{}").await;

    let submitter = ReqwestSubmitter::new(SubmitSettings {
        base_url: server.uri(),
        max_upload_bytes: 4,
        ..SubmitSettings::default()
    });
    let err = submitter
        .submit(7, &SubmissionRequest::new(resume_pdf(), ""))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::TransportOrParseFailure(_)));
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn unreachable_service_is_a_transport_failure() {
    // Grab a free port, then close it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let submitter = ReqwestSubmitter::new(SubmitSettings {
        base_url,
        ..SubmitSettings::default()
    });
    let err = submitter
        .submit(8, &SubmissionRequest::new(resume_pdf(), ""))
        .await
        .unwrap_err();
    match err {
        SubmissionError::TransportOrParseFailure(message) => assert!(!message.is_empty()),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn endpoint_keeps_base_path() {
    let settings = SubmitSettings {
        base_url: "http://localhost:8080/resume".to_string(),
        ..SubmitSettings::default()
    };
    assert_eq!(
        settings.endpoint().unwrap().as_str(),
        "http://localhost:8080/resume/analyze"
    );

    let settings = SubmitSettings::default();
    assert_eq!(
        settings.endpoint().unwrap().as_str(),
        "http://127.0.0.1:5000/analyze"
    );
}

#[test]
fn invalid_base_url_is_reported() {
    let settings = SubmitSettings {
        base_url: "not a url".to_string(),
        ..SubmitSettings::default()
    };
    assert!(matches!(
        settings.endpoint(),
        Err(SubmissionError::TransportOrParseFailure(_))
    ));
}
