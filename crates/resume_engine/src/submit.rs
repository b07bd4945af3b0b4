use std::time::Duration;

use analyzer_logging::{analyzer_debug, analyzer_info, analyzer_warn};
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use resume_core::{
    AnalysisResult, SubmissionError, SubmissionId, SubmissionRequest, EMAIL_FIELD, RESUME_FIELD,
};
use url::Url;

use crate::interpret_response;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const ANALYZE_PATH: &str = "analyze";

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// The analysis service refuses bodies above 5 MB.
    pub max_upload_bytes: u64,
    pub max_response_bytes: u64,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            max_upload_bytes: 5 * 1024 * 1024,
            max_response_bytes: 1024 * 1024,
        }
    }
}

impl SubmitSettings {
    /// `{base_url}/analyze`, keeping any path prefix of the base.
    pub fn endpoint(&self) -> Result<Url, SubmissionError> {
        let mut base = Url::parse(&self.base_url).map_err(|err| {
            SubmissionError::transport(format!("Invalid service URL {}: {err}", self.base_url))
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(ANALYZE_PATH).map_err(|err| {
            SubmissionError::transport(format!("Invalid service URL {}: {err}", self.base_url))
        })
    }
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(
        &self,
        submission_id: SubmissionId,
        request: &SubmissionRequest,
    ) -> Result<AnalysisResult, SubmissionError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: SubmitSettings,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmissionError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SubmissionError::transport(err.to_string()))
    }

    fn build_form(&self, request: &SubmissionRequest) -> Result<Form, SubmissionError> {
        let file = &request.file;
        let part = Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .or_else(|_| {
                // Browsers send whatever type they guessed; an unparsable one
                // should not block the upload.
                Part::bytes(file.content.clone())
                    .file_name(file.name.clone())
                    .mime_str("application/octet-stream")
            })
            .map_err(|err| SubmissionError::transport(err.to_string()))?;

        let mut form = Form::new().part(RESUME_FIELD, part);
        if let Some(email) = request.email.as_deref().filter(|e| !e.is_empty()) {
            form = form.text(EMAIL_FIELD, email.to_string());
        }
        Ok(form)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, SubmissionError> {
        let max_bytes = self.settings.max_response_bytes;
        if response.content_length().is_some_and(|len| len > max_bytes) {
            return Err(response_too_large(max_bytes));
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            if body.len() as u64 + chunk.len() as u64 > max_bytes {
                return Err(response_too_large(max_bytes));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(
        &self,
        submission_id: SubmissionId,
        request: &SubmissionRequest,
    ) -> Result<AnalysisResult, SubmissionError> {
        let upload_len = request.file.byte_len();
        if upload_len > self.settings.max_upload_bytes {
            analyzer_warn!(
                "Submission {} refused: {} bytes exceeds limit of {}",
                submission_id,
                upload_len,
                self.settings.max_upload_bytes
            );
            return Err(SubmissionError::transport(format!(
                "Resume is too large ({} bytes); the limit is {} bytes.",
                upload_len, self.settings.max_upload_bytes
            )));
        }

        let endpoint = self.settings.endpoint()?;
        let client = self.build_client()?;
        let form = self.build_form(request)?;

        analyzer_info!(
            "Submission {} POST {} fields={:?} bytes={}",
            submission_id,
            endpoint,
            request.field_names(),
            upload_len
        );
        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = self.read_body(response).await?;
        analyzer_debug!(
            "Submission {} response status={} body_len={}",
            submission_id,
            status,
            body.len()
        );
        interpret_response(status, &body)
    }
}

fn response_too_large(max_bytes: u64) -> SubmissionError {
    SubmissionError::transport(format!(
        "Response from analysis service exceeds {max_bytes} bytes"
    ))
}

fn map_reqwest_error(err: reqwest::Error) -> SubmissionError {
    if err.is_timeout() {
        return SubmissionError::transport(format!("Request timed out: {err}"));
    }
    SubmissionError::transport(err.to_string())
}
